//! Backup file name templates.
//!
//! A template is a plain file name carrying placeholder tokens, e.g.
//! `userdata-{{.SITE}}-{{.YYYYMMDD}}.gz`. Resolution is a straight string
//! replacement: the result is neither escaped nor validated as a path.

use chrono::NaiveDate;

pub const SITE_TOKEN: &str = "{{.SITE}}";
pub const DATE_TOKEN: &str = "{{.YYYYMMDD}}";

/// Substitutes the site identifier and the date into `template`.
///
/// Every occurrence of a token is replaced; unknown tokens are kept verbatim.
pub fn resolve_file_name(template: &str, site: &str, date: NaiveDate) -> String {
    template
        .replace(SITE_TOKEN, site)
        .replace(DATE_TOKEN, &date.format("%Y%m%d").to_string())
}
