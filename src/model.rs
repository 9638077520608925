use serde::Serialize;

/// Query string sent along with the export request.
#[derive(Debug, Serialize)]
pub struct ExportQuery<'a> {
    site: &'a str,
    mode: &'a str,
}

impl ExportQuery<'_> {
    pub(crate) fn from(site: &str) -> ExportQuery {
        ExportQuery { site, mode: "file" }
    }
}
