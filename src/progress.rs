use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

pub struct SpinnerHelper;

impl SpinnerHelper {
  pub fn create(message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner.set_style(
      ProgressStyle::with_template("{spinner:.blue} {msg} [{bytes}]")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        // For more spinners check out the cli-spinners project:
        // https://github.com/sindresorhus/cli-spinners/blob/master/spinners.json
        .tick_strings(&[
          "□ □ □ □ □",
          "■ □ □ □ □",
          "□ ■ □ □ □",
          "□ □ ■ □ □",
          "□ □ □ ■ □",
          "□ □ □ □ ■",
          "■ ■ ■ ■ ■",
        ]),
    );
    spinner.set_message(message);
    spinner
  }
}
