use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner shown while a language is being translated.
///
/// Cleared automatically on drop, so an early return or `?` never leaves a
/// stale line on the terminal.
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    #[allow(clippy::unwrap_used)]
    pub fn new(message: impl Into<String>) -> Self {
        let bar = ProgressBar::new_spinner();
        // unwrap is safe: template string is a compile-time constant
        bar.set_style(
            ProgressStyle::default_spinner()
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
                .template("{spinner} {msg}")
                .unwrap(),
        );
        bar.set_message(message.into());
        bar.enable_steady_tick(Duration::from_millis(80));

        Self { bar }
    }

    /// Replaces the spinner's message, e.g. to report batch progress.
    pub fn update(&self, message: impl Into<String>) {
        self.bar.set_message(message.into());
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}
