use async_trait::async_trait;

use super::Surface;
use crate::spinner::Spinner;

/// Terminal rendition of the UI surface: results go to stdout, alerts to
/// stderr, and the loading indicator is a [`Spinner`].
pub struct ConsoleSurface {
    spinner: Option<Spinner>,
}

impl ConsoleSurface {
    pub fn new() -> Self {
        Self { spinner: None }
    }
}

impl Default for ConsoleSurface {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Surface for ConsoleSurface {
    fn alert(&mut self, message: &str) {
        eprintln!("{message}");
    }

    fn clear_result(&mut self) {
        // Scrollback is the result area here; nothing to erase.
    }

    fn set_result(&mut self, text: &str) {
        println!("\n=> {text}");
    }

    fn show_loading(&mut self) {
        if self.spinner.is_none() {
            self.spinner = Some(Spinner::start("enhancing"));
        }
    }

    async fn hide_loading(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.stop().await;
        }
    }
}
