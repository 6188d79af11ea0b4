pub mod console;
pub mod mock;

use async_trait::async_trait;

/// The UI elements the controller drives: a result area, a loading
/// indicator, and a channel for blocking validation notices.
///
/// Passed into [`RequestController`](crate::controller::RequestController)
/// explicitly so tests can substitute a recording double.
#[async_trait]
pub trait Surface: Send {
    /// Blocking validation notice. Never touches the result area.
    fn alert(&mut self, message: &str);

    /// Wipe whatever the result area currently shows.
    fn clear_result(&mut self);

    /// Replace the result area content.
    fn set_result(&mut self, text: &str);

    /// Make the loading indicator visible.
    fn show_loading(&mut self);

    /// Hide the loading indicator. Must be idempotent.
    async fn hide_loading(&mut self);
}
