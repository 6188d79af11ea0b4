use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::Surface;

/// Everything a [`MockSurface`] was asked to do, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    Alert(String),
    ClearResult,
    SetResult(String),
    ShowLoading,
    HideLoading,
}

/// Shared handle to a mock surface's recorded events.
pub type SurfaceLog = Arc<Mutex<Vec<SurfaceEvent>>>;

/// A recording surface for tests. Keep a [`SurfaceLog`] handle (via
/// [`MockSurface::log`]) before handing the surface to the controller.
#[derive(Default)]
pub struct MockSurface {
    events: SurfaceLog,
}

impl MockSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self) -> SurfaceLog {
        Arc::clone(&self.events)
    }

    fn record(&self, event: SurfaceEvent) {
        self.events.lock().unwrap().push(event);
    }
}

#[async_trait]
impl Surface for MockSurface {
    fn alert(&mut self, message: &str) {
        self.record(SurfaceEvent::Alert(message.to_string()));
    }

    fn clear_result(&mut self) {
        self.record(SurfaceEvent::ClearResult);
    }

    fn set_result(&mut self, text: &str) {
        self.record(SurfaceEvent::SetResult(text.to_string()));
    }

    fn show_loading(&mut self) {
        self.record(SurfaceEvent::ShowLoading);
    }

    async fn hide_loading(&mut self) {
        self.record(SurfaceEvent::HideLoading);
    }
}

/// Count how many times `event` appears in the log.
pub fn count(log: &SurfaceLog, event: &SurfaceEvent) -> usize {
    log.lock().unwrap().iter().filter(|e| *e == event).count()
}

/// The text most recently written to the result area, if any.
pub fn last_result(log: &SurfaceLog) -> Option<String> {
    log.lock()
        .unwrap()
        .iter()
        .rev()
        .find_map(|e| match e {
            SurfaceEvent::SetResult(text) => Some(text.clone()),
            _ => None,
        })
}
