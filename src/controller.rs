//! The click-to-result lifecycle.
//!
//! One activation runs: validate → clear result → show loading → one
//! round trip to the enhancement service → hide loading → render. The
//! loading indicator is hidden on every path out of the round trip,
//! success or failure, and the controller is always ready for the next
//! activation afterwards.

use crate::consts::{EMPTY_PROMPT_ALERT, MISSING_RESULT_FALLBACK};
use crate::enhancer::Enhancer;
use crate::surface::Surface;

/// What the user currently sees. Owned exclusively by the controller,
/// never persisted.
#[derive(Debug, Clone, PartialEq)]
pub enum UiState {
    Idle,
    Loading,
    Displaying(String),
    Failed(String),
}

/// How a single activation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// The round trip ran; the result area shows its outcome.
    Completed,
    /// Blank prompt. Alert fired, nothing else changed.
    InvalidPrompt,
    /// A request was already in flight; this activation was dropped.
    Rejected,
}

/// Per-session counters, printed in the exit summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub enhanced: u64,
    pub failed: u64,
}

pub struct RequestController {
    enhancer: Box<dyn Enhancer>,
    surface: Box<dyn Surface>,
    state: UiState,
    stats: SessionStats,
}

impl RequestController {
    pub fn new(enhancer: Box<dyn Enhancer>, surface: Box<dyn Surface>) -> Self {
        Self {
            enhancer,
            surface,
            state: UiState::Idle,
            stats: SessionStats::default(),
        }
    }

    /// Run one activation with the raw prompt text.
    ///
    /// Overlapping activations cannot happen through safe code (`&mut
    /// self` makes them unrepresentable); the `Loading` guard covers
    /// drivers that re-dispatch anyway, dropping the second activation.
    pub async fn activate(&mut self, raw_prompt: &str) -> Activation {
        if self.state == UiState::Loading {
            return Activation::Rejected;
        }

        let prompt = raw_prompt.trim();
        if prompt.is_empty() {
            self.surface.alert(EMPTY_PROMPT_ALERT);
            return Activation::InvalidPrompt;
        }

        self.surface.clear_result();
        self.state = UiState::Loading;
        self.surface.show_loading();

        let outcome = self.enhancer.enhance(prompt).await;

        // Unconditional: `enhance` returns a Result instead of unwinding,
        // so this runs before either branch below renders anything.
        self.surface.hide_loading().await;

        self.state = match outcome {
            Ok(resp) => {
                let text = resp.text().unwrap_or(MISSING_RESULT_FALLBACK).to_string();
                self.surface.set_result(&text);
                self.stats.enhanced += 1;
                UiState::Displaying(text)
            }
            Err(e) => {
                let message = format!("Error: {e}");
                self.surface.set_result(&message);
                self.stats.failed += 1;
                UiState::Failed(message)
            }
        };

        Activation::Completed
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enhancer::mock::{MockEnhancer, MockReply};
    use crate::surface::mock::{MockSurface, SurfaceEvent, SurfaceLog, count, last_result};

    fn build(replies: Vec<MockReply>) -> (RequestController, SurfaceLog) {
        let surface = MockSurface::new();
        let log = surface.log();
        let controller =
            RequestController::new(Box::new(MockEnhancer::new(replies)), Box::new(surface));
        (controller, log)
    }

    #[tokio::test]
    async fn blank_prompt_alerts_and_leaves_everything_alone() {
        let enhancer = MockEnhancer::new(vec![]);
        let calls = enhancer.calls();
        let surface = MockSurface::new();
        let log = surface.log();
        let mut controller = RequestController::new(Box::new(enhancer), Box::new(surface));

        let outcome = controller.activate("   \t ").await;

        assert_eq!(outcome, Activation::InvalidPrompt);
        assert_eq!(*controller.state(), UiState::Idle);
        assert!(calls.lock().unwrap().is_empty());
        assert_eq!(
            *log.lock().unwrap(),
            vec![SurfaceEvent::Alert("Please enter a prompt.".to_string())]
        );
    }

    #[tokio::test]
    async fn success_displays_text_verbatim() {
        let (mut controller, log) = build(vec![MockReply::enhanced("X")]);

        let outcome = controller.activate("make this better").await;

        assert_eq!(outcome, Activation::Completed);
        assert_eq!(*controller.state(), UiState::Displaying("X".to_string()));
        assert_eq!(last_result(&log).as_deref(), Some("X"));
        assert_eq!(controller.stats().enhanced, 1);
    }

    #[tokio::test]
    async fn prompt_is_trimmed_before_the_request() {
        let enhancer = MockEnhancer::new(vec![MockReply::enhanced("ok")]);
        let calls = enhancer.calls();
        let mut controller =
            RequestController::new(Box::new(enhancer), Box::new(MockSurface::new()));

        controller.activate("  padded prompt \n").await;

        assert_eq!(*calls.lock().unwrap(), vec!["padded prompt"]);
    }

    #[tokio::test]
    async fn missing_field_shows_fallback() {
        let (mut controller, log) = build(vec![MockReply::empty()]);

        controller.activate("anything").await;

        assert_eq!(
            last_result(&log).as_deref(),
            Some("No enhanced prompt received.")
        );
        assert_eq!(
            *controller.state(),
            UiState::Displaying("No enhanced prompt received.".to_string())
        );
    }

    #[tokio::test]
    async fn empty_string_field_shows_fallback() {
        let (mut controller, log) = build(vec![MockReply::Reply(
            crate::enhancer::EnhanceResponse {
                enhanced_prompt: Some(String::new()),
            },
        )]);

        controller.activate("anything").await;

        assert_eq!(
            last_result(&log).as_deref(),
            Some("No enhanced prompt received.")
        );
    }

    #[tokio::test]
    async fn failure_renders_error_prefix() {
        let (mut controller, log) = build(vec![MockReply::Failure("boom".to_string())]);

        controller.activate("anything").await;

        assert_eq!(last_result(&log).as_deref(), Some("Error: boom"));
        assert_eq!(
            *controller.state(),
            UiState::Failed("Error: boom".to_string())
        );
        assert_eq!(controller.stats().failed, 1);
    }

    #[tokio::test]
    async fn loading_shown_then_hidden_exactly_once_on_success() {
        let (mut controller, log) = build(vec![MockReply::enhanced("X")]);

        controller.activate("p").await;

        assert_eq!(count(&log, &SurfaceEvent::ShowLoading), 1);
        assert_eq!(count(&log, &SurfaceEvent::HideLoading), 1);
        // Rendering happens strictly after the indicator is gone.
        assert_eq!(
            *log.lock().unwrap(),
            vec![
                SurfaceEvent::ClearResult,
                SurfaceEvent::ShowLoading,
                SurfaceEvent::HideLoading,
                SurfaceEvent::SetResult("X".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn loading_hidden_exactly_once_on_failure() {
        let (mut controller, log) = build(vec![MockReply::Failure("down".to_string())]);

        controller.activate("p").await;

        assert_eq!(count(&log, &SurfaceEvent::ShowLoading), 1);
        assert_eq!(count(&log, &SurfaceEvent::HideLoading), 1);
    }

    #[tokio::test]
    async fn controller_rearms_after_failure() {
        let (mut controller, log) =
            build(vec![MockReply::Failure("down".to_string()), MockReply::enhanced("fine")]);

        controller.activate("p").await;
        let outcome = controller.activate("p").await;

        assert_eq!(outcome, Activation::Completed);
        assert_eq!(*controller.state(), UiState::Displaying("fine".to_string()));
        assert_eq!(last_result(&log).as_deref(), Some("fine"));
    }

    #[tokio::test]
    async fn repeated_success_is_idempotent() {
        let (mut controller, log) =
            build(vec![MockReply::enhanced("same"), MockReply::enhanced("same")]);

        controller.activate("p").await;
        let first = controller.state().clone();
        controller.activate("p").await;

        assert_eq!(*controller.state(), first);
        assert_eq!(count(&log, &SurfaceEvent::ShowLoading), 2);
        assert_eq!(count(&log, &SurfaceEvent::HideLoading), 2);
        assert_eq!(controller.stats().enhanced, 2);
    }

    #[tokio::test]
    async fn in_flight_state_rejects_a_second_activation() {
        let (mut controller, log) = build(vec![]);
        controller.state = UiState::Loading;

        let outcome = controller.activate("p").await;

        assert_eq!(outcome, Activation::Rejected);
        assert!(log.lock().unwrap().is_empty());
        assert_eq!(*controller.state(), UiState::Loading);
    }
}
