//! Project-wide constants.

/// Default base URL of the enhancement service.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000";

/// Default bind address when running the service.
pub const DEFAULT_BIND: &str = "127.0.0.1:8000";

/// Shown (blocking, on stderr) when the user activates with a blank prompt.
pub const EMPTY_PROMPT_ALERT: &str = "Please enter a prompt.";

/// Shown in the result area when the service replies without an
/// enhanced prompt. Part of the observable contract, reproduce exactly.
pub const MISSING_RESULT_FALLBACK: &str = "No enhanced prompt received.";

/// Message behind `Error: ...` when the service answers with a non-2xx status.
pub const BAD_STATUS_MESSAGE: &str = "Network response was not ok";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consts_are_non_empty() {
        assert!(!DEFAULT_ENDPOINT.is_empty());
        assert!(!DEFAULT_BIND.is_empty());
        assert!(!EMPTY_PROMPT_ALERT.is_empty());
    }

    #[test]
    fn endpoint_has_no_trailing_slash() {
        assert!(!DEFAULT_ENDPOINT.ends_with('/'));
    }

    #[test]
    fn contract_copy_is_verbatim() {
        assert_eq!(MISSING_RESULT_FALLBACK, "No enhanced prompt received.");
        assert_eq!(BAD_STATUS_MESSAGE, "Network response was not ok");
    }
}
