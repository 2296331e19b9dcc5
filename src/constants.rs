#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Default deduction applied for each failed test case.
pub const DEFAULT_PENALTY: f64 = 1.0;

/// Default bound on a single predicate call, in milliseconds.
pub const DEFAULT_CHECK_TIMEOUT_MS: u64 = 1000;

/// Environment variable overriding the per-check timeout (milliseconds, `0`
/// disables it).
pub const CHECK_TIMEOUT_ENV: &str = "PATGRADE_CHECK_TIMEOUT_MS";

/// Environment variable overriding the per-failure deduction.
pub const DEFAULT_PENALTY_ENV: &str = "PATGRADE_DEFAULT_PENALTY";

/// Submission name the style question reads source text from by default.
pub const DEFAULT_SOURCE_NAME: &str = "source";

/// Longest line the style question accepts by default.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 100;

/// Precondition message for pattern questions.
pub const NON_EMPTY_REGEX: &str = "Your regex should be a non-empty string.";

/// Feedback for a case that should have matched but did not.
/// * `{0}`: the case hint
pub fn missed_match(hint: &str) -> String {
    format!("Did not match test case when you should have: '{hint}'.")
}

/// Feedback for a case that matched but should not have.
/// * `{0}`: the case hint
pub fn unexpected_match(hint: &str) -> String {
    format!("Matched test case when you should not have: '{hint}'.")
}

/// Feedback for a case where the submitted logic crashed or hung.
pub fn errored_on(hint: &str) -> String {
    format!("Your answer raised an error on test case: '{hint}'.")
}

/// Feedback for a question whose grading raised an unexpected error.
pub fn internal_fault(detail: &str) -> String {
    format!("Grading this question raised an unexpected error: {detail}")
}
