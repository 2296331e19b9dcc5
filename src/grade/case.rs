#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    any::Any,
    panic::{self, AssertUnwindSafe},
    sync::{Arc, mpsc},
    thread,
    time::Duration,
};

use regex::Regex;

use crate::constants::{missed_match, unexpected_match};

/// Anything that can decide whether an input string "matches".
pub trait Predicate: Send + Sync {
    /// Returns true if `input` matches.
    fn matches(&self, input: &str) -> bool;
}

impl<F> Predicate for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn matches(&self, input: &str) -> bool {
        self(input)
    }
}

impl Predicate for Regex {
    /// Search semantics: the pattern may match anywhere in the input.
    fn matches(&self, input: &str) -> bool {
        self.is_match(input)
    }
}

/// One `(input, expected, hint)` probe against a submitted artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    /// String fed to the predicate.
    input:          String,
    /// Whether the predicate is supposed to match `input`.
    expected_match: bool,
    /// Describes the case without giving the answer away.
    hint:           String,
}

impl TestCase {
    /// Creates a new test case.
    pub fn new(input: impl Into<String>, expected_match: bool, hint: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            expected_match,
            hint: hint.into(),
        }
    }

    /// A case the predicate should match.
    pub fn matching(input: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::new(input, true, hint)
    }

    /// A case the predicate should reject.
    pub fn rejecting(input: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::new(input, false, hint)
    }

    /// Gets the input.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Gets whether a match is expected.
    pub fn expected_match(&self) -> bool {
        self.expected_match
    }

    /// Gets the hint.
    pub fn hint(&self) -> &str {
        &self.hint
    }
}

impl<I: Into<String>, H: Into<String>> From<(I, bool, H)> for TestCase {
    fn from((input, expected_match, hint): (I, bool, H)) -> Self {
        Self::new(input, expected_match, hint)
    }
}

/// Result of running one test case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Whether the predicate behaved as expected.
    pub passed:  bool,
    /// Feedback for a failed case; empty when `passed`.
    pub message: String,
}

impl Outcome {
    /// A passing outcome.
    pub fn pass() -> Self {
        Self {
            passed:  true,
            message: String::new(),
        }
    }

    /// A failing outcome carrying `message`.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            passed:  false,
            message: message.into(),
        }
    }
}

/// Classifies a raw predicate answer against a case.
fn classify(matched: bool, case: &TestCase) -> Outcome {
    match (case.expected_match, matched) {
        (true, true) | (false, false) => Outcome::pass(),
        (true, false) => Outcome::fail(missed_match(&case.hint)),
        (false, true) => Outcome::fail(unexpected_match(&case.hint)),
    }
}

/// Applies `predicate` to one case and classifies the result.
///
/// Stateless: identical inputs always produce identical outcomes. A panicking
/// predicate unwinds out of this function; use [`Evaluator`] to contain it.
pub fn evaluate<P: Predicate + ?Sized>(predicate: &P, case: &TestCase) -> Outcome {
    classify(predicate.matches(&case.input), case)
}

/// Why a guarded predicate call produced no answer.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    /// The predicate panicked.
    #[error("predicate panicked: {0}")]
    Panicked(String),
    /// The predicate did not return within the time bound.
    #[error("predicate did not finish within {0:?}")]
    TimedOut(Duration),
}

/// Pulls a readable message out of a panic payload.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Runs predicates with panic capture and an optional time bound.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
    /// Per-call bound; `None` calls the predicate on the current thread.
    timeout: Option<Duration>,
}

impl Evaluator {
    /// Creates an evaluator with the given per-call bound.
    pub fn new(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }

    /// Gets the per-call bound.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Evaluates one case, turning panics and timeouts into [`CheckError`]s.
    ///
    /// With a timeout the call runs on a helper thread. A predicate that never
    /// returns leaves that thread running detached.
    pub fn evaluate(
        &self,
        predicate: &Arc<dyn Predicate>,
        case: &TestCase,
    ) -> Result<Outcome, CheckError> {
        let matched = match self.timeout {
            None => panic::catch_unwind(AssertUnwindSafe(|| predicate.matches(&case.input)))
                .map_err(|payload| CheckError::Panicked(panic_message(payload.as_ref())))?,
            Some(limit) => {
                let (tx, rx) = mpsc::channel();
                let predicate = Arc::clone(predicate);
                let input = case.input.clone();
                thread::spawn(move || {
                    let answer = panic::catch_unwind(AssertUnwindSafe(|| predicate.matches(&input)))
                        .map_err(|payload| panic_message(payload.as_ref()));
                    let _ = tx.send(answer);
                });

                match rx.recv_timeout(limit) {
                    Ok(answer) => answer.map_err(CheckError::Panicked)?,
                    Err(mpsc::RecvTimeoutError::Timeout) => return Err(CheckError::TimedOut(limit)),
                    Err(mpsc::RecvTimeoutError::Disconnected) => {
                        return Err(CheckError::Panicked("worker thread exited".to_string()));
                    }
                }
            }
        };

        Ok(classify(matched, case))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat_cases() -> Vec<TestCase> {
        vec![
            TestCase::matching("cat", "the target sequence by itself"),
            TestCase::rejecting("dog", "a non-target sequence by itself"),
        ]
    }

    #[test]
    fn passing_cases_carry_no_message() {
        let re = Regex::new("cat").unwrap();
        for case in cat_cases() {
            assert_eq!(evaluate(&re, &case), Outcome::pass());
        }
    }

    #[test]
    fn failure_message_follows_mismatch_direction() {
        let re = Regex::new("dog").unwrap();
        let cases = cat_cases();

        let missed = evaluate(&re, &cases[0]);
        assert!(!missed.passed);
        assert_eq!(
            missed.message,
            "Did not match test case when you should have: 'the target sequence by itself'."
        );

        let extra = evaluate(&re, &cases[1]);
        assert!(!extra.passed);
        assert_eq!(
            extra.message,
            "Matched test case when you should not have: 'a non-target sequence by itself'."
        );
    }

    #[test]
    fn closures_are_predicates() {
        let starts = |s: &str| s.starts_with('c');
        let case = TestCase::from(("cow", true, "starts with c"));
        assert!(evaluate(&starts, &case).passed);
    }

    #[test]
    fn evaluator_contains_panics_inline() {
        let boom: Arc<dyn Predicate> = Arc::new(|_: &str| -> bool { panic!("kaboom") });
        let err = Evaluator::new(None)
            .evaluate(&boom, &TestCase::matching("x", "anything"))
            .unwrap_err();
        assert_eq!(err, CheckError::Panicked("kaboom".to_string()));
    }

    #[test]
    fn evaluator_contains_panics_on_worker() {
        let boom: Arc<dyn Predicate> = Arc::new(|s: &str| -> bool { panic!("bad input {s}") });
        let err = Evaluator::new(Some(Duration::from_secs(5)))
            .evaluate(&boom, &TestCase::matching("x", "anything"))
            .unwrap_err();
        assert_eq!(err, CheckError::Panicked("bad input x".to_string()));
    }

    #[test]
    fn evaluator_bounds_slow_predicates() {
        let slow: Arc<dyn Predicate> = Arc::new(|_: &str| {
            thread::sleep(Duration::from_millis(500));
            true
        });
        let limit = Duration::from_millis(20);
        let err = Evaluator::new(Some(limit))
            .evaluate(&slow, &TestCase::matching("x", "anything"))
            .unwrap_err();
        assert_eq!(err, CheckError::TimedOut(limit));
    }

    #[test]
    fn evaluator_agrees_with_plain_evaluate() {
        let re: Arc<dyn Predicate> = Arc::new(Regex::new("cat").unwrap());
        let evaluator = Evaluator::new(Some(Duration::from_secs(5)));
        for case in cat_cases() {
            assert_eq!(evaluator.evaluate(&re, &case).unwrap(), evaluate(re.as_ref(), &case));
        }
    }
}
