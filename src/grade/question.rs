#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::sync::Arc;

use super::{
    case::{Evaluator, Outcome, Predicate, TestCase},
    policy::ScoringPolicy,
    scorecard::Scorecard,
};
use crate::{constants::errored_on, types::Submission};

/// Ways a question can stop scoring early.
#[derive(thiserror::Error, Debug)]
pub enum QuestionError {
    /// The value pulled from the submission has the wrong shape; the question
    /// ends with zero credit and this message.
    #[error("{0}")]
    Precondition(String),
    /// Something went wrong in the grading logic itself.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl QuestionError {
    /// Shorthand for a precondition failure.
    pub fn precondition(reason: impl Into<String>) -> Self {
        Self::Precondition(reason.into())
    }
}

/// A single independently scored unit of an assignment.
pub trait Question: Send + Sync {
    /// Title shown in reports.
    fn title(&self) -> &str;

    /// Upper bound on this question's score.
    fn max_points(&self) -> f64;

    /// Whether the score is clamped into `[0, max_points]` when scoring ends.
    /// Bonus and penalty questions may opt out.
    fn clamps(&self) -> bool {
        true
    }

    /// Scores `submission` onto `card`.
    ///
    /// The card arrives [`NotStarted`](super::scorecard::ScoreState::NotStarted).
    /// Implementations validate what they read before granting a baseline,
    /// and return [`QuestionError::Precondition`] if it is unusable. They may
    /// finalize the card themselves; otherwise the caller finalizes it
    /// according to [`Question::clamps`].
    fn score(
        &self,
        submission: &dyn Submission,
        card: &mut Scorecard,
    ) -> Result<(), QuestionError>;
}

/// Runs a battery of cases against `predicate`, recording every outcome on
/// `card` under `policy`.
///
/// A predicate that panics or exceeds the evaluator's bound counts as an
/// ordinary failed case.
pub fn run_cases(
    card: &mut Scorecard,
    evaluator: &Evaluator,
    predicate: &Arc<dyn Predicate>,
    cases: &[TestCase],
    policy: &ScoringPolicy,
) {
    for case in cases {
        let outcome = match evaluator.evaluate(predicate, case) {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!(question = %card.title(), input = case.input(), "{e}");
                Outcome::fail(errored_on(case.hint()))
            }
        };
        card.apply_with_policy(&outcome, policy);
    }
}
