#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use super::{
    case::Outcome,
    policy::{ScoringPolicy, clamp},
    results::{FeedbackEntry, QuestionReport},
};

/// Lifecycle of a question's score within one grading run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreState {
    /// No credit has been granted yet.
    NotStarted,
    /// A baseline was granted and checks are being applied.
    InProgress,
    /// Scoring is over; the score and feedback are frozen.
    Finalized,
}

/// Mutable score and feedback log for a single question.
///
/// Every mutator panics once the card is [`ScoreState::Finalized`]: touching a
/// finished score is a bug in the question, not something the learner did.
#[derive(Debug, Clone)]
pub struct Scorecard {
    /// Question title, used for reporting.
    title:      String,
    /// Upper bound for the clamped score.
    max_points: f64,
    /// Running total.
    score:      f64,
    /// Ordered narrative of how `score` was reached.
    feedback:   Vec<FeedbackEntry>,
    /// Where the card is in its lifecycle.
    state:      ScoreState,
    /// Number of checks applied so far.
    checks:     usize,
    /// Number of those checks that failed.
    failures:   usize,
}

impl Scorecard {
    /// Creates a fresh card.
    ///
    /// Panics if `max_points` is negative or not finite.
    pub fn new(title: impl Into<String>, max_points: f64) -> Self {
        let title = title.into();
        assert!(
            max_points.is_finite() && max_points >= 0.0,
            "question `{title}` has an invalid point budget: {max_points}"
        );
        Self {
            title,
            max_points,
            score: 0.0,
            feedback: Vec::new(),
            state: ScoreState::NotStarted,
            checks: 0,
            failures: 0,
        }
    }

    /// Gets the title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Gets the point budget.
    pub fn max_points(&self) -> f64 {
        self.max_points
    }

    /// Gets the current score.
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Gets the feedback log.
    pub fn feedback(&self) -> &[FeedbackEntry] {
        &self.feedback
    }

    /// Gets the lifecycle state.
    pub fn state(&self) -> ScoreState {
        self.state
    }

    /// True once the card is frozen.
    pub fn is_finalized(&self) -> bool {
        self.state == ScoreState::Finalized
    }

    /// Number of checks applied and how many of them failed.
    pub fn check_counts(&self) -> (usize, usize) {
        (self.checks, self.failures)
    }

    /// Panics unless the card is still accepting mutations.
    fn ensure_open(&self, op: &str) {
        assert!(
            self.state != ScoreState::Finalized,
            "`{op}` called on finalized question `{}`",
            self.title
        );
    }

    /// Panics unless a baseline has been granted.
    fn ensure_in_progress(&self, op: &str) {
        self.ensure_open(op);
        assert!(
            self.state == ScoreState::InProgress,
            "`{op}` called on question `{}` before any credit was granted",
            self.title
        );
    }

    /// Moves to [`ScoreState::InProgress`] with `points` as the starting score.
    pub fn grant_baseline(&mut self, points: f64) {
        self.ensure_open("grant_baseline");
        assert!(
            self.state == ScoreState::NotStarted,
            "baseline granted twice for question `{}`",
            self.title
        );
        self.score = points;
        self.state = ScoreState::InProgress;
    }

    /// Grants whatever baseline `policy` prescribes for this card's budget.
    pub fn start(&mut self, policy: &ScoringPolicy) {
        self.grant_baseline(policy.baseline(self.max_points));
    }

    /// Starts at the full point budget.
    pub fn full_credit(&mut self) {
        self.grant_baseline(self.max_points);
    }

    /// Appends a message and applies its delta to the score.
    pub fn add_message(&mut self, message: impl Into<String>, delta: f64) {
        self.ensure_in_progress("add_message");
        self.score += delta;
        self.feedback.push(FeedbackEntry::new(message, delta));
    }

    /// Applies a delta without recording feedback.
    pub fn add_score(&mut self, delta: f64) {
        self.ensure_in_progress("add_score");
        self.score += delta;
    }

    /// Records one check. Failures log `(outcome.message, delta_if_fail)`;
    /// passes are silent.
    pub fn apply_check(&mut self, outcome: &Outcome, delta_if_fail: f64) {
        self.ensure_in_progress("apply_check");
        self.checks += 1;
        if !outcome.passed {
            self.failures += 1;
            tracing::debug!(question = %self.title, "{}", outcome.message);
            self.add_message(outcome.message.clone(), delta_if_fail);
        }
    }

    /// Records one check under `policy`: failures carry the policy's failure
    /// delta, passes silently add its pass delta.
    pub fn apply_with_policy(&mut self, outcome: &Outcome, policy: &ScoringPolicy) {
        self.apply_check(outcome, policy.fail_delta());
        if outcome.passed && policy.pass_delta() != 0.0 {
            self.add_score(policy.pass_delta());
        }
    }

    /// Ends scoring immediately with zero credit and `reason` as the only
    /// feedback entry.
    pub fn fail(&mut self, reason: impl Into<String>) {
        self.ensure_open("fail");
        self.score = 0.0;
        self.feedback = vec![FeedbackEntry::new(reason, 0.0)];
        self.state = ScoreState::Finalized;
    }

    /// Freezes the card, optionally clamping the score into `[0, max_points]`.
    ///
    /// Calling this on an already finalized card does nothing.
    pub fn finalize(&mut self, clamp_score: bool) {
        if self.is_finalized() {
            return;
        }
        if clamp_score {
            self.score = clamp(self.score, self.max_points);
        }
        self.state = ScoreState::Finalized;
    }

    /// Converts the card into its report row.
    pub fn into_report(self) -> QuestionReport {
        QuestionReport {
            title:      self.title,
            score:      self.score,
            max_points: self.max_points,
            messages:   self.feedback,
        }
    }
}
