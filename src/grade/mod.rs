#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Assignment-level aggregation.
pub mod assignment;
/// Test cases and predicate evaluation.
pub mod case;
/// Gradescope output and table rendering.
pub mod gradescope;
/// Pattern-matching questions.
pub mod pattern;
/// Baseline and delta rules shared by every question.
pub mod policy;
/// The `Question` trait and shared helpers.
pub mod question;
/// Shared grade result types.
pub mod results;
/// Per-question score state machine.
pub mod scorecard;
/// Source style questions.
pub mod style;

pub use assignment::{Assignment, grade_question};
pub use case::{CheckError, Evaluator, Outcome, Predicate, TestCase, evaluate};
pub use gradescope::{
    GradescopeOutputFormat, GradescopeStatus, GradescopeSubmission, GradescopeTestCase,
    GradescopeVisibility, show_result,
};
pub use pattern::RegexQuestion;
pub use policy::{ScoringPolicy, clamp};
pub use question::{Question, QuestionError, run_cases};
pub use results::{FeedbackEntry, Grade, GradeResult, QuestionReport, Report};
pub use scorecard::{ScoreState, Scorecard};
pub use style::{StyleIssue, StyleQuestion, lint_source};
