//! # patgrade
//!
//! An autograder for pattern-matching assignments. Each question starts from a
//! baseline score, runs a battery of test cases against what the learner
//! submitted, and accumulates deductions (or credit) together with feedback.
//! An assignment adds its questions up into a single report.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Ready-made assignments
pub mod assignments;
/// Runtime configuration
pub mod config;
/// A module defining a bunch of constant values to be used throughout
pub mod constants;
/// For all things related to grading
pub mod grade;
/// Submission access
pub mod types;

pub use assignments::regex_tutorial;
pub use grade::{Assignment, Question, QuestionError, Report, Scorecard};
pub use types::{EmptySubmission, JsonSubmission, Submission};
