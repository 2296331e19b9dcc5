#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use bon::Builder;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
/// A struct representing a grade
pub struct Grade {
    /// The actual grade received
    pub grade:  f64,
    /// The maximum grade possible
    pub out_of: f64,
}

impl Grade {
    /// Creates a new grade -
    /// * `grade` - The actual grade received
    /// * `out_of` - The maximum grade possible
    pub fn new(grade: f64, out_of: f64) -> Self {
        Self { grade, out_of }
    }

    /// True when every available point was awarded.
    pub fn is_full(&self) -> bool {
        self.grade >= self.out_of
    }
}

impl Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}/{:.2}", self.grade, self.out_of)
    }
}

/// One line of feedback and the score change that came with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    /// Message shown to the learner.
    pub text:  String,
    /// Signed change applied to the score.
    pub delta: f64,
}

impl FeedbackEntry {
    /// Creates a new entry.
    pub fn new(text: impl Into<String>, delta: f64) -> Self {
        Self {
            text: text.into(),
            delta,
        }
    }
}

impl Display for FeedbackEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.delta == 0.0 {
            write!(f, "{}", self.text)
        } else {
            write!(f, "{} ({:+})", self.text, self.delta)
        }
    }
}

/// Final score and feedback for one question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionReport {
    /// Question title.
    pub title:      String,
    /// Finalized score.
    pub score:      f64,
    /// Point budget.
    pub max_points: f64,
    /// Feedback in the order it was produced.
    pub messages:   Vec<FeedbackEntry>,
}

impl QuestionReport {
    /// The score as a [`Grade`].
    pub fn grade(&self) -> Grade {
        Grade::new(self.score, self.max_points)
    }
}

/// Outcome of grading a whole assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Assignment name.
    assignment_name: String,
    /// Sum of question scores.
    total:           f64,
    /// Sum of question budgets.
    total_max:       f64,
    /// Per-question results, in declaration order.
    questions:       Vec<QuestionReport>,
}

impl Report {
    /// Builds a report, deriving the totals from `questions`.
    pub fn new(assignment_name: impl Into<String>, questions: Vec<QuestionReport>) -> Self {
        let total = questions.iter().map(|q| q.score).sum();
        let total_max = questions.iter().map(|q| q.max_points).sum();
        Self {
            assignment_name: assignment_name.into(),
            total,
            total_max,
            questions,
        }
    }

    /// Gets the assignment name.
    pub fn assignment_name(&self) -> &str {
        &self.assignment_name
    }

    /// Gets the total score.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Gets the total available score.
    pub fn total_max(&self) -> f64 {
        self.total_max
    }

    /// Gets the per-question results.
    pub fn questions(&self) -> &[QuestionReport] {
        &self.questions
    }

    /// Looks a question up by title.
    pub fn question(&self, title: &str) -> Option<&QuestionReport> {
        self.questions.iter().find(|q| q.title == title)
    }

    /// One displayable row per question.
    pub fn grade_results(&self) -> Vec<GradeResult> {
        self.questions
            .iter()
            .map(|q| {
                GradeResult::builder()
                    .requirement(q.title.as_str())
                    .grade(q.grade())
                    .reason(q.messages.iter().join("\n"))
                    .build()
            })
            .collect()
    }
}

#[derive(Tabled, Clone, Debug, Default, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
/// A struct to store grading results and display them
pub struct GradeResult {
    #[tabled(rename = "Requirement")]
    /// * `requirement`: refers to Requirement ID
    pub(crate) requirement: String,
    #[tabled(rename = "Grade")]
    /// * `grade`: grade received for above Requirement
    #[builder(default)]
    pub(crate) grade:       Grade,
    #[tabled(rename = "Reason")]
    /// * `reason`: the reason for penalties applied, if any
    pub(crate) reason:      String,
}

impl GradeResult {
    /// Returns the requirement name.
    pub fn requirement(&self) -> &str {
        &self.requirement
    }

    /// Returns the explanation for the grade (may be empty).
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Returns the underlying grade struct.
    pub fn grade_struct(&self) -> &Grade {
        &self.grade
    }

    /// Returns the numeric grade value.
    pub fn grade_value(&self) -> f64 {
        self.grade.grade
    }

    /// Returns the numeric out-of value.
    pub fn out_of_value(&self) -> f64 {
        self.grade.out_of
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    fn sample() -> Report {
        Report::new(
            "Regex Tutorial",
            vec![
                QuestionReport {
                    title:      "Task 1".into(),
                    score:      9.0,
                    max_points: 10.0,
                    messages:   vec![FeedbackEntry::new("Did not match.", -1.0)],
                },
                QuestionReport {
                    title:      "Task 2".into(),
                    score:      0.0,
                    max_points: 10.0,
                    messages:   vec![FeedbackEntry::new("Your regex should be a non-empty string.", 0.0)],
                },
            ],
        )
    }

    #[test]
    fn totals_are_sums() {
        let report = sample();
        assert_eq!(report.total(), 9.0);
        assert_eq!(report.total_max(), 20.0);
        assert_eq!(report.question("Task 2").map(|q| q.score), Some(0.0));
    }

    #[test]
    fn serializes_to_report_shape() {
        let value: Value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["assignmentName"], "Regex Tutorial");
        assert_eq!(value["total"], 9.0);
        assert_eq!(value["totalMax"], 20.0);
        assert_eq!(value["questions"][0]["title"], "Task 1");
        assert_eq!(value["questions"][0]["maxPoints"], 10.0);
        assert_eq!(value["questions"][0]["messages"][0]["text"], "Did not match.");
        assert_eq!(value["questions"][0]["messages"][0]["delta"], -1.0);
    }

    #[test]
    fn grade_rows_join_feedback() {
        let rows = sample().grade_results();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].requirement(), "Task 1");
        assert_eq!(rows[0].grade_value(), 9.0);
        assert_eq!(rows[0].reason(), "Did not match. (-1)");
        assert_eq!(rows[1].reason(), "Your regex should be a non-empty string.");
    }

    #[test]
    fn grade_display_has_two_decimals() {
        assert_eq!(Grade::new(9.0, 10.0).to_string(), "9.00/10.00");
    }
}
