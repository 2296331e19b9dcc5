#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Advisory source-style question.

use bon::Builder;
use serde_json::Value;

use super::{
    question::{Question, QuestionError},
    scorecard::Scorecard,
};
use crate::{
    config,
    constants::{DEFAULT_MAX_LINE_LENGTH, DEFAULT_SOURCE_NAME},
    types::{Submission, kind_of},
};

/// A single style finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleIssue {
    /// 1-based line number.
    pub line:    usize,
    /// What is wrong with the line.
    pub message: String,
}

impl std::fmt::Display for StyleIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Line {}: {}", self.line, self.message)
    }
}

/// Checks `source` for trailing whitespace, tab indentation and overlong
/// lines.
pub fn lint_source(source: &str, max_line_length: usize) -> Vec<StyleIssue> {
    let mut issues = Vec::new();
    for (idx, line) in source.lines().enumerate() {
        let line_no = idx + 1;
        if line.ends_with([' ', '\t']) {
            issues.push(StyleIssue {
                line:    line_no,
                message: "trailing whitespace".to_string(),
            });
        }
        if line.starts_with('\t') {
            issues.push(StyleIssue {
                line:    line_no,
                message: "indented with a tab".to_string(),
            });
        }
        let width = line.chars().count();
        if width > max_line_length {
            issues.push(StyleIssue {
                line:    line_no,
                message: format!("line is {width} characters long (max {max_line_length})"),
            });
        }
    }
    issues
}

/// Deducts for every style finding in a submitted source file.
///
/// Defaults to a zero point budget, which makes it purely informational: the
/// score clamps to zero while the findings still show up as feedback.
#[derive(Clone, Builder)]
#[builder(on(String, into))]
pub struct StyleQuestion {
    /// Title shown in reports.
    #[builder(default = "Style".to_string())]
    title:           String,
    /// Point budget.
    #[builder(default = 0.0)]
    out_of:          f64,
    /// Submission name holding the source text.
    #[builder(default = DEFAULT_SOURCE_NAME.to_string())]
    source_name:     String,
    /// Longest accepted line, in characters.
    #[builder(default = DEFAULT_MAX_LINE_LENGTH)]
    max_line_length: usize,
    /// Deduction per finding.
    #[builder(default = config::grading().default_penalty())]
    penalty:         f64,
}

impl Question for StyleQuestion {
    fn title(&self) -> &str {
        &self.title
    }

    fn max_points(&self) -> f64 {
        self.out_of
    }

    fn score(
        &self,
        submission: &dyn Submission,
        card: &mut Scorecard,
    ) -> Result<(), QuestionError> {
        let source = match submission.get(&self.source_name) {
            Some(Value::String(source)) => source,
            Some(other) => {
                return Err(QuestionError::precondition(format!(
                    "Expected `{}` to be source text, found {}.",
                    self.source_name,
                    kind_of(other)
                )));
            }
            None => {
                return Err(QuestionError::precondition(format!(
                    "Could not find `{}` in your submission to check its style.",
                    self.source_name
                )));
            }
        };

        card.full_credit();
        for issue in lint_source(source, self.max_line_length) {
            card.add_message(issue.to_string(), -self.penalty);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::types::JsonSubmission;

    #[test]
    fn clean_source_has_no_issues() {
        assert!(lint_source("import re\n\nTASK1_REGEX = r'cat'\n", 100).is_empty());
    }

    #[test]
    fn finds_each_kind_of_issue() {
        let source = "ok\nspace \n\tindented\nabcdefghijk";
        let issues = lint_source(source, 10);
        assert_eq!(
            issues.iter().map(|i| i.line).collect::<Vec<_>>(),
            vec![2, 3, 4]
        );
        assert_eq!(issues[0].to_string(), "Line 2: trailing whitespace");
        assert_eq!(issues[2].message, "line is 11 characters long (max 10)");
    }

    #[test]
    fn advisory_budget_keeps_messages_but_scores_zero() {
        let q = StyleQuestion::builder().penalty(1.0).build();
        let mut map = serde_json::Map::new();
        map.insert("source".into(), json!("x = 1 \ny = 2\t\n"));
        let sub = JsonSubmission::from_map(map);

        let mut card = Scorecard::new(q.title(), q.max_points());
        q.score(&sub, &mut card).unwrap();
        card.finalize(q.clamps());

        assert_eq!(card.score(), 0.0);
        assert_eq!(card.feedback().len(), 2);
        assert_eq!(card.feedback()[1].delta, -1.0);
    }

    #[test]
    fn budgeted_style_deducts() {
        let q = StyleQuestion::builder().out_of(5.0).penalty(2.0).build();
        let mut map = serde_json::Map::new();
        map.insert("source".into(), json!("\tx = 1\n"));
        let sub = JsonSubmission::from_map(map);

        let mut card = Scorecard::new(q.title(), q.max_points());
        q.score(&sub, &mut card).unwrap();
        card.finalize(true);
        assert_eq!(card.score(), 3.0);
    }

    #[test]
    fn non_string_source_is_rejected() {
        let q = StyleQuestion::builder().build();
        let mut map = serde_json::Map::new();
        map.insert("source".into(), json!(12));
        let sub = JsonSubmission::from_map(map);

        let mut card = Scorecard::new(q.title(), q.max_points());
        let err = q.score(&sub, &mut card).unwrap_err();
        assert!(err.to_string().contains("found a number"));
    }
}
