#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Questions answered with a regular expression.

use std::sync::Arc;

use bon::Builder;
use regex::Regex;
use serde_json::Value;

use super::{
    case::{Evaluator, Predicate, TestCase},
    policy::ScoringPolicy,
    question::{Question, QuestionError, run_cases},
    scorecard::Scorecard,
};
use crate::{config, constants::NON_EMPTY_REGEX, types::Submission};

/// Pulls the pattern named `name` out of a submission.
///
/// Anything other than a non-empty string is a precondition failure.
pub fn extract_pattern<'a>(
    submission: &'a dyn Submission,
    name: &str,
) -> Result<&'a str, QuestionError> {
    match submission.get(name) {
        None => Err(QuestionError::precondition(format!(
            "Could not find `{name}` in your submission."
        ))),
        Some(Value::String(pattern)) if !pattern.is_empty() => Ok(pattern.as_str()),
        Some(_) => Err(QuestionError::precondition(NON_EMPTY_REGEX)),
    }
}

/// Grades a submitted pattern against a fixed battery of test cases.
///
/// The pattern is searched for anywhere in each input, so `cat` matches
/// `___cat___`.
#[derive(Clone, Builder)]
#[builder(on(String, into))]
pub struct RegexQuestion {
    /// Title shown in reports.
    title:     String,
    /// Point budget.
    out_of:    f64,
    /// Submission name the pattern is read from.
    name:      String,
    /// Cases to run, in order.
    #[builder(default, with = |cases: impl IntoIterator<Item = impl Into<TestCase>>| {
        cases.into_iter().map(Into::into).collect::<Vec<TestCase>>()
    })]
    cases:     Vec<TestCase>,
    /// How outcomes turn into points.
    #[builder(default = ScoringPolicy::deduct(config::grading().default_penalty()))]
    policy:    ScoringPolicy,
    /// Whether the final score is clamped into `[0, out_of]`.
    #[builder(default = true)]
    clamp:     bool,
    /// Runs each case with panic capture and a time bound.
    #[builder(default = Evaluator::new(config::grading().check_timeout()))]
    evaluator: Evaluator,
}

impl RegexQuestion {
    /// Gets the submission name this question reads.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets the cases.
    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    /// Gets the scoring policy.
    pub fn policy(&self) -> ScoringPolicy {
        self.policy
    }
}

impl Question for RegexQuestion {
    fn title(&self) -> &str {
        &self.title
    }

    fn max_points(&self) -> f64 {
        self.out_of
    }

    fn clamps(&self) -> bool {
        self.clamp
    }

    fn score(
        &self,
        submission: &dyn Submission,
        card: &mut Scorecard,
    ) -> Result<(), QuestionError> {
        let pattern = extract_pattern(submission, &self.name)?;
        let regex = Regex::new(pattern).map_err(|e| {
            QuestionError::precondition(format!("Your regex could not be compiled:\n{e}"))
        })?;

        card.start(&self.policy);
        let predicate: Arc<dyn Predicate> = Arc::new(regex);
        run_cases(card, &self.evaluator, &predicate, &self.cases, &self.policy);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::types::{EmptySubmission, JsonSubmission};

    fn question() -> RegexQuestion {
        RegexQuestion::builder()
            .title("Task 1: My First Match")
            .out_of(10.0)
            .name("TASK1_REGEX")
            .cases([
                ("cat", true, "the target sequence by itself"),
                ("dog", false, "a non-target sequence by itself"),
            ])
            .policy(ScoringPolicy::deduct(1.0))
            .evaluator(Evaluator::new(None))
            .build()
    }

    fn submission(value: Value) -> JsonSubmission {
        let mut map = serde_json::Map::new();
        map.insert("TASK1_REGEX".to_string(), value);
        JsonSubmission::from_map(map)
    }

    fn grade(sub: &dyn Submission) -> Result<Scorecard, QuestionError> {
        let q = question();
        let mut card = Scorecard::new(q.title(), q.max_points());
        q.score(sub, &mut card)?;
        card.finalize(q.clamps());
        Ok(card)
    }

    #[test]
    fn builder_collects_tuple_cases() {
        let q = question();
        assert_eq!(q.cases().len(), 2);
        assert!(q.cases()[0].expected_match());
        assert_eq!(q.name(), "TASK1_REGEX");
    }

    #[test]
    fn correct_pattern_gets_full_credit() {
        let card = grade(&submission(json!("cat"))).unwrap();
        assert_eq!(card.score(), 10.0);
        assert!(card.feedback().is_empty());
    }

    #[test]
    fn wrong_pattern_loses_a_point_per_case() {
        let card = grade(&submission(json!("^cat$|dog"))).unwrap();
        assert_eq!(card.score(), 9.0);
        assert_eq!(
            card.feedback()[0].text,
            "Matched test case when you should not have: 'a non-target sequence by itself'."
        );
    }

    #[test]
    fn empty_or_non_string_pattern_is_rejected() {
        for bad in [json!(""), json!(42), json!(null), json!(["cat"])] {
            match grade(&submission(bad)) {
                Err(QuestionError::Precondition(msg)) => assert_eq!(msg, NON_EMPTY_REGEX),
                other => panic!("expected precondition, got {:?}", other.map(|c| c.score())),
            }
        }
    }

    #[test]
    fn missing_pattern_is_rejected() {
        let err = grade(&EmptySubmission).unwrap_err();
        assert!(err.to_string().contains("TASK1_REGEX"));
    }

    #[test]
    fn uncompilable_pattern_is_rejected() {
        let err = grade(&submission(json!("ca(t"))).unwrap_err();
        assert!(matches!(
            err,
            QuestionError::Precondition(ref m) if m.starts_with("Your regex could not be compiled")
        ));
    }
}
