#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::panic::{self, AssertUnwindSafe};

use super::{
    case::panic_message,
    question::{Question, QuestionError},
    results::{QuestionReport, Report},
    scorecard::Scorecard,
};
use crate::{
    constants::internal_fault,
    types::{EmptySubmission, Submission},
};

/// An ordered collection of independently scored questions.
pub struct Assignment {
    /// Assignment name.
    name:      String,
    /// Questions, in report order.
    questions: Vec<Box<dyn Question>>,
}

impl Assignment {
    /// Creates an assignment with no questions.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name:      name.into(),
            questions: Vec::new(),
        }
    }

    /// Appends a question.
    pub fn question(mut self, question: impl Question + 'static) -> Self {
        self.questions.push(Box::new(question));
        self
    }

    /// Appends an already boxed question.
    pub fn push(&mut self, question: Box<dyn Question>) {
        self.questions.push(question);
    }

    /// Gets the name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets the questions.
    pub fn questions(&self) -> &[Box<dyn Question>] {
        &self.questions
    }

    /// Sum of every question's budget.
    pub fn total_max(&self) -> f64 {
        self.questions.iter().map(|q| q.max_points()).sum()
    }

    /// Grades every question against `submission`, in order.
    ///
    /// A missing submission grades as [`EmptySubmission`], so each question
    /// still fails through its own precondition rather than the whole run
    /// stopping.
    pub fn grade(&self, submission: Option<&dyn Submission>) -> Report {
        let submission = submission.unwrap_or(&EmptySubmission);
        tracing::info!(assignment = %self.name, questions = self.questions.len(), "grading");

        let results = self
            .questions
            .iter()
            .map(|q| grade_question(q.as_ref(), submission))
            .collect();

        let report = Report::new(self.name.clone(), results);
        tracing::info!(
            assignment = %self.name,
            "total: {:.2}/{:.2}",
            report.total(),
            report.total_max()
        );
        report
    }
}

/// Runs one question's full scoring lifecycle, isolating any error or panic to
/// this question.
pub fn grade_question(question: &dyn Question, submission: &dyn Submission) -> QuestionReport {
    let title = question.title().to_string();
    let mut card = Scorecard::new(title.clone(), question.max_points());

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| question.score(submission, &mut card)));

    match outcome {
        Ok(Ok(())) => {
            card.finalize(question.clamps());
        }
        Ok(Err(QuestionError::Precondition(reason))) => {
            tracing::warn!(question = %title, "{reason}");
            card = Scorecard::new(title.clone(), question.max_points());
            card.fail(reason);
        }
        Ok(Err(QuestionError::Internal(e))) => {
            tracing::error!(question = %title, "grading failed: {e:#}");
            card = Scorecard::new(title.clone(), question.max_points());
            card.fail(internal_fault(&format!("{e:#}")));
        }
        Err(payload) => {
            let detail = panic_message(payload.as_ref());
            tracing::error!(question = %title, "grading panicked: {detail}");
            card = Scorecard::new(title.clone(), question.max_points());
            card.fail(internal_fault(&detail));
        }
    }

    let (checks, failures) = card.check_counts();
    tracing::info!(
        question = %title,
        checks,
        failures,
        "{:.2}/{:.2}",
        card.score(),
        card.max_points()
    );
    card.into_report()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grade::results::FeedbackEntry;

    /// Awards a fixed score without looking at the submission.
    struct Fixed(f64);

    impl Question for Fixed {
        fn title(&self) -> &str {
            "fixed"
        }

        fn max_points(&self) -> f64 {
            10.0
        }

        fn score(&self, _: &dyn Submission, card: &mut Scorecard) -> Result<(), QuestionError> {
            card.grant_baseline(self.0);
            Ok(())
        }
    }

    /// Grants credit and then blows up.
    struct Explodes;

    impl Question for Explodes {
        fn title(&self) -> &str {
            "explodes"
        }

        fn max_points(&self) -> f64 {
            10.0
        }

        fn score(&self, _: &dyn Submission, card: &mut Scorecard) -> Result<(), QuestionError> {
            card.full_credit();
            card.add_message("looked fine so far", 0.0);
            panic!("index out of bounds");
        }
    }

    #[test]
    fn scores_are_clamped_by_default() {
        let report = grade_question(&Fixed(14.0), &EmptySubmission);
        assert_eq!(report.score, 10.0);
    }

    #[test]
    fn panic_is_isolated_and_resets_feedback() {
        let report = grade_question(&Explodes, &EmptySubmission);
        assert_eq!(report.score, 0.0);
        assert_eq!(report.messages, vec![FeedbackEntry::new(
            "Grading this question raised an unexpected error: index out of bounds",
            0.0
        )]);
    }

    #[test]
    fn totals_cover_every_question() {
        let assignment = Assignment::new("demo")
            .question(Fixed(7.0))
            .question(Explodes)
            .question(Fixed(3.0));
        assert_eq!(assignment.total_max(), 30.0);

        let report = assignment.grade(None);
        assert_eq!(report.total(), 10.0);
        assert_eq!(report.total_max(), 30.0);
        assert_eq!(
            report.questions().iter().map(|q| q.score).collect::<Vec<_>>(),
            vec![7.0, 0.0, 3.0]
        );
    }
}
