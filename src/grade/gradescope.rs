use anyhow::{Context, Result};
use bon::Builder;
use serde::{Deserialize, Serialize};
use tabled::{
    Table,
    settings::{Alignment, Modify, Panel, Style, Width, object::Rows},
};

use super::results::Report;

/// Represents output format settings for Gradescope submissions.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GradescopeOutputFormat {
    /// Plain text format.
    Text,
    /// HTML format.
    Html,
    /// This is very similar to the "html" format option but will also convert
    /// \n into <br /> and \n\n+ into a page break.
    SimpleFormat,
    /// Markdown format.
    Md,
    /// ANSI format for including ANSI escape codes (often used in terminal
    /// outputs).
    Ansi,
}

/// Represents visibility settings for Gradescope submissions and test cases.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GradescopeVisibility {
    /// Hidden from students.
    Hidden,
    /// Visible after the due date of the assignment.
    AfterDueDate,
    /// Visible after the grades are published.
    AfterPublished,
    /// Always visible to students.
    Visible,
}

/// Represents the status of a test case in Gradescope submissions.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GradescopeStatus {
    /// Indicates the test case passed successfully.
    Passed,
    /// Indicates the test case failed.
    Failed,
}

/// Represents the overall submission data.
#[derive(Serialize, Deserialize, Debug, Builder)]
pub struct GradescopeSubmission {
    /// Optional overall score. Overrides total of test cases if specified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    /// Optional text relevant to the entire submission.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,

    /// Optional output format settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<GradescopeOutputFormat>,

    /// Optional default output format for test case outputs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_output_format: Option<GradescopeOutputFormat>,

    /// Optional visibility setting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<GradescopeVisibility>,

    /// Optional test cases.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tests: Option<Vec<GradescopeTestCase>>,
}

/// Represents an individual test case.
#[derive(Serialize, Deserialize, Debug, Builder)]
pub struct GradescopeTestCase {
    /// Optional score for the test case.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    /// Optional maximum score for the test case.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_score: Option<f64>,

    /// Optional status of the test case.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<GradescopeStatus>,

    /// Optional name of the test case.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Optional number for the test case.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,

    /// Optional detailed output for the test case.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,

    /// Optional formatting for the test case output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<GradescopeOutputFormat>,

    /// Optional visibility setting for the test case.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<GradescopeVisibility>,
}

impl Report {
    /// Converts the report into Gradescope's `results.json` shape, one test
    /// entry per question.
    pub fn to_gradescope(&self) -> GradescopeSubmission {
        let tests = self
            .questions()
            .iter()
            .enumerate()
            .map(|(idx, q)| {
                let output = q
                    .messages
                    .iter()
                    .map(|m| format!("- {m}"))
                    .collect::<Vec<_>>()
                    .join("\n");

                GradescopeTestCase::builder()
                    .name(q.title.clone())
                    .number((idx + 1).to_string())
                    .score(q.score)
                    .max_score(q.max_points)
                    .status(if q.grade().is_full() {
                        GradescopeStatus::Passed
                    } else {
                        GradescopeStatus::Failed
                    })
                    .output(output)
                    .output_format(GradescopeOutputFormat::Md)
                    .visibility(GradescopeVisibility::Visible)
                    .build()
            })
            .collect::<Vec<_>>();

        GradescopeSubmission::builder()
            .score(self.total())
            .output(format!(
                "{}: {:.2}/{:.2}",
                self.assignment_name(),
                self.total(),
                self.total_max()
            ))
            .visibility(GradescopeVisibility::Visible)
            .test_output_format(GradescopeOutputFormat::Md)
            .tests(tests)
            .build()
    }

    /// Serializes [`Report::to_gradescope`] as pretty JSON.
    pub fn to_gradescope_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.to_gradescope())
            .context("Failed to serialize gradescope results")
    }
}

/// Renders a report as a table with a header and a total footer.
pub fn show_result(report: &Report) -> String {
    let results = report.grade_results();
    Table::new(&results)
        .with(Panel::header(format!("{} - Grading Overview", report.assignment_name())))
        .with(Panel::footer(format!(
            "Total: {:.2}/{:.2}",
            report.total(),
            report.total_max()
        )))
        .with(Modify::new(Rows::new(1..)).with(Width::wrap(48).keep_words(true)))
        .with(
            Modify::new(Rows::first())
                .with(Alignment::center())
                .with(Alignment::center_vertical()),
        )
        .with(
            Modify::new(Rows::last())
                .with(Alignment::center())
                .with(Alignment::center_vertical()),
        )
        .with(Style::modern())
        .to_string()
}
