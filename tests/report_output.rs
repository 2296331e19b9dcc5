use patgrade::{
    JsonSubmission, regex_tutorial,
    grade::{GradeResult, GradescopeSubmission, GradescopeTestCase, show_result},
};
use serde_json::Value;

fn graded() -> patgrade::Report {
    let sub: JsonSubmission = r#"{"TASK1_REGEX": "cat", "TASK2_REGEX": ""}"#.parse().unwrap();
    regex_tutorial().grade(Some(&sub))
}

#[test]
fn report_json_has_documented_shape() {
    let value: Value = serde_json::to_value(graded()).unwrap();
    assert_eq!(value["assignmentName"], "Regex Tutorial");
    assert_eq!(value["total"], 10.0);
    assert_eq!(value["totalMax"], 40.0);

    let questions = value["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 5);
    assert_eq!(questions[1]["title"], "Task 2: License Plates");
    assert_eq!(questions[1]["maxPoints"], 10.0);
    assert_eq!(
        questions[1]["messages"][0]["text"],
        "Your regex should be a non-empty string."
    );
    assert_eq!(questions[1]["messages"][0]["delta"], 0.0);
}

#[test]
fn grade_rows_follow_question_order() {
    let rows: Vec<GradeResult> = graded().grade_results();
    let names: Vec<&str> = rows.iter().map(|r| r.requirement()).collect();
    assert_eq!(names, vec![
        "Task 1: My First Match",
        "Task 2: License Plates",
        "Task 3: Mysterious Code",
        "Task 4: Mysterious Code - Better",
        "Style",
    ]);
    assert_eq!(rows[0].grade_value(), 10.0);
    assert_eq!(rows[0].out_of_value(), 10.0);
}

#[test]
fn table_includes_total() {
    let table = show_result(&graded());
    assert!(table.contains("Regex Tutorial - Grading Overview"));
    assert!(table.contains("Total: 10.00/40.00"));
}

#[test]
fn gradescope_results_json() {
    let json = graded().to_gradescope_json().unwrap();
    let value: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["score"], 10.0);
    assert_eq!(value["tests"][0]["status"], "passed");
    assert_eq!(value["tests"][0]["number"], "1");
    assert_eq!(value["tests"][1]["status"], "failed");
    assert_eq!(value["tests"][1]["output_format"], "md");
}

#[test]
fn gradescope_builders_skip_unset_fields() {
    let test_case = GradescopeTestCase::builder().name("case".to_string()).build();
    let submission = GradescopeSubmission::builder().tests(vec![test_case]).build();

    let value: Value = serde_json::to_value(&submission).expect("serialize gradescope");
    assert!(value.get("score").is_none());
    assert_eq!(value["tests"][0], serde_json::json!({ "name": "case" }));
}
