#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Four pattern tasks of increasing difficulty plus an advisory style check.
//!
//! Every task starts at full credit and loses a point per failed case, so a
//! trivially permissive pattern can still earn points on tasks that have few
//! rejecting cases. Hints describe what a case probes without revealing the
//! input.

use crate::grade::{Assignment, RegexQuestion, StyleQuestion, TestCase};

/// Builds a full-credit-then-deduct pattern task worth 10 points.
fn task(title: &str, name: &str, cases: Vec<TestCase>) -> RegexQuestion {
    RegexQuestion::builder()
        .title(title)
        .out_of(10.0)
        .name(name)
        .cases(cases)
        .build()
}

/// Cases for "My First Match".
pub fn task1_cases() -> Vec<TestCase> {
    vec![
        TestCase::matching("cat", "the target sequence by itself"),
        TestCase::matching("cat___", "the target sequence with text after"),
        TestCase::matching("___cat", "the target sequence with text before"),
        TestCase::matching("___cat___", "the target sequence surrounded by text"),
        TestCase::matching("catcatcat", "the target sequence repeated"),
        TestCase::rejecting("dog", "a non-target sequence by itself"),
    ]
}

/// Cases for "License Plates".
pub fn task2_cases() -> Vec<TestCase> {
    vec![
        TestCase::matching("1ABC123", "a normal plate with all uppercase"),
        TestCase::matching("1abc123", "a normal plate with all lowercase"),
        TestCase::matching("1aBc123", "a normal plate with mixed case"),
        TestCase::matching("1234567", "all numbers"),
        TestCase::rejecting("abcdefg", "all letters"),
        TestCase::rejecting("", "empty"),
        TestCase::rejecting("1ABC12", "too short"),
        TestCase::rejecting("zABC123", "bad starting character"),
        TestCase::rejecting("1ABC12z", "bad ending character"),
    ]
}

/// Cases for "Mysterious Code".
pub fn task3_cases() -> Vec<TestCase> {
    vec![
        TestCase::matching(
            r#"code_z = "z987""#,
            "variable ending with a letter, code starting with a letter",
        ),
        TestCase::matching(r#"code_Z = "Z987""#, "uppercase in variable and code"),
        TestCase::matching(
            r#"code_1 = "0987""#,
            "variable ending with a digit, code starting with a digit",
        ),
        TestCase::matching(r#"code__ = "0987""#, "variable ending with an underscore"),
        TestCase::matching(r#"code_a = "_123""#, "code starting with an underscore"),
        TestCase::rejecting(r#"a = "a123""#, "variable does not start with standard prefix"),
        TestCase::rejecting(r#"code_a = "123""#, "code does not start with prefix"),
        TestCase::rejecting(r#"code_a = "a1""#, "code too short"),
        TestCase::rejecting(r#"code_ = "a134""#, "variable too short"),
        TestCase::rejecting(r#"code_a = "abcd""#, "code only letters"),
        TestCase::rejecting("code_a\t=\t\"a123\"", "non-space characters used"),
    ]
}

/// Cases for "Mysterious Code - Better".
pub fn task4_cases() -> Vec<TestCase> {
    vec![
        TestCase::matching(
            r#"code_z = "z987""#,
            "variable ending with a letter, code starting with a letter",
        ),
        TestCase::matching(r#"code_z = "Z987""#, "code starting with an uppercase letter"),
        TestCase::matching("code_a\t=\t\"a123\"", "non-space characters used"),
        TestCase::matching("code_a =\t\"a123\"", "one space and one tab"),
        TestCase::matching("code_a\t= \"a123\"", "one tab and one space"),
        TestCase::matching(r#"code_a = "0987""#, "code starting with a digit"),
        TestCase::rejecting(r#"code_a = "_123""#, "code starting with an underscore"),
        TestCase::rejecting(r#"code_Z = "Z987""#, "uppercase in variable and code"),
        TestCase::rejecting(r#"code__ = "0987""#, "variable ending with an underscore"),
        TestCase::rejecting(r#"code_1 = "0987""#, "variable ending with a digit"),
        TestCase::rejecting(r#"a = "a123""#, "variable does not start with standard prefix"),
        TestCase::rejecting(r#"code_a = "123""#, "code does not start with prefix"),
        TestCase::rejecting(r#"code_a = "a1""#, "code too short"),
        TestCase::rejecting(r#"code_ = "a134""#, "variable too short"),
        TestCase::rejecting(r#"code_a = "abcd""#, "code only letters"),
    ]
}

/// Builds the "Regex Tutorial" assignment.
pub fn regex_tutorial() -> Assignment {
    Assignment::new("Regex Tutorial")
        .question(task("Task 1: My First Match", "TASK1_REGEX", task1_cases()))
        .question(task("Task 2: License Plates", "TASK2_REGEX", task2_cases()))
        .question(task("Task 3: Mysterious Code", "TASK3_REGEX", task3_cases()))
        .question(task("Task 4: Mysterious Code - Better", "TASK4_REGEX", task4_cases()))
        .question(StyleQuestion::builder().out_of(0.0).build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn battery_sizes() {
        assert_eq!(task1_cases().len(), 6);
        assert_eq!(task2_cases().len(), 9);
        assert_eq!(task3_cases().len(), 11);
        assert_eq!(task4_cases().len(), 15);
    }

    #[test]
    fn tutorial_is_worth_forty() {
        let assignment = regex_tutorial();
        assert_eq!(assignment.questions().len(), 5);
        assert_eq!(assignment.total_max(), 40.0);
        assert_eq!(assignment.questions()[4].title(), "Style");
    }
}
