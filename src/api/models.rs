//! Wire types exchanged with the student API.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Inclusive bounds the client enforces before submitting a student.
pub const AGE_RANGE: std::ops::RangeInclusive<i32> = 1..=100;
pub const GRADE_RANGE: std::ops::RangeInclusive<f64> = 0.0..=4.0;

/// A student record as owned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Server-assigned, never produced or changed by this client.
    pub id: String,
    pub name: String,
    pub age: i32,
    pub grade: f64,
}

/// The user-supplied subset of a student; the backend assigns the id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateStudentInput {
    pub name: String,
    pub age: i32,
    pub grade: f64,
}

/// Body of `PUT /students/{id}`: the input fields plus the target id.
#[derive(Debug, Serialize)]
pub struct UpdateStudentRequest<'a> {
    pub name: &'a str,
    pub age: i32,
    pub grade: f64,
    pub id: &'a str,
}

impl<'a> UpdateStudentRequest<'a> {
    pub fn new(id: &'a str, input: &'a CreateStudentInput) -> Self {
        Self {
            name: &input.name,
            age: input.age,
            grade: input.grade,
            id,
        }
    }
}

/// Aggregate over all students, recomputed by the backend on every request.
///
/// With no students the backend has no extremes and sends `null` for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsSummary {
    pub total_students: u64,
    pub average_grade: f64,
    pub highest_grade: Option<f64>,
    pub lowest_grade: Option<f64>,
}

/// Body returned by a successful delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteConfirmation {
    pub message: String,
}

/// Local validation failures. These never reach the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,
    #[error("Age must be between 1 and 100")]
    AgeOutOfRange,
    #[error("Grade must be between 0 and 4")]
    GradeOutOfRange,
}

impl CreateStudentInput {
    pub fn new(name: impl Into<String>, age: i32, grade: f64) -> Self {
        Self {
            name: name.into(),
            age,
            grade,
        }
    }

    /// Checks name, then age, then grade; the first failure wins.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::NameRequired);
        }
        if !AGE_RANGE.contains(&self.age) {
            return Err(ValidationError::AgeOutOfRange);
        }
        if !GRADE_RANGE.contains(&self.grade) {
            return Err(ValidationError::GradeOutOfRange);
        }
        Ok(())
    }
}

/// Parses an age field. Anything that is not an integer counts as zero.
pub fn parse_age(text: &str) -> i32 {
    text.trim().parse::<i32>().unwrap_or(0)
}

/// Parses a grade field. Anything that is not a number counts as zero.
pub fn parse_grade(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(grade) if !grade.is_nan() => grade,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input_passes() {
        assert_eq!(CreateStudentInput::new("Ada", 30, 3.95).validate(), Ok(()));
        assert_eq!(CreateStudentInput::new("B", 1, 0.0).validate(), Ok(()));
        assert_eq!(CreateStudentInput::new("C", 100, 4.0).validate(), Ok(()));
    }

    #[test]
    fn test_each_single_violation_is_reported() {
        let cases = [
            (CreateStudentInput::new("", 30, 3.0), ValidationError::NameRequired),
            (CreateStudentInput::new("   ", 30, 3.0), ValidationError::NameRequired),
            (CreateStudentInput::new("Ada", 0, 3.0), ValidationError::AgeOutOfRange),
            (CreateStudentInput::new("Ada", 101, 3.0), ValidationError::AgeOutOfRange),
            (CreateStudentInput::new("Ada", 30, -0.01), ValidationError::GradeOutOfRange),
            (CreateStudentInput::new("Ada", 30, 4.01), ValidationError::GradeOutOfRange),
        ];
        for (input, expected) in cases {
            assert_eq!(input.validate(), Err(expected), "input: {:?}", input);
        }
    }

    #[test]
    fn test_validation_short_circuits_in_order() {
        // Every field is wrong; only the name is reported.
        let input = CreateStudentInput::new("", 0, 9.0);
        assert_eq!(input.validate(), Err(ValidationError::NameRequired));

        let input = CreateStudentInput::new("Ada", 0, 9.0);
        assert_eq!(input.validate(), Err(ValidationError::AgeOutOfRange));
    }

    #[test]
    fn test_numeric_fields_default_to_zero() {
        assert_eq!(parse_age(""), 0);
        assert_eq!(parse_age("abc"), 0);
        assert_eq!(parse_age("30.5"), 0);
        assert_eq!(parse_age(" 42 "), 42);
        assert_eq!(parse_grade(""), 0.0);
        assert_eq!(parse_grade("NaN"), 0.0);
        assert_eq!(parse_grade("x3"), 0.0);
        assert_eq!(parse_grade("3.95"), 3.95);
    }

    #[test]
    fn test_update_body_carries_id() {
        let input = CreateStudentInput::new("Ada", 30, 3.95);
        let body = serde_json::to_value(UpdateStudentRequest::new("7", &input)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"name": "Ada", "age": 30, "grade": 3.95, "id": "7"})
        );
    }

    #[test]
    fn test_statistics_without_students_decode() {
        let stats: StatisticsSummary = serde_json::from_str(
            r#"{"total_students":0,"average_grade":0.0,"highest_grade":null,"lowest_grade":null}"#,
        )
        .unwrap();
        assert_eq!(stats.total_students, 0);
        assert_eq!(stats.highest_grade, None);
        assert_eq!(stats.lowest_grade, None);
    }

    #[test]
    fn test_student_decodes_from_wire_shape() {
        let student: Student =
            serde_json::from_str(r#"{"id":"1","name":"Ada","age":30,"grade":3.95}"#).unwrap();
        assert_eq!(
            student,
            Student {
                id: "1".to_string(),
                name: "Ada".to_string(),
                age: 30,
                grade: 3.95,
            }
        );
    }
}
