//! Add-student form
//!
//! Text buffers for the three fields, local validation, and the submitting
//! state while a create request is outstanding.

use crate::api::error::RequestError;
use crate::api::models::{CreateStudentInput, Student, parse_age, parse_grade};
use crate::ui::dispatch::Request;
use log::{info, warn};

pub const ADD_FAILED: &str = "Failed to add student";
pub const SUBMIT_LABEL: &str = "Add Student";
pub const BUSY_LABEL: &str = "Adding...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display, strum::EnumIter)]
pub enum Field {
    #[default]
    Name,
    Age,
    Grade,
}

impl Field {
    fn next(self) -> Self {
        match self {
            Field::Name => Field::Age,
            Field::Age => Field::Grade,
            Field::Grade => Field::Name,
        }
    }

    fn previous(self) -> Self {
        match self {
            Field::Name => Field::Grade,
            Field::Age => Field::Name,
            Field::Grade => Field::Age,
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Enter student name",
            Field::Age => "Enter age",
            Field::Grade => "Enter grade (0.0-4.0)",
        }
    }
}

#[derive(Debug, Default)]
pub struct CreateForm {
    generation: u64,
    name: String,
    age: String,
    grade: String,
    focus: Field,
    submitting: bool,
    error: Option<String>,
}

impl CreateForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Age => &self.age,
            Field::Grade => &self.grade,
        }
    }

    fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Age => &mut self.age,
            Field::Grade => &mut self.grade,
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submitting {
            BUSY_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    /// The draft as it would be submitted; unparseable numbers become zero.
    pub fn draft(&self) -> CreateStudentInput {
        CreateStudentInput {
            name: self.name.clone(),
            age: parse_age(&self.age),
            grade: parse_grade(&self.grade),
        }
    }

    /// Starts a fresh visit with an empty draft.
    pub fn enter(&mut self) {
        *self = Self {
            generation: self.generation + 1,
            ..Self::default()
        };
    }

    pub fn leave(&mut self) {
        self.generation += 1;
    }

    pub fn input(&mut self, c: char) {
        let field = self.focus;
        self.value_mut(field).push(c);
    }

    pub fn backspace(&mut self) {
        let field = self.focus;
        self.value_mut(field).pop();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Validates the draft and, if it passes, produces the create request.
    ///
    /// Returns `None` while a submission is outstanding or when validation
    /// fails; in the latter case the validation message is set.
    pub fn submit(&mut self) -> Option<Request> {
        if self.submitting {
            return None;
        }
        let draft = self.draft();
        if let Err(e) = draft.validate() {
            self.error = Some(e.to_string());
            return None;
        }
        self.error = None;
        self.submitting = true;
        Some(Request::CreateStudent(draft))
    }

    /// Returns true when the student was created.
    pub fn apply_created(&mut self, result: &Result<Student, RequestError>) -> bool {
        self.submitting = false;
        match result {
            Ok(student) => {
                info!("Added student {} ({})", student.name, student.id);
                self.name.clear();
                self.age.clear();
                self.grade.clear();
                self.focus = Field::Name;
                self.error = None;
                true
            }
            Err(e) => {
                warn!("{}: {}", ADD_FAILED, e);
                self.error = Some(ADD_FAILED.to_string());
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::ValidationError;

    fn type_text(form: &mut CreateForm, text: &str) {
        text.chars().for_each(|c| form.input(c));
    }

    fn filled(name: &str, age: &str, grade: &str) -> CreateForm {
        let mut form = CreateForm::new();
        form.enter();
        type_text(&mut form, name);
        form.focus_next();
        type_text(&mut form, age);
        form.focus_next();
        type_text(&mut form, grade);
        form
    }

    #[test]
    fn test_initial_draft_is_empty() {
        let form = CreateForm::new();
        assert_eq!(form.draft(), CreateStudentInput::default());
        assert_eq!(form.submit_label(), SUBMIT_LABEL);
    }

    #[test]
    fn test_valid_submit_enters_submitting_state() {
        let mut form = filled("Ada", "30", "3.95");
        assert_eq!(
            form.submit(),
            Some(Request::CreateStudent(CreateStudentInput::new("Ada", 30, 3.95)))
        );
        assert!(form.is_submitting());
        assert_eq!(form.submit_label(), BUSY_LABEL);
        // Submit is disabled while the request is outstanding.
        assert_eq!(form.submit(), None);
    }

    #[test]
    fn test_invalid_submit_makes_no_request() {
        let cases = [
            (filled("", "30", "3.0"), ValidationError::NameRequired),
            (filled("Ada", "0", "3.0"), ValidationError::AgeOutOfRange),
            (filled("Ada", "101", "3.0"), ValidationError::AgeOutOfRange),
            (filled("Ada", "30", "-0.01"), ValidationError::GradeOutOfRange),
            (filled("Ada", "30", "4.01"), ValidationError::GradeOutOfRange),
            (filled("Ada", "thirty", "3.0"), ValidationError::AgeOutOfRange),
        ];
        for (mut form, expected) in cases {
            assert_eq!(form.submit(), None);
            assert!(!form.is_submitting());
            assert_eq!(form.error(), Some(expected.to_string().as_str()));
        }
    }

    #[test]
    fn test_success_resets_draft() {
        let mut form = filled("Ada", "30", "3.95");
        form.submit();
        let created = Ok(Student {
            id: "1".to_string(),
            name: "Ada".to_string(),
            age: 30,
            grade: 3.95,
        });
        assert!(form.apply_created(&created));
        assert_eq!(form.draft(), CreateStudentInput::default());
        assert!(form.error().is_none());
        assert!(!form.is_submitting());
        assert_eq!(form.focus(), Field::Name);
    }

    #[test]
    fn test_failure_preserves_values() {
        let mut form = filled("Ada", "30", "3.95");
        form.submit();
        let failed = Err(RequestError::Http {
            status: 400,
            message: String::new(),
        });
        assert!(!form.apply_created(&failed));
        assert_eq!(form.draft(), CreateStudentInput::new("Ada", 30, 3.95));
        assert_eq!(form.error(), Some(ADD_FAILED));
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_correcting_input_clears_validation_error() {
        let mut form = filled("", "30", "3.0");
        form.submit();
        assert!(form.error().is_some());

        form.focus_next(); // grade -> name
        type_text(&mut form, "Ada");
        assert!(form.submit().is_some());
        assert!(form.error().is_none());
    }

    #[test]
    fn test_editing_and_focus_cycle() {
        let mut form = CreateForm::new();
        type_text(&mut form, "Adx");
        form.backspace();
        type_text(&mut form, "a");
        assert_eq!(form.value(Field::Name), "Ada");
        form.focus_previous();
        assert_eq!(form.focus(), Field::Grade);
        form.focus_next();
        assert_eq!(form.focus(), Field::Name);
    }

    #[test]
    fn test_enter_discards_draft_and_bumps_generation() {
        let mut form = filled("Ada", "30", "3.95");
        let generation = form.generation();
        form.enter();
        assert_eq!(form.generation(), generation + 1);
        assert_eq!(form.value(Field::Name), "");
    }
}
