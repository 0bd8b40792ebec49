//! Student list view
//!
//! Fetches all students on entry and supports confirmed, one-at-a-time
//! deletion. A successful delete patches the local copy; it never re-fetches.

use super::Load;
use crate::api::error::RequestError;
use crate::api::models::{DeleteConfirmation, Student};
use crate::ui::dispatch::Request;
use log::{info, warn};

pub const LOAD_FAILED: &str = "Failed to load students";
pub const DELETE_FAILED: &str = "Failed to delete student";

#[derive(Debug)]
pub struct StudentListView {
    generation: u64,
    state: Load<Vec<Student>>,
    selected: usize,
    /// Id awaiting a yes/no answer.
    pending_delete: Option<String>,
    /// Id of the delete request in flight.
    deleting: Option<String>,
    /// Inline error shown above an otherwise intact list.
    error: Option<String>,
    /// Refresh counter value this visit was loaded for.
    seen_refresh: u64,
}

impl StudentListView {
    pub fn new() -> Self {
        Self {
            generation: 0,
            state: Load::Loading,
            selected: 0,
            pending_delete: None,
            deleting: None,
            error: None,
            seen_refresh: 0,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn state(&self) -> &Load<Vec<Student>> {
        &self.state
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting.is_some()
    }

    /// The student whose deletion is awaiting confirmation.
    pub fn pending_delete(&self) -> Option<&Student> {
        let id = self.pending_delete.as_deref()?;
        self.students().iter().find(|s| s.id == id)
    }

    fn students(&self) -> &[Student] {
        match &self.state {
            Load::Ready(students) => students.as_slice(),
            _ => &[],
        }
    }

    /// Restarts the state machine from `Loading`, dropping everything held.
    pub fn enter(&mut self, refresh: u64) -> Request {
        self.generation += 1;
        self.state = Load::Loading;
        self.selected = 0;
        self.pending_delete = None;
        self.deleting = None;
        self.error = None;
        self.seen_refresh = refresh;
        Request::ListStudents
    }

    /// Tears the view down; responses still in flight will be discarded.
    pub fn leave(&mut self) {
        self.generation += 1;
    }

    /// Whether the data held predates the given refresh counter.
    pub fn needs_refresh(&self, refresh: u64) -> bool {
        refresh != self.seen_refresh
    }

    pub fn apply_students(&mut self, result: Result<Vec<Student>, RequestError>) {
        self.state = match result {
            Ok(students) => {
                info!("Loaded {} students", students.len());
                Load::Ready(students)
            }
            Err(e) => {
                warn!("{}: {}", LOAD_FAILED, e);
                Load::Failed(LOAD_FAILED.to_string())
            }
        };
        self.selected = 0;
    }

    pub fn select_next(&mut self) {
        let len = self.students().len();
        if len > 0 && self.pending_delete.is_none() {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn select_previous(&mut self) {
        if self.pending_delete.is_none() {
            self.selected = self.selected.saturating_sub(1);
        }
    }

    /// Asks for confirmation to delete the selected student.
    ///
    /// Returns false when there is nothing to delete or a delete is already
    /// outstanding.
    pub fn request_delete(&mut self) -> bool {
        if self.deleting.is_some() {
            return false;
        }
        let id = match self.students().get(self.selected) {
            Some(student) => student.id.clone(),
            None => return false,
        };
        self.pending_delete = Some(id);
        true
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Turns a pending confirmation into a delete request.
    pub fn confirm_delete(&mut self) -> Option<Request> {
        let id = self.pending_delete.take()?;
        self.deleting = Some(id.clone());
        self.error = None;
        Some(Request::DeleteStudent(id))
    }

    pub fn apply_deleted(&mut self, id: &str, result: Result<DeleteConfirmation, RequestError>) {
        self.deleting = None;
        match result {
            Ok(confirmation) => {
                info!("{} ({})", confirmation.message, id);
                if let Load::Ready(students) = &mut self.state {
                    students.retain(|s| s.id != id);
                    self.selected = self.selected.min(students.len().saturating_sub(1));
                }
            }
            Err(e) => {
                warn!("{}: {}", DELETE_FAILED, e);
                self.error = Some(DELETE_FAILED.to_string());
            }
        }
    }
}

impl Default for StudentListView {
    fn default() -> Self {
        Self::new()
    }
}
