use crate::api::error::RequestError;
use crate::api::models::{
    CreateStudentInput, DeleteConfirmation, StatisticsSummary, Student,
};

pub(crate) mod client;
pub use client::StudentClient;
pub mod error;
pub mod models;

#[cfg(test)]
use mockall::automock;

/// Every call issues exactly one request and never retries.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait StudentApi: Send + Sync {
    /// Base URL requests are issued against.
    fn base_url(&self) -> &str;

    /// All students, in the order the backend returns them.
    async fn list_students(&self) -> Result<Vec<Student>, RequestError>;

    /// A single student. Not-found is an error like any other.
    async fn get_student(&self, id: &str) -> Result<Student, RequestError>;

    /// Creates a student; the returned record carries the new id.
    async fn create_student(&self, input: &CreateStudentInput) -> Result<Student, RequestError>;

    /// Replaces the fields of an existing student.
    async fn update_student(
        &self,
        id: &str,
        input: &CreateStudentInput,
    ) -> Result<Student, RequestError>;

    /// Removes a student.
    async fn delete_student(&self, id: &str) -> Result<DeleteConfirmation, RequestError>;

    /// Count and average/highest/lowest grade.
    async fn get_statistics(&self) -> Result<StatisticsSummary, RequestError>;
}
