//! Request dispatch
//!
//! Views never await the network themselves. They hand a [`Request`] to the
//! [`Dispatcher`], which runs it as a spawned task and posts a [`Completion`]
//! back to the shell loop. The ticket lets the shell drop completions meant
//! for a view instance that has since been torn down.

use crate::api::StudentApi;
use crate::api::error::RequestError;
use crate::api::models::{
    CreateStudentInput, DeleteConfirmation, StatisticsSummary, Student,
};
use crate::ui::views::Tab;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Identifies the view instance that issued a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub view: Tab,
    pub generation: u64,
}

/// A single API call a view wants performed.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    ListStudents,
    CreateStudent(CreateStudentInput),
    DeleteStudent(String),
    GetStatistics,
}

/// The outcome of a [`Request`], one variant per request kind.
#[derive(Debug)]
pub enum Response {
    Students(Result<Vec<Student>, RequestError>),
    Created(Result<Student, RequestError>),
    Deleted {
        id: String,
        result: Result<DeleteConfirmation, RequestError>,
    },
    Statistics(Result<StatisticsSummary, RequestError>),
}

#[derive(Debug)]
pub struct Completion {
    pub ticket: Ticket,
    pub response: Response,
}

#[derive(Clone)]
pub struct Dispatcher {
    api: Arc<dyn StudentApi>,
    sender: mpsc::Sender<Completion>,
}

impl Dispatcher {
    pub fn new(api: Arc<dyn StudentApi>, sender: mpsc::Sender<Completion>) -> Self {
        Self { api, sender }
    }

    /// Spawns the request. The completion is dropped if the shell is gone.
    pub fn dispatch(&self, ticket: Ticket, request: Request) -> JoinHandle<()> {
        let api = Arc::clone(&self.api);
        let sender = self.sender.clone();
        tokio::spawn(async move {
            let response = perform(api.as_ref(), request).await;
            let _ = sender.send(Completion { ticket, response }).await;
        })
    }
}

async fn perform(api: &dyn StudentApi, request: Request) -> Response {
    match request {
        Request::ListStudents => Response::Students(api.list_students().await),
        Request::CreateStudent(input) => Response::Created(api.create_student(&input).await),
        Request::DeleteStudent(id) => {
            let result = api.delete_student(&id).await;
            Response::Deleted { id, result }
        }
        Request::GetStatistics => Response::Statistics(api.get_statistics().await),
    }
}
