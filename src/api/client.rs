//! Student API Client
//!
//! A JSON-over-HTTP client for the student backend.

use crate::api::StudentApi;
use crate::api::error::RequestError;
use crate::api::models::{
    CreateStudentInput, DeleteConfirmation, StatisticsSummary, Student, UpdateStudentRequest,
};
use crate::consts::cli_consts::http;
use log::debug;
use reqwest::{Client, ClientBuilder, Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("student-admin/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct StudentClient {
    client: Client,
    base_url: String,
}

impl StudentClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: ClientBuilder::new()
                .connect_timeout(http::connect_timeout())
                .timeout(http::request_timeout())
                .user_agent(USER_AGENT)
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.into(),
        }
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    fn student_endpoint(id: &str) -> String {
        format!("students/{}", urlencoding::encode(id))
    }

    fn request(&self, method: Method, endpoint: &str) -> RequestBuilder {
        let url = self.build_url(endpoint);
        debug!("{} {}", method, url);
        self.client
            .request(method, url)
            .header("Content-Type", "application/json")
    }

    fn decode_response<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, RequestError> {
        serde_json::from_slice(bytes).map_err(RequestError::Decode)
    }

    async fn handle_response_status(response: Response) -> Result<Response, RequestError> {
        if !response.status().is_success() {
            return Err(RequestError::from_response(response).await);
        }
        Ok(response)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, RequestError> {
        let response = request.send().await?;
        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Self::decode_response(&response_bytes)
    }

    async fn get_request<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, RequestError> {
        self.send(self.request(Method::GET, endpoint)).await
    }

    async fn body_request<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        endpoint: &str,
        body: &B,
    ) -> Result<T, RequestError> {
        let body = serde_json::to_vec(body).map_err(RequestError::Encode)?;
        self.send(self.request(method, endpoint).body(body)).await
    }
}

#[async_trait::async_trait]
impl StudentApi for StudentClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn list_students(&self) -> Result<Vec<Student>, RequestError> {
        self.get_request("students").await
    }

    async fn get_student(&self, id: &str) -> Result<Student, RequestError> {
        self.get_request(&Self::student_endpoint(id)).await
    }

    async fn create_student(&self, input: &CreateStudentInput) -> Result<Student, RequestError> {
        self.body_request(Method::POST, "students", input).await
    }

    async fn update_student(
        &self,
        id: &str,
        input: &CreateStudentInput,
    ) -> Result<Student, RequestError> {
        let body = UpdateStudentRequest::new(id, input);
        self.body_request(Method::PUT, &Self::student_endpoint(id), &body)
            .await
    }

    async fn delete_student(&self, id: &str) -> Result<DeleteConfirmation, RequestError> {
        self.send(self.request(Method::DELETE, &Self::student_endpoint(id)))
            .await
    }

    async fn get_statistics(&self) -> Result<StatisticsSummary, RequestError> {
        self.get_request("statistics").await
    }
}
