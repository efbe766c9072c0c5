use async_trait::async_trait;
use db::CascadeSummary;
use db::models::{Patient, Therapist};
use percent_encoding::{AsciiSet, CONTROLS, PercentEncode, utf8_percent_encode};
use reqwest::{Method, RequestBuilder};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use services::{
    AttendanceView, NewAttendance, NewPatient, NewSession, NewTherapist, SessionPatch, SessionView,
};
use tracing::debug;

use crate::backend::{Backend, Result};
use crate::error::ClientError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3001/api";

/// Characters that cannot appear raw inside one path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

fn segment(id: &str) -> PercentEncode<'_> {
    utf8_percent_encode(id, PATH_SEGMENT)
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Backend that talks to the REST API over HTTP.
#[derive(Debug, Clone)]
pub struct RemoteBackend {
    http: reqwest::Client,
    base_url: String,
}

impl Default for RemoteBackend {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl RemoteBackend {
    /// `base_url` is the API root, e.g. `http://localhost:3001/api`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, format!("{}{}", self.base_url, path))
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await?;
        let status = response.status();
        debug!(status = status.as_u16(), url = %response.url(), "API response");

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error body".to_string());
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or(body);
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<T>().await?)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(self.request(Method::GET, path)).await
    }
}

#[async_trait]
impl Backend for RemoteBackend {
    async fn list_therapists(&self) -> Result<Vec<Therapist>> {
        self.get("/therapists").await
    }

    async fn get_therapist(&self, id: &str) -> Result<Therapist> {
        self.get(&format!("/therapists/{}", segment(id))).await
    }

    async fn create_therapist(&self, params: NewTherapist) -> Result<Therapist> {
        self.send(self.request(Method::POST, "/therapists").json(&params))
            .await
    }

    async fn list_patients(&self) -> Result<Vec<Patient>> {
        self.get("/patients").await
    }

    async fn get_patient(&self, id: &str) -> Result<Patient> {
        self.get(&format!("/patients/{}", segment(id))).await
    }

    async fn create_patient(&self, params: NewPatient) -> Result<Patient> {
        self.send(self.request(Method::POST, "/patients").json(&params))
            .await
    }

    async fn delete_patient(&self, id: &str) -> Result<CascadeSummary> {
        self.send(self.request(Method::DELETE, &format!("/patients/{}", segment(id))))
            .await
    }

    async fn list_sessions(&self) -> Result<Vec<SessionView>> {
        self.get("/sessions").await
    }

    async fn get_session(&self, id: &str) -> Result<SessionView> {
        self.get(&format!("/sessions/{}", segment(id))).await
    }

    async fn create_session(&self, params: NewSession) -> Result<SessionView> {
        self.send(self.request(Method::POST, "/sessions").json(&params))
            .await
    }

    async fn update_session(&self, id: &str, patch: SessionPatch) -> Result<SessionView> {
        self.send(
            self.request(Method::PUT, &format!("/sessions/{}", segment(id)))
                .json(&patch),
        )
        .await
    }

    async fn delete_session(&self, id: &str) -> Result<CascadeSummary> {
        self.send(self.request(Method::DELETE, &format!("/sessions/{}", segment(id))))
            .await
    }

    async fn check_in(&self, id: &str) -> Result<SessionView> {
        self.send(self.request(Method::POST, &format!("/sessions/{}/check-in", segment(id))))
            .await
    }

    async fn complete(&self, id: &str) -> Result<SessionView> {
        self.send(self.request(Method::POST, &format!("/sessions/{}/complete", segment(id))))
            .await
    }

    async fn list_attendance(&self) -> Result<Vec<AttendanceView>> {
        self.get("/attendance").await
    }

    async fn record_attendance(&self, params: NewAttendance) -> Result<AttendanceView> {
        self.send(self.request(Method::POST, "/attendance").json(&params))
            .await
    }
}
