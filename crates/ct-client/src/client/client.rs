use crate::{ApiClientResult, ClientError};

use std::panic::Location;
use std::time::Duration;

use ct_core::{IncidentReport, NewAccount, ReportDraft, Session};
use error_location::ErrorLocation;
use log::debug;
use reqwest::multipart::{Form, Part};
use reqwest::{Client as ReqwestClient, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// HTTP client for the CivicTrack backend REST API
pub struct ApiClient {
    pub base_url: String,
    client: ReqwestClient,
}

impl ApiClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Backend URL (e.g., "http://127.0.0.1:5000")
    /// * `timeout` - Per-request timeout
    pub fn new(base_url: &str, timeout: Duration) -> ApiClientResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url)
    }

    /// Execute request and decode the JSON body, surfacing backend errors
    async fn execute<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> ApiClientResult<T> {
        let response = req.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            return Err(Self::decode_error(status.as_u16(), &bytes));
        }

        serde_json::from_slice(&bytes).map_err(ClientError::from_json)
    }

    /// Execute a request whose response body we do not care about
    async fn execute_unit(&self, req: reqwest::RequestBuilder) -> ApiClientResult<()> {
        let response = req.send().await?;
        let status = response.status();

        if !status.is_success() {
            let bytes = response.bytes().await.unwrap_or_default();
            return Err(Self::decode_error(status.as_u16(), &bytes));
        }

        Ok(())
    }

    /// The backend reports failures as `{"message": ...}`; fall back to a
    /// generic message when the body is not in that shape.
    #[track_caller]
    fn decode_error(status: u16, body: &[u8]) -> ClientError {
        let message = serde_json::from_slice::<Value>(body)
            .ok()
            .and_then(|v| {
                v.get("message")
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| format!("Request failed with status {}", status));

        ClientError::Api {
            status,
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    // =========================================================================
    // Auth Operations
    // =========================================================================

    /// Log in with email/password credentials
    pub async fn login(&self, email: &str, password: &str) -> ApiClientResult<Session> {
        #[derive(Serialize)]
        struct LoginRequest<'a> {
            email: &'a str,
            password: &'a str,
        }

        let body = LoginRequest { email, password };
        let req = self.request(Method::POST, "/api/user/login").json(&body);
        self.execute(req).await
    }

    /// Create a new account
    pub async fn register(&self, account: &NewAccount) -> ApiClientResult<Session> {
        let req = self.request(Method::POST, "/api/user/register").json(account);
        self.execute(req).await
    }

    // =========================================================================
    // Report Operations
    // =========================================================================

    /// Upload a composed incident report as a multipart form.
    ///
    /// `token` attaches a bearer header when a session exists; `created_by`
    /// is included only for non-anonymous users. Refuses a draft without a
    /// location before any network I/O.
    pub async fn submit_report(
        &self,
        draft: &ReportDraft,
        token: Option<&str>,
        created_by: Option<&str>,
    ) -> ApiClientResult<()> {
        // Precondition check happens before any network I/O.
        draft.validate()?;
        let Some(selected) = draft.location else {
            return Err(ct_core::CoreError::MissingLocation {
                location: ErrorLocation::from(Location::caller()),
            }
            .into());
        };

        let mut form = Form::new()
            .text("title", draft.title.clone())
            .text("description", draft.description.clone())
            .text("category", draft.category.as_str())
            .text("latitude", selected.position.lat.to_string())
            .text("longitude", selected.position.lng.to_string());

        if let Some(user_id) = created_by {
            form = form.text("createdBy", user_id.to_string());
        }

        if let Some(ref photo) = draft.photo {
            let part = Part::bytes(photo.bytes.clone()).file_name(photo.file_name.clone());
            form = form.part("photo", part);
        }

        let mut req = self
            .request(Method::POST, "/api/report/incidentupload")
            .multipart(form);

        if let Some(token) = token {
            req = req.bearer_auth(token);
        }

        debug!(
            "submitting report at {} (source: {})",
            selected.position, selected.source
        );

        self.execute_unit(req).await
    }

    /// Fetch every report created by the given user
    pub async fn list_reports(&self, user_id: &str) -> ApiClientResult<Vec<IncidentReport>> {
        let req = self.request(Method::GET, &format!("/api/report/get/{}", user_id));
        self.execute(req).await
    }
}
