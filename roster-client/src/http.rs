//! HTTP transport for the employee API

use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use shared::models::EmployeeDraft;

use crate::{ClientConfig, ClientError, ClientResult};

/// HTTP client for making requests to the employee API
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Make a DELETE request (no response body expected)
    pub async fn delete(&self, path: &str) -> ClientResult<()> {
        let response = self.client.delete(self.url(path)).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(Self::error_for_status(status, body));
        }
        Ok(())
    }

    /// POST a draft as a multipart form
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        draft: &EmployeeDraft,
    ) -> ClientResult<T> {
        let form = Self::draft_form(draft)?;
        let response = self.client.post(self.url(path)).multipart(form).send().await?;
        Self::handle_response(response).await
    }

    /// PUT a draft as a multipart form
    pub async fn put_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        draft: &EmployeeDraft,
    ) -> ClientResult<T> {
        let form = Self::draft_form(draft)?;
        let response = self.client.put(self.url(path)).multipart(form).send().await?;
        Self::handle_response(response).await
    }

    /// Encode a draft as the multipart payload the API expects
    ///
    /// The photo part is omitted when the draft carries none; on update the
    /// server then keeps the prior photo.
    fn draft_form(draft: &EmployeeDraft) -> ClientResult<Form> {
        let mut form = Form::new()
            .text("name", draft.name.clone())
            .text("departmentId", draft.department_id.clone())
            .text("dateOfBirth", draft.date_of_birth.clone())
            .text("phone", draft.phone.clone())
            .text("email", draft.email.clone())
            .text("salary", draft.salary.clone())
            .text("status", if draft.status { "true" } else { "false" });

        if let Some(photo) = &draft.photo {
            let part = Part::bytes(photo.bytes.clone())
                .file_name(photo.file_name.clone())
                .mime_str(&photo.mime_type)?;
            form = form.part("photo", part);
        }

        Ok(form)
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await?;
            return Err(Self::error_for_status(status, body));
        }

        response.json().await.map_err(Into::into)
    }

    /// Map a non-success status to an error, preferring the server's own
    /// `{"message": ...}` body over the raw text
    fn error_for_status(status: StatusCode, body: String) -> ClientError {
        let message = extract_message(&body).unwrap_or(body);
        match status {
            StatusCode::NOT_FOUND => ClientError::NotFound(message),
            StatusCode::BAD_REQUEST => ClientError::Validation(message),
            _ => ClientError::Internal(message),
        }
    }
}

/// Pull the `message` field out of a JSON error body, if there is one
fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("message")?.as_str().map(str::to_string)
}
