use serde::{Deserialize, Serialize};

use super::transport::{FormTransport, HttpTransport};
use crate::config::FormConfig;
use crate::{Error, Result};

pub const DEFAULT_FAILURE_MESSAGE: &str = "Something went wrong, please try again.";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
}

impl ContactForm {
    pub fn new(full_name: &str, email: &str, phone: &str) -> Self {
        Self {
            full_name: full_name.trim().to_string(),
            email: email.trim().to_string(),
            phone: phone.trim().to_string(),
        }
    }

    /// Names of empty fields, in form order
    pub fn missing_fields(&self) -> Vec<String> {
        [
            ("fullName", &self.full_name),
            ("email", &self.email),
            ("phone", &self.phone),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name.to_string())
        .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SubmissionResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl SubmissionResponse {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

pub struct FormClient<T = HttpTransport> {
    transport: T,
    endpoint: String,
}

impl FormClient<HttpTransport> {
    /// Build a client from configuration; the endpoint must be set
    pub fn from_config(config: &FormConfig) -> Result<Self> {
        let endpoint = config
            .endpoint
            .clone()
            .ok_or_else(|| Error::Config("form.endpoint is not configured".to_string()))?;
        url::Url::parse(&endpoint)?;
        Ok(Self::with_transport(
            HttpTransport::new(config.request_timeout_secs)?,
            endpoint,
        ))
    }
}

impl<T: FormTransport> FormClient<T> {
    pub fn with_transport(transport: T, endpoint: impl Into<String>) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submit the form once
    ///
    /// Missing fields are rejected before any request is made.
    pub async fn submit(&self, form: &ContactForm) -> Result<SubmissionResponse> {
        let missing = form.missing_fields();
        if !missing.is_empty() {
            return Err(Error::MissingFields(missing));
        }

        let body = serde_json::to_string(form)?;
        let raw = self.transport.post(&self.endpoint, body).await.map_err(|e| {
            tracing::warn!(error = %e, "Contact form request failed");
            e
        })?;

        let response: SubmissionResponse = serde_json::from_str(&raw)?;
        if response.is_success() {
            tracing::info!(name = %form.full_name, "Contact form submitted");
            Ok(response)
        } else {
            let message = response
                .message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string());
            tracing::warn!(status = %response.status, message = %message, "Contact form rejected");
            Err(Error::Submission(message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct FakeTransport {
        reply: String,
        sent: Mutex<Vec<(String, String)>>,
    }

    impl FakeTransport {
        fn replying(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
                sent: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl FormTransport for FakeTransport {
        async fn post(&self, endpoint: &str, body: String) -> Result<String> {
            self.sent.lock().unwrap().push((endpoint.to_string(), body));
            Ok(self.reply.clone())
        }
    }

    fn form() -> ContactForm {
        ContactForm::new("  Jane Doe ", "jane@example.org", " 555-0100")
    }

    #[test]
    fn test_form_is_trimmed_and_camel_cased() {
        let json = serde_json::to_value(form()).unwrap();
        assert_eq!(json["fullName"], "Jane Doe");
        assert_eq!(json["phone"], "555-0100");
    }

    #[tokio::test]
    async fn test_success() {
        let client = FormClient::with_transport(
            FakeTransport::replying(r#"{"status":"success"}"#),
            "https://forms.example.org/exec",
        );
        let response = client.submit(&form()).await.unwrap();
        assert!(response.is_success());

        let sent = client.transport.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "https://forms.example.org/exec");
        assert!(sent[0].1.contains("\"email\":\"jane@example.org\""));
    }

    #[tokio::test]
    async fn test_missing_fields_skip_request() {
        let client = FormClient::with_transport(
            FakeTransport::replying(r#"{"status":"success"}"#),
            "https://forms.example.org/exec",
        );
        let err = client
            .submit(&ContactForm::new("Jane", "", "  "))
            .await
            .unwrap_err();
        match err {
            Error::MissingFields(fields) => assert_eq!(fields, vec!["email", "phone"]),
            other => panic!("unexpected error: {other}"),
        }
        assert!(client.transport.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_rejection_uses_server_message() {
        let client = FormClient::with_transport(
            FakeTransport::replying(r#"{"status":"error","message":"Quota exceeded"}"#),
            "https://forms.example.org/exec",
        );
        let err = client.submit(&form()).await.unwrap_err();
        assert!(matches!(err, Error::Submission(ref m) if m == "Quota exceeded"));
    }

    #[tokio::test]
    async fn test_rejection_without_message() {
        let client = FormClient::with_transport(
            FakeTransport::replying(r#"{"status":"error"}"#),
            "https://forms.example.org/exec",
        );
        let err = client.submit(&form()).await.unwrap_err();
        assert!(matches!(err, Error::Submission(ref m) if m == DEFAULT_FAILURE_MESSAGE));
    }

    #[tokio::test]
    async fn test_non_json_reply() {
        let client = FormClient::with_transport(
            FakeTransport::replying("<html>oops</html>"),
            "https://forms.example.org/exec",
        );
        assert!(matches!(client.submit(&form()).await, Err(Error::Json(_))));
    }

    #[test]
    fn test_from_config_requires_endpoint() {
        let config = FormConfig::default();
        assert!(matches!(FormClient::from_config(&config), Err(Error::Config(_))));
    }
}
