//! HTTP delivery of one submission record.

use std::time::Duration;

use async_trait::async_trait;
use mana_core::submit::SubmissionRecord;
use mana_core::{ManaError, Result};
use reqwest::Client;

use crate::config::FormConfig;

// Matches the bot's historical per-request budget; a hung form backend
// stalls one dialogue for at most this long per record.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Delivers one record to the form backend.
///
/// The backend is an opaque sink: key/value pairs in, a status out.
/// Implementations classify anything that is not a 2xx response as a
/// delivery error.
#[async_trait]
pub trait FormSink: Send + Sync {
    async fn deliver(&self, record: &SubmissionRecord) -> Result<()>;
}

/// `FormSink` backed by a Google-Forms-style `formResponse` endpoint.
pub struct HttpFormSink {
    client: Client,
    config: FormConfig,
}

impl HttpFormSink {
    pub fn new(config: FormConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| ManaError::config(format!("failed to build HTTP client: {err}")))?;

        Ok(Self { client, config })
    }

    fn form_fields<'a>(&'a self, record: &'a SubmissionRecord) -> Vec<(&'a str, &'a str)> {
        vec![
            (self.config.department_field.as_str(), record.department.as_str()),
            (self.config.employee_field.as_str(), record.employee.as_str()),
            (self.config.project_field.as_str(), record.project.as_str()),
            (self.config.score_field.as_str(), record.score.as_str()),
        ]
    }
}

#[async_trait]
impl FormSink for HttpFormSink {
    async fn deliver(&self, record: &SubmissionRecord) -> Result<()> {
        let response = self
            .client
            .post(&self.config.url)
            .form(&self.form_fields(record))
            .send()
            .await
            .map_err(|err| ManaError::delivery(format!("form request failed: {err}")))?;

        if !response.status().is_success() {
            return Err(ManaError::delivery(format!(
                "form responded with status {}",
                response.status()
            )));
        }

        Ok(())
    }
}
