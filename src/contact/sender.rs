//! Message delivery through the EmailJS REST API.

use serde::Serialize;
use thiserror::Error;

use super::form::FormFields;

pub const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Delivery failure carrying the provider's response text (may be empty)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{text}")]
pub struct SendError {
    pub text: String,
}

impl SendError {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Outbound message provider
pub trait MessageSender {
    fn send(
        &self,
        service_id: &str,
        template_id: &str,
        fields: &FormFields,
        public_key: &str,
    ) -> Result<(), SendError>;
}

#[derive(Debug, Serialize)]
struct TemplateParams<'a> {
    user_name: &'a str,
    user_email: &'a str,
    message: &'a str,
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
}

/// Blocking EmailJS client
pub struct EmailJsSender {
    client: reqwest::blocking::Client,
    endpoint: String,
    access_token: Option<String>,
}

impl EmailJsSender {
    pub fn new(
        endpoint: impl Into<String>,
        access_token: Option<String>,
    ) -> Result<Self, SendError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("cybernode/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SendError::new(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            access_token,
        })
    }
}

fn request_body<'a>(
    service_id: &'a str,
    template_id: &'a str,
    fields: &'a FormFields,
    public_key: &'a str,
    access_token: Option<&'a str>,
) -> SendRequest<'a> {
    SendRequest {
        service_id,
        template_id,
        user_id: public_key,
        template_params: TemplateParams {
            user_name: &fields.name,
            user_email: &fields.email,
            message: &fields.message,
        },
        access_token,
    }
}

impl MessageSender for EmailJsSender {
    fn send(
        &self,
        service_id: &str,
        template_id: &str,
        fields: &FormFields,
        public_key: &str,
    ) -> Result<(), SendError> {
        let body = request_body(
            service_id,
            template_id,
            fields,
            public_key,
            self.access_token.as_deref(),
        );

        log::debug!("POST {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .map_err(|e| {
                // Transport failures carry no provider text
                log::error!("EmailJS request failed: {}", e);
                SendError::new("")
            })?;

        let status = response.status();
        if status.is_success() {
            log::info!("Message delivered ({})", status);
            return Ok(());
        }

        let text = response.text().unwrap_or_default();
        log::warn!("EmailJS rejected message ({}): {}", status, text);
        Err(SendError::new(text))
    }
}
