use std::{sync::Arc, time::Duration};

use anyhow::Context;
use portfolio_extern_contracts::resend::{ResendApiService, ResendEmail, ResendSendEmailResponse};
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::http::HttpClient;

/// https://resend.com/docs/api-reference/emails/send-email
const SEND_EMAIL_ENDPOINT: &str = "https://api.resend.com/emails";

#[derive(Debug, Clone)]
pub struct ResendApiServiceImpl {
    config: ResendApiServiceConfig,
    http: HttpClient,
}

#[derive(Debug, Clone)]
pub struct ResendApiServiceConfig {
    send_email_endpoint: Arc<Url>,
    timeout: Duration,
}

impl ResendApiServiceConfig {
    pub fn new(send_email_endpoint_override: Option<Url>, timeout: Duration) -> Self {
        Self {
            send_email_endpoint: send_email_endpoint_override
                .unwrap_or_else(|| SEND_EMAIL_ENDPOINT.parse().unwrap())
                .into(),
            timeout,
        }
    }
}

impl ResendApiServiceImpl {
    pub fn new(config: ResendApiServiceConfig) -> anyhow::Result<Self> {
        let http = HttpClient::new(config.timeout)?;
        Ok(Self { config, http })
    }
}

impl ResendApiService for ResendApiServiceImpl {
    async fn send_email(
        &self,
        api_key: &str,
        email: ResendEmail,
    ) -> anyhow::Result<ResendSendEmailResponse> {
        let response = self
            .http
            .post((*self.config.send_email_endpoint).clone())
            .bearer_auth(api_key)
            .json(&SendEmailRequest::from(&email))
            .send()
            .await
            .context("Failed to send resend send email request")?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .text()
                .await
                .inspect_err(|err| debug!("Failed to read resend error response: {err}"))
                .ok()
                .filter(|text| !text.is_empty());

            return Ok(ResendSendEmailResponse::Rejected {
                status: status.as_u16(),
                detail,
            });
        }

        let id = response
            .json::<SendEmailResponse>()
            .await
            .inspect_err(|err| debug!("Failed to deserialize resend send email response: {err}"))
            .ok()
            .map(|response| response.id);

        Ok(ResendSendEmailResponse::Sent { id })
    }
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a [String],
    subject: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
    html: &'a str,
}

impl<'a> From<&'a ResendEmail> for SendEmailRequest<'a> {
    fn from(value: &'a ResendEmail) -> Self {
        Self {
            from: &value.from,
            to: &value.to,
            subject: &value.subject,
            reply_to: value.reply_to.as_deref(),
            html: &value.html,
        }
    }
}

#[derive(Deserialize)]
struct SendEmailResponse {
    id: String,
}
