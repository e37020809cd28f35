use std::future::Future;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ResendApiService: Send + Sync + 'static {
    /// Send an email through the Resend API, authenticated with `api_key`.
    ///
    /// A response from the provider, successful or not, is returned as
    /// [`ResendSendEmailResponse`]. Transport failures and timeouts are
    /// returned as errors.
    fn send_email(
        &self,
        api_key: &str,
        email: ResendEmail,
    ) -> impl Future<Output = anyhow::Result<ResendSendEmailResponse>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResendEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub reply_to: Option<String>,
    pub html: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResendSendEmailResponse {
    Sent {
        id: Option<String>,
    },
    Rejected {
        status: u16,
        /// Raw response body, if any.
        detail: Option<String>,
    },
}

#[cfg(feature = "mock")]
impl MockResendApiService {
    pub fn with_send_email(
        mut self,
        api_key: String,
        email: ResendEmail,
        result: ResendSendEmailResponse,
    ) -> Self {
        self.expect_send_email()
            .once()
            .with(
                mockall::predicate::eq(api_key),
                mockall::predicate::eq(email),
            )
            .return_once(move |_, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_send_email_error(mut self, error: &'static str) -> Self {
        self.expect_send_email()
            .once()
            .return_once(move |_, _| Box::pin(std::future::ready(Err(anyhow::anyhow!(error)))));
        self
    }
}
