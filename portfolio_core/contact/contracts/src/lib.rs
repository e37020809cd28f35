use std::future::Future;

use portfolio_models::contact::{ContactMessageError, RawContactMessage};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFeatureService: Send + Sync + 'static {
    /// Validate a contact form submission and forward it to the site owner.
    ///
    /// The submission is validated before the email provider configuration
    /// is checked. Nothing is sent unless both succeed.
    fn send_message(
        &self,
        message: RawContactMessage,
    ) -> impl Future<Output = Result<(), ContactSendMessageError>> + Send;

    /// Whether the email provider is fully configured.
    fn is_configured(&self) -> bool;
}

#[derive(Debug, Error)]
pub enum ContactSendMessageError {
    #[error(transparent)]
    Invalid(#[from] ContactMessageError),
    #[error("The email provider is not configured.")]
    NotConfigured,
    #[error("Failed to send email.")]
    Send { detail: Option<String> },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactFeatureService {
    pub fn with_send_message(
        mut self,
        message: RawContactMessage,
        result: Result<(), ContactSendMessageError>,
    ) -> Self {
        self.expect_send_message()
            .once()
            .with(mockall::predicate::eq(message))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_is_configured(mut self, result: bool) -> Self {
        self.expect_is_configured().return_const(result);
        self
    }
}
