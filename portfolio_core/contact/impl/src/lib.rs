use std::sync::Arc;

use portfolio_core_contact_contracts::{ContactFeatureService, ContactSendMessageError};
use portfolio_extern_contracts::resend::{
    ResendApiService, ResendEmail, ResendSendEmailResponse,
};
use portfolio_models::{
    contact::{ContactMessage, RawContactMessage},
    Sensitive,
};
use portfolio_templates_contracts::{ContactMessageTemplate, TemplateService};
use tracing::{error, info, warn};

#[derive(Debug, Clone)]
pub struct ContactFeatureServiceImpl<ResendApi, Template> {
    pub resend_api: ResendApi,
    pub template: Template,
    pub config: ContactFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct ContactFeatureConfig {
    /// `None` unless api key, recipient and sender are all set.
    pub provider: Option<Arc<ContactProviderConfig>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactProviderConfig {
    pub api_key: Sensitive<String>,
    /// Address the contact messages are delivered to.
    pub recipient: String,
    /// Address the contact messages are sent from.
    pub sender: String,
}

impl<ResendApi, Template> ContactFeatureService for ContactFeatureServiceImpl<ResendApi, Template>
where
    ResendApi: ResendApiService,
    Template: TemplateService,
{
    async fn send_message(&self, message: RawContactMessage) -> Result<(), ContactSendMessageError> {
        let message = ContactMessage::try_from(message)?;

        let Some(provider) = self.config.provider.as_deref() else {
            return Err(ContactSendMessageError::NotConfigured);
        };

        let ContactMessage { author, content } = message;
        let html = self.template.render(&ContactMessageTemplate {
            name: author.name.to_string(),
            email: author.email.to_string(),
            message: content.into_inner(),
        })?;

        let email = ResendEmail {
            from: provider.sender.clone(),
            to: vec![provider.recipient.clone()],
            subject: format!("Portfolio Contact: {}", *author.name),
            reply_to: Some(author.email.into_inner()),
            html,
        };

        match self.resend_api.send_email(&provider.api_key, email).await {
            Ok(ResendSendEmailResponse::Sent { id }) => {
                info!(?id, "Forwarded contact message");
                Ok(())
            }
            Ok(ResendSendEmailResponse::Rejected { status, detail }) => {
                warn!(status, ?detail, "Email provider rejected contact message");
                Err(ContactSendMessageError::Send { detail })
            }
            Err(err) => {
                error!("Failed to reach email provider: {err:#}");
                Err(ContactSendMessageError::Send { detail: None })
            }
        }
    }

    fn is_configured(&self) -> bool {
        self.config.provider.is_some()
    }
}
