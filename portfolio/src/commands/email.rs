use anyhow::{bail, Context};
use clap::Subcommand;
use portfolio_config::Config;
use portfolio_extern_contracts::resend::{ResendApiService, ResendEmail, ResendSendEmailResponse};
use tracing::info;

use crate::environment::{types::ResendApi, ConfigProvider};

#[derive(Debug, Subcommand)]
pub enum EmailCommand {
    /// Test email deliverability
    Test {
        /// Defaults to the configured recipient of contact messages
        recipient: Option<String>,
    },
}

impl EmailCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            EmailCommand::Test { recipient } => test(config, recipient).await,
        }
    }
}

async fn test(config: Config, recipient: Option<String>) -> anyhow::Result<()> {
    let config_provider = ConfigProvider::new(&config)?;
    let provider = config_provider
        .contact_feature_config
        .provider
        .context("Email provider is not configured")?;
    let resend_api = ResendApi::new(config_provider.resend_api_service_config)?;

    let recipient = recipient.unwrap_or_else(|| provider.recipient.clone());
    let response = resend_api
        .send_email(
            &provider.api_key,
            ResendEmail {
                from: provider.sender.clone(),
                to: vec![recipient],
                subject: "Email Deliverability Test".into(),
                reply_to: None,
                html: "<p>Email deliverability seems to be working!</p>".into(),
            },
        )
        .await
        .context("Failed to send email")?;

    match response {
        ResendSendEmailResponse::Sent { id } => {
            info!(?id, "Test email sent");
            Ok(())
        }
        ResendSendEmailResponse::Rejected { status, detail } => bail!(
            "Email provider rejected the test email ({status}): {}",
            detail.unwrap_or_default()
        ),
    }
}
