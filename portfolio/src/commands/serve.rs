use portfolio_config::{Config, CONTACT_FROM_EMAIL_ENV, CONTACT_TO_EMAIL_ENV, RESEND_API_KEY_ENV};
use tracing::{info, warn};

use crate::environment::{provide_rest_server, ConfigProvider};

pub async fn serve(config: Config) -> anyhow::Result<()> {
    let config_provider = ConfigProvider::new(&config)?;

    if config_provider.contact_feature_config.provider.is_some() {
        info!("Email provider is configured");
    } else {
        warn!(
            "Email provider is not configured, contact messages will be rejected. Set \
             {RESEND_API_KEY_ENV}, {CONTACT_TO_EMAIL_ENV} and {CONTACT_FROM_EMAIL_ENV}."
        );
    }

    let server = provide_rest_server(config_provider)?;
    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    server.serve().await
}
