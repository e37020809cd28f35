use std::sync::Arc;

use portfolio_api_rest::RestServerConfig;
use portfolio_config::Config;
use portfolio_core_contact_impl::{ContactFeatureConfig, ContactProviderConfig};
use portfolio_extern_impl::resend::ResendApiServiceConfig;
use types::{ContactFeature, ResendApi, RestServer, Template};

pub mod types;

/// Everything derived from the configuration that the services need.
#[derive(Debug, Clone)]
pub struct ConfigProvider {
    // API
    pub rest_server_config: RestServerConfig,

    // Extern
    pub resend_api_service_config: ResendApiServiceConfig,

    // Core
    pub contact_feature_config: ContactFeatureConfig,
}

impl ConfigProvider {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        // API
        let rest_server_config = RestServerConfig::new(
            config.http.host,
            config.http.port,
            &config.http.allowed_origins,
        )?;

        // Extern
        let resend_api_service_config = ResendApiServiceConfig::new(
            config.resend.endpoint_override.clone(),
            *config.resend.timeout,
        );

        // Core
        let contact_feature_config = ContactFeatureConfig {
            provider: contact_provider_config(config).map(Arc::new),
        };

        Ok(Self {
            rest_server_config,
            resend_api_service_config,
            contact_feature_config,
        })
    }
}

/// Blank values count as unset.
fn contact_provider_config(config: &Config) -> Option<ContactProviderConfig> {
    let non_blank = |value: Option<&str>| {
        value
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_owned)
    };

    Some(ContactProviderConfig {
        api_key: non_blank(config.resend.api_key.as_deref().map(String::as_str))?.into(),
        recipient: non_blank(config.contact.to.as_deref())?,
        sender: non_blank(config.contact.from.as_deref())?,
    })
}

pub fn provide_rest_server(config: ConfigProvider) -> anyhow::Result<RestServer> {
    let resend_api = ResendApi::new(config.resend_api_service_config)?;

    let contact = ContactFeature {
        resend_api,
        template: Template::default(),
        config: config.contact_feature_config,
    };

    Ok(RestServer {
        contact,
        config: config.rest_server_config,
    })
}
