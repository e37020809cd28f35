use portfolio_core_contact_impl::ContactFeatureServiceImpl;
use portfolio_extern_impl::resend::ResendApiServiceImpl;
use portfolio_templates_impl::TemplateServiceImpl;

// API
pub type RestServer = portfolio_api_rest::RestServer<ContactFeature>;

// Extern
pub type ResendApi = ResendApiServiceImpl;

// Template
pub type Template = TemplateServiceImpl;

// Core
pub type ContactFeature = ContactFeatureServiceImpl<ResendApi, Template>;
