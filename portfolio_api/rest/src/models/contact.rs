use portfolio_models::contact::RawContactMessage;
use serde_json::Value;

/// Any well-formed JSON document is accepted here; which fields it carries
/// is for the contact service to judge.
pub fn parse_contact_message(body: &[u8]) -> serde_json::Result<RawContactMessage> {
    serde_json::from_slice::<Value>(body).map(Into::into)
}
