use std::sync::LazyLock;

use nutype::nutype;
use regex::Regex;

/// Something, an `@`, something, a `.`, something. No whitespace (byte order
/// marks included) anywhere and no second `@`. Deliverability is the
/// provider's problem.
pub static EMAIL_ADDRESS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$").unwrap()
});

#[nutype(
    sanitize(with = crate::trim_text),
    validate(regex = EMAIL_ADDRESS_REGEX),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Display, Serialize, Deserialize)
)]
pub struct EmailAddress(String);
