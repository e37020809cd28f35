use std::{ops::Deref, str::FromStr};

use serde::Deserialize;

/// A duration written as whitespace separated parts, each a number followed
/// by one of `ms`, `s`, `m`, `h` or `d`, e.g. `1m 30s`. A bare number means
/// seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duration(pub std::time::Duration);

impl From<Duration> for std::time::Duration {
    fn from(value: Duration) -> Self {
        value.0
    }
}

impl Deref for Duration {
    type Target = std::time::Duration;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromStr for Duration {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err("Empty duration");
        }

        s.split_whitespace()
            .try_fold(std::time::Duration::ZERO, |total, part| {
                let unit_start = part
                    .find(|c: char| !c.is_ascii_digit())
                    .unwrap_or(part.len());
                let (value, unit) = part.split_at(unit_start);
                let value = value.parse::<u64>().map_err(|_| "Invalid duration")?;

                let part = match unit {
                    "ms" => std::time::Duration::from_millis(value),
                    "" | "s" => std::time::Duration::from_secs(value),
                    "m" => secs(value, 60)?,
                    "h" => secs(value, 60 * 60)?,
                    "d" => secs(value, 24 * 60 * 60)?,
                    _ => return Err("Invalid duration unit"),
                };

                total.checked_add(part).ok_or("Duration overflow")
            })
            .map(Self)
    }
}

fn secs(value: u64, factor: u64) -> Result<std::time::Duration, &'static str> {
    value
        .checked_mul(factor)
        .map(std::time::Duration::from_secs)
        .ok_or("Duration overflow")
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer)?
            .parse()
            .map_err(serde::de::Error::custom)
    }
}
