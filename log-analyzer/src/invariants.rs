use std::str::FromStr;

use derive_more::{AsRef, Debug, Display};
use serde::Serialize;

/// Client-identifying token at the start of a log line, usually an IP address.
#[derive(Debug, Display, AsRef, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ClientAddress(String);

impl ClientAddress {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl FromStr for ClientAddress {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err("client address must not be empty".into());
        }
        Ok(Self(s.into()))
    }
}

/// Three digit HTTP status code.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct StatusCode(u16);

impl StatusCode {
    pub fn as_u16(self) -> u16 {
        self.0
    }
}

impl TryFrom<u16> for StatusCode {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        if value <= 999 {
            Ok(Self(value))
        } else {
            Err(format!("status code {value} is not three digits"))
        }
    }
}

impl FromStr for StatusCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 3 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format!("status code {s:?} is not three digits"));
        }
        let value: u16 = s.parse().map_err(|e| format!("{e}"))?;
        Self::try_from(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use asserting::prelude::*;

    #[test]
    fn client_address_rejects_empty() {
        assert_that!("".parse::<ClientAddress>()).is_err();
        let address: ClientAddress = "10.0.0.1".parse().unwrap();
        assert_that!(address.as_str()).is_equal_to("10.0.0.1");
    }

    #[test]
    fn status_code_requires_three_digits() {
        assert_that!("200".parse::<StatusCode>().unwrap().as_u16()).is_equal_to(200);
        assert_that!("000".parse::<StatusCode>().unwrap().as_u16()).is_equal_to(0);
        assert_that!("20".parse::<StatusCode>()).is_err();
        assert_that!("2000".parse::<StatusCode>()).is_err();
        assert_that!("2x0".parse::<StatusCode>()).is_err();
        assert_that!(StatusCode::try_from(1000)).is_err();
    }

    #[test]
    fn status_code_serializes_as_number() {
        let code = StatusCode::try_from(404).unwrap();
        assert_eq!(serde_json::to_string(&code).unwrap(), "404");
    }
}
