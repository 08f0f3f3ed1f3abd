use crate::prelude::*;
use serde::{Serialize, Serializer};
use std::{fmt, str::FromStr};

/// ISO 3166-1 alpha-2 code, always two uppercase ASCII letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Alpha2Code([u8; 2]);

impl Alpha2Code {
    pub fn as_str(&self) -> &str {
        // Both bytes are checked ASCII uppercase on construction.
        std::str::from_utf8(&self.0).unwrap_or("??")
    }
}

impl FromStr for Alpha2Code {
    type Err = CountryError;

    fn from_str(code: &str) -> Result<Self> {
        match code.as_bytes() {
            [a, b] if a.is_ascii_uppercase() && b.is_ascii_uppercase() => Ok(Alpha2Code([*a, *b])),
            _ => Err(CountryError::InvalidAlpha2(code.to_string())),
        }
    }
}

impl fmt::Display for Alpha2Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<&str> for Alpha2Code {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl Serialize for Alpha2Code {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_uppercase_pairs() {
        let code: Alpha2Code = "AR".parse().unwrap();
        assert_eq!(code, "AR");
        assert_eq!(code.to_string(), "AR");
    }

    #[test]
    fn rejects_anything_else() {
        for bad in ["ar", "A", "ARG", "", "A1", "ÅR"] {
            assert!(matches!(
                bad.parse::<Alpha2Code>(),
                Err(CountryError::InvalidAlpha2(_))
            ));
        }
    }

    #[test]
    fn serializes_as_plain_string() {
        let code: Alpha2Code = "BZ".parse().unwrap();
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"BZ\"");
    }
}
