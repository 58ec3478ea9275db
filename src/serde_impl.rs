use std::fmt;

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::media_type::MediaType;
use crate::parse::parse;

impl Serialize for MediaType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MediaType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct Visitor;

        impl<'de> de::Visitor<'de> for Visitor {
            type Value = MediaType;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a media type string")
            }

            fn visit_str<E>(self, value: &str) -> Result<MediaType, E>
            where
                E: de::Error,
            {
                parse(value).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(Visitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_test::{assert_de_tokens_error, assert_tokens, Token};

    #[test]
    fn test_serde_tokens() {
        let mt = parse("application/vnd.api+json").unwrap();
        assert_tokens(&mt, &[Token::Str("application/vnd.api+json")]);
    }

    #[test]
    fn test_serde_rejects_malformed() {
        assert_de_tokens_error::<MediaType>(
            &[Token::Str("application")],
            "missing '/' between type and subtype",
        );
    }
}
