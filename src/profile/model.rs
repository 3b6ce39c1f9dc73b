use serde::de::value::{Error as ValueError, MapDeserializer};
use serde::{Deserialize, Serialize};

use super::decoder::Section;

/// Credentials of one profile. Absent keys are empty strings and are left out
/// when serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(
        rename(serialize = "AWS_ACCESS_KEY_ID", deserialize = "aws_access_key_id"),
        default,
        skip_serializing_if = "String::is_empty"
    )]
    pub access_key_id: String,
    #[serde(
        rename(serialize = "AWS_SECRET_ACCESS_KEY", deserialize = "aws_secret_access_key"),
        default,
        skip_serializing_if = "String::is_empty"
    )]
    pub secret_access_key: String,
    #[serde(
        rename(serialize = "AWS_SESSION_TOKEN", deserialize = "aws_session_token"),
        default,
        skip_serializing_if = "String::is_empty"
    )]
    pub session_token: String,
    #[serde(
        rename(serialize = "AWS_REGION", deserialize = "region"),
        default,
        skip_serializing_if = "String::is_empty"
    )]
    pub region: String,

    #[serde(
        rename(serialize = "AWS_ROLE_ARN", deserialize = "role_arn"),
        default,
        skip_serializing_if = "String::is_empty"
    )]
    pub role_arn: String,
    #[serde(
        rename(serialize = "AWS_ROLE_SESSION_NAME", deserialize = "role_session_name"),
        default,
        skip_serializing_if = "String::is_empty"
    )]
    pub role_session_name: String,
    #[serde(
        rename(serialize = "AWS_SOURCE_PROFILE", deserialize = "source_profile"),
        default,
        skip_serializing_if = "String::is_empty"
    )]
    pub source_profile: String,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Mode {
    Static,
    AssumeRole,
    Mixed,
}

impl Profile {
    pub fn from_section(section: &Section) -> Result<Self, ValueError> {
        let entries = section
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()));
        Profile::deserialize(MapDeserializer::<_, ValueError>::new(entries))
    }

    pub fn mode(&self) -> Option<Mode> {
        let has_static = !self.access_key_id.is_empty() || !self.secret_access_key.is_empty();
        let has_role = !self.role_arn.is_empty() || !self.source_profile.is_empty();

        match (has_static, has_role) {
            (true, true) => Some(Mode::Mixed),
            (true, false) => Some(Mode::Static),
            (false, true) => Some(Mode::AssumeRole),
            (false, false) => None,
        }
    }

    /// Non-empty fields under their exported names, in declaration order.
    pub fn exported(&self) -> Vec<(&'static str, &str)> {
        [
            ("AWS_ACCESS_KEY_ID", self.access_key_id.as_str()),
            ("AWS_SECRET_ACCESS_KEY", self.secret_access_key.as_str()),
            ("AWS_SESSION_TOKEN", self.session_token.as_str()),
            ("AWS_REGION", self.region.as_str()),
            ("AWS_ROLE_ARN", self.role_arn.as_str()),
            ("AWS_ROLE_SESSION_NAME", self.role_session_name.as_str()),
            ("AWS_SOURCE_PROFILE", self.source_profile.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .collect()
    }
}
