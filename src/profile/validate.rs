use crate::error::MissingField;

use super::model::Profile;

impl Profile {
    // Independent guards, static first. Both families complete is accepted.
    pub fn validate(&self) -> Result<(), MissingField> {
        let no_access_key_id = self.access_key_id.is_empty();
        let no_secret_access_key = self.secret_access_key.is_empty();
        let no_source_profile = self.source_profile.is_empty();
        let no_role_arn = self.role_arn.is_empty();

        if no_source_profile && no_role_arn {
            if no_access_key_id {
                return Err(MissingField("aws_access_key_id"));
            }
            if no_secret_access_key {
                return Err(MissingField("aws_secret_access_key"));
            }
        }

        if no_access_key_id && no_secret_access_key {
            if no_source_profile {
                return Err(MissingField("source_profile"));
            }
            if no_role_arn {
                return Err(MissingField("role_arn"));
            }
        }

        Ok(())
    }
}
