//! Resolution of one named profile from INI-formatted credentials.
//!
//! The pipeline is: locate the `[name]` header, decode that section's entries,
//! map them onto a [`Profile`], then validate it. Nothing here does I/O.

pub mod decoder;
pub mod locator;
pub mod model;
pub mod validate;

pub use decoder::{Section, decode_section};
pub use locator::ensure_section;
pub use model::{Mode, Profile};

use tracing::debug;

use crate::error::ProfileError;

pub fn parse_profile(credentials: &[u8], profile: &str) -> Result<Profile, ProfileError> {
    ensure_section(credentials, profile)?;
    debug!(profile, "located section header");

    let section = decode_section(credentials, profile)?;
    let record = Profile::from_section(&section)?;

    record
        .validate()
        .map_err(|source| ProfileError::Invalid {
            profile: profile.to_string(),
            source,
        })?;

    debug!(profile, mode = ?record.mode(), "validated profile");
    Ok(record)
}
