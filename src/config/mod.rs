pub mod paths;

pub use paths::{credentials_file, default_credentials_file};

pub const DEFAULT_PROFILE: &str = "default";

pub fn resolve_profile(requested: &str) -> String {
    match requested.trim() {
        "" => DEFAULT_PROFILE.to_string(),
        name => name.to_string(),
    }
}
