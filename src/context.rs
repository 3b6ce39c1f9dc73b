use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::config;
use crate::error::{AppError, AppResult};
use crate::output::{Output, OutputMode};

#[derive(Debug)]
pub struct AppContext {
    pub profile: String,
    pub credentials_path: PathBuf,
    pub output: Output,
}

impl AppContext {
    pub fn bootstrap(
        credentials: Option<PathBuf>,
        profile: String,
        format: OutputMode,
    ) -> AppResult<Self> {
        let profile = config::resolve_profile(&profile);
        let credentials_path = config::credentials_file(credentials)?;
        let output = Output::new(format);

        debug!(profile = %profile, path = %credentials_path.display(), "resolved inputs");

        Ok(Self {
            profile,
            credentials_path,
            output,
        })
    }

    pub fn read_credentials(&self) -> AppResult<Vec<u8>> {
        fs::read(&self.credentials_path).map_err(|source| AppError::Read {
            path: self.credentials_path.clone(),
            source,
        })
    }
}
