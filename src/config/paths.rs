use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

const AWS_DIR: &str = ".aws";
const CREDENTIALS_FILE: &str = "credentials";

pub fn credentials_file(requested: Option<PathBuf>) -> AppResult<PathBuf> {
    if let Some(path) = requested.filter(|path| !path.as_os_str().is_empty()) {
        return Ok(path);
    }

    let home = dirs::home_dir()
        .ok_or_else(|| AppError::Config("unable to resolve home directory".to_string()))?;
    Ok(default_credentials_file(&home))
}

pub fn default_credentials_file(home: &Path) -> PathBuf {
    home.join(AWS_DIR).join(CREDENTIALS_FILE)
}
