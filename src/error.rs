use std::path::PathBuf;
use std::{io, str};

use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("error reading file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Profile(#[from] ProfileError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("no profile found with name: `{0}`")]
    NotFound(String),
    #[error("failed to parse AWS profile from source: {0}")]
    Decode(#[from] DecodeError),
    #[error("failed to parse AWS profile from loaded source: {0}")]
    Mapping(#[from] serde::de::value::Error),
    #[error("invalid AWS profile [{profile}]: {source}")]
    Invalid {
        profile: String,
        #[source]
        source: MissingField,
    },
}

/// Syntax problems found while tokenizing the store. Line numbers are 1-based.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("credentials are not valid utf-8: {0}")]
    InvalidUtf8(#[from] str::Utf8Error),
    #[error("line {line}: section header is missing its closing `]`")]
    UnterminatedHeader { line: usize },
    #[error("line {line}: section name is empty")]
    EmptySectionName { line: usize },
    #[error("line {line}: entry has an empty key")]
    EmptyKey { line: usize },
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("no `{0}` found in profile")]
pub struct MissingField(pub &'static str);
