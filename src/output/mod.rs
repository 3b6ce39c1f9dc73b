pub mod env;
pub mod json;

use clap::ValueEnum;

use crate::error::AppResult;
use crate::profile::Profile;

#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum OutputMode {
    Json,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct Output {
    mode: OutputMode,
}

impl Output {
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    pub fn render(&self, profile: &Profile) -> AppResult<String> {
        match self.mode {
            OutputMode::Json => json::render(profile),
            OutputMode::Env => Ok(env::render(profile)),
        }
    }

    pub fn emit(&self, profile: &Profile) -> AppResult<()> {
        let payload = self.render(profile)?;
        println!("{payload}");
        Ok(())
    }
}
