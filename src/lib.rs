pub mod app;
pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod output;
pub mod profile;

use cli::Cli;
use error::AppResult;

pub use profile::{Profile, parse_profile};

pub fn run(cli: Cli) -> AppResult<()> {
    app::run(cli)
}
