use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::config::DEFAULT_PROFILE;
use crate::output::OutputMode;

#[derive(Debug, Parser)]
#[command(
    name = "aws-profile-parser",
    version,
    about = "AWS profile parser",
    long_about = "AWS profile parser reads and validates a profile."
)]
pub struct Cli {
    #[arg(
        short = 'c',
        long,
        env = "AWS_SHARED_CREDENTIALS_FILE",
        help = "AWS credentials file"
    )]
    pub credentials: Option<PathBuf>,
    #[arg(
        short = 'p',
        long,
        env = "AWS_PROFILE",
        default_value = DEFAULT_PROFILE,
        help = "AWS profile name"
    )]
    pub profile: String,
    #[arg(long, value_enum, default_value_t = OutputMode::Json, help = "Output format")]
    pub format: OutputMode,
    #[arg(short = 'v', long, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
}
