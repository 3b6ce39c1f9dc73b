use crate::cli::Cli;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::profile;

pub fn run(cli: Cli) -> AppResult<()> {
    let Cli {
        credentials,
        profile,
        format,
        verbose: _,
    } = cli;

    let ctx = AppContext::bootstrap(credentials, profile, format)?;
    let data = ctx.read_credentials()?;
    let record = profile::parse_profile(&data, &ctx.profile)?;

    ctx.output.emit(&record)
}
