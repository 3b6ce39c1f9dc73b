use clap::Parser;

fn main() {
    let cli = aws_profile_parser::cli::Cli::parse();
    aws_profile_parser::logging::init(cli.verbose);

    if let Err(err) = aws_profile_parser::run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
