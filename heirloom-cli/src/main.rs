use clap::Parser;
use heirloom_cli::{output_error_json, run_command, Cli, Commands, HeirloomCliContext};
use tracing::Level;

#[tokio::main]
async fn main() {
    let cli_args = Cli::parse();

    // Determine output format - priority: machine flag > env var > cli arg > default
    let output_format = if cli_args.machine {
        "json".to_string()
    } else if let Ok(env_output) = std::env::var("HEIRLOOM_OUTPUT") {
        env_output
    } else {
        cli_args.output.clone()
    };

    let is_quiet = cli_args.quiet
        || std::env::var("HEIRLOOM_QUIET")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

    // Machine mode implies quiet so stdout stays clean JSON
    let log_level = if is_quiet || cli_args.machine {
        Level::ERROR
    } else if cli_args.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };

    // Installed before the library initialises, which then keeps this subscriber
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    if matches!(cli_args.command, Commands::Version) {
        println!("Heirloom CLI v{}", heirloom::VERSION);
        return;
    }

    let result = match HeirloomCliContext::new(cli_args.archive, cli_args.config).await {
        Ok(ctx) => run_command(cli_args.command, &ctx, &output_format).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        output_error_json(&e, &output_format);
        std::process::exit(1);
    }
}
