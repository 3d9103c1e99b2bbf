pub mod args;
pub mod commands;
pub mod context;
pub mod handlers;
pub mod output;

pub use commands::{Cli, Commands};
pub use context::{load_config, HeirloomCliContext};
pub use output::{
    error_code, format_error, format_info, format_success, format_warning, output_error_json, CliColors,
};

/// Run one parsed command against an opened archive
pub async fn run_command(
    command: Commands,
    ctx: &HeirloomCliContext,
    output_format: &str,
) -> heirloom::Result<()> {
    use handlers::*;

    match command {
        Commands::Version => {
            println!("Heirloom CLI v{}", heirloom::VERSION);
            Ok(())
        }
        Commands::Memories => handle_memories(ctx, output_format).await,
        Commands::Photos => handle_photos(ctx, output_format).await,
        Commands::Suggest(args) => handle_suggest(args, ctx, output_format).await,
        Commands::SuggestAll(args) => handle_suggest_all(args, ctx, output_format).await,
        Commands::Score(args) => handle_score(args, ctx, output_format).await,
        Commands::Apply(args) => handle_apply(args, ctx, output_format).await,
        Commands::Unlink(args) => handle_unlink(args, ctx, output_format).await,
        Commands::Linked(args) => handle_linked(args, ctx, output_format).await,
        Commands::SetLinks(args) => handle_set_links(args, ctx, output_format).await,
        Commands::AutoLink(args) => handle_auto_link(args, ctx, output_format).await,
        Commands::Search(args) => handle_search(args, ctx, output_format).await,
        Commands::Extract(args) => handle_extract(args, ctx, output_format).await,
    }
}
