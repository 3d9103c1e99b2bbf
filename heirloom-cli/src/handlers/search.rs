use serde_json::json;

use crate::args::SearchArgs;
use crate::context::HeirloomCliContext;
use crate::output::{print_json, print_search_hits};

pub async fn handle_search(
    args: SearchArgs,
    ctx: &HeirloomCliContext,
    output_format: &str,
) -> heirloom::Result<()> {
    let hits = ctx
        .manager
        .search_memories(&args.query, args.threshold)
        .await?;

    if output_format == "json" {
        print_json(&json!({
            "query": args.query,
            "results": hits,
        }));
    } else {
        print_search_hits(&args.query, &hits);
    }
    Ok(())
}
