use heirloom::prelude::*;

use crate::args::ExtractArgs;
use crate::context::HeirloomCliContext;
use crate::output::{print_features, print_json, print_media_list, print_memory_list};

pub async fn handle_memories(ctx: &HeirloomCliContext, output_format: &str) -> heirloom::Result<()> {
    let mut memories = ctx.manager.store().list_memories().await?;
    // Newest first, undated last
    memories.sort_by(|a, b| b.year.cmp(&a.year).then(a.id.cmp(&b.id)));

    if output_format == "json" {
        print_json(&memories);
    } else {
        print_memory_list(&memories);
    }
    Ok(())
}

pub async fn handle_photos(ctx: &HeirloomCliContext, output_format: &str) -> heirloom::Result<()> {
    let mut media = ctx.manager.store().list_media().await?;
    media.sort_by(|a, b| b.year.cmp(&a.year).then(a.id.cmp(&b.id)));

    if output_format == "json" {
        print_json(&media);
    } else {
        print_media_list(&media);
    }
    Ok(())
}

pub async fn handle_extract(
    args: ExtractArgs,
    ctx: &HeirloomCliContext,
    output_format: &str,
) -> heirloom::Result<()> {
    let features = match (args.memory, args.text) {
        (Some(memory_id), _) => ctx
            .manager
            .describe_memory_features(memory_id)
            .await?
            .ok_or(HeirloomError::MemoryNotFound { id: memory_id })?,
        (None, Some(text)) => ctx.manager.extract_features(&text),
        (None, None) => {
            return Err(HeirloomError::Other(
                "Provide text to analyse or --memory <ID>".to_string(),
            ))
        }
    };

    if output_format == "json" {
        print_json(&features);
    } else {
        print_features(&features);
    }
    Ok(())
}
