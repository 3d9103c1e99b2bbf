use heirloom::prelude::*;
use serde_json::json;
use tracing::debug;

use crate::args::{ScoreArgs, SuggestAllArgs, SuggestArgs};
use crate::context::HeirloomCliContext;
use crate::output::{print_all_suggestions, print_json, print_match, print_suggestions};

pub async fn handle_suggest(
    args: SuggestArgs,
    ctx: &HeirloomCliContext,
    output_format: &str,
) -> heirloom::Result<()> {
    let outcome = ctx
        .manager
        .suggest_for_memory(args.memory_id, args.threshold)
        .await?;

    if outcome.is_memory_not_found() {
        return Err(HeirloomError::MemoryNotFound { id: args.memory_id });
    }

    let suggestions = outcome.into_suggestions();
    debug!(
        memory_id = args.memory_id,
        count = suggestions.len(),
        "Suggestions ranked"
    );

    if output_format == "json" {
        print_json(&json!({
            "memory_id": args.memory_id,
            "suggestions": suggestions,
        }));
    } else {
        print_suggestions(args.memory_id, &suggestions);
    }
    Ok(())
}

pub async fn handle_suggest_all(
    args: SuggestAllArgs,
    ctx: &HeirloomCliContext,
    output_format: &str,
) -> heirloom::Result<()> {
    let all = ctx.manager.suggest_all_memories(args.threshold).await?;

    if output_format == "json" {
        print_json(&all);
    } else {
        print_all_suggestions(&all);
    }
    Ok(())
}

pub async fn handle_score(
    args: ScoreArgs,
    ctx: &HeirloomCliContext,
    output_format: &str,
) -> heirloom::Result<()> {
    let store = ctx.manager.store();
    let memory = store
        .get_memory(args.memory_id)
        .await?
        .ok_or(HeirloomError::MemoryNotFound { id: args.memory_id })?;
    let photo = store
        .get_media(args.photo_id)
        .await?
        .ok_or(HeirloomError::MediaNotFound { id: args.photo_id })?;

    let result = ctx
        .manager
        .score_photo_match(&memory.text, memory.year, &photo.metadata());

    if output_format == "json" {
        print_json(&json!({
            "memory_id": args.memory_id,
            "photo_id": args.photo_id,
            "score": result.score,
            "reasons": result.reasons,
            "breakdown": result.breakdown,
        }));
    } else {
        print_match(args.memory_id, args.photo_id, &result);
    }
    Ok(())
}
