use heirloom::prelude::*;
use serde_json::json;
use tracing::info;

use crate::args::{AutoLinkArgs, LinkArgs, LinkedArgs, SetLinksArgs};
use crate::context::HeirloomCliContext;
use crate::output::{
    format_success, format_warning, print_auto_links, print_json, print_link_outcome,
    print_linked_photos,
};

pub async fn handle_apply(
    args: LinkArgs,
    ctx: &HeirloomCliContext,
    output_format: &str,
) -> heirloom::Result<()> {
    let outcome = ctx
        .manager
        .apply_suggestion(args.memory_id, args.photo_id)
        .await?;

    match outcome {
        LinkOutcome::MemoryNotFound => {
            return Err(HeirloomError::MemoryNotFound { id: args.memory_id })
        }
        LinkOutcome::MediaNotFound => return Err(HeirloomError::MediaNotFound { id: args.photo_id }),
        LinkOutcome::Linked { .. } | LinkOutcome::AlreadyLinked => {}
    }

    if output_format == "json" {
        print_json(&json!({
            "memory_id": args.memory_id,
            "photo_id": args.photo_id,
            "outcome": outcome,
        }));
    } else {
        print_link_outcome(args.memory_id, args.photo_id, &outcome);
    }
    Ok(())
}

pub async fn handle_unlink(
    args: LinkArgs,
    ctx: &HeirloomCliContext,
    output_format: &str,
) -> heirloom::Result<()> {
    let removed = ctx
        .manager
        .unlink_photo(args.memory_id, args.photo_id)
        .await?;

    if output_format == "json" {
        print_json(&json!({
            "memory_id": args.memory_id,
            "photo_id": args.photo_id,
            "removed": removed,
        }));
    } else if removed {
        println!(
            "{}",
            format_success(&format!(
                "Unlinked photo {} from memory {}",
                args.photo_id, args.memory_id
            ))
        );
    } else {
        println!(
            "{}",
            format_warning(&format!(
                "Photo {} was not linked to memory {}",
                args.photo_id, args.memory_id
            ))
        );
    }
    Ok(())
}

pub async fn handle_linked(
    args: LinkedArgs,
    ctx: &HeirloomCliContext,
    output_format: &str,
) -> heirloom::Result<()> {
    let photos = ctx.manager.get_linked_photos(args.memory_id).await?;

    if output_format == "json" {
        print_json(&json!({
            "memory_id": args.memory_id,
            "photos": photos,
        }));
    } else {
        print_linked_photos(args.memory_id, &photos);
    }
    Ok(())
}

pub async fn handle_set_links(
    args: SetLinksArgs,
    ctx: &HeirloomCliContext,
    output_format: &str,
) -> heirloom::Result<()> {
    ctx.manager
        .set_linked_photos(args.memory_id, args.photo_ids.clone())
        .await?;
    info!(
        memory_id = args.memory_id,
        count = args.photo_ids.len(),
        "Replaced linked photos"
    );

    let photos = ctx.manager.get_linked_photos(args.memory_id).await?;
    if output_format == "json" {
        print_json(&json!({
            "memory_id": args.memory_id,
            "photos": photos,
        }));
    } else {
        println!(
            "{}",
            format_success(&format!(
                "Linked {} photo(s) to memory {}",
                photos.len(),
                args.memory_id
            ))
        );
        print_linked_photos(args.memory_id, &photos);
    }
    Ok(())
}

pub async fn handle_auto_link(
    args: AutoLinkArgs,
    ctx: &HeirloomCliContext,
    output_format: &str,
) -> heirloom::Result<()> {
    let links = ctx.manager.auto_link_by_year(args.tolerance).await?;

    if output_format == "json" {
        print_json(&json!({
            "tolerance": args.tolerance,
            "linked": links,
        }));
    } else {
        print_auto_links(&links);
    }
    Ok(())
}
