//! Integration tests for the Heirloom CLI
//!
//! Argument parsing is checked with `Cli::try_parse_from`; handlers run
//! against a temporary JSON archive and their effects are read back through
//! the archive manager.

use clap::Parser;
use heirloom::prelude::*;
use heirloom_cli::args::{ExtractArgs, LinkArgs, LinkedArgs, SetLinksArgs};
use heirloom_cli::{error_code, load_config, run_command, Cli, Commands, HeirloomCliContext};
use tempfile::TempDir;

/// Archive with one dated memory, two photos and an audio clip
async fn create_test_context() -> (HeirloomCliContext, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("family.json");

    {
        let store = ArchiveStore::open(&path).await.expect("Failed to open archive");
        store
            .insert_memory(
                Memory::builder(1, "We took the train to Brighton and walked along the pier.")
                    .year(1962)
                    .build(),
            )
            .await
            .unwrap();
        store
            .insert_memory(Memory::builder(2, "Grandad kept bees behind the shed.").build())
            .await
            .unwrap();
        store
            .insert_media(
                MediaRecord::image(5, "a1.jpg")
                    .with_title("Brighton pier")
                    .with_year(1962),
            )
            .await
            .unwrap();
        store
            .insert_media(MediaRecord::image(6, "a2.jpg").with_year(1963))
            .await
            .unwrap();
        store
            .insert_media(
                MediaRecord::image(7, "tape.mp3")
                    .with_file_type("audio")
                    .with_year(1962),
            )
            .await
            .unwrap();
    }

    let config = ConfigBuilder::testing()
        .with_archive_file(&path)
        .build()
        .expect("Failed to build config");
    let context = HeirloomCliContext::from_config(config)
        .await
        .expect("Failed to initialize Heirloom");

    (context, temp_dir)
}

fn linked_ids(photos: &[LinkedPhoto]) -> Vec<MediaId> {
    photos.iter().map(|p| p.photo_id).collect()
}

#[test]
fn test_parse_suggest_with_threshold() {
    let cli = Cli::try_parse_from(["heirloom", "suggest", "12", "--threshold", "60"]).unwrap();

    match cli.command {
        Commands::Suggest(args) => {
            assert_eq!(args.memory_id, 12);
            assert_eq!(args.threshold, Some(60));
        }
        other => panic!("unexpected command: {:?}", other),
    }
    assert_eq!(cli.output, "table");
}

#[test]
fn test_parse_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "heirloom",
        "linked",
        "3",
        "--archive",
        "family.json",
        "--output",
        "json",
        "--quiet",
    ])
    .unwrap();

    assert_eq!(cli.archive.as_deref(), Some(std::path::Path::new("family.json")));
    assert_eq!(cli.output, "json");
    assert!(cli.quiet);
    assert!(matches!(cli.command, Commands::Linked(LinkedArgs { memory_id: 3 })));
}

#[test]
fn test_parse_set_links_comma_separated() {
    let cli = Cli::try_parse_from(["heirloom", "set-links", "4", "9,2,7"]).unwrap();

    match cli.command {
        Commands::SetLinks(args) => {
            assert_eq!(args.memory_id, 4);
            assert_eq!(args.photo_ids, vec![9, 2, 7]);
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn test_parse_auto_link_default_tolerance() {
    let cli = Cli::try_parse_from(["heirloom", "auto-link"]).unwrap();
    match cli.command {
        Commands::AutoLink(args) => assert_eq!(args.tolerance, 2),
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn test_parse_rejects_bad_input() {
    // Threshold does not fit a score
    assert!(Cli::try_parse_from(["heirloom", "suggest", "1", "--threshold", "300"]).is_err());
    // Extract needs text or a memory id, not both
    assert!(Cli::try_parse_from(["heirloom", "extract"]).is_err());
    assert!(Cli::try_parse_from(["heirloom", "extract", "text", "--memory", "1"]).is_err());
    assert!(Cli::try_parse_from(["heirloom", "apply", "1"]).is_err());
}

#[test]
fn test_load_config_archive_override() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("override.json");

    let config = load_config(Some(path.clone()), None).unwrap();
    assert_eq!(config.storage.backend, StorageBackend::Archive);
    assert_eq!(config.storage.archive_path, Some(path));
}

#[test]
fn test_load_config_missing_file_is_configuration_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = load_config(None, Some(temp_dir.path().join("absent.toml"))).unwrap_err();
    assert_eq!(error_code(&err), "CONFIGURATION_ERROR");
}

#[tokio::test]
async fn test_apply_then_linked() {
    let (ctx, _temp_dir) = create_test_context().await;

    run_command(
        Commands::Apply(LinkArgs {
            memory_id: 1,
            photo_id: 6,
        }),
        &ctx,
        "json",
    )
    .await
    .unwrap();
    // Applying twice keeps a single link
    run_command(
        Commands::Apply(LinkArgs {
            memory_id: 1,
            photo_id: 6,
        }),
        &ctx,
        "table",
    )
    .await
    .unwrap();

    let linked = ctx.manager.get_linked_photos(1).await.unwrap();
    assert_eq!(linked_ids(&linked), vec![6]);
    assert_eq!(linked[0].order, 0);
}

#[tokio::test]
async fn test_apply_unknown_ids_fail() {
    let (ctx, _temp_dir) = create_test_context().await;

    let err = run_command(
        Commands::Apply(LinkArgs {
            memory_id: 99,
            photo_id: 5,
        }),
        &ctx,
        "json",
    )
    .await
    .unwrap_err();
    assert!(matches!(err, HeirloomError::MemoryNotFound { id: 99 }));

    let err = run_command(
        Commands::Apply(LinkArgs {
            memory_id: 1,
            photo_id: 99,
        }),
        &ctx,
        "table",
    )
    .await
    .unwrap_err();
    assert_eq!(error_code(&err), "MEDIA_NOT_FOUND");
    assert!(ctx.manager.get_linked_photos(1).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_set_links_and_unlink() {
    let (ctx, _temp_dir) = create_test_context().await;

    run_command(
        Commands::SetLinks(SetLinksArgs {
            memory_id: 1,
            photo_ids: vec![6, 5],
        }),
        &ctx,
        "table",
    )
    .await
    .unwrap();
    assert_eq!(
        linked_ids(&ctx.manager.get_linked_photos(1).await.unwrap()),
        vec![6, 5]
    );

    run_command(
        Commands::Unlink(LinkArgs {
            memory_id: 1,
            photo_id: 6,
        }),
        &ctx,
        "table",
    )
    .await
    .unwrap();
    assert_eq!(
        linked_ids(&ctx.manager.get_linked_photos(1).await.unwrap()),
        vec![5]
    );
}

#[tokio::test]
async fn test_auto_link_skips_audio_and_undated() {
    let (ctx, _temp_dir) = create_test_context().await;

    let cli = Cli::try_parse_from(["heirloom", "auto-link", "--tolerance", "1"]).unwrap();
    run_command(cli.command, &ctx, "json").await.unwrap();

    assert_eq!(
        linked_ids(&ctx.manager.get_linked_photos(1).await.unwrap()),
        vec![5, 6]
    );
    assert!(ctx.manager.get_linked_photos(2).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_read_only_commands_succeed() {
    let (ctx, _temp_dir) = create_test_context().await;

    for args in [
        vec!["heirloom", "memories"],
        vec!["heirloom", "photos"],
        vec!["heirloom", "suggest", "1"],
        vec!["heirloom", "suggest-all", "--threshold", "0"],
        vec!["heirloom", "score", "1", "5"],
        vec!["heirloom", "search", "train to brighton"],
        vec!["heirloom", "extract", "Mary and John at the seaside"],
        vec!["heirloom", "extract", "--memory", "2"],
        vec!["heirloom", "version"],
    ] {
        for format in ["table", "json"] {
            let cli = Cli::try_parse_from(args.clone()).unwrap();
            run_command(cli.command, &ctx, format)
                .await
                .unwrap_or_else(|e| panic!("{:?} failed: {}", args, e));
        }
    }
}

#[tokio::test]
async fn test_unknown_memory_commands_fail() {
    let (ctx, _temp_dir) = create_test_context().await;

    let cli = Cli::try_parse_from(["heirloom", "suggest", "42"]).unwrap();
    let err = run_command(cli.command, &ctx, "json").await.unwrap_err();
    assert!(matches!(err, HeirloomError::MemoryNotFound { id: 42 }));

    let err = run_command(
        Commands::Extract(ExtractArgs {
            text: None,
            memory: Some(42),
        }),
        &ctx,
        "table",
    )
    .await
    .unwrap_err();
    assert_eq!(error_code(&err), "MEMORY_NOT_FOUND");

    let cli = Cli::try_parse_from(["heirloom", "score", "1", "42"]).unwrap();
    let err = run_command(cli.command, &ctx, "table").await.unwrap_err();
    assert!(matches!(err, HeirloomError::MediaNotFound { id: 42 }));
}
