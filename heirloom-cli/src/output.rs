use std::collections::BTreeMap;

use colored::*;
use heirloom::prelude::*;
use serde::Serialize;
use serde_json::json;

pub struct CliColors;

impl CliColors {
    pub fn success() -> Color {
        Color::TrueColor {
            r: 34,
            g: 197,
            b: 94,
        }
    }

    pub fn error() -> Color {
        Color::TrueColor {
            r: 239,
            g: 68,
            b: 68,
        }
    }

    pub fn warning() -> Color {
        Color::TrueColor {
            r: 245,
            g: 158,
            b: 11,
        }
    }

    pub fn info() -> Color {
        Color::TrueColor {
            r: 59,
            g: 130,
            b: 246,
        }
    }

    pub fn accent() -> Color {
        Color::TrueColor {
            r: 168,
            g: 85,
            b: 247,
        }
    }

    pub fn muted() -> Color {
        Color::TrueColor {
            r: 156,
            g: 163,
            b: 175,
        }
    }
}

/// Stable machine-readable code for an error
pub fn error_code(error: &HeirloomError) -> &'static str {
    match error {
        HeirloomError::Storage(_) => "STORAGE_ERROR",
        HeirloomError::Configuration(_) => "CONFIGURATION_ERROR",
        HeirloomError::Logging(_) => "LOGGING_ERROR",
        HeirloomError::MemoryNotFound { .. } => "MEMORY_NOT_FOUND",
        HeirloomError::MediaNotFound { .. } => "MEDIA_NOT_FOUND",
        HeirloomError::Other(_) => "OTHER_ERROR",
    }
}

/// Output a HeirloomError in structured JSON format
pub fn output_error_json(error: &HeirloomError, output_format: &str) {
    if output_format == "json" {
        let details = match error {
            HeirloomError::MemoryNotFound { id } => Some(json!({ "memory_id": id })),
            HeirloomError::MediaNotFound { id } => Some(json!({ "photo_id": id })),
            _ => None,
        };

        let mut error_response = json!({
            "error": true,
            "code": error_code(error),
            "message": error.to_string(),
            "timestamp": chrono::Utc::now().to_rfc3339()
        });

        if let Some(details) = details {
            error_response["details"] = details;
        }

        eprintln!(
            "{}",
            serde_json::to_string_pretty(&error_response).unwrap_or_else(|_| "{}".to_string())
        );
    } else {
        eprintln!("{}", format_error(&error.to_string()));
    }
}

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    );
}

pub fn format_success(msg: &str) -> String {
    format!(
        "{} {}",
        "✓".color(CliColors::success()).bold(),
        msg.color(CliColors::success())
    )
}

pub fn format_error(msg: &str) -> String {
    format!(
        "{} {}",
        "✗".color(CliColors::error()).bold(),
        msg.color(CliColors::error())
    )
}

pub fn format_warning(msg: &str) -> String {
    format!(
        "{} {}",
        "⚠".color(CliColors::warning()).bold(),
        msg.color(CliColors::warning())
    )
}

pub fn format_info(msg: &str) -> String {
    format!(
        "{} {}",
        "ℹ".color(CliColors::info()).bold(),
        msg.color(CliColors::info())
    )
}

/// Match score coloured by strength
pub fn format_score(score: u8) -> ColoredString {
    let text = format!("{:>3}", score);
    match score {
        70..=u8::MAX => text.color(CliColors::success()).bold(),
        50..=69 => text.color(CliColors::warning()),
        _ => text.color(CliColors::muted()),
    }
}

pub fn format_relevance(relevance: f64) -> ColoredString {
    let text = format!("{:>6.2}", relevance);
    if relevance >= 70.0 {
        text.color(CliColors::success()).bold()
    } else if relevance >= 30.0 {
        text.color(CliColors::warning())
    } else {
        text.color(CliColors::muted())
    }
}

fn format_year(year: Option<i32>) -> String {
    year.map(|y| y.to_string()).unwrap_or_else(|| "N/A".to_string())
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{}...", cut)
    }
}

pub fn print_suggestions(memory_id: MemoryId, suggestions: &[Suggestion]) {
    if suggestions.is_empty() {
        println!(
            "{}",
            format_info(&format!("No photo suggestions for memory {}", memory_id))
        );
        return;
    }

    println!(
        "{}",
        format!("━━━ Suggestions for memory {} ━━━", memory_id)
            .color(CliColors::accent())
            .bold()
    );
    for suggestion in suggestions {
        println!(
            "{}  {} {}  {}",
            format_score(suggestion.score),
            "#".color(CliColors::muted()),
            suggestion.photo_id.to_string().color(CliColors::accent()),
            truncate(&suggestion.title, 40).bold()
        );
        println!(
            "     {}",
            suggestion.reason.color(CliColors::muted())
        );
    }
}

pub fn print_all_suggestions(all: &BTreeMap<MemoryId, Vec<Suggestion>>) {
    if all.is_empty() {
        println!("{}", format_info("No memories have photo suggestions"));
        return;
    }
    for (memory_id, suggestions) in all {
        print_suggestions(*memory_id, suggestions);
        println!();
    }
}

pub fn print_match(memory_id: MemoryId, photo_id: MediaId, result: &MatchResult) {
    println!(
        "{}",
        format!("━━━ Memory {} vs photo {} ━━━", memory_id, photo_id)
            .color(CliColors::accent())
            .bold()
    );
    println!("{}: {}", "Score".color(CliColors::muted()), format_score(result.score));

    let breakdown = &result.breakdown;
    let rows = [
        ("Year", breakdown.year),
        ("Visual", breakdown.visual),
        ("Phrase", breakdown.phrase),
        ("Names", breakdown.names),
        ("Keywords", breakdown.keywords),
        ("Combined bonus", breakdown.combined_bonus),
    ];
    for (label, points) in rows {
        println!("  {:<16} {:>3}", label.color(CliColors::muted()), points);
    }

    if !result.reasons.is_empty() {
        println!("{}:", "Reasons".color(CliColors::muted()));
        for reason in &result.reasons {
            println!("  - {}", reason);
        }
    }
}

pub fn print_link_outcome(memory_id: MemoryId, photo_id: MediaId, outcome: &LinkOutcome) {
    let line = match outcome {
        LinkOutcome::Linked { display_order } => format_success(&format!(
            "Linked photo {} to memory {} at position {}",
            photo_id, memory_id, display_order
        )),
        LinkOutcome::AlreadyLinked => format_warning(&format!(
            "Photo {} is already linked to memory {}",
            photo_id, memory_id
        )),
        LinkOutcome::MemoryNotFound => format_error(&format!("Memory {} not found", memory_id)),
        LinkOutcome::MediaNotFound => format_error(&format!("Photo {} not found", photo_id)),
    };
    println!("{}", line);
}

pub fn print_linked_photos(memory_id: MemoryId, photos: &[LinkedPhoto]) {
    if photos.is_empty() {
        println!(
            "{}",
            format_info(&format!("No photos linked to memory {}", memory_id))
        );
        return;
    }

    println!(
        "{}",
        format!("━━━ Photos for memory {} ━━━", memory_id)
            .color(CliColors::accent())
            .bold()
    );
    println!(
        "{:<7} {:<10} {:<30} {}",
        "Order".bold(),
        "Photo ID".bold(),
        "Title".bold(),
        "Filename".bold()
    );
    for photo in photos {
        let title = photo.title.as_deref().unwrap_or("(no title)");
        println!(
            "{:<7} {:<10} {:<30} {}",
            photo.order,
            photo.photo_id,
            truncate(title, 28),
            photo.filename.color(CliColors::muted())
        );
    }
}

pub fn print_auto_links(links: &BTreeMap<MemoryId, Vec<MediaId>>) {
    if links.is_empty() {
        println!("{}", format_info("No memories had photos within the year tolerance"));
        return;
    }
    for (memory_id, photo_ids) in links {
        let ids: Vec<String> = photo_ids.iter().map(|id| id.to_string()).collect();
        println!(
            "{}",
            format_success(&format!(
                "Memory {}: linked {} photo(s): {}",
                memory_id,
                photo_ids.len(),
                ids.join(", ")
            ))
        );
    }
}

pub fn print_search_hits(query: &str, hits: &[SearchHit]) {
    if hits.is_empty() {
        println!(
            "{}",
            format_info(&format!("No memories match \"{}\"", query))
        );
        return;
    }

    println!(
        "{}",
        format!("━━━ {} result(s) for \"{}\" ━━━", hits.len(), query)
            .color(CliColors::accent())
            .bold()
    );
    for hit in hits {
        println!(
            "{}  {} {}  {}",
            format_relevance(hit.relevance_score),
            "#".color(CliColors::muted()),
            hit.memory_id.to_string().color(CliColors::accent()),
            format_year(hit.year).color(CliColors::muted())
        );
        println!("        {}", truncate(&hit.text, 80));
        if !hit.people.is_empty() {
            println!(
                "        {}: {}",
                "People".color(CliColors::muted()),
                hit.people.join(", ")
            );
        }
    }
}

pub fn print_features(features: &TextFeatures) {
    println!("{}", "━━━ Extracted features ━━━".color(CliColors::accent()).bold());

    let list = |items: &[String]| {
        if items.is_empty() {
            "(none)".color(CliColors::muted()).to_string()
        } else {
            items.join(", ")
        }
    };

    println!("{}: {}", "Names".color(CliColors::muted()), list(&features.names));
    println!("{}: {}", "Keywords".color(CliColors::muted()), list(&features.keywords));
    println!("{}:", "Visual descriptions".color(CliColors::muted()));
    if features.visual_descriptions.is_empty() {
        println!("  {}", "(none)".color(CliColors::muted()));
    }
    for description in &features.visual_descriptions {
        println!("  - {}", description);
    }
}

pub fn print_memory_list(memories: &[Memory]) {
    if memories.is_empty() {
        println!("{}", format_info("The archive has no memories"));
        return;
    }

    println!(
        "{:<6} {:<6} {:<15} {}",
        "ID".bold(),
        "Year".bold(),
        "Category".bold(),
        "Text".bold()
    );
    for memory in memories {
        let category = memory.category.as_deref().unwrap_or("Uncategorized");
        println!(
            "{:<6} {:<6} {:<15} {}",
            memory.id.to_string().color(CliColors::accent()),
            format_year(memory.year),
            truncate(category, 15),
            memory.preview(60)
        );
    }
}

pub fn print_media_list(media: &[MediaRecord]) {
    if media.is_empty() {
        println!("{}", format_info("The archive has no media"));
        return;
    }

    println!(
        "{:<6} {:<6} {:<8} {:<30} {}",
        "ID".bold(),
        "Year".bold(),
        "Type".bold(),
        "Title".bold(),
        "Filename".bold()
    );
    for item in media {
        let title = item.title.as_deref().unwrap_or("(no title)");
        println!(
            "{:<6} {:<6} {:<8} {:<30} {}",
            item.id.to_string().color(CliColors::accent()),
            format_year(item.year),
            item.file_type,
            truncate(title, 28),
            item.original_filename
                .as_deref()
                .unwrap_or(&item.filename)
                .color(CliColors::muted())
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes_are_stable() {
        assert_eq!(
            error_code(&HeirloomError::MemoryNotFound { id: 3 }),
            "MEMORY_NOT_FOUND"
        );
        assert_eq!(
            error_code(&HeirloomError::MediaNotFound { id: 3 }),
            "MEDIA_NOT_FOUND"
        );
        assert_eq!(
            error_code(&HeirloomError::Storage("disk".into())),
            "STORAGE_ERROR"
        );
        assert_eq!(
            error_code(&HeirloomError::Configuration("bad".into())),
            "CONFIGURATION_ERROR"
        );
        assert_eq!(error_code(&HeirloomError::Other("x".into())), "OTHER_ERROR");
    }

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("Grandmère's garden", 9), "Grandmère...");
    }
}
