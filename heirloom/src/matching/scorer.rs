//! The photo-to-memory scorer.

use std::sync::Arc;

use super::{
    COMBINED_BONUS, EXACT_TITLE_POINTS, KEYWORD_CAP, MatchResult, NAME_CAP, PHRASE_WINDOW_POINTS,
    SignalBreakdown, VISUAL_CAP,
};
use crate::extraction::{FeatureExtractor, RegexFeatureExtractor, SCORING_KEYWORD_LIMIT};
use crate::models::PhotoMetadata;

/// Minimum description words found in the photo text for a description to count
const VISUAL_MIN_WORD_MATCHES: usize = 2;
/// Points per matched description word, and the per-description ceiling
const VISUAL_POINTS_PER_WORD: usize = 5;
const VISUAL_PER_DESCRIPTION_CAP: usize = 15;
/// Characters of the first matched description quoted in the reason
const VISUAL_REASON_CHARS: usize = 50;
/// Description words must be longer than this to be compared
const VISUAL_WORD_MIN_EXCLUSIVE_CHARS: usize = 3;
/// Description words must be longer than this to corroborate in the bonus
const BONUS_WORD_MIN_EXCLUSIVE_CHARS: usize = 4;
/// Years at most this far apart corroborate in the bonus
const BONUS_YEAR_TOLERANCE: i64 = 2;
/// Titles and title windows must be longer than this to be compared
const PHRASE_MIN_EXCLUSIVE_CHARS: usize = 10;
const PHRASE_WINDOW_WORDS: usize = 3;
const KEYWORD_POINTS_PER_MATCH: usize = 3;
/// Names and keywords quoted in a reason
const REASON_LIST_LIMIT: usize = 3;
/// Corroborating signals required for the combined bonus
const BONUS_REQUIRED_SIGNALS: usize = 3;

/// Scores photos against memories.
///
/// The scorer is stateless apart from the extractor it reads text through, so
/// one instance can be shared freely between tasks.
#[derive(Debug, Clone)]
pub struct MatchScorer {
    extractor: Arc<dyn FeatureExtractor>,
}

impl Default for MatchScorer {
    fn default() -> Self {
        Self::new(Arc::new(RegexFeatureExtractor::new()))
    }
}

impl MatchScorer {
    /// Create a scorer that reads memory text through `extractor`
    pub fn new(extractor: Arc<dyn FeatureExtractor>) -> Self {
        Self { extractor }
    }

    /// The extractor this scorer uses
    pub fn extractor(&self) -> &Arc<dyn FeatureExtractor> {
        &self.extractor
    }

    /// Score how well a photo matches a memory.
    ///
    /// # Arguments
    /// * `memory_text` - Narrative text of the memory
    /// * `memory_year` - Year of the memory, if known
    /// * `photo` - Title, description and year of the photo
    ///
    /// # Returns
    /// A score in `0..=100` and the reasons for it, in signal order
    pub fn score_photo_match(
        &self,
        memory_text: &str,
        memory_year: Option<i32>,
        photo: &PhotoMetadata,
    ) -> MatchResult {
        let mut breakdown = SignalBreakdown::default();
        let mut reasons = Vec::new();

        let photo_title = photo.title_lower();
        let photo_text = photo.searchable_text();
        let memory_lower = memory_text.to_lowercase();

        if let Some((points, reason)) = year_signal(memory_year, photo.year) {
            breakdown.year = points;
            reasons.push(reason);
        }

        let visual_descriptions = self.extractor.extract_visual_descriptions(memory_text);
        if let Some((points, reason)) = visual_signal(&visual_descriptions, &photo_text) {
            breakdown.visual = points;
            reasons.push(reason);
        }

        if let Some((points, reason)) = phrase_signal(&photo_title, &memory_lower) {
            breakdown.phrase = points;
            reasons.push(reason);
        }

        let memory_names = self.extractor.extract_names(memory_text);
        let matched_names: Vec<&str> = memory_names
            .iter()
            .map(String::as_str)
            .filter(|name| photo_text.contains(&name.to_lowercase()))
            .collect();
        if let Some((points, reason)) = name_signal(&matched_names) {
            breakdown.names = points;
            reasons.push(reason);
        }

        let keywords = self
            .extractor
            .extract_keywords(memory_text, SCORING_KEYWORD_LIMIT);
        if let Some((points, reason)) = keyword_signal(&keywords, &photo_text) {
            breakdown.keywords = points;
            reasons.push(reason);
        }

        let corroborating = [
            !matched_names.is_empty(),
            visual_words_corroborate(&visual_descriptions, &photo_text),
            years_within(memory_year, photo.year, BONUS_YEAR_TOLERANCE),
        ]
        .into_iter()
        .filter(|signal| *signal)
        .count();
        if corroborating >= BONUS_REQUIRED_SIGNALS {
            breakdown.combined_bonus = COMBINED_BONUS;
            reasons.push("Strong combined match".to_string());
        }

        MatchResult::from_parts(breakdown, reasons)
    }
}

/// Points awarded for an absolute year difference
pub(crate) fn year_points(difference: i64) -> u8 {
    match difference {
        0 => 30,
        1 => 25,
        2 => 20,
        3..=5 => 10,
        _ => 0,
    }
}

fn year_signal(memory_year: Option<i32>, photo_year: Option<i32>) -> Option<(u8, String)> {
    let (memory_year, photo_year) = (memory_year?, photo_year?);
    let difference = (i64::from(memory_year) - i64::from(photo_year)).abs();
    let points = year_points(difference);
    let reason = match difference {
        0 => format!("Exact year match: {memory_year}"),
        1 | 2 => format!("Year within {difference}: {memory_year} vs {photo_year}"),
        3..=5 => format!("Year within 5: {memory_year} vs {photo_year}"),
        _ => return None,
    };
    Some((points, reason))
}

fn years_within(memory_year: Option<i32>, photo_year: Option<i32>, tolerance: i64) -> bool {
    match (memory_year, photo_year) {
        (Some(m), Some(p)) => (i64::from(m) - i64::from(p)).abs() <= tolerance,
        _ => false,
    }
}

fn visual_signal(descriptions: &[String], photo_text: &str) -> Option<(u8, String)> {
    let mut subtotal = 0usize;
    let mut first_match: Option<&str> = None;

    for description in descriptions {
        let word_matches = description
            .split_whitespace()
            .filter(|word| word.chars().count() > VISUAL_WORD_MIN_EXCLUSIVE_CHARS)
            .filter(|word| photo_text.contains(word))
            .count();

        if word_matches >= VISUAL_MIN_WORD_MATCHES {
            subtotal += (word_matches * VISUAL_POINTS_PER_WORD).min(VISUAL_PER_DESCRIPTION_CAP);
            first_match.get_or_insert(description.as_str());
        }
    }

    let first_match = first_match?;
    let quoted: String = first_match.chars().take(VISUAL_REASON_CHARS).collect();
    let points = subtotal.min(usize::from(VISUAL_CAP)) as u8;
    Some((points, format!("Visual match: {quoted}...")))
}

fn visual_words_corroborate(descriptions: &[String], photo_text: &str) -> bool {
    descriptions
        .iter()
        .flat_map(|description| description.split_whitespace())
        .filter(|word| word.chars().count() > BONUS_WORD_MIN_EXCLUSIVE_CHARS)
        .any(|word| photo_text.contains(word))
}

fn phrase_signal(photo_title: &str, memory_lower: &str) -> Option<(u8, String)> {
    if photo_title.chars().count() <= PHRASE_MIN_EXCLUSIVE_CHARS {
        return None;
    }

    if memory_lower.contains(photo_title) {
        return Some((
            EXACT_TITLE_POINTS,
            format!("Exact title in text: '{photo_title}'"),
        ));
    }

    let words: Vec<&str> = photo_title.split_whitespace().collect();
    words
        .windows(PHRASE_WINDOW_WORDS)
        .map(|window| window.join(" "))
        .find(|phrase| {
            phrase.chars().count() > PHRASE_MIN_EXCLUSIVE_CHARS && memory_lower.contains(phrase)
        })
        .map(|phrase| {
            (
                PHRASE_WINDOW_POINTS,
                format!("Strong phrase match: '{phrase}'"),
            )
        })
}

fn name_signal(matched_names: &[&str]) -> Option<(u8, String)> {
    match matched_names {
        [] => None,
        [only] => Some((15, format!("Name: {only}"))),
        [first, second] => Some((20, format!("Two names: {first}, {second}"))),
        many => Some((
            NAME_CAP,
            format!("Multiple names: {}", many[..REASON_LIST_LIMIT].join(", ")),
        )),
    }
}

fn keyword_signal(keywords: &[String], photo_text: &str) -> Option<(u8, String)> {
    let matched: Vec<&str> = keywords
        .iter()
        .map(String::as_str)
        .filter(|keyword| photo_text.contains(keyword))
        .collect();

    if matched.is_empty() {
        return None;
    }

    let points = (matched.len() * KEYWORD_POINTS_PER_MATCH).min(usize::from(KEYWORD_CAP)) as u8;
    let listed = matched
        .iter()
        .take(REASON_LIST_LIMIT)
        .copied()
        .collect::<Vec<_>>()
        .join(", ");
    let ellipsis = if matched.len() > REASON_LIST_LIMIT { "..." } else { "" };
    Some((points, format!("Keywords: {listed}{ellipsis}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(title: &str, description: &str, year: Option<i32>) -> PhotoMetadata {
        PhotoMetadata::new(Some(title), Some(description), year)
    }

    #[test]
    fn test_year_points_table() {
        assert_eq!(year_points(0), 30);
        assert_eq!(year_points(1), 25);
        assert_eq!(year_points(2), 20);
        assert_eq!(year_points(3), 10);
        assert_eq!(year_points(5), 10);
        assert_eq!(year_points(6), 0);
        assert_eq!(year_points(400), 0);
    }

    #[test]
    fn test_year_points_never_increase_with_distance() {
        let points: Vec<u8> = (0..20).map(year_points).collect();
        assert!(points.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn test_year_signal_reasons() {
        assert_eq!(
            year_signal(Some(1986), Some(1986)),
            Some((30, "Exact year match: 1986".to_string()))
        );
        assert_eq!(
            year_signal(Some(1986), Some(1984)),
            Some((20, "Year within 2: 1986 vs 1984".to_string()))
        );
        assert_eq!(
            year_signal(Some(1986), Some(1990)),
            Some((10, "Year within 5: 1986 vs 1990".to_string()))
        );
        assert_eq!(year_signal(Some(1986), Some(1992)), None);
        assert_eq!(year_signal(None, Some(1992)), None);
        assert_eq!(year_signal(Some(i32::MAX), Some(i32::MIN)), None);
    }

    #[test]
    fn test_exact_title_beats_window() {
        let scorer = MatchScorer::default();
        let result = scorer.score_photo_match(
            "we found a long descriptive photo title here in the attic",
            None,
            &photo("A long descriptive photo title here", "", None),
        );
        assert_eq!(result.breakdown.phrase, 35);
        assert_eq!(
            result.reasons[0],
            "Exact title in text: 'a long descriptive photo title here'"
        );
    }

    #[test]
    fn test_leftmost_window_wins() {
        let result = phrase_signal(
            "wedding at st mary church in hastings",
            "after the wedding at st mary church we went home",
        );
        assert_eq!(
            result,
            Some((25, "Strong phrase match: 'wedding at st'".to_string()))
        );
    }

    #[test]
    fn test_short_title_is_ignored() {
        assert_eq!(phrase_signal("the beach", "we went to the beach"), None);
        assert_eq!(phrase_signal("", "anything"), None);
    }

    #[test]
    fn test_name_signal_tiers() {
        assert_eq!(name_signal(&[]), None);
        assert_eq!(name_signal(&["Alice"]), Some((15, "Name: Alice".into())));
        assert_eq!(
            name_signal(&["Alice", "Bob"]),
            Some((20, "Two names: Alice, Bob".into()))
        );
        assert_eq!(
            name_signal(&["Alice", "Bob", "Carol", "Dennis"]),
            Some((25, "Multiple names: Alice, Bob, Carol".into()))
        );
    }

    #[test]
    fn test_keyword_signal_caps_at_fifteen() {
        let keywords: Vec<String> = ["harbour", "boats", "fishing", "nets", "gulls", "pier"]
            .iter()
            .map(|k| k.to_string())
            .collect();
        let (points, reason) =
            keyword_signal(&keywords, "harbour boats fishing nets gulls pier").unwrap();
        assert_eq!(points, 15);
        assert_eq!(reason, "Keywords: harbour, boats, fishing...");

        let (points, reason) = keyword_signal(&keywords, "boats").unwrap();
        assert_eq!(points, 3);
        assert_eq!(reason, "Keywords: boats");
        assert_eq!(keyword_signal(&keywords, "meadow"), None);
    }

    #[test]
    fn test_visual_signal_requires_two_words() {
        let descriptions = vec!["my mother sitting on the grass".to_string()];
        assert_eq!(visual_signal(&descriptions, "mother alone"), None);

        let (points, reason) = visual_signal(&descriptions, "mother on grass").unwrap();
        assert_eq!(points, 10);
        assert_eq!(reason, "Visual match: my mother sitting on the grass...");
    }

    #[test]
    fn test_visual_signal_caps_at_forty() {
        let descriptions = vec!["grass mother carrycot".to_string(); 4];
        let (points, _) = visual_signal(&descriptions, "grass mother carrycot").unwrap();
        assert_eq!(points, 40);
    }

    #[test]
    fn test_empty_inputs_score_zero() {
        let scorer = MatchScorer::default();
        let result = scorer.score_photo_match("", None, &PhotoMetadata::default());
        assert_eq!(result.score, 0);
        assert!(result.reasons.is_empty());
    }
}
