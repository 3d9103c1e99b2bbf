//! Regular-expression pattern tables used by [`super::RegexFeatureExtractor`].
//!
//! Each visual-description pattern captures the descriptive span in group 1.
//! Patterns are evaluated in table order and every match of an earlier pattern
//! precedes the matches of later ones.

use lazy_static::lazy_static;
use regex::Regex;

/// A named extraction pattern
#[derive(Debug)]
pub struct ExtractionPattern {
    /// Short identifier used in debug logs
    pub name: &'static str,
    /// Compiled expression; group 1 is the extracted span
    pub regex: Regex,
}

impl ExtractionPattern {
    fn new(name: &'static str, pattern: &str) -> Self {
        Self {
            name,
            regex: Regex::new(pattern).unwrap(),
        }
    }

    /// All group-1 captures in match order
    pub fn captures<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.regex
            .captures_iter(text)
            .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
            .collect()
    }
}

lazy_static! {
    /// One or more consecutive capitalized words
    pub static ref NAME_REGEX: Regex =
        Regex::new(r"\b[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*\b").unwrap();

    /// Alphanumeric word runs
    pub static ref WORD_REGEX: Regex = Regex::new(r"\b\w+\b").unwrap();

    /// Narrative cues that introduce a description of a photograph
    pub static ref VISUAL_PATTERNS: Vec<ExtractionPattern> = vec![
        // "One shows my mother, aged 24, sitting on the grass."
        ExtractionPattern::new(
            "shows",
            r"(?i)(?:shows?|photographs?|images?|pictures?)\s+([^.]+?)(?:\.|In this)",
        ),
        // "In this photograph, two boys stand on the pier."
        ExtractionPattern::new(
            "in_this",
            r"(?i)In this\s+(?:image|photograph|photo),\s+([^.]+?)(?:\.|He appears|Given)",
        ),
        // "Yvonne Stiles standing ..." captures the subject
        ExtractionPattern::new(
            "action_subject",
            r"([A-Z][a-z]+(?:\s+[A-Z][a-z]+)?)\s+(?:sitting|standing|holding|smiling|looking)",
        ),
        // "sitting on the grass beside a carrycot." captures the setting
        ExtractionPattern::new(
            "action_setting",
            r"(?:sitting|standing|holding)\s+(?:with|on|in|beside|a)\s+([a-z\s]+?)(?:\.|,)",
        ),
    ];

    /// Question forms that name the person a search is about
    pub static ref QUERY_NAME_PATTERNS: Vec<ExtractionPattern> = vec![
        ExtractionPattern::new("who_was", r"who was ([\w\s]+?)\??$"),
        ExtractionPattern::new("who_is", r"who is ([\w\s]+?)\??$"),
        ExtractionPattern::new("about", r"about ([\w\s]+?)\??$"),
    ];
}
