//! Fixed word lists the extractors filter against.

use std::collections::HashSet;

use lazy_static::lazy_static;

lazy_static! {
    /// Capitalized words that are not names: sentence-initial function words,
    /// pronouns, honorifics, and generic place and time nouns.
    pub static ref NAME_STOPWORDS: HashSet<&'static str> = [
        "The", "And", "Or", "But", "In", "On", "At", "To", "For", "From", "With", "This",
        "That", "These", "Those", "It", "He", "She", "They", "Mr", "Mrs", "Miss", "Ms", "Dr",
        "Battle", "Hastings", "London", "England", "UK", "USA", "World", "War", "Year", "Day",
        "Month", "One", "Another", "Behind", "Given", "Fast",
    ]
    .into_iter()
    .collect();

    /// Function words dropped from keyword extraction.
    pub static ref KEYWORD_STOPWORDS: HashSet<&'static str> = [
        "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "a", "an", "is",
        "was", "were", "are", "been", "be", "have", "has", "had", "do", "does", "did", "will",
        "would", "could", "should", "may", "might", "i", "you", "he", "she", "it", "we", "they",
        "my", "your", "his", "her", "its", "our", "their", "this", "that", "these", "those", "me",
        "him", "them", "what", "which", "who", "when", "where", "why", "how",
    ]
    .into_iter()
    .collect();

    /// Question and function words ignored when matching query words.
    pub static ref QUERY_STOPWORDS: HashSet<&'static str> = [
        "who", "what", "when", "where", "why", "how", "was", "is", "are", "were", "did", "do",
        "does", "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with",
        "by", "about",
    ]
    .into_iter()
    .collect();
}
