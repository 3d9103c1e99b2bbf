use crate::extraction::FeatureExtractor;
use crate::extraction::stopwords::QUERY_STOPWORDS;

/// Characters dropped from the end of a query before phrase matching
const TRAILING_PUNCTUATION: &[char] = &['?', '!', '.', ',', ';', ':'];

/// Question openings removed from the front of the phrase, longest first.
/// Articles and prepositions stay part of the phrase.
const QUESTION_LEAD_INS: &[&str] = &["tell me about", "who was", "who is", "about"];

/// A search query broken into the parts the relevance policy compares.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedQuery {
    /// Lowercased query without trailing punctuation or a leading question
    /// opening; "Who was Peter Elgar?" becomes "peter elgar" while
    /// "in the war" stays whole
    pub core: String,

    /// Lowercased query words that are not stopwords, duplicates kept
    pub words: Vec<String>,

    /// Person names asked about, lowercased
    pub names: Vec<String>,
}

impl ParsedQuery {
    /// Parse `query`, or `None` when it is blank
    pub fn parse(query: &str, extractor: &dyn FeatureExtractor) -> Option<Self> {
        let lowered = query.trim().to_lowercase();
        if lowered.is_empty() {
            return None;
        }

        let trimmed = lowered
            .trim_end_matches(|c: char| TRAILING_PUNCTUATION.contains(&c) || c.is_whitespace());
        let core = strip_lead_in(trimmed)
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");

        let words = lowered
            .split_whitespace()
            .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()))
            .filter(|word| !word.is_empty() && !QUERY_STOPWORDS.contains(word))
            .map(str::to_string)
            .collect();

        Some(Self {
            core,
            words,
            names: extractor.extract_query_names(query),
        })
    }
}

fn strip_lead_in(query: &str) -> &str {
    for lead_in in QUESTION_LEAD_INS {
        if let Some(rest) = query.strip_prefix(lead_in) {
            if rest.is_empty() || rest.starts_with(char::is_whitespace) {
                return rest.trim_start();
            }
        }
    }
    query
}
