//! Match results and their per-signal breakdown.

use serde::{Deserialize, Serialize};

use super::MAX_SCORE;

/// Points contributed by each signal, after its own cap
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignalBreakdown {
    pub year: u8,
    pub visual: u8,
    pub phrase: u8,
    pub names: u8,
    pub keywords: u8,
    pub combined_bonus: u8,
}

impl SignalBreakdown {
    /// Sum of all contributions, clamped to the score range
    pub fn total(&self) -> u8 {
        let sum = u16::from(self.year)
            + u16::from(self.visual)
            + u16::from(self.phrase)
            + u16::from(self.names)
            + u16::from(self.keywords)
            + u16::from(self.combined_bonus);
        sum.min(u16::from(MAX_SCORE)) as u8
    }
}

/// The outcome of scoring one photo against one memory
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResult {
    /// Final score in `0..=100`
    pub score: u8,

    /// Human-readable reasons, in signal evaluation order
    pub reasons: Vec<String>,

    /// Contribution of each signal
    pub breakdown: SignalBreakdown,
}

impl MatchResult {
    pub(crate) fn from_parts(breakdown: SignalBreakdown, reasons: Vec<String>) -> Self {
        Self {
            score: breakdown.total(),
            reasons,
            breakdown,
        }
    }

    /// Reasons joined for display, or "Potential match" when none fired
    pub fn summary(&self) -> String {
        if self.reasons.is_empty() {
            "Potential match".to_string()
        } else {
            self.reasons.join(" | ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_is_clamped() {
        let breakdown = SignalBreakdown {
            year: 30,
            visual: 40,
            phrase: 35,
            names: 25,
            keywords: 15,
            combined_bonus: 10,
        };
        assert_eq!(breakdown.total(), 100);
        assert_eq!(SignalBreakdown::default().total(), 0);
    }

    #[test]
    fn test_summary() {
        let result = MatchResult::from_parts(
            SignalBreakdown {
                year: 30,
                ..Default::default()
            },
            vec!["Exact year match: 1986".into(), "Name: Alice".into()],
        );
        assert_eq!(result.score, 30);
        assert_eq!(result.summary(), "Exact year match: 1986 | Name: Alice");
        assert_eq!(MatchResult::default().summary(), "Potential match");
    }
}
