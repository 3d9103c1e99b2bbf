//! Memory records: the narrative text a family member recorded.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier of a stored memory
pub type MemoryId = i64;

/// A recorded family memory.
///
/// Only `text` and `year` feed the photo scorer; the remaining fields are
/// carried through to search results.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Memory {
    /// Unique identifier for the memory
    pub id: MemoryId,

    /// Free-form narrative text (typed or transcribed)
    pub text: String,

    /// Year the memory refers to, if known
    #[serde(default, deserialize_with = "crate::models::year::lenient")]
    pub year: Option<i32>,

    /// Optional category such as "Childhood" or "War years"
    #[serde(default)]
    pub category: Option<String>,

    /// Structured date of the memory, if recorded
    #[serde(default)]
    pub memory_date: Option<NaiveDate>,
}

impl Memory {
    /// Create a memory with only id and text set
    pub fn new(id: MemoryId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            year: None,
            category: None,
            memory_date: None,
        }
    }

    /// Start building a memory
    pub fn builder(id: MemoryId, text: impl Into<String>) -> MemoryBuilder {
        MemoryBuilder::new(id, text)
    }

    /// Short single-line preview of the text, cut at a character boundary
    pub fn preview(&self, max_chars: usize) -> String {
        let mut preview: String = self.text.chars().take(max_chars).collect();
        if self.text.chars().count() > max_chars {
            preview.push_str("...");
        }
        preview.replace('\n', " ")
    }
}

/// Builder for [`Memory`]
#[derive(Debug, Clone)]
pub struct MemoryBuilder {
    memory: Memory,
}

impl MemoryBuilder {
    /// Create a builder for a memory with the given id and text
    pub fn new(id: MemoryId, text: impl Into<String>) -> Self {
        Self {
            memory: Memory::new(id, text),
        }
    }

    /// Set the year
    pub fn year(mut self, year: i32) -> Self {
        self.memory.year = Some(year);
        self
    }

    /// Set the category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.memory.category = Some(category.into());
        self
    }

    /// Set the structured date; also fills the year when it is still empty
    pub fn date(mut self, date: NaiveDate) -> Self {
        use chrono::Datelike;
        self.memory.memory_date = Some(date);
        if self.memory.year.is_none() {
            self.memory.year = Some(date.year());
        }
        self
    }

    /// Build the memory
    pub fn build(self) -> Memory {
        self.memory
    }
}
