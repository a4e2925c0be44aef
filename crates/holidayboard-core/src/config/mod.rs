//! Holiday list loading.
//!
//! A holiday list is a JSON document with a `holiday` array of definitions
//! and an optional `pattern` array of color lists:
//!
//! ```json
//! {
//!   "pattern": [["#FF0000", "#FFFFFF"]],
//!   "holiday": [
//!     { "name": "Valentine's Day", "type": 0, "pattern": 0,
//!       "leadInDays": 3, "leadOutDays": 0, "month": 1, "date": 14 }
//!   ]
//! }
//! ```
//!
//! `type` selects the rule: 0 fixed date, 1 nth weekday of month, 2 offset
//! from another holiday (`referenceHoliday` by name), 3 weekday relative to
//! a date, 4 Easter. Months are 0-based and weekdays count from Sunday = 0.
//!
//! Loading happens in two passes so an offset may name a holiday defined
//! further down. What to do with a malformed definition is the caller's
//! choice through `LoadPolicy`.

pub mod error;
mod parser;
pub mod pattern;
pub mod reader;

pub use error::{ColorError, ConfigError};
pub use pattern::{Color, Pattern};

use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::holiday::{Holiday, HolidayRegistry};

/// What to do with a definition that fails validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadPolicy {
    /// The first malformed definition aborts loading.
    #[default]
    Strict,
    /// Malformed definitions are dropped and listed in `HolidayFile::skipped`.
    SkipInvalid,
}

/// A definition dropped under `LoadPolicy::SkipInvalid`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedDefinition {
    /// Position in the `holiday` array.
    pub index: usize,
    pub reason: String,
}

/// Loaded holiday list: the registry plus the patterns it refers to.
#[derive(Debug, Clone)]
pub struct HolidayFile {
    pub registry: HolidayRegistry,
    pub patterns: Vec<Pattern>,
    pub skipped: Vec<SkippedDefinition>,
}

impl HolidayFile {
    /// Read and load a holiday list from disk.
    ///
    /// # Errors
    /// Returns `ConfigError` for unreadable files, invalid JSON, or (under
    /// `LoadPolicy::Strict`) the first malformed definition.
    pub fn open(path: &Path, policy: LoadPolicy) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), bytes = text.len(), "read holiday list");
        Self::from_json_str(&text, policy)
    }

    /// Load a holiday list from JSON text.
    ///
    /// # Examples
    /// ```
    /// use holidayboard_core::config::{HolidayFile, LoadPolicy};
    ///
    /// let file = HolidayFile::from_json_str(
    ///     r#"{ "holiday": [
    ///         { "type": 4, "leadInDays": 7 },
    ///         { "name": "Mardi Gras", "type": 2, "referenceHoliday": "Easter", "offset": -47 }
    ///     ] }"#,
    ///     LoadPolicy::Strict,
    /// )?;
    /// let id = file.registry.find("Mardi Gras").unwrap();
    /// assert_eq!(file.registry.resolve(id, 2024)?.to_string(), "2024-02-13");
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_json_str(text: &str, policy: LoadPolicy) -> Result<Self, ConfigError> {
        let root: Value = serde_json::from_str(text)?;
        Self::from_value(&root, policy)
    }

    pub fn from_value(root: &Value, policy: LoadPolicy) -> Result<Self, ConfigError> {
        let patterns = parser::parse_patterns(root)?;
        debug!(count = patterns.len(), "loaded patterns");

        let definitions = root
            .get("holiday")
            .and_then(Value::as_array)
            .ok_or(ConfigError::MissingSection { field: "holiday" })?;

        let mut skipped = Vec::new();
        let mut drafts = Vec::with_capacity(definitions.len());
        for (index, definition) in definitions.iter().enumerate() {
            match parser::parse_definition(index, definition, patterns.len()) {
                Ok(draft) => drafts.push(draft),
                Err(err) if policy == LoadPolicy::SkipInvalid => {
                    skipped.push(SkippedDefinition {
                        index,
                        reason: err.to_string(),
                    });
                }
                Err(err) => return Err(err),
            }
        }

        let registry = parser::build_registry(drafts, policy, &mut skipped)?;
        skipped.sort_by_key(|entry| entry.index);
        debug!(
            loaded = registry.len(),
            skipped = skipped.len(),
            "loaded holiday definitions"
        );

        Ok(Self {
            registry,
            patterns,
            skipped,
        })
    }

    /// Pattern assigned to `holiday`, if any.
    pub fn pattern_for(&self, holiday: &Holiday) -> Option<&Pattern> {
        holiday
            .pattern
            .and_then(|pattern| self.patterns.get(pattern.index()))
    }
}
