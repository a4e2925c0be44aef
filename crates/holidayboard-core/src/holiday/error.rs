use thiserror::Error;

use crate::calendar::DateRuleError;

/// Errors returned while registering or resolving holidays.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HolidayError {
    #[error(transparent)]
    DateRule(#[from] DateRuleError),
    #[error("cyclic holiday reference detected at '{name}'")]
    CyclicReference { name: String },
    #[error("unknown holiday id: {id}")]
    UnknownHoliday { id: usize },
    #[error("duplicate holiday name: '{name}'")]
    DuplicateName { name: String },
}

impl HolidayError {
    /// True when the holiday simply has no date in the requested year
    /// (a February 29 rule in a common year).
    pub fn is_nonexistent_date(&self) -> bool {
        matches!(
            self,
            HolidayError::DateRule(DateRuleError::NonexistentDate { .. })
        )
    }
}
