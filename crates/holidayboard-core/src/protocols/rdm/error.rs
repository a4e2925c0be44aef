use thiserror::Error;

/// Errors returned by RDM UID parsing and frame assembly.
///
/// # Examples
/// ```
/// use holidayboard_core::protocols::rdm::{DeviceUid, RdmError};
///
/// let err = DeviceUid::parse("--:--").unwrap_err();
/// assert!(matches!(err, RdmError::EmptyInput { .. }));
/// assert!(err.to_string().contains("no hexadecimal digits"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RdmError {
    #[error("empty UID: no hexadecimal digits in '{input}'")]
    EmptyInput { input: String },
    #[error("parameter data too large: {length} bytes (max {max})")]
    PayloadTooLarge { length: usize, max: usize },
    #[error("{field} out of range: {value} (max {max})")]
    FieldOutOfRange {
        field: &'static str,
        value: u64,
        max: u64,
    },
    #[error("unknown command class: {value:#04x}")]
    UnknownCommandClass { value: u8 },
}
