use std::fmt;
use std::str::FromStr;

use super::error::RdmError;
use super::layout;

const UID_HEX_DIGITS: usize = layout::UID_LEN * 2;

/// 48-bit RDM device identifier: 16-bit manufacturer ID, 32-bit device ID.
///
/// Displays in canonical form, 12 upper-case hexadecimal digits.
///
/// # Examples
/// ```
/// use holidayboard_core::protocols::rdm::DeviceUid;
///
/// let uid = DeviceUid::parse("4c55:0000002a")?;
/// assert_eq!(uid.manufacturer_id(), 0x4C55);
/// assert_eq!(uid.device_id(), 0x2A);
/// assert_eq!(uid.to_string(), "4C550000002A");
/// # Ok::<(), holidayboard_core::protocols::rdm::RdmError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DeviceUid(u64);

impl DeviceUid {
    const MASK: u64 = 0xFFFF_FFFF_FFFF;

    pub const fn new(manufacturer_id: u16, device_id: u32) -> Self {
        Self(((manufacturer_id as u64) << 32) | device_id as u64)
    }

    /// Keeps the low 48 bits of `value`.
    pub const fn from_u64(value: u64) -> Self {
        Self(value & Self::MASK)
    }

    pub const fn as_u64(self) -> u64 {
        self.0
    }

    pub const fn manufacturer_id(self) -> u16 {
        (self.0 >> 32) as u16
    }

    pub const fn device_id(self) -> u32 {
        self.0 as u32
    }

    /// Broadcast to every device regardless of manufacturer.
    pub const fn broadcast_all() -> Self {
        Self(Self::MASK)
    }

    /// Broadcast to every device of one manufacturer.
    pub const fn manufacturer_broadcast(manufacturer_id: u16) -> Self {
        Self::new(manufacturer_id, u32::MAX)
    }

    pub const fn is_broadcast(self) -> bool {
        self.device_id() == u32::MAX
    }

    /// Parse a UID from loosely formatted text.
    ///
    /// Every non-hexadecimal character is dropped, the rest is upper-cased,
    /// left-padded with zeros to 12 digits and truncated to the first 12.
    ///
    /// # Errors
    /// Returns `RdmError::EmptyInput` when no hexadecimal digit remains.
    pub fn parse(text: &str) -> Result<Self, RdmError> {
        let digits: String = text
            .chars()
            .filter(char::is_ascii_hexdigit)
            .map(|c| c.to_ascii_uppercase())
            .collect();
        if digits.is_empty() {
            return Err(RdmError::EmptyInput {
                input: text.to_string(),
            });
        }

        let canonical = format!("{digits:0>width$}", width = UID_HEX_DIGITS);
        let value = canonical
            .chars()
            .take(UID_HEX_DIGITS)
            .filter_map(|c| c.to_digit(16))
            .fold(0u64, |acc, digit| (acc << 4) | u64::from(digit));
        Ok(Self(value))
    }

    /// Big-endian wire representation.
    pub fn to_bytes(self) -> [u8; layout::UID_LEN] {
        let bytes = self.0.to_be_bytes();
        let mut out = [0u8; layout::UID_LEN];
        out.copy_from_slice(&bytes[8 - layout::UID_LEN..]);
        out
    }

    pub fn from_bytes(bytes: [u8; layout::UID_LEN]) -> Self {
        let value = bytes
            .iter()
            .fold(0u64, |acc, byte| (acc << 8) | u64::from(*byte));
        Self(value)
    }
}

impl fmt::Display for DeviceUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:012X}", self.0)
    }
}

impl FromStr for DeviceUid {
    type Err = RdmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Parameter data of a DISC_UNIQUE_BRANCH command: lower bound, then upper bound.
pub fn discovery_range(lower: DeviceUid, upper: DeviceUid) -> [u8; layout::UID_LEN * 2] {
    let mut out = [0u8; layout::UID_LEN * 2];
    out[..layout::UID_LEN].copy_from_slice(&lower.to_bytes());
    out[layout::UID_LEN..].copy_from_slice(&upper.to_bytes());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_pads_short_input() {
        let uid = DeviceUid::parse("ab:cd").unwrap();
        assert_eq!(uid.as_u64(), 0xABCD);
        assert_eq!(uid.to_string(), "00000000ABCD");
        assert_eq!(DeviceUid::parse("00000000ABCD").unwrap(), uid);
    }

    #[test]
    fn parse_truncates_long_input() {
        let uid = DeviceUid::parse("0x1234-5678-9ABC-DEF0").unwrap();
        // "0x" contributes a leading zero digit; 'x' is dropped.
        assert_eq!(uid.to_string(), "0123456789AB");
    }

    #[test]
    fn parse_rejects_input_without_hex_digits() {
        assert_eq!(
            DeviceUid::parse(""),
            Err(RdmError::EmptyInput {
                input: String::new()
            })
        );
        assert!(matches!(
            "zz-zz".parse::<DeviceUid>(),
            Err(RdmError::EmptyInput { .. })
        ));
    }

    #[test]
    fn bytes_are_big_endian() {
        let uid = DeviceUid::new(0x4C55, 0x0102_0304);
        assert_eq!(uid.to_bytes(), [0x4C, 0x55, 0x01, 0x02, 0x03, 0x04]);
        assert_eq!(DeviceUid::from_bytes(uid.to_bytes()), uid);
    }

    #[test]
    fn broadcast_uids() {
        assert_eq!(DeviceUid::broadcast_all().to_string(), "FFFFFFFFFFFF");
        let broadcast = DeviceUid::manufacturer_broadcast(0x4C55);
        assert_eq!(broadcast.to_string(), "4C55FFFFFFFF");
        assert!(broadcast.is_broadcast());
        assert!(!DeviceUid::new(0x4C55, 1).is_broadcast());
    }

    #[test]
    fn from_u64_masks_to_48_bits() {
        let uid = DeviceUid::from_u64(0xFFFF_0000_0000_0001);
        assert_eq!(uid.as_u64(), 0x0000_0000_0001);
    }

    #[test]
    fn discovery_range_concatenates_bounds() {
        let data = discovery_range(DeviceUid::from_u64(0), DeviceUid::broadcast_all());
        assert_eq!(&data[..6], &[0u8; 6]);
        assert_eq!(&data[6..], &[0xFFu8; 6]);
    }
}
