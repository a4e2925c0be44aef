use std::fmt;

use super::error::ColorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parse `#RRGGBB` (the `#` is optional, case is ignored).
    ///
    /// # Examples
    /// ```
    /// use holidayboard_core::config::Color;
    ///
    /// let color = Color::from_hex("#ff8000")?;
    /// assert_eq!(color, Color::rgb(0xFF, 0x80, 0x00));
    /// assert_eq!(color.to_hex(), "#FF8000");
    /// # Ok::<(), holidayboard_core::config::ColorError>(())
    /// ```
    pub fn from_hex(text: &str) -> Result<Self, ColorError> {
        let invalid = || ColorError::InvalidHex {
            text: text.to_string(),
        };
        let digits = text.strip_prefix('#').unwrap_or(text);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
        };
        Ok(Self {
            red: channel(0..2)?,
            green: channel(2..4)?,
            blue: channel(4..6)?,
        })
    }

    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

/// Repeating sequence of colors assigned to a holiday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    colors: Vec<Color>,
}

impl Pattern {
    /// `None` for an empty color list.
    pub fn new(colors: Vec<Color>) -> Option<Self> {
        if colors.is_empty() {
            return None;
        }
        Some(Self { colors })
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Color of the light at `position`, repeating the pattern end to end.
    pub fn color_at(&self, position: usize) -> Color {
        self.colors[position % self.colors.len()]
    }
}
