use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the five palette slots.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorKey {
    A,
    B,
    C,
    D,
    E,
}

impl ColorKey {
    pub const ALL: [ColorKey; 5] = [ColorKey::A, ColorKey::B, ColorKey::C, ColorKey::D, ColorKey::E];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            ColorKey::A => 0,
            ColorKey::B => 1,
            ColorKey::C => 2,
            ColorKey::D => 3,
            ColorKey::E => 4,
        }
    }
}

/// Palette key plus opacity (`0`–`100`).
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorRef {
    pub color: ColorKey,
    pub opacity: f64,
}

impl ColorRef {
    #[inline]
    pub const fn new(color: ColorKey, opacity: f64) -> Self {
        Self { color, opacity }
    }
}

/// Five opaque color values.
///
/// Values are substituted verbatim into resolved gradient stops. Nothing here
/// parses or validates them; `"#ff0000"`, `"red"` and `"var(--x)"` are all fine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorPalette {
    slots: [String; 5],
}

impl ColorPalette {
    pub fn new(
        a: impl Into<String>,
        b: impl Into<String>,
        c: impl Into<String>,
        d: impl Into<String>,
        e: impl Into<String>,
    ) -> Self {
        Self { slots: [a.into(), b.into(), c.into(), d.into(), e.into()] }
    }

    /// Builds a palette from exactly five values.
    pub fn from_slice<S: AsRef<str>>(colors: &[S]) -> Result<Self, PaletteError> {
        match colors {
            [a, b, c, d, e] => Ok(Self::new(a.as_ref(), b.as_ref(), c.as_ref(), d.as_ref(), e.as_ref())),
            _ => Err(PaletteError::WrongLength(colors.len())),
        }
    }

    #[inline]
    pub fn resolve(&self, key: ColorKey) -> &str {
        &self.slots[key.index()]
    }
}

impl From<[String; 5]> for ColorPalette {
    fn from(slots: [String; 5]) -> Self {
        Self { slots }
    }
}

impl From<[&str; 5]> for ColorPalette {
    fn from(slots: [&str; 5]) -> Self {
        Self { slots: slots.map(str::to_owned) }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// The palette needs exactly five colors; carries the count that was supplied.
    WrongLength(usize),
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::WrongLength(n) => write!(f, "palette needs exactly 5 colors, got {n}"),
        }
    }
}

impl std::error::Error for PaletteError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_returns_slot_verbatim() {
        let palette = ColorPalette::from(["#000", "rgb(1, 2, 3)", "red", "var(--x)", ""]);
        assert_eq!(palette.resolve(ColorKey::A), "#000");
        assert_eq!(palette.resolve(ColorKey::B), "rgb(1, 2, 3)");
        assert_eq!(palette.resolve(ColorKey::D), "var(--x)");
        assert_eq!(palette.resolve(ColorKey::E), "");
    }

    #[test]
    fn from_slice_requires_five() {
        assert_eq!(ColorPalette::from_slice(&["a", "b"]), Err(PaletteError::WrongLength(2)));
        let p = ColorPalette::from_slice(&["1", "2", "3", "4", "5"]).unwrap();
        assert_eq!(p.resolve(ColorKey::C), "3");
    }

    #[test]
    fn keys_deserialize_lowercase() {
        let key: ColorKey = serde_json::from_str("\"e\"").unwrap();
        assert_eq!(key, ColorKey::E);
    }
}
