//! Color literal classification.
//!
//! Theme files spell colors as `#RRGGBB` or, with an alpha channel,
//! `#RRGGBBAA`. The palette treats the two differently: alpha colors are
//! factored into a base color plus an `alpha(..)` adjustment. Classification
//! happens once, here, so the rest of the crate can match on the variant
//! instead of re-inspecting string lengths.

/// A `#`-prefixed color string found in a theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorLiteral {
    /// Any `#` literal without an alpha channel, kept verbatim.
    Base(String),
    /// A `#RRGGBBAA` literal.
    Alpha {
        /// The literal exactly as written.
        literal: String,
        /// The `#RRGGBB` prefix.
        base: String,
        /// The trailing `AA` byte.
        alpha: u8,
    },
}

impl ColorLiteral {
    /// Classifies a color literal.
    ///
    /// Exactly eight hex digits after the `#` make an alpha color; everything
    /// else (six digits, three digits, or something odd) is a base literal.
    pub fn parse(literal: &str) -> Self {
        if let Some((base, alpha)) = split_alpha(literal) {
            return ColorLiteral::Alpha {
                literal: literal.to_string(),
                base: base.to_string(),
                alpha,
            };
        }
        ColorLiteral::Base(literal.to_string())
    }

    /// The literal exactly as it appeared in the theme.
    pub fn as_str(&self) -> &str {
        match self {
            ColorLiteral::Base(literal) | ColorLiteral::Alpha { literal, .. } => literal,
        }
    }

    /// Returns true for `#RRGGBBAA` literals.
    pub fn is_alpha(&self) -> bool {
        matches!(self, ColorLiteral::Alpha { .. })
    }
}

/// Splits `#RRGGBBAA` into `#RRGGBB` and the alpha byte.
fn split_alpha(literal: &str) -> Option<(&str, u8)> {
    let digits = literal.strip_prefix('#')?;
    if digits.len() != 8 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let alpha = u8::from_str_radix(&digits[6..], 16).ok()?;
    Some((&literal[..7], alpha))
}

/// Formats an alpha byte as an opacity in `[0, 1]` with two decimals.
///
/// ```rust
/// use sublime_convert_core::format_alpha;
///
/// assert_eq!(format_alpha(0xAA), "0.67");
/// assert_eq!(format_alpha(0xFF), "1.00");
/// assert_eq!(format_alpha(0x00), "0.00");
/// ```
pub fn format_alpha(alpha: u8) -> String {
    format!("{:.2}", f64::from(alpha) / 255.0)
}
