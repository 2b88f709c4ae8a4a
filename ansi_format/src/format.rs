// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Functions that return the ANSI escape code for a foreground colour, background
//! colour and attribute. These can be written to any output stream, not just stdout.
//!
//! # Example usage:
//!
//! ```rust
//! use r3bl_ansi_format::*;
//!
//! println!("The following word is {}magenta{}!", set_colour(Colour::Magenta, None), reset_colour());
//! assert_eq!(set_format(Colour::Red, Colour::Green, Attribute::Bold), "\x1b[31;42;1m");
//! assert_eq!(set_format(None, None, None), "\x1b[0m");
//! assert_eq!(set_attribute(None), "");
//! ```

use crate::{Attribute, Colour, SgrSequence};
use std::fmt::{Display, Formatter, Result};

/// The three independent channels of a format request. Any of them can be left unset.
///
/// The [`Display`] impl writes the SGR sequence with the present channels in the fixed
/// order foreground, background, attribute. When no channel is set, it writes the reset
/// sequence rather than an empty parameter list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TextFormat {
    pub fg: Option<Colour>,
    pub bg: Option<Colour>,
    pub attr: Option<Attribute>,
}

mod text_format_impl {
    use super::{Attribute, Colour, Display, Formatter, Result, SgrSequence, TextFormat};

    impl TextFormat {
        #[must_use]
        pub fn new(
            arg_fg: impl Into<Option<Colour>>,
            arg_bg: impl Into<Option<Colour>>,
            arg_attr: impl Into<Option<Attribute>>,
        ) -> Self {
            Self {
                fg: arg_fg.into(),
                bg: arg_bg.into(),
                attr: arg_attr.into(),
            }
        }

        #[must_use]
        pub fn fg(mut self, colour: Colour) -> Self {
            self.fg = Some(colour);
            self
        }

        #[must_use]
        pub fn bg(mut self, colour: Colour) -> Self {
            self.bg = Some(colour);
            self
        }

        #[must_use]
        pub fn attr(mut self, attribute: Attribute) -> Self {
            self.attr = Some(attribute);
            self
        }

        #[must_use]
        pub fn is_empty(&self) -> bool {
            self.fg.is_none() && self.bg.is_none() && self.attr.is_none()
        }

        #[must_use]
        pub fn to_sgr_sequence(&self) -> SgrSequence {
            let mut acc = SgrSequence::new();
            if let Some(fg) = self.fg {
                acc.push(fg.fg_code());
            }
            if let Some(bg) = self.bg {
                acc.push(bg.bg_code());
            }
            if let Some(attr) = self.attr {
                acc.push(attr.code());
            }
            // Never emit an empty param list.
            if acc.is_empty() {
                acc.push(Attribute::Reset.code());
            }
            acc
        }
    }

    impl Display for TextFormat {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            write!(f, "{}", self.to_sgr_sequence())
        }
    }

    impl From<Colour> for TextFormat {
        fn from(fg: Colour) -> Self { Self::default().fg(fg) }
    }

    impl From<Attribute> for TextFormat {
        fn from(attr: Attribute) -> Self { Self::default().attr(attr) }
    }
}

/// Set a particular foreground colour, background colour and attribute. Pass [`None`]
/// for any channel that should be left alone. If all three are [`None`] this returns
/// the reset code.
#[must_use]
pub fn set_format(
    arg_fg: impl Into<Option<Colour>>,
    arg_bg: impl Into<Option<Colour>>,
    arg_attr: impl Into<Option<Attribute>>,
) -> String {
    TextFormat::new(arg_fg, arg_bg, arg_attr).to_string()
}

/// Set a particular foreground and background colour.
#[must_use]
pub fn set_colour(
    arg_fg: impl Into<Option<Colour>>,
    arg_bg: impl Into<Option<Colour>>,
) -> String {
    set_format(arg_fg, arg_bg, None)
}

/// Set a particular attribute. Unlike [`set_format`], passing [`None`] is a no-op and
/// returns an empty string.
#[must_use]
pub fn set_attribute(arg_attr: impl Into<Option<Attribute>>) -> String {
    match arg_attr.into() {
        None => String::new(),
        Some(attr) => SgrSequence::from([attr.code()].as_slice()).to_string(),
    }
}

/// Reset all colours and attributes. Same as [`reset_format`].
#[must_use]
pub fn reset_colour() -> String { set_attribute(Attribute::Reset) }

/// Reset all colours and attributes. Same as [`reset_colour`].
#[must_use]
pub fn reset_format() -> String { set_attribute(Attribute::Reset) }

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SGR_RESET;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(Colour::Red, None, None, "\x1b[31m")]
    #[test_case(None, Colour::Green, None, "\x1b[42m")]
    #[test_case(None, None, Attribute::Underline, "\x1b[3m")]
    #[test_case(Colour::Red, Colour::Green, Attribute::Bold, "\x1b[31;42;1m")]
    #[test_case(None, Colour::Blue, Attribute::Bold, "\x1b[44;1m")]
    #[test_case(Colour::Cyan, None, Attribute::Invert, "\x1b[36;7m")]
    #[test_case(Colour::White, Colour::Black, None, "\x1b[37;40m")]
    #[test_case(Colour::Default, Colour::Default, Attribute::BoldOff, "\x1b[39;49;22m")]
    fn set_format_cases(
        fg: impl Into<Option<Colour>>,
        bg: impl Into<Option<Colour>>,
        attr: impl Into<Option<Attribute>>,
        expected: &str,
    ) {
        assert_eq!(set_format(fg, bg, attr), expected);
    }

    #[test]
    fn set_format_with_nothing_set_is_reset() {
        assert_eq!(set_format(None, None, None), SGR_RESET);
        assert_eq!(TextFormat::default().to_string(), SGR_RESET);
        assert_eq!(
            TextFormat::default().to_sgr_sequence(),
            SgrSequence::from([Attribute::Reset.code()].as_slice())
        );
    }

    #[test]
    fn set_format_with_explicit_reset_attribute() {
        assert_eq!(set_format(Colour::Red, None, Attribute::Reset), "\x1b[31;0m");
        assert_eq!(set_format(None, None, Attribute::Reset), SGR_RESET);
    }

    #[test]
    fn set_colour_leaves_attribute_unset() {
        assert_eq!(set_colour(Colour::Magenta, None), "\x1b[35m");
        assert_eq!(set_colour(Colour::Yellow, Colour::Blue), "\x1b[33;44m");
        assert_eq!(set_colour(None, None), SGR_RESET);
    }

    #[test]
    fn set_attribute_none_is_empty() {
        assert_eq!(set_attribute(None), "");
    }

    #[test]
    fn set_attribute_some() {
        assert_eq!(set_attribute(Attribute::Bold), "\x1b[1m");
        assert_eq!(set_attribute(Attribute::StrikethroughOff), "\x1b[29m");
        assert_eq!(set_attribute(Some(Attribute::Blink)), "\x1b[4m");
    }

    #[test]
    fn resets() {
        assert_eq!(reset_colour(), SGR_RESET);
        assert_eq!(reset_format(), SGR_RESET);
        assert_eq!(set_attribute(Attribute::Reset), SGR_RESET);
    }

    #[test]
    fn text_format_builder() {
        let it = TextFormat::default().attr(Attribute::Bold).bg(Colour::Blue);
        assert_eq!(it, TextFormat::new(None, Colour::Blue, Attribute::Bold));
        assert_eq!(it.to_string(), "\x1b[44;1m");

        assert_eq!(TextFormat::from(Colour::Green).to_string(), "\x1b[32m");
        assert_eq!(TextFormat::from(Attribute::Italic).to_string(), "\x1b[2m");
        assert!(TextFormat::default().is_empty());
        assert!(!TextFormat::from(Colour::Black).is_empty());
    }
}
