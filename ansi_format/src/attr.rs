// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The colours and display attributes that can be turned into SGR parameters.
//!
//! "Not set" is expressed as [`None`] wherever these are accepted, so neither enum
//! carries a sentinel variant.
//!
//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR_(Select_Graphic_Rendition)_parameters>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#3-bit_and_4-bit>

use strum_macros::{EnumCount, EnumIter, EnumString, IntoStaticStr};

/// Foreground offset for the 3-bit colour codes (`30..=37`, `39`).
pub const FG_OFFSET: u8 = 30;

/// Background offset for the 3-bit colour codes (`40..=47`, `49`).
pub const BG_OFFSET: u8 = 40;

/// One of the 8 standard terminal colours, or the terminal's default colour. The
/// discriminant is the colour's ordinal, which gets added to [`FG_OFFSET`] or
/// [`BG_OFFSET`].
///
/// The names parse from snake case, eg: `"magenta".parse::<Colour>()`.
#[repr(u8)]
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumCount,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum Colour {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
    Default = 9,
}

impl Colour {
    #[must_use]
    pub fn ordinal(self) -> u8 { self as u8 }

    /// SGR parameter that sets this as the foreground colour.
    #[must_use]
    pub fn fg_code(self) -> u8 { FG_OFFSET + self.ordinal() }

    /// SGR parameter that sets this as the background colour.
    #[must_use]
    pub fn bg_code(self) -> u8 { BG_OFFSET + self.ordinal() }
}

/// Text display attributes. Unlike [`Colour`], the discriminant is used as the SGR
/// parameter as is, with no offset.
///
/// [`Attribute::Reset`] clears every colour and attribute, and is what
/// [`crate::reset_format`] emits.
#[repr(u8)]
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumCount,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum Attribute {
    Reset = 0,
    Bold = 1,
    Italic = 2,
    Underline = 3,
    Blink = 4,
    Invert = 7,
    Conceal = 8,
    Strikethrough = 9,
    BoldOff = 22,
    ItalicOff = 23,
    UnderlineOff = 24,
    BlinkOff = 25,
    InvertOff = 27,
    ConcealOff = 28,
    StrikethroughOff = 29,
}

impl Attribute {
    #[must_use]
    pub fn code(self) -> u8 { self as u8 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use strum::{EnumCount, IntoEnumIterator};
    use test_case::test_case;

    #[test_case(Colour::Black, 30, 40)]
    #[test_case(Colour::Red, 31, 41)]
    #[test_case(Colour::Yellow, 33, 43)]
    #[test_case(Colour::White, 37, 47)]
    #[test_case(Colour::Default, 39, 49)]
    fn colour_codes(colour: Colour, fg: u8, bg: u8) {
        assert_eq!(colour.fg_code(), fg);
        assert_eq!(colour.bg_code(), bg);
    }

    #[test]
    fn standard_colours_are_contiguous() {
        let ordinals: Vec<u8> = Colour::iter()
            .filter(|it| *it != Colour::Default)
            .map(Colour::ordinal)
            .collect();
        assert_eq!(ordinals, (0..8).collect::<Vec<u8>>());
        assert_eq!(Colour::COUNT, 9);
    }

    #[test_case(Attribute::Reset, 0)]
    #[test_case(Attribute::Bold, 1)]
    #[test_case(Attribute::Blink, 4)]
    #[test_case(Attribute::Invert, 7)]
    #[test_case(Attribute::Strikethrough, 9)]
    #[test_case(Attribute::BoldOff, 22)]
    #[test_case(Attribute::InvertOff, 27)]
    #[test_case(Attribute::StrikethroughOff, 29)]
    fn attribute_codes(attribute: Attribute, code: u8) {
        assert_eq!(attribute.code(), code);
    }

    #[test]
    fn parse_from_snake_case() {
        assert_eq!("magenta".parse::<Colour>(), Ok(Colour::Magenta));
        assert_eq!("underline_off".parse::<Attribute>(), Ok(Attribute::UnderlineOff));
        assert!("purple".parse::<Colour>().is_err());

        let name: &'static str = Attribute::StrikethroughOff.into();
        assert_eq!(name, "strikethrough_off");
    }
}
