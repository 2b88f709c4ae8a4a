// Copyright (c) 2023-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! More info:
//! - <https://doc.rust-lang.org/reference/tokens.html#ascii-escapes>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>

use smallvec::SmallVec;
use std::fmt::{Display, Formatter, Result};

pub const CSI: &str = "\x1b[";
pub const SGR: &str = "m";

/// Resets all text attributes (color, bold, italic, etc.) to default.
pub const SGR_RESET: &str = "\x1b[0m";

pub mod sizing {
    use super::SmallVec;

    /// Params are: foreground, background, attribute.
    pub const MAX_SGR_PARAMS: usize = 3;
    pub type InlineVecSgrParams = SmallVec<[u8; MAX_SGR_PARAMS]>;
}

/// A single `CSI <params> m` sequence. The params are written in the order they were
/// pushed, separated by `;`. An empty param list is written as `CSI m`, which
/// terminals treat as a reset, but callers in this crate never emit it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SgrSequence {
    pub params: sizing::InlineVecSgrParams,
}

mod sgr_sequence_impl {
    use super::{CSI, Display, Formatter, Result, SGR, SgrSequence};

    impl SgrSequence {
        #[must_use]
        pub fn new() -> Self { Self::default() }

        pub fn push(&mut self, param: u8) -> &mut Self {
            self.params.push(param);
            self
        }

        #[must_use]
        pub fn is_empty(&self) -> bool { self.params.is_empty() }
    }

    impl Display for SgrSequence {
        /// SGR: set graphics mode command.
        /// More info:
        /// - <https://notes.burke.libbey.me/ansi-escape-codes/>
        /// - <https://en.wikipedia.org/wiki/ANSI_escape_code>
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            write!(f, "{CSI}")?;
            for (index, param) in self.params.iter().enumerate() {
                if index > 0 {
                    write!(f, ";")?;
                }
                write!(f, "{param}")?;
            }
            write!(f, "{SGR}")
        }
    }

    impl From<&[u8]> for SgrSequence {
        fn from(params: &[u8]) -> Self {
            Self {
                params: params.iter().copied().collect(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reset() {
        let sgr = SgrSequence::from([0_u8].as_slice());
        assert_eq!(sgr.to_string(), SGR_RESET);
    }

    #[test]
    fn single_param() {
        let mut sgr = SgrSequence::new();
        sgr.push(31);
        assert_eq!(sgr.to_string(), "\x1b[31m");
    }

    #[test]
    fn params_are_joined_in_push_order() {
        let mut sgr = SgrSequence::new();
        sgr.push(44).push(1);
        assert_eq!(sgr.to_string(), "\x1b[44;1m");

        let sgr = SgrSequence::from([31_u8, 42, 1].as_slice());
        assert_eq!(sgr.to_string(), "\x1b[31;42;1m");
    }

    #[test]
    fn empty() {
        let sgr = SgrSequence::new();
        assert!(sgr.is_empty());
        assert_eq!(sgr.to_string(), "\x1b[m");
    }

    #[test]
    fn params_stay_inline() {
        let sgr = SgrSequence::from([37_u8, 47, 29].as_slice());
        assert!(!sgr.params.spilled());
    }
}
