// Copyright (c) 2023-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_ansi_format
//!
//! Rust crate to generate ANSI SGR escape codes that set the foreground colour,
//! background colour, and a display attribute of text printed to a terminal. It is meant
//! for colourizing unit test output, eg: green for a passing check, bold red for a
//! failing one.
//!
//! The escape codes are plain [`String`]s, so they can be written to any output stream.
//! Nothing here detects what the terminal supports; the codes are the 3-bit colours and
//! basic attributes that every ANSI terminal understands.
//!
//! # Example usage:
//!
//! ```rust
//! use r3bl_ansi_format::*;
//!
//! // Just the escape codes.
//! println!(
//!     "{}PASS{} check_folder_exists",
//!     set_format(Colour::Black, Colour::Green, Attribute::Bold),
//!     reset_format()
//! );
//!
//! // A whole line, which is reset when it goes out of scope.
//! FText::stdout(TextFormat::new(Colour::Red, None, Attribute::Underline))
//!     .push("FAIL ")
//!     .push("check_folder_exists");
//!
//! // Only printed when the `VERBOSE_TEST` environment variable is set.
//! display!("expected {} got {}", 1, 2);
//! display_newline!();
//! ```
//!
//! The `NONE` colour and `NOATTR` attribute of many ANSI helper libraries are simply
//! [`None`] here.
//!
//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code>

// Enforce strict error handling in production library code only. Tests and examples are
// allowed to use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
pub mod attr;
pub mod format;
pub mod ftext;
pub mod sgr_code;
pub mod verbose;

// Re-export.
pub use attr::*;
pub use format::*;
pub use ftext::*;
pub use sgr_code::*;
pub use verbose::*;
