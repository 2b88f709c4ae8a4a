// Copyright (c) 2023-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Test output that is only shown when verbose mode is on. Use the [`display!`],
//! [`display_no_pad!`] and [`display_newline!`] macros in tests, and run them with
//! `VERBOSE_TEST=1` to see what they print.
//!
//! [`display!`]: crate::display
//! [`display_no_pad!`]: crate::display_no_pad
//! [`display_newline!`]: crate::display_newline

use std::{env,
          ffi::OsStr,
          fmt::Arguments,
          io::{self, Write},
          sync::atomic::{AtomicI8, Ordering}};

/// Environment variable that turns on verbose test output. Unset, empty, or `0` means
/// quiet.
pub const VERBOSE_TEST_ENV_VAR: &str = "VERBOSE_TEST";

/// Padding written before each [`crate::display!`] line so it lines up under the test
/// name.
pub const DISPLAY_PAD: &str = "    ";

/// Whether [`crate::display!`] and friends print anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Verbose,
}

/// Whether [`crate::display!`] pads its output with [`DISPLAY_PAD`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Padding {
    Pad,
    NoPad,
}

impl Verbosity {
    #[must_use]
    pub fn is_verbose(self) -> bool { self == Verbosity::Verbose }

    /// Interpret the value of [`VERBOSE_TEST_ENV_VAR`]. Any value other than empty or
    /// `0` is verbose, including one that is not valid UTF-8.
    #[must_use]
    pub fn from_env_value(value: Option<&OsStr>) -> Self {
        let Some(value) = value else {
            return Verbosity::Quiet;
        };
        match value.to_string_lossy().trim() {
            "" | "0" => Verbosity::Quiet,
            _ => Verbosity::Verbose,
        }
    }
}

/// Global variable which can be used to:
/// 1. Override the verbosity, eg: to force quiet output in a test.
/// 2. Otherwise defer to [`VERBOSE_TEST_ENV_VAR`] via [`global_verbosity::detect`].
pub mod global_verbosity {
    use super::{AtomicI8, Ordering, VERBOSE_TEST_ENV_VAR, Verbosity, env};

    static VERBOSITY_GLOBAL: AtomicI8 = AtomicI8::new(NOT_SET_VALUE);
    const NOT_SET_VALUE: i8 = -1;

    /// - If the value has been set using [`set_override`], then that value will be
    ///   returned.
    /// - Otherwise, the value of [`VERBOSE_TEST_ENV_VAR`] decides.
    #[must_use]
    pub fn detect() -> Verbosity {
        if let Ok(it) = try_get_override() {
            return it;
        }
        let value = env::var_os(VERBOSE_TEST_ENV_VAR);
        let it = Verbosity::from_env_value(value.as_deref());
        tracing::debug!(
            message = "verbosity from environment",
            env_var = VERBOSE_TEST_ENV_VAR,
            ?value,
            verbosity = ?it
        );
        it
    }

    /// Regardless of the environment, the value you set here will be used when you
    /// call [`detect()`].
    ///
    /// # Testing support
    ///
    /// In any test in which this function is called, please use the `#[serial]`
    /// attribute from [serial_test](https://crates.io/crates/serial_test). Tests run in
    /// parallel, and this is process wide.
    pub fn set_override(value: Verbosity) {
        VERBOSITY_GLOBAL.store(i8::from(value), Ordering::SeqCst);
    }

    pub fn clear_override() { VERBOSITY_GLOBAL.store(NOT_SET_VALUE, Ordering::SeqCst); }

    /// # Errors
    ///
    /// Returns `Err(())` if no override has been set.
    #[allow(clippy::result_unit_err)]
    pub fn try_get_override() -> Result<Verbosity, ()> {
        let it = VERBOSITY_GLOBAL.load(Ordering::SeqCst);
        Verbosity::try_from(it)
    }
}

/// These trait implementations allow us to use `Verbosity` and `i8` interchangeably.
mod convert_between_verbosity_and_i8 {
    use super::Verbosity;

    impl TryFrom<i8> for Verbosity {
        type Error = ();

        fn try_from(value: i8) -> Result<Self, Self::Error> {
            match value {
                0 => Ok(Verbosity::Quiet),
                1 => Ok(Verbosity::Verbose),
                _ => Err(()),
            }
        }
    }

    impl From<Verbosity> for i8 {
        fn from(value: Verbosity) -> Self {
            match value {
                Verbosity::Quiet => 0,
                Verbosity::Verbose => 1,
            }
        }
    }
}

/// Write `args` to `writer` if `verbosity` allows it.
///
/// # Errors
///
/// Returns any error from `writer`.
pub fn write_display(
    writer: &mut impl Write,
    verbosity: Verbosity,
    padding: Padding,
    args: Arguments<'_>,
) -> io::Result<()> {
    if !verbosity.is_verbose() {
        return Ok(());
    }
    if padding == Padding::Pad {
        writer.write_all(DISPLAY_PAD.as_bytes())?;
    }
    writer.write_fmt(args)
}

/// Backs the display macros, which only call this after [`global_verbosity::detect`]
/// said verbose, so the format arguments are never evaluated in quiet mode.
pub fn display_to_stdout(padding: Padding, args: Arguments<'_>) {
    let mut stdout = io::stdout().lock();
    if let Err(error) = write_display(&mut stdout, Verbosity::Verbose, padding, args) {
        tracing::warn!(message = "could not write test display output", ?error);
    }
}

/// Print the arguments (like [`print!`]) with [`DISPLAY_PAD`] in front, but only in
/// verbose mode.
///
/// ```rust
/// use r3bl_ansi_format::*;
///
/// display!("{}passed{}", set_colour(Colour::Green, None), reset_colour());
/// display_newline!();
/// ```
#[macro_export]
macro_rules! display {
    ($($arg:tt)*) => {
        if $crate::verbose::global_verbosity::detect().is_verbose() {
            $crate::verbose::display_to_stdout(
                $crate::verbose::Padding::Pad,
                format_args!($($arg)*),
            );
        }
    };
}

/// Like [`display!`] without the padding.
#[macro_export]
macro_rules! display_no_pad {
    ($($arg:tt)*) => {
        if $crate::verbose::global_verbosity::detect().is_verbose() {
            $crate::verbose::display_to_stdout(
                $crate::verbose::Padding::NoPad,
                format_args!($($arg)*),
            );
        }
    };
}

/// Print a newline, but only in verbose mode.
#[macro_export]
macro_rules! display_newline {
    () => {
        if $crate::verbose::global_verbosity::detect().is_verbose() {
            $crate::verbose::display_to_stdout(
                $crate::verbose::Padding::NoPad,
                format_args!("\n"),
            );
        }
    };
}
