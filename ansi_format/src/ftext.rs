// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{TextFormat, reset_format};
use std::{fmt::Display,
          io::{self, Stdout, Write}};

/// Writes one line of formatted text. The format is written as soon as this is
/// created; when it is finished (or dropped) the formatting is reset and a newline is
/// appended.
///
/// # Example usage:
///
/// ```rust
/// use r3bl_ansi_format::*;
///
/// FText::stdout(Colour::Magenta).push("This text is magenta! ").push(42);
///
/// let mut buf: Vec<u8> = vec![];
/// let mut line = FText::new(&mut buf, TextFormat::new(Colour::Red, None, Attribute::Bold));
/// line.push("failed");
/// line.finish()?;
/// assert_eq!(String::from_utf8_lossy(&buf), "\x1b[31;1mfailed\x1b[0m\n");
/// # Ok::<(), FTextError>(())
/// ```
///
/// Use [`FText::finish`] to find out whether any write failed. If the line is just
/// dropped, a failure is logged and otherwise ignored.
#[derive(Debug)]
pub struct FText<W: Write = Stdout> {
    writer: W,
    /// The first write error seen on this line, if any.
    maybe_error: Option<io::Error>,
    is_finished: bool,
}

pub mod ftext_error {
    /// Errors from [`super::FText::finish`].
    #[derive(Debug, thiserror::Error, miette::Diagnostic)]
    pub enum FTextError {
        #[error("Could not write formatted text to the output stream")]
        #[diagnostic(
            code(r3bl_ansi_format::ftext::write),
            help("Check that the output stream is still open, eg: stdout not closed by a pipe")
        )]
        Write {
            #[source]
            source: std::io::Error,
        },
    }

    impl From<std::io::Error> for FTextError {
        fn from(source: std::io::Error) -> Self { FTextError::Write { source } }
    }
}
pub use ftext_error::FTextError;

impl FText<Stdout> {
    /// Start a formatted line on stdout.
    pub fn stdout(arg_format: impl Into<TextFormat>) -> Self {
        Self::new(io::stdout(), arg_format)
    }
}

impl<W: Write> FText<W> {
    pub fn new(writer: W, arg_format: impl Into<TextFormat>) -> Self {
        let mut it = Self {
            writer,
            maybe_error: None,
            is_finished: false,
        };
        let format: TextFormat = arg_format.into();
        it.push(format);
        it
    }

    /// Write anything that implements [`Display`]. Once a write has failed, later
    /// pushes are still attempted but only the first error is kept.
    pub fn push(&mut self, value: impl Display) -> &mut Self {
        let result = write!(self.writer, "{value}");
        self.remember(result);
        self
    }

    /// Reset the formatting, end the line, and flush.
    ///
    /// # Errors
    ///
    /// Returns the first write error that happened on this line, including the ones
    /// from [`FText::push`] and from `write!` through the [`Write`] impl.
    pub fn finish(mut self) -> Result<(), FTextError> {
        self.end_line();
        match self.maybe_error.take() {
            Some(source) => Err(source.into()),
            None => Ok(()),
        }
    }

    fn end_line(&mut self) {
        if self.is_finished {
            return;
        }
        self.is_finished = true;
        let result = writeln!(self.writer, "{}", reset_format());
        self.remember(result);
        let result = self.writer.flush();
        self.remember(result);
    }

    fn remember(&mut self, result: io::Result<()>) {
        if let Err(error) = result
            && self.maybe_error.is_none()
        {
            self.maybe_error = Some(error);
        }
    }

    /// Like [`Self::remember`], for results that are also handed back to the caller.
    /// [`io::Error`] isn't [`Clone`], so the kept copy has the same kind and message.
    fn remember_and_return<T>(&mut self, result: io::Result<T>) -> io::Result<T> {
        if let Err(error) = &result
            && self.maybe_error.is_none()
        {
            self.maybe_error = Some(io::Error::new(error.kind(), error.to_string()));
        }
        result
    }
}

impl<W: Write> Write for FText<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let result = self.writer.write(buf);
        self.remember_and_return(result)
    }

    fn flush(&mut self) -> io::Result<()> {
        let result = self.writer.flush();
        self.remember_and_return(result)
    }
}

impl<W: Write> Drop for FText<W> {
    fn drop(&mut self) {
        if self.is_finished {
            return;
        }
        self.end_line();
        if let Some(error) = self.maybe_error.take() {
            tracing::warn!(
                message = "FText could not write formatted line",
                error = ?error
            );
        }
    }
}
