// Copyright (c) 2023-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use r3bl_ansi_format::{Attribute,
                       Colour,
                       FText,
                       FTextError,
                       TextFormat,
                       Verbosity,
                       display,
                       display_newline,
                       global_verbosity,
                       reset_colour,
                       set_attribute,
                       set_colour};
use strum::IntoEnumIterator;

fn main() -> Result<(), FTextError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // Every foreground colour on every background colour.
    {
        for bg in Colour::iter() {
            let mut line = FText::stdout(TextFormat::default());
            for fg in Colour::iter() {
                line.push(set_colour(fg, bg)).push(" Aa ");
            }
            line.finish()?;
        }
    }

    // Every attribute, by name.
    {
        for attr in Attribute::iter() {
            let name: &'static str = attr.into();
            println!("{}{name}{}", set_attribute(attr), reset_colour());
        }
    }

    // Verbose display uses runtime detection unless overridden.
    {
        let msg = format!("> Runtime detection of verbosity ({:?})", global_verbosity::detect());
        FText::stdout(Attribute::Underline).push(msg);

        global_verbosity::set_override(Verbosity::Verbose);
        display!("{}check passed{}", set_colour(Colour::Green, None), reset_colour());
        display_newline!();

        global_verbosity::set_override(Verbosity::Quiet);
        display!("this line is never shown");
        display_newline!();

        global_verbosity::clear_override();
    }

    Ok(())
}
