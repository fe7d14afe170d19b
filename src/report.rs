//! Text output of the `displix` command

use std::io::{self, Write};

use crate::{Display, DisplayBackend, DisplayError, DisplaySet, Settings};

const RULE: &str = "\t-----\t-----\t------";

/// What [`run`] ended up doing
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Printed the mode tables
    Listed,
    /// Switched the selected display to the mode at this index
    Applied(usize),
    /// Tried to switch the selected display but the transaction failed
    ApplyFailed(DisplayError),
}

/// Prints the current mode and the mode table of a display
pub fn write_modes<B: DisplayBackend, W: Write>(
    out: &mut W,
    display: &Display<'_, B>,
    show_low_res: bool,
) -> io::Result<()> {
    let modes = display.available_modes(show_low_res);

    writeln!(out, "\tID:\t{}", display.handle())?;
    writeln!(out, "\tCount: {}", modes.len())?;
    writeln!(out, "{}", RULE)?;
    match display.current_mode() {
        Ok(mode) => writeln!(
            out,
            "\tMode:\t#{}\t{}\t{}\t({} Hz)",
            mode.id,
            mode.width(),
            mode.height(),
            mode.refresh_rate
        )?,
        Err(err) => {
            log::warn!("{}", err);
            writeln!(out, "\tMode:\t--")?
        }
    }
    writeln!(out, "{}", RULE)?;
    writeln!(out, "\tIndex\tWidth\tHeight")?;
    writeln!(out, "{}", RULE)?;
    for (index, mode) in modes.iter().enumerate() {
        writeln!(
            out,
            "\t[{}] \t{}\t{}\t({} Hz)",
            index,
            mode.width(),
            mode.height(),
            mode.refresh_rate
        )?;
    }

    Ok(())
}

/// Lists every display of the set, or applies the selected mode
pub fn run<B: DisplayBackend, W: Write>(
    out: &mut W,
    display_set: &DisplaySet<B>,
    settings: &Settings,
) -> io::Result<Outcome> {
    let Some(mode_index) = settings.mode_index else {
        for (index, display) in display_set.displays().enumerate() {
            writeln!(out, "DISPLAY: {}", index)?;
            write_modes(out, &display, settings.show_low_res)?;
            writeln!(out)?;
        }
        return Ok(Outcome::Listed);
    };

    let display = display_set.display(settings.display);
    let modes = display.available_modes(settings.show_low_res);

    let Some(mode) = modes.get(mode_index) else {
        log::warn!("'{}' is not a valid display mode index", mode_index);
        write_modes(out, &display, settings.show_low_res)?;
        return Ok(Outcome::Listed);
    };

    writeln!(out, "W: {}; H: {}", mode.width(), mode.height())?;

    match display.apply_mode(mode) {
        Ok(()) => Ok(Outcome::Applied(mode_index)),
        Err(err) => {
            writeln!(out, "{}", err)?;
            Ok(Outcome::ApplyFailed(err))
        }
    }
}
