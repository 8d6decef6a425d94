//! Drives a [`Session`] from key strokes and prints it as it changes.

use std::io::{BufRead, Write};

use termfolio_core::{LoginStore, Session, WindowManager};

use crate::CliError;
use crate::keys::{KeyStroke, line_strokes};
use crate::render::Renderer;

/// Feed strokes to the session, rendering after each one.
///
/// A scheduled editor boot is waited out in place.
pub fn play<W: WindowManager, S: LoginStore>(
    session: &mut Session<W, S>,
    renderer: &mut Renderer,
    out: &mut impl Write,
    strokes: &[KeyStroke],
) -> Result<(), CliError> {
    for stroke in strokes {
        if let Some(modifier) = stroke.modifier {
            session.key_down(modifier);
        }
        session.key_down(&stroke.key);
        session.key_up(&stroke.key);
        renderer.render(out, session.context())?;

        if let Some((token, delay)) = session.pending_boot() {
            std::thread::sleep(delay);
            session.fire_boot_timer(token);
            renderer.render(out, session.context())?;
        }
    }
    Ok(())
}

/// Play every line of `input`. Lines that are not valid key scripts are
/// reported and skipped.
pub fn play_lines<W: WindowManager, S: LoginStore>(
    session: &mut Session<W, S>,
    renderer: &mut Renderer,
    out: &mut impl Write,
    input: impl BufRead,
) -> Result<(), CliError> {
    for line in input.lines() {
        match line_strokes(&line?) {
            Ok(strokes) => play(session, renderer, out, &strokes)?,
            Err(err) => log::warn!("skipped line: {err}"),
        }
    }
    Ok(())
}

/// Run `body`, then unmount the session whatever it returned.
///
/// The error from `body` is returned after unmounting. A failed
/// last-login save is only logged.
pub fn run_mounted<W: WindowManager, S: LoginStore>(
    session: &mut Session<W, S>,
    now: impl FnOnce() -> String,
    body: impl FnOnce(&mut Session<W, S>) -> Result<(), CliError>,
) -> Result<(), CliError> {
    let result = body(session);
    if let Err(err) = session.unmount(&now()) {
        log::warn!("could not save last login: {err}");
    }
    result
}
