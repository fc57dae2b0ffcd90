//! Interactive form input.
//!
//! Free-text numeric entry follows the tool's single validation rule:
//! anything non-numeric or negative is coerced to 0 before it reaches the
//! calculator. The LPG question is a binary choice and re-asks until it
//! gets one.

use anyhow::Context;
use colored::*;
use console::Term;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use footprintr_common::model::inputs::{self, LpgUse};

use crate::terminal::colors;

/// What the user chose to do after seeing their results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Rerun,
    Quit,
}

fn prompt(term: &Term, label: &str) -> anyhow::Result<String> {
    term.write_str(&format!(
        "{} {}{} ",
        "?".color(colors::ACCENT),
        label.color(colors::PRIMARY),
        ":".color(colors::SEPARATOR)
    ))
    .context("failed to write prompt")?;
    let line = term.read_line().context("failed to read input")?;
    Ok(line)
}

/// Asks for a non-negative reading, coercing bad entries to 0.
pub fn prompt_reading(term: &Term, label: &str) -> anyhow::Result<f64> {
    let line = prompt(term, label)?;
    Ok(inputs::coerce_non_negative(&line))
}

/// Asks for a whole non-negative count, coercing bad entries to 0.
pub fn prompt_count(term: &Term, label: &str) -> anyhow::Result<u32> {
    let line = prompt(term, label)?;
    Ok(inputs::coerce_count(&line))
}

/// Asks the yes/no LPG question until it gets a usable answer, the way a
/// radio widget would never offer anything else.
pub fn prompt_lpg(term: &Term, label: &str) -> anyhow::Result<LpgUse> {
    loop {
        let line = prompt(term, label)?;
        match line.parse::<LpgUse>() {
            Ok(choice) => return Ok(choice),
            Err(err) => term
                .write_line(&format!("{} {}", "[*]".yellow().bold(), err))
                .context("failed to write prompt")?,
        }
    }
}

/// Restores the terminal even when the read loop bails out early.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> anyhow::Result<Self> {
        crossterm::terminal::enable_raw_mode().context("failed to enable raw mode")?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = crossterm::terminal::disable_raw_mode();
    }
}

/// Blocks until the user picks what to do next: Enter re-runs the form,
/// q / Esc / Ctrl-C quits.
pub fn wait_for_action() -> anyhow::Result<FormAction> {
    let _guard = RawModeGuard::enable()?;
    loop {
        match event::read().context("failed to read key event")? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                let is_quit = matches!(key_event.code, KeyCode::Char('q') | KeyCode::Esc)
                    || (key_event.code == KeyCode::Char('c')
                        && key_event.modifiers.contains(KeyModifiers::CONTROL));

                if is_quit {
                    return Ok(FormAction::Quit);
                }
                if key_event.code == KeyCode::Enter {
                    return Ok(FormAction::Rerun);
                }
            }
            _ => {}
        }
    }
}
