use std::io::{self, Write};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::{cursor, execute, queue};
use tzoverlap::catalog::{self, ZoneEntry};

use crate::render::ansi::{self, Palette};

/// Restores the terminal even if the selection loop errors out.
struct RawModeGuard;

impl RawModeGuard {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
        let _ = execute!(io::stdout(), cursor::Show);
    }
}

/// Prompt the user to pick one zone from the curated catalog.
///
/// Up/Down (or k/j) move, Enter selects, Esc/q/Ctrl-C cancels. Returns
/// `None` on cancel; cancelling the picker is normal completion, not an
/// error. The menu is erased once a choice is made.
pub fn pick_zone(prompt: &str, palette: &Palette) -> io::Result<Option<&'static ZoneEntry>> {
    let labels = catalog::picker_labels();
    let mut out = io::stdout();
    let mut selected = 0usize;

    println!("{}", palette.bold(prompt));

    let guard = RawModeGuard::enter()?;
    execute!(out, cursor::Hide)?;
    draw_menu(&mut out, labels, selected, palette)?;

    let choice = loop {
        let Event::Key(key) = event::read()? else { continue };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                selected = if selected == 0 { labels.len() - 1 } else { selected - 1 };
            }
            KeyCode::Down | KeyCode::Char('j') => {
                selected = (selected + 1) % labels.len();
            }
            KeyCode::Enter => break Some(selected),
            KeyCode::Esc | KeyCode::Char('q') => break None,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break None,
            _ => continue,
        }
        execute!(out, cursor::MoveUp(labels.len() as u16))?;
        draw_menu(&mut out, labels, selected, palette)?;
    };

    // Erase the menu before handing the terminal back.
    execute!(out, cursor::MoveUp(labels.len() as u16), Clear(ClearType::FromCursorDown))?;
    drop(guard);

    match choice {
        Some(idx) => {
            let entry = &catalog::CATALOG[idx];
            println!("{}", palette.dim(format!("  {} ({})", entry.label, entry.abbreviation)));
            Ok(Some(entry))
        }
        None => Ok(None),
    }
}

fn draw_menu(out: &mut io::Stdout, labels: &[String], selected: usize, palette: &Palette) -> io::Result<()> {
    for (idx, label) in labels.iter().enumerate() {
        let line = if idx == selected {
            palette.paint(format!("❯ {label}"), ansi::BLUE)
        } else {
            format!("  {label}")
        };
        queue!(out, Clear(ClearType::CurrentLine), Print(format!("{line}\r\n")))?;
    }
    out.flush()
}
