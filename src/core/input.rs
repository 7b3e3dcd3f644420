//! Turns raw key events into game intents, keeping polling apart from state changes
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What the player asked for this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Guess(char),
    Restart,
    Exit,
}

pub fn intent_for(key: KeyEvent) -> Option<Intent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => Some(Intent::Exit),
        KeyCode::Char('c') | KeyCode::Char('C') if ctrl => Some(Intent::Exit),
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::F(5) => Some(Intent::Restart),
        KeyCode::Char(c)
            if c.is_ascii_alphabetic()
                && !ctrl
                && !key.modifiers.contains(KeyModifiers::ALT) =>
        {
            Some(Intent::Guess(c))
        }
        _ => None,
    }
}

/// Map a batch of terminal events in arrival order.
pub fn intents<'a>(events: impl IntoIterator<Item = &'a Event>) -> Vec<Intent> {
    events
        .into_iter()
        .filter_map(|event| match event {
            Event::Key(key) => intent_for(*key),
            _ => None,
        })
        .collect()
}

/// Drain everything already queued on the terminal without waiting.
pub fn poll_intents() -> std::io::Result<Vec<Intent>> {
    let mut pending = Vec::new();
    while event::poll(Duration::ZERO)? {
        pending.push(event::read()?);
    }
    Ok(intents(&pending))
}
