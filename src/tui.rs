use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::Frame;

use crate::error::Result;
use crate::fmt::number;

pub const HEADER_STYLE: Style = Style::new()
    .fg(Color::Yellow)
    .add_modifier(Modifier::BOLD);

pub const FOOTER_STYLE: Style = Style::new().fg(Color::DarkGray);

pub const SELECTED_STYLE: Style = Style::new()
    .bg(Color::Rgb(40, 40, 60))
    .add_modifier(Modifier::BOLD);

/// Bar colour for the busier day type.
pub const LEADER_STYLE: Style = Style::new().fg(Color::Rgb(0xE3, 0x64, 0x96));
/// Bar colour for the quieter day type.
pub const TRAILER_STYLE: Style = Style::new().fg(Color::Rgb(0xFA, 0xDA, 0xDD));

pub const EMPTY_STYLE: Style = Style::new()
    .fg(Color::DarkGray)
    .add_modifier(Modifier::ITALIC);

/// A count rendered with thousands separators.
pub fn count_span(count: usize) -> Span<'static> {
    Span::styled(number(count), Style::new().add_modifier(Modifier::BOLD))
}

// ---------------------------------------------------------------------------
// View infrastructure
// ---------------------------------------------------------------------------

pub enum ViewAction {
    Continue,
    Close,
}

pub trait View {
    fn draw(&mut self, frame: &mut Frame);
    fn handle_key(&mut self, code: KeyCode) -> ViewAction;
}

fn wants_quit(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}

/// Draw `view` full-screen until it closes or Ctrl-C is pressed.
pub fn run_view(view: &mut dyn View) -> Result<()> {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        ratatui::restore();
        previous(info);
    }));

    let mut terminal = ratatui::init();
    let outcome: Result<()> = loop {
        if let Err(e) = terminal.draw(|frame| view.draw(frame)) {
            break Err(e.into());
        }
        let key = match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => key,
            Ok(_) => continue,
            Err(e) => break Err(e.into()),
        };
        if wants_quit(&key) {
            break Ok(());
        }
        if let ViewAction::Close = view.handle_key(key.code) {
            break Ok(());
        }
    };

    drop(terminal);
    ratatui::restore();
    outcome
}
