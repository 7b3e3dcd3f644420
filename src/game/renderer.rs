//! Rat, Cheese & Trap renderer - reads the session, never mutates it
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Circle, Line as Segment, Points};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::core::renderer::GameRenderer;
use crate::game::guess::PLACEHOLDER;
use crate::game::particles::BurstKind;
use crate::game::session::{GameSession, Phase};
use crate::game::track::{self, ARENA_HEIGHT, ARENA_WIDTH, CHEESE_X, TRACK_Y, TRAP_X};

const TEXT: Color = Color::Rgb(240, 240, 255);
const ACCENT: Color = Color::Rgb(255, 215, 0);
const RAT: Color = Color::Rgb(160, 160, 170);
const TRAP: Color = Color::Rgb(200, 60, 60);
const CHEESE: Color = Color::Rgb(255, 230, 100);
const PATH: Color = Color::Rgb(100, 90, 60);
const GRID: Color = Color::Rgb(70, 65, 90);
const CORRECT: Color = Color::Rgb(110, 240, 110);
const INCORRECT: Color = Color::Rgb(240, 110, 110);
const DIMMED: Color = Color::Rgb(100, 100, 100);

const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const GRID_COLUMNS: usize = 7;

/// Frames per radian of the idle wiggle (about 200ms at 60 Hz).
const WIGGLE_PERIOD: f64 = 12.0;
const WIGGLE_AMPLITUDE: f64 = 6.0;

#[derive(Debug, Default)]
pub struct RatCheeseRenderer;

impl<R, A> GameRenderer<GameSession<R, A>> for RatCheeseRenderer {
    fn render(&self, frame: &mut Frame, session: &GameSession<R, A>, tick: u64) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Min(8),
                Constraint::Length(3),
                Constraint::Length(6),
                Constraint::Length(2),
                Constraint::Length(1),
            ])
            .split(frame.area());

        render_title(frame, chunks[0]);
        render_scoreboard(frame, chunks[1], session);
        render_arena(frame, chunks[2], session, tick);
        render_word(frame, chunks[3], session);
        render_letters(frame, chunks[4], session);
        render_status(frame, chunks[5], session);

        let help = Paragraph::new("Type letters to guess • Enter: restart • Esc: exit")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        frame.render_widget(help, chunks[6]);
    }
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "RAT, CHEESE & TRAP",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled("WORD GUESSING GAME", Style::default().fg(TEXT))),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

fn render_scoreboard<R, A>(frame: &mut Frame, area: Rect, session: &GameSession<R, A>) {
    let score = session.score();
    let bold = Modifier::BOLD;
    let line = Line::from(vec![
        Span::styled(format!("WINS: {}", score.wins), Style::default().fg(CORRECT).add_modifier(bold)),
        Span::styled("  •  ", Style::default().fg(TEXT)),
        Span::styled(format!("LOSSES: {}", score.losses), Style::default().fg(INCORRECT).add_modifier(bold)),
    ]);
    let board = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(board, centered(area, 40));
}

fn render_arena<R, A>(frame: &mut Frame, area: Rect, session: &GameSession<R, A>, tick: u64) {
    let phase = session.phase();
    let playing = phase == Phase::Playing;

    let wiggle = if playing {
        (tick as f64 / WIGGLE_PERIOD).sin() * WIGGLE_AMPLITUDE
    } else {
        0.0
    };
    let rat_x = track::x_at(session.rat_position());
    let trap_color = if phase == Phase::Won { DIMMED } else { TRAP };
    let cheese_color = if phase == Phase::Lost { DIMMED } else { CHEESE };

    let mut cheese_bits = Vec::new();
    let mut trap_bits = Vec::new();
    for p in session.particles().particles() {
        let point = (f64::from(p.position[0]), f64::from(p.position[1]));
        match p.kind {
            BurstKind::Cheese => cheese_bits.push(point),
            BurstKind::Trap => trap_bits.push(point),
        }
    }

    let studs: Vec<(f64, f64)> = (0u32..)
        .map(|i| TRAP_X + f64::from(i) * 16.0)
        .take_while(|x| *x <= CHEESE_X)
        .map(|x| (x, TRACK_Y - 6.0))
        .collect();

    let canvas = Canvas::default()
        .block(Block::default().borders(Borders::ALL).title(" KITCHEN "))
        .marker(Marker::Braille)
        .x_bounds([0.0, ARENA_WIDTH])
        .y_bounds([0.0, ARENA_HEIGHT])
        .paint(move |ctx| {
            ctx.draw(&Segment::new(TRAP_X, TRACK_Y, CHEESE_X, TRACK_Y, PATH));
            ctx.draw(&Points { coords: &studs, color: PATH });
            ctx.draw(&Circle { x: TRAP_X, y: TRACK_Y, radius: 24.0, color: trap_color });
            ctx.draw(&Circle { x: CHEESE_X, y: TRACK_Y, radius: 24.0, color: cheese_color });
            ctx.draw(&Circle { x: rat_x, y: TRACK_Y + 30.0 + wiggle, radius: 16.0, color: RAT });
            ctx.layer();
            ctx.draw(&Points { coords: &cheese_bits, color: CHEESE });
            ctx.draw(&Points { coords: &trap_bits, color: TRAP });
            ctx.print(TRAP_X - 20.0, TRACK_Y - 50.0, Span::styled("TRAP", Style::default().fg(trap_color)));
            ctx.print(CHEESE_X - 30.0, TRACK_Y - 50.0, Span::styled("CHEESE", Style::default().fg(cheese_color)));
        });
    frame.render_widget(canvas, area);
}

fn render_word<R, A>(frame: &mut Frame, area: Rect, session: &GameSession<R, A>) {
    let spaced = spaced_word(session.guesses().revealed());
    let word = Paragraph::new(Span::styled(spaced, Style::default().fg(TEXT).add_modifier(Modifier::BOLD)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(word, centered(area, 40));
}

/// `C _ T` style: one cell per letter, placeholders for hidden ones.
fn spaced_word(revealed: impl Iterator<Item = Option<char>>) -> String {
    revealed
        .map(|c| c.unwrap_or(PLACEHOLDER).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_letters<R, A>(frame: &mut Frame, area: Rect, session: &GameSession<R, A>) {
    let guesses = session.guesses();
    let letters: Vec<char> = ALPHABET.chars().collect();
    let lines: Vec<Line> = letters
        .chunks(GRID_COLUMNS)
        .map(|row| {
            let spans = row.iter().flat_map(|&c| {
                let style = if !guesses.is_guessed(c) {
                    Style::default().fg(TEXT).bg(GRID)
                } else if guesses.word().contains(c) {
                    Style::default().fg(Color::Black).bg(CORRECT)
                } else {
                    Style::default().fg(Color::Black).bg(INCORRECT)
                };
                [Span::styled(format!(" {c} "), style), Span::raw(" ")]
            });
            Line::from(spans.collect::<Vec<_>>())
        })
        .collect();

    let grid = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" LETTERS "));
    frame.render_widget(grid, centered(area, 34));
}

fn render_status<R, A>(frame: &mut Frame, area: Rect, session: &GameSession<R, A>) {
    let lines = match session.phase() {
        Phase::Playing => vec![Line::from(Span::styled(
            "Guess letters to move the rat toward the CHEESE!",
            Style::default().fg(TEXT),
        ))],
        Phase::Won => banner("YOU WIN! CHEESE ACQUIRED!", CORRECT, session),
        Phase::Lost => banner("YOU LOSE! TRAPPED!", INCORRECT, session),
    };
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn banner<'a, R, A>(text: &'a str, color: Color, session: &GameSession<R, A>) -> Vec<Line<'a>> {
    vec![
        Line::from(Span::styled(text, Style::default().fg(color).add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(format!("Word: {}", session.word()), Style::default().fg(TEXT))),
    ]
}

/// Horizontally centre a box of `width` columns inside `area`.
fn centered(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::audio::Muted;
    use crate::game::words::{Word, WordList};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn session(word: &str) -> GameSession<StdRng, Muted> {
        let words = WordList::new(vec![Word::new(word).unwrap()]).unwrap();
        GameSession::new(words, StdRng::seed_from_u64(9), Muted)
    }

    fn draw(session: &GameSession<StdRng, Muted>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 32)).unwrap();
        terminal
            .draw(|f| RatCheeseRenderer.render(f, session, 5))
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn shows_scoreboard_and_hidden_word() {
        let screen = draw(&session("CAT"));
        assert!(screen.contains("WINS: 0"));
        assert!(screen.contains("LOSSES: 0"));
        assert!(screen.contains("_ _ _"));
        assert!(screen.contains("Guess letters"));
    }

    #[test]
    fn shows_win_banner_with_word() {
        let mut s = session("CAT");
        for letter in "CAT".chars() {
            s.guess(letter);
        }
        let screen = draw(&s);
        assert!(screen.contains("YOU WIN! CHEESE ACQUIRED!"));
        assert!(screen.contains("Word: CAT"));
        assert!(screen.contains("WINS: 1"));
    }

    #[test]
    fn spaced_word_uses_placeholders() {
        let revealed = [Some('C'), None, Some('T')];
        assert_eq!(spaced_word(revealed.into_iter()), "C _ T");
    }

    #[test]
    fn centered_never_exceeds_area() {
        let area = Rect::new(2, 3, 10, 4);
        let inner = centered(area, 40);
        assert_eq!(inner, area);
        let inner = centered(Rect::new(0, 0, 80, 3), 40);
        assert_eq!(inner.x, 20);
        assert_eq!(inner.width, 40);
    }
}
