use crate::core::audio::AudioSink;
use crate::core::input;
use crate::core::renderer::GameRenderer;
use crate::game::session::{Flow, GameSession, Score};
use anyhow::Result;
use rand::Rng;
use ratatui::DefaultTerminal;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tracing::info;

/// Fixed frame rate. Particle lifetimes and idle animation count frames.
pub const FRAME_RATE: u32 = 60;

pub struct Engine<R, A, V> {
    session: GameSession<R, A>,
    renderer: V,
    frame: u64,
}

impl<R, A, V> Engine<R, A, V>
where
    R: Rng,
    A: AudioSink,
    V: GameRenderer<GameSession<R, A>>,
{
    pub fn new(session: GameSession<R, A>, renderer: V) -> Self {
        Self { session, renderer, frame: 0 }
    }

    /// Run until the player exits; returns the final score.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<Score> {
        let mut frame_timer = tokio::time::interval(Duration::from_secs(1) / FRAME_RATE);
        frame_timer.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            frame_timer.tick().await;

            // INPUT: everything queued since the last frame
            let intents = input::poll_intents()?;
            if self.step(intents) == Flow::Exit {
                break;
            }

            terminal.draw(|f| self.renderer.render(f, &self.session, self.frame))?;
        }

        let score = self.session.score();
        info!(wins = score.wins, losses = score.losses, frames = self.frame, "exiting");
        Ok(score)
    }

    /// One frame of game logic: apply intents, then advance particles.
    pub fn step(&mut self, intents: Vec<input::Intent>) -> Flow {
        if self.session.apply_all(intents) == Flow::Exit {
            return Flow::Exit;
        }
        self.session.tick();
        self.frame += 1;
        Flow::Continue
    }

    pub fn session(&self) -> &GameSession<R, A> {
        &self.session
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::audio::Recorder;
    use crate::core::input::Intent;
    use crate::game::renderer::RatCheeseRenderer;
    use crate::game::session::Phase;
    use crate::game::words::{Word, WordList};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn engine(word: &str) -> Engine<StdRng, Recorder, RatCheeseRenderer> {
        let words = WordList::new(vec![Word::new(word).unwrap()]).unwrap();
        let session = GameSession::new(words, StdRng::seed_from_u64(3), Recorder::default());
        Engine::new(session, RatCheeseRenderer)
    }

    #[test]
    fn step_applies_intents_and_counts_frames() {
        let mut e = engine("CAT");
        assert_eq!(e.step(vec![Intent::Guess('c')]), Flow::Continue);
        assert_eq!(e.step(Vec::new()), Flow::Continue);
        assert_eq!(e.frame(), 2);
        assert!(e.session().guesses().is_guessed('C'));
    }

    #[test]
    fn burst_ticks_once_per_frame() {
        let mut e = engine("CAT");
        e.step(vec![Intent::Guess('c'), Intent::Guess('a'), Intent::Guess('t')]);
        assert_eq!(e.session().phase(), Phase::Won);
        // The burst is spawned and advanced once in the same frame.
        assert!(e.session().particles().particles().iter().all(|p| p.life < 40));
        for _ in 0..39 {
            e.step(Vec::new());
        }
        assert!(e.session().particles().is_empty());
    }

    #[test]
    fn exit_stops_without_ticking() {
        let mut e = engine("CAT");
        assert_eq!(e.step(vec![Intent::Exit]), Flow::Exit);
        assert_eq!(e.frame(), 0);
    }
}
