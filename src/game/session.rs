use rand::Rng;
use tracing::{debug, info};

use crate::core::audio::{AudioCue, AudioSink};
use crate::core::input::Intent;
use crate::game::guess::{GuessState, Outcome};
use crate::game::particles::{BurstKind, ParticleSystem, BURST_SIZE};
use crate::game::track::{RatTrack, CHEESE_X, TRACK_Y, TRAP_X};
use crate::game::words::{Word, WordList};

pub const CHEESE_ORIGIN: [f32; 2] = [CHEESE_X as f32, TRACK_Y as f32];
pub const TRAP_ORIGIN: [f32; 2] = [TRAP_X as f32, TRACK_Y as f32];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Won,
    Lost,
}

/// Cumulative results for this run of the program.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub wins: u32,
    pub losses: u32,
}

/// Whether the frame loop should keep going after applying intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Owns every piece of game state. `R` picks words and scatters particles;
/// `A` receives sound cues.
pub struct GameSession<R, A> {
    words: WordList,
    rng: R,
    audio: A,
    guesses: GuessState,
    track: RatTrack,
    phase: Phase,
    score: Score,
    particles: ParticleSystem,
}

impl<R: Rng, A: AudioSink> GameSession<R, A> {
    pub fn new(words: WordList, mut rng: R, audio: A) -> Self {
        let word = words.choose(&mut rng);
        info!(len = word.len(), "round started");
        Self {
            words,
            rng,
            audio,
            guesses: GuessState::new(word),
            track: RatTrack::new(),
            phase: Phase::Playing,
            score: Score::default(),
            particles: ParticleSystem::new(),
        }
    }

    pub fn apply(&mut self, intent: Intent) -> Flow {
        match intent {
            Intent::Guess(letter) => {
                self.guess(letter);
            }
            Intent::Restart => self.restart(),
            Intent::Exit => return Flow::Exit,
        }
        Flow::Continue
    }

    /// Apply a frame's worth of intents, stopping at the first exit.
    pub fn apply_all(&mut self, intents: impl IntoIterator<Item = Intent>) -> Flow {
        for intent in intents {
            if self.apply(intent) == Flow::Exit {
                return Flow::Exit;
            }
        }
        Flow::Continue
    }

    /// Guess a letter. Ignored once the round is over, and for repeats or
    /// non-letters.
    pub fn guess(&mut self, letter: char) -> Option<Outcome> {
        if self.phase != Phase::Playing {
            return None;
        }
        let outcome = self.guesses.apply_guess(letter)?;
        debug!(letter = %letter.to_ascii_uppercase(), ?outcome, "guess");

        self.track.adjust(outcome);
        self.audio.play(match outcome {
            Outcome::Correct => AudioCue::Correct,
            Outcome::Incorrect => AudioCue::Incorrect,
        });
        self.settle();
        Some(outcome)
    }

    /// Only one branch can fire, and only while still playing.
    fn settle(&mut self) {
        if self.phase != Phase::Playing {
            return;
        }

        if self.guesses.is_fully_revealed() || self.track.at_cheese() {
            self.phase = Phase::Won;
            self.score.wins += 1;
            self.audio.play(AudioCue::Win);
            self.particles
                .spawn_burst(CHEESE_ORIGIN, BURST_SIZE, BurstKind::Cheese, &mut self.rng);
            info!(word = %self.guesses.word(), wins = self.score.wins, "round won");
        } else if self.track.at_trap() {
            self.phase = Phase::Lost;
            self.score.losses += 1;
            self.audio.play(AudioCue::Lose);
            self.particles
                .spawn_burst(TRAP_ORIGIN, BURST_SIZE, BurstKind::Trap, &mut self.rng);
            info!(word = %self.guesses.word(), losses = self.score.losses, "round lost");
        }
    }

    /// Start a new round with a fresh word. The score carries over.
    pub fn restart(&mut self) {
        let word = self.words.choose(&mut self.rng);
        self.guesses = GuessState::new(word);
        self.track.reset();
        self.particles.clear();
        self.phase = Phase::Playing;
        info!(
            len = self.guesses.word().len(),
            wins = self.score.wins,
            losses = self.score.losses,
            "round restarted"
        );
    }

    /// Advance particles one frame.
    pub fn tick(&mut self) {
        self.particles.tick();
    }
}

impl<R, A> GameSession<R, A> {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn word(&self) -> &Word {
        self.guesses.word()
    }

    pub fn guesses(&self) -> &GuessState {
        &self.guesses
    }

    pub fn display_word(&self) -> String {
        self.guesses.display_word()
    }

    pub fn correct(&self) -> impl Iterator<Item = char> + '_ {
        self.guesses.correct()
    }

    pub fn incorrect(&self) -> impl Iterator<Item = char> + '_ {
        self.guesses.incorrect()
    }

    pub fn rat_position(&self) -> f64 {
        self.track.position()
    }

    pub fn particles(&self) -> &ParticleSystem {
        &self.particles
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn is_over(&self) -> bool {
        self.phase != Phase::Playing
    }
}
