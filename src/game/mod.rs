//! Rat, Cheese & Trap game logic - no terminal or audio backends in here
pub mod guess;
pub mod particles;
pub mod renderer;
pub mod session;
pub mod track;
pub mod words;

pub use guess::{GuessState, Outcome};
pub use particles::{BurstKind, Particle, ParticleSystem};
pub use renderer::RatCheeseRenderer;
pub use session::{Flow, GameSession, Phase, Score};
pub use track::RatTrack;
pub use words::{Word, WordList};
