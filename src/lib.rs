pub mod core {
	pub mod audio;
	pub mod engine;
	pub mod input;
	pub mod renderer;
}

pub mod config;
pub mod error;
pub mod game;

// Re-export for convenience
pub use crate::core::engine::Engine;
pub use crate::game::session::{GameSession, Phase, Score};
