//! Runtime configuration: an optional JSON file overlaid by command-line flags.

use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Deserialize;

use crate::error::{Error, Result};

#[derive(Parser, Debug, Default)]
#[command(name = "rat-cheese")]
#[command(about = "Guess the word and steer the rat to the cheese before it hits the trap")]
#[command(version)]
pub struct Args {
    /// JSON config file; flags below override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Word list, one word per line
    #[arg(short, long)]
    pub words: Option<PathBuf>,

    /// Seed for word choice and particle effects
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Disable the terminal bell
    #[arg(long)]
    pub mute: bool,

    /// Write logs to this file (the terminal is taken by the game)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log filter, e.g. "info" or "rat_cheese=debug"
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub words: PathBuf,
    pub seed: Option<u64>,
    pub sound: bool,
    pub log_file: Option<PathBuf>,
    pub log_level: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            words: PathBuf::from("wordlist.txt"),
            seed: None,
            sound: true,
            log_file: None,
            log_level: "info".to_string(),
        }
    }
}

impl GameConfig {
    pub fn from_json(text: &str, path: &Path) -> Result<Self> {
        serde_json::from_str(text).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text, path)
    }

    /// Load the file named by `--config` (if any), then apply the other flags.
    pub fn resolve(args: Args) -> Result<Self> {
        let base = match &args.config {
            Some(path) => Self::load_from_file(path)?,
            None => Self::default(),
        };
        Ok(base.with_args(args))
    }

    pub fn with_args(mut self, args: Args) -> Self {
        if let Some(words) = args.words {
            self.words = words;
        }
        if args.seed.is_some() {
            self.seed = args.seed;
        }
        if args.mute {
            self.sound = false;
        }
        if args.log_file.is_some() {
            self.log_file = args.log_file;
        }
        if let Some(level) = args.log_level {
            self.log_level = level;
        }
        self
    }
}
