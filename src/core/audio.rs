//! Audio trigger interface the game calls into
use std::io::{stdout, Write};

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    Correct,
    Incorrect,
    Win,
    Lose,
}

/// Anything that can play a cue. Playback is fire-and-forget.
pub trait AudioSink {
    fn play(&mut self, cue: AudioCue);
}

/// Rings the terminal bell when a round ends. Letter cues stay quiet.
#[derive(Debug, Default)]
pub struct Bell;

impl AudioSink for Bell {
    fn play(&mut self, cue: AudioCue) {
        if !matches!(cue, AudioCue::Win | AudioCue::Lose) {
            return;
        }
        let mut out = stdout();
        if let Err(e) = out.write_all(b"\x07").and_then(|_| out.flush()) {
            debug!(?cue, error = %e, "failed to ring bell");
        }
    }
}

#[derive(Debug, Default)]
pub struct Muted;

impl AudioSink for Muted {
    fn play(&mut self, _cue: AudioCue) {}
}

/// Keeps every cue it was asked to play.
#[derive(Debug, Default)]
pub struct Recorder {
    pub cues: Vec<AudioCue>,
}

impl AudioSink for Recorder {
    fn play(&mut self, cue: AudioCue) {
        self.cues.push(cue);
    }
}

impl<A: AudioSink + ?Sized> AudioSink for Box<A> {
    fn play(&mut self, cue: AudioCue) {
        (**self).play(cue);
    }
}
