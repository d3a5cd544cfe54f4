//! Ambient audio drone.
//!
//! Glicol oscillators mixed into an automated master gain, played through
//! cpal. The device and the graph are created on the first toggle.

mod gain;
mod output;
mod synthesis;
mod system;

use thiserror::Error;

// Re-export public types
pub use gain::{GainParam, TargetEvent};
pub use output::{AudioOutput, CpalOutput};
pub use synthesis::{drone_composition, AudioClock, DroneVoice, SharedGain};
pub use system::AmbientAudio;

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("no audio output device found")]
    NoDevice,

    #[error("failed to get audio config: {0}")]
    Config(#[from] cpal::DefaultStreamConfigError),

    #[error("failed to build audio stream: {0}")]
    BuildStream(#[from] cpal::BuildStreamError),

    #[error("failed to start audio stream: {0}")]
    PlayStream(#[from] cpal::PlayStreamError),

    #[error("failed to pause audio stream: {0}")]
    PauseStream(#[from] cpal::PauseStreamError),

    #[error("glicol engine init failed: {0}")]
    Synthesis(String),

    #[error("audio output already started")]
    AlreadyStarted,

    #[error("audio output not started")]
    NotStarted,

    #[error("master gain lock poisoned")]
    GainPoisoned,
}
