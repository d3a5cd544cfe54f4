//! Ambient drone configuration and constants.

/// Oscillator waveform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Sawtooth,
    Triangle,
}

impl Waveform {
    /// Glicol node name for this waveform
    pub fn glicol_node(self) -> &'static str {
        match self {
            Waveform::Sine => "sin",
            Waveform::Sawtooth => "saw",
            Waveform::Triangle => "tri",
        }
    }
}

/// One tone generator feeding the master gain
#[derive(Debug, Clone)]
pub struct VoiceParams {
    pub waveform: Waveform,

    /// Oscillator frequency (Hz)
    pub frequency_hz: f32,

    /// Optional low-pass cutoff before the voice gain (Hz)
    pub lowpass_hz: Option<f32>,

    /// Voice gain (linear)
    pub gain: f32,
}

/// Smoothed master-gain transition
#[derive(Debug, Clone, Copy)]
pub struct FadeParams {
    /// Master gain the fade approaches (linear)
    pub target: f32,

    /// Exponential time constant (seconds)
    pub time_constant_s: f64,
}

/// Ambient drone parameters
#[derive(Debug, Clone)]
pub struct DroneParams {
    /// Tone generators mixed into the master gain
    pub voices: Vec<VoiceParams>,

    /// Low-pass resonance (Q) for filtered voices
    pub lowpass_q: f32,

    /// Master gain before the first toggle (linear)
    pub initial_gain: f32,

    /// Fade applied when the drone is switched on
    pub fade_in: FadeParams,

    /// Fade applied when the drone is switched off
    pub fade_out: FadeParams,

    /// Hard output clip (linear), applied after the master gain
    pub output_limit: f32,

    /// Sample rate used when no device rate is known (Hz)
    pub fallback_sample_rate_hz: u32,
}

impl Default for DroneParams {
    fn default() -> Self {
        Self {
            voices: vec![
                // Sub bass foundation
                VoiceParams {
                    waveform: Waveform::Sine,
                    frequency_hz: 50.0,
                    lowpass_hz: None,
                    gain: 0.4,
                },
                // Detuned half a hertz for a slow beat against the sine
                VoiceParams {
                    waveform: Waveform::Sawtooth,
                    frequency_hz: 50.5,
                    lowpass_hz: Some(120.0),
                    gain: 0.15,
                },
                // Octave-up presence
                VoiceParams {
                    waveform: Waveform::Triangle,
                    frequency_hz: 100.0,
                    lowpass_hz: None,
                    gain: 0.05,
                },
            ],
            lowpass_q: 1.0,
            initial_gain: 0.0,
            fade_in: FadeParams {
                target: 0.1,
                time_constant_s: 1.0,
            },
            fade_out: FadeParams {
                target: 0.0,
                time_constant_s: 0.5,
            },
            output_limit: 0.5,
            fallback_sample_rate_hz: 44100,
        }
    }
}

/// Audio constants (compile-time, match Glicol engine setup)
pub mod audio_constants {
    /// Audio block size (samples per buffer)
    /// 128 = 2.9ms @ 44.1kHz
    pub const BLOCK_SIZE: usize = 128;
}
