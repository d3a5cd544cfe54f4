//! Drone synthesis: Glicol oscillator graph behind a scheduled master gain.

use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use glicol::Engine;

use super::gain::GainParam;
use super::AudioError;
use crate::params::{audio_constants::BLOCK_SIZE, DroneParams};

/// Master gain shared between the control side and the audio callback
pub type SharedGain = Arc<Mutex<GainParam>>;

/// Build the Glicol composition for the drone voices.
///
/// Each voice becomes one reference chain; `o` mixes them before the master
/// gain, which is applied outside the engine so it can be automated.
pub fn drone_composition(params: &DroneParams) -> String {
    let mut code = String::new();
    let mut refs = Vec::with_capacity(params.voices.len());

    for (index, voice) in params.voices.iter().enumerate() {
        let name = format!("~v{}", index);
        let _ = write!(
            code,
            "{}: {} {}",
            name,
            voice.waveform.glicol_node(),
            voice.frequency_hz
        );
        if let Some(cutoff) = voice.lowpass_hz {
            let _ = write!(code, " >> lpf {} {}", cutoff, params.lowpass_q);
        }
        let _ = writeln!(code, " >> mul {}", voice.gain);
        refs.push(name);
    }

    let _ = writeln!(code, "o: mix {}", refs.join(" "));
    code
}

/// Sample-accurate clock advanced by the audio callback
#[derive(Debug, Clone)]
pub struct AudioClock {
    frames: Arc<AtomicU64>,
    sample_rate: u32,
}

impl AudioClock {
    pub fn new(sample_rate: u32) -> Self {
        Self {
            frames: Arc::new(AtomicU64::new(0)),
            sample_rate: sample_rate.max(1),
        }
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Frames rendered so far
    pub fn frames(&self) -> u64 {
        self.frames.load(Ordering::Acquire)
    }

    /// Current audio time in seconds
    pub fn now_s(&self) -> f64 {
        self.frames() as f64 / self.sample_rate as f64
    }

    fn advance(&self, frames: u64) {
        self.frames.fetch_add(frames, Ordering::AcqRel);
    }
}

/// Running drone: oscillator engine plus master gain, rendered block by block
pub struct DroneVoice {
    engine: Engine<BLOCK_SIZE>,
    /// Last rendered engine block (left, right)
    block: [[f32; BLOCK_SIZE]; 2],
    /// Next unread frame in `block`
    cursor: usize,
    gain: SharedGain,
    clock: AudioClock,
    limit: f32,
}

impl DroneVoice {
    /// Build the oscillator graph; oscillators run from the first rendered block
    pub fn new(
        params: &DroneParams,
        sample_rate: u32,
        gain: SharedGain,
    ) -> Result<Self, AudioError> {
        let mut engine = Engine::<BLOCK_SIZE>::new();
        engine.set_sr(sample_rate as usize);
        engine.update_with_code(&drone_composition(params));
        engine
            .update()
            .map_err(|e| AudioError::Synthesis(format!("{:?}", e)))?;

        Ok(Self {
            engine,
            block: [[0.0; BLOCK_SIZE]; 2],
            cursor: BLOCK_SIZE,
            gain,
            clock: AudioClock::new(sample_rate),
            limit: params.output_limit,
        })
    }

    /// Clock advanced by this voice
    pub fn clock(&self) -> AudioClock {
        self.clock.clone()
    }

    fn refill(&mut self) {
        let (buffers, _) = self.engine.next_block(vec![]);
        for i in 0..BLOCK_SIZE {
            self.block[0][i] = buffers[0][i];
            self.block[1][i] = buffers[1][i];
        }
        self.cursor = 0;
    }

    /// Fill an interleaved output buffer with `channels` channels
    pub fn render(&mut self, data: &mut [f32], channels: usize) {
        let channels = channels.max(1);
        let frames = data.len() / channels;
        let start = self.clock.frames();
        let sample_rate = self.clock.sample_rate() as f64;

        // Snapshot the schedule so the control side is never blocked for long
        let gain = match self.gain.lock() {
            Ok(gain) => gain.clone(),
            Err(_) => {
                data.fill(0.0);
                self.clock.advance(frames as u64);
                return;
            }
        };

        for (n, frame) in data.chunks_exact_mut(channels).enumerate() {
            if self.cursor >= BLOCK_SIZE {
                self.refill();
            }

            let t = (start + n as u64) as f64 / sample_rate;
            let level = gain.value_at(t);

            // Safety limiter after the master gain
            let left = (self.block[0][self.cursor] * level).clamp(-self.limit, self.limit);
            let right = (self.block[1][self.cursor] * level).clamp(-self.limit, self.limit);
            self.cursor += 1;

            match frame {
                [mono] => *mono = 0.5 * (left + right),
                [l, r, rest @ ..] => {
                    *l = left;
                    *r = right;
                    rest.fill(0.0);
                }
                [] => {}
            }
        }

        self.clock.advance(frames as u64);
    }
}
