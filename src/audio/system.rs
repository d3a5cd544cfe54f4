//! Ambient drone toggled on and off by user gestures.

use std::sync::{Arc, Mutex};

use super::gain::{GainParam, TargetEvent};
use super::output::{AudioOutput, CpalOutput};
use super::synthesis::{AudioClock, DroneVoice, SharedGain};
use super::AudioError;
use crate::params::{DroneParams, FadeParams};

/// Control-side handles into a running drone
struct DroneGraph {
    gain: SharedGain,
    clock: AudioClock,
}

impl DroneGraph {
    /// Cancel pending gain changes and start a smooth approach to the fade target
    fn fade(&self, fade: FadeParams) -> Result<(), AudioError> {
        let now = self.clock.now_s();
        let mut gain = self.gain.lock().map_err(|_| AudioError::GainPoisoned)?;
        gain.cancel_scheduled_values(now);
        gain.set_target_at_time(fade.target, now, fade.time_constant_s);
        Ok(())
    }
}

/// Ambient drone with lazily built audio graph
pub struct AmbientAudio<O: AudioOutput = CpalOutput> {
    output: O,
    /// Built on the first toggle, then kept for the lifetime of the drone
    graph: Option<DroneGraph>,
    playing: bool,
    params: DroneParams,
}

impl AmbientAudio<CpalOutput> {
    /// Drone on the default output device (nothing is opened until the first toggle)
    pub fn new(params: DroneParams) -> Self {
        Self::with_output(CpalOutput::new(), params)
    }
}

impl<O: AudioOutput> AmbientAudio<O> {
    pub fn with_output(output: O, params: DroneParams) -> Self {
        Self {
            output,
            graph: None,
            playing: false,
            params,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Whether the audio graph has been built
    pub fn is_initialized(&self) -> bool {
        self.graph.is_some()
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    /// Scheduled master gain changes (empty before the first toggle)
    pub fn gain_events(&self) -> Vec<TargetEvent> {
        self.graph
            .as_ref()
            .and_then(|graph| graph.gain.lock().ok().map(|g| g.events().to_vec()))
            .unwrap_or_default()
    }

    fn build_graph(&mut self) -> Result<DroneGraph, AudioError> {
        let sample_rate = self.output.sample_rate()?;
        let gain: SharedGain = Arc::new(Mutex::new(GainParam::new(self.params.initial_gain)));
        let voice = DroneVoice::new(&self.params, sample_rate, Arc::clone(&gain))?;
        let clock = voice.clock();

        self.output.start(voice)?;
        log::info!(
            "Ambient drone started ({} voices @ {}Hz)",
            self.params.voices.len(),
            sample_rate
        );

        Ok(DroneGraph { gain, clock })
    }

    /// Flip between playing and muted, returning the new state.
    ///
    /// The first call builds the audio graph; a suspended output is resumed.
    pub fn toggle(&mut self) -> Result<bool, AudioError> {
        if self.graph.is_none() {
            self.graph = Some(self.build_graph()?);
        }

        if self.output.is_suspended() {
            self.output.resume()?;
        }

        let fade = if self.playing {
            self.params.fade_out
        } else {
            self.params.fade_in
        };

        if let Some(graph) = &self.graph {
            graph.fade(fade)?;
        }
        self.playing = !self.playing;

        log::debug!("Ambient drone {}", if self.playing { "on" } else { "muted" });
        Ok(self.playing)
    }

    /// Pause output while the host hides the window
    pub fn suspend(&mut self) -> Result<(), AudioError> {
        if self.graph.is_some() && !self.output.is_suspended() {
            self.output.suspend()?;
        }
        Ok(())
    }

    /// Resume output after `suspend` if the drone is meant to be audible
    pub fn resume_if_playing(&mut self) -> Result<(), AudioError> {
        if self.playing && self.output.is_suspended() {
            self.output.resume()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Output that accepts a voice without a device
    #[derive(Default)]
    struct NullOutput {
        starts: usize,
        resumes: usize,
        suspended: bool,
        voice: Option<DroneVoice>,
    }

    impl AudioOutput for NullOutput {
        fn sample_rate(&mut self) -> Result<u32, AudioError> {
            Ok(44100)
        }

        fn start(&mut self, voice: DroneVoice) -> Result<(), AudioError> {
            self.starts += 1;
            self.voice = Some(voice);
            Ok(())
        }

        fn is_suspended(&self) -> bool {
            self.suspended
        }

        fn suspend(&mut self) -> Result<(), AudioError> {
            self.suspended = true;
            Ok(())
        }

        fn resume(&mut self) -> Result<(), AudioError> {
            self.resumes += 1;
            self.suspended = false;
            Ok(())
        }
    }

    /// Output whose device cannot be opened
    struct MissingOutput;

    impl AudioOutput for MissingOutput {
        fn sample_rate(&mut self) -> Result<u32, AudioError> {
            Err(AudioError::NoDevice)
        }

        fn start(&mut self, _voice: DroneVoice) -> Result<(), AudioError> {
            Err(AudioError::NoDevice)
        }

        fn is_suspended(&self) -> bool {
            false
        }

        fn suspend(&mut self) -> Result<(), AudioError> {
            Ok(())
        }

        fn resume(&mut self) -> Result<(), AudioError> {
            Ok(())
        }
    }

    fn drone() -> AmbientAudio<NullOutput> {
        AmbientAudio::with_output(NullOutput::default(), DroneParams::default())
    }

    #[test]
    fn test_graph_built_lazily() {
        let mut audio = drone();
        assert!(!audio.is_initialized());
        assert_eq!(audio.output().starts, 0);
        assert!(audio.gain_events().is_empty());

        audio.toggle().unwrap();
        assert!(audio.is_initialized());
        assert_eq!(audio.output().starts, 1);
    }

    #[test]
    fn test_toggle_on_fades_in() {
        let mut audio = drone();

        assert!(audio.toggle().unwrap());
        assert!(audio.is_playing());

        let events = audio.gain_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].target, 0.1);
        assert_eq!(events[0].time_constant_s, 1.0);
    }

    #[test]
    fn test_toggle_on_then_off_schedules_single_ramp_to_zero() {
        let mut audio = drone();

        audio.toggle().unwrap();
        assert!(!audio.toggle().unwrap());
        assert!(!audio.is_playing());

        let events = audio.gain_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].target, 0.0);
        assert_eq!(events[0].time_constant_s, 0.5);
    }

    #[test]
    fn test_toggle_pairs_return_to_start_without_rebuilding() {
        let mut audio = drone();

        for _ in 0..3 {
            let before = audio.is_playing();
            audio.toggle().unwrap();
            audio.toggle().unwrap();
            assert_eq!(audio.is_playing(), before);
        }
        assert_eq!(audio.output().starts, 1);
    }

    #[test]
    fn test_toggle_resumes_suspended_output() {
        let mut audio = drone();
        audio.toggle().unwrap();

        audio.suspend().unwrap();
        assert!(audio.output().is_suspended());

        audio.toggle().unwrap();
        assert!(!audio.output().is_suspended());
        assert_eq!(audio.output().resumes, 1);
    }

    #[test]
    fn test_suspend_before_first_toggle_is_noop() {
        let mut audio = drone();
        audio.suspend().unwrap();
        assert!(!audio.output().is_suspended());
    }

    #[test]
    fn test_resume_only_when_playing() {
        let mut audio = drone();
        audio.toggle().unwrap();
        audio.toggle().unwrap();
        audio.suspend().unwrap();

        audio.resume_if_playing().unwrap();
        assert!(audio.output().is_suspended());

        audio.toggle().unwrap();
        audio.suspend().unwrap();
        audio.resume_if_playing().unwrap();
        assert!(!audio.output().is_suspended());
    }

    #[test]
    fn test_failed_init_leaves_drone_off() {
        let mut audio = AmbientAudio::with_output(MissingOutput, DroneParams::default());

        assert!(matches!(audio.toggle(), Err(AudioError::NoDevice)));
        assert!(!audio.is_playing());
        assert!(!audio.is_initialized());
    }

    #[test]
    fn test_fade_follows_rendered_clock() {
        let mut audio = drone();
        audio.toggle().unwrap();

        // Render half a second on the voice held by the output
        if let Some(voice) = audio.output.voice.as_mut() {
            let mut data = vec![0.0f32; 22050 * 2];
            voice.render(&mut data, 2);
        }

        audio.toggle().unwrap();
        let events = audio.gain_events();
        assert!((events[0].start_s - 0.5).abs() < 1e-9);
    }
}
