//! Audio output seam: the cpal device stream, opened on first use.

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};

use super::synthesis::DroneVoice;
use super::AudioError;

/// Sink that plays a drone voice continuously once started
pub trait AudioOutput {
    /// Output sample rate; may open the device
    fn sample_rate(&mut self) -> Result<u32, AudioError>;

    /// Start rendering `voice`. Called at most once per output.
    fn start(&mut self, voice: DroneVoice) -> Result<(), AudioError>;

    /// Whether playback is paused by the host
    fn is_suspended(&self) -> bool;

    fn suspend(&mut self) -> Result<(), AudioError>;

    fn resume(&mut self) -> Result<(), AudioError>;
}

/// Default output device via cpal
#[derive(Default)]
pub struct CpalOutput {
    device: Option<(cpal::Device, cpal::SupportedStreamConfig)>,
    /// Output stream (kept alive)
    stream: Option<cpal::Stream>,
    suspended: bool,
}

impl CpalOutput {
    pub fn new() -> Self {
        Self::default()
    }

    fn open(&mut self) -> Result<&(cpal::Device, cpal::SupportedStreamConfig), AudioError> {
        if self.device.is_none() {
            let host = cpal::default_host();
            let device = host
                .default_output_device()
                .ok_or(AudioError::NoDevice)?;
            let config = device.default_output_config()?;

            log::info!(
                "Audio: {} @ {}Hz, {} channels",
                device.name().unwrap_or_else(|_| "Unknown".to_string()),
                config.sample_rate().0,
                config.channels()
            );
            if config.sample_format() != cpal::SampleFormat::F32 {
                log::warn!(
                    "Audio device prefers {:?}; requesting f32 output",
                    config.sample_format()
                );
            }

            self.device = Some((device, config));
        }

        self.device.as_ref().ok_or(AudioError::NoDevice)
    }
}

impl AudioOutput for CpalOutput {
    fn sample_rate(&mut self) -> Result<u32, AudioError> {
        let (_, config) = self.open()?;
        Ok(config.sample_rate().0)
    }

    fn start(&mut self, voice: DroneVoice) -> Result<(), AudioError> {
        if self.stream.is_some() {
            return Err(AudioError::AlreadyStarted);
        }

        let (device, config) = self.open()?;
        let channels = config.channels() as usize;
        let stream_config: cpal::StreamConfig = config.clone().into();

        let mut voice = voice;
        let stream = device.build_output_stream(
            &stream_config,
            move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                voice.render(data, channels);
            },
            |err| log::error!("Audio stream error: {}", err),
            None,
        )?;
        stream.play()?;

        self.stream = Some(stream);
        self.suspended = false;
        Ok(())
    }

    fn is_suspended(&self) -> bool {
        self.suspended
    }

    fn suspend(&mut self) -> Result<(), AudioError> {
        if let Some(stream) = &self.stream {
            stream.pause()?;
            self.suspended = true;
        }
        Ok(())
    }

    fn resume(&mut self) -> Result<(), AudioError> {
        let stream = self.stream.as_ref().ok_or(AudioError::NotStarted)?;
        stream.play()?;
        self.suspended = false;
        Ok(())
    }
}
