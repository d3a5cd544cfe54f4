//! Parameter definitions with physical units and documented semantics.
//!
//! All magic numbers of the background scene and the ambient drone live here:
//! - Units (world units, seconds, Hz, pixels)
//! - Documented meanings
//! - `Default` gives the shipped look and sound

mod audio;
mod render;
mod scene;

// Re-export all types
pub use audio::{audio_constants, DroneParams, FadeParams, VoiceParams, Waveform};
pub use render::{hex_to_linear, srgb_to_linear, CameraParams, FogParams, RenderConfig};
pub use scene::{
    FloatParams, ParticleSphereParams, ShapeParams, StarFieldParams, WaveGridParams,
    GRID_RESOLUTION,
};
