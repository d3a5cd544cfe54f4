//! Cybernode - animated cyber portfolio background with an ambient drone

pub mod audio;
pub mod camera;
pub mod cli;
pub mod contact;
pub mod content;
pub mod error;
pub mod params;
pub mod rendering;
pub mod scene;
