//! Top-level application error.

use thiserror::Error;

use crate::audio::AudioError;
use crate::contact::{ConfigError, SendError, SubmitError};
use crate::content::ContentError;
use crate::rendering::RenderError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("audio: {0}")]
    Audio(#[from] AudioError),

    #[error("render: {0}")]
    Render(#[from] RenderError),

    #[error("content: {0}")]
    Content(#[from] ContentError),

    #[error("config: {0}")]
    Config(#[from] ConfigError),

    #[error("send: {0}")]
    Send(#[from] SendError),

    #[error("contact form: {0}")]
    Submit(#[from] SubmitError),

    #[error("event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("window: {0}")]
    Window(#[from] winit::error::OsError),
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;
