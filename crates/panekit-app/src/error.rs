//! Application errors.

use panekit_core::{ThemeError, WidgetError};
use panekit_render::RendererError;
use thiserror::Error;

/// Errors that stop the application.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("Failed to load theme: {0}")]
    Theme(#[from] ThemeError),
    #[error("Invalid widget tree: {0}")]
    Widget(#[from] WidgetError),
    #[error(transparent)]
    Renderer(#[from] RendererError),
    #[error("Event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("Failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
}

/// Result type for application operations.
pub type AppResult<T> = Result<T, AppError>;
