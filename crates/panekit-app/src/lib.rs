//! panekit Application
//!
//! Native shell for panekit: opens a window, feeds pointer events into a
//! [`panekit_core::PointerState`], and presents one frame of the demo
//! widget tree per redraw.

mod config;
pub mod demo;
mod error;

#[cfg(feature = "native")]
mod app;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

#[cfg(feature = "native")]
pub use app::{App, run};
