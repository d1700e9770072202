//! panekit Render Library
//!
//! Drawing surfaces for panekit widgets.
//! [`RecordingSurface`] captures draw calls as a command list; with the
//! `vello-renderer` feature, [`VelloSurface`] builds a Vello scene for
//! GPU presentation.

mod error;
mod recording;

#[cfg(feature = "vello-renderer")]
mod vello_impl;

pub use error::{RenderResult, RendererError};
pub use recording::{DrawCommand, RecordingSurface};

#[cfg(feature = "vello-renderer")]
pub use vello_impl::VelloSurface;
