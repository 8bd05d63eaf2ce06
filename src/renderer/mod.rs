//! Rendering module
//!
//! The game composes a [`Frame`] each tick and hands it to a [`Surface`].
//! `pipeline::RenderState` draws frames with wgpu as colored triangles.

pub mod font;
pub mod frame;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

use thiserror::Error;

pub use frame::{DrawCommand, Frame, TextAnchor, compose};
pub use pipeline::RenderState;
pub use vertex::{Color, Vertex, colors};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to acquire surface texture: {0}")]
    Surface(#[from] wgpu::SurfaceError),
}

#[derive(Debug, Error)]
pub enum RenderInitError {
    #[error("failed to create window surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),
    #[error("no compatible graphics adapter: {0}")]
    RequestAdapter(#[from] wgpu::RequestAdapterError),
    #[error("failed to create graphics device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
    #[error("surface reports no supported texture formats")]
    NoSurfaceFormat,
}

/// Something a frame can be presented to
pub trait Surface {
    /// Draw `frame` and show it
    fn present(&mut self, frame: &Frame) -> Result<(), RenderError>;
}
