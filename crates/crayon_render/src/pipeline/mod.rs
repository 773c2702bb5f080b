//! Rendering pipeline components

pub mod types;
pub mod render_pipeline;

pub use types::RenderUniforms;
pub use render_pipeline::RenderPipeline;
