/// Configuration layer: layering defaults, environment and arguments into one value.
pub mod render;
pub mod resolve;
pub mod source;

pub use render::RenderConfiguration;
pub use resolve::load;
