/// Bootstrap layer: scene precondition, failure boundary, renderer lifecycle.
pub mod boundary;
pub mod errors;
pub mod launch;
pub mod renderer;

pub use boundary::FailureBoundary;
pub use errors::LaunchError;
pub use launch::Bootstrapper;
pub use renderer::StubRenderer;
