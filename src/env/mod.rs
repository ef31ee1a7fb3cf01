/// Environment layer: the `VKGS_` variable family and its typed parsing.
pub mod errors;
pub mod schema;
pub mod value;

pub use errors::EnvError;
pub use schema::{
    EnvSchema, EnvSnapshot, IMMEDIATE_SWAPCHAIN, PHYSICAL_DEVICE, VALIDATION_LAYERS, process_vars,
};
