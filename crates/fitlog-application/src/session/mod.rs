//! Session lifecycle management.

mod registry;

pub use registry::SessionRegistry;
