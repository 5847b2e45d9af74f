// stagehub/src/hub/mod.rs

//! Defines the unordered `Hub<T>` registry.

pub mod definition;

pub use definition::Hub;
