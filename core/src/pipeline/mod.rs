// stagehub/src/pipeline/mod.rs

//! Defines the `Pipeline<T>` struct, a hub whose interfaces complete strictly
//! in scheduled order.

pub mod definition;

// Re-export the main Pipeline struct
pub use definition::Pipeline;
