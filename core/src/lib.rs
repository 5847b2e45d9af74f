// src/lib.rs

//! Stagehub: a synchronous scheduler for pluggable interfaces.
//!
//! Stagehub tracks which interfaces of a multi-stage process have run and in
//! what order, with features like:
//!  - Unordered hubs and strictly ordered pipelines sharing one trait.
//!  - Undo of the most recent completion, rollback to any completed
//!    interface, and full reset.
//!  - Owned snapshots of interface objects plus one explicit mutable checkout.
//!  - A catalog of buildable interface classes per interface type, and a
//!    sequencer that drives hubs by display name.

pub mod core;
pub mod error;
pub mod hub;
pub mod pipeline;
pub mod registry;
pub mod socket;

// --- Re-exports for the Public API ---

pub use crate::core::config::HubConfig;
pub use crate::core::control::{HubOrder, PrecedingView, UpcomingView};
pub use crate::core::hub_trait::InterfaceHub;
pub use crate::core::ledger::{InterfaceLedger, InterfaceMap, Slot};
pub use crate::core::shared::SharedHub;

pub use crate::hub::Hub;
pub use crate::pipeline::Pipeline;

pub use crate::socket::{InterfaceClass, InterfaceFactory, Socket};

pub use crate::error::{ErrorKind, HubError, HubResult, MapScope};

// The sequencer for building interfaces and driving hubs by display name
pub use crate::registry::{Sequencer, SequencerConfig};

/*
    Core Workflow:
    1. Create a `Sequencer<MyInterface>` with the interface types you manage.
    2. Register an `InterfaceClass` per buildable interface, giving it a class
       name, a display name, an optional weight and a factory.
    3. Ask the sequencer for a `Pipeline` (ordered) or `Hub` (unordered).
    4. `sequence` interfaces into it by display name.
    5. Loop: read `next_scheduled`, `checkout` it to bind inputs, run it,
       then `set_completed`.
    6. To redo work, `check_next_scheduled`, `rollback` or `reset`.
*/
