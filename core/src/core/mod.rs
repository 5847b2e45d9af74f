pub mod config;
pub mod control;
pub mod hub_trait;
pub mod ledger;
pub mod shared;

// Re-export key types for easier access from other stagehub modules (and lib.rs)
pub use config::HubConfig;
pub use control::{HubOrder, PrecedingView, UpcomingView};
pub use hub_trait::InterfaceHub;
pub use ledger::{InterfaceLedger, InterfaceMap, Slot};
pub use shared::SharedHub;
