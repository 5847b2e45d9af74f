// stagehub/src/hub/definition.rs

//! Contains the `Hub<T>` struct: a registry of interface objects that tracks
//! completion without enforcing a run order.

use crate::core::config::HubConfig;
use crate::core::control::HubOrder;
use crate::core::hub_trait::InterfaceHub;
use crate::core::ledger::InterfaceLedger;
use tracing::{event, Level};

/// Groups the interfaces of one interface type and records which of them
/// have run.
///
/// Any scheduled interface may be completed at any time, and
/// `check_next_scheduled` accepts every scheduled name. Preceding/upcoming
/// queries come back empty unless the hub is given [`HubOrder::Linear`]; use
/// [`Pipeline`](crate::Pipeline) when completion itself must be ordered.
#[derive(Debug, Clone, PartialEq)]
pub struct Hub<T> {
  config: HubConfig,
  order: HubOrder,
  ledger: InterfaceLedger<T>,
}

impl<T> Hub<T> {
  pub fn new<S: Into<String>>(interface_type: S) -> Self {
    Self::with_config(HubConfig::new(interface_type))
  }

  pub fn with_config(config: HubConfig) -> Self {
    event!(Level::TRACE, interface_type = %config.interface_type, no_complete = config.no_complete, "Hub constructed.");
    Self {
      config,
      order: HubOrder::Unordered,
      ledger: InterfaceLedger::new(),
    }
  }

  /// Switches preceding/upcoming queries on or off. Completion stays
  /// unrestricted either way.
  pub fn set_order(&mut self, order: HubOrder) {
    self.order = order;
  }
}

impl<T: Clone + 'static> InterfaceHub<T> for Hub<T> {
  fn config(&self) -> &HubConfig {
    &self.config
  }

  fn order(&self) -> HubOrder {
    self.order
  }

  fn ledger(&self) -> &InterfaceLedger<T> {
    &self.ledger
  }

  fn ledger_mut(&mut self) -> &mut InterfaceLedger<T> {
    &mut self.ledger
  }
}
