// stagehub/src/pipeline/definition.rs

//! Contains the `Pipeline<T>` struct definition and the ordering rules it
//! layers on top of the hub operations.

use crate::core::config::HubConfig;
use crate::core::control::HubOrder;
use crate::core::hub_trait::InterfaceHub;
use crate::core::ledger::InterfaceLedger;
use crate::error::{HubError, HubResult};
use tracing::{event, Level};

/// A hub with a strict linear order.
///
/// Only the head of the schedule can be completed. Because `undo` always
/// takes the most recent completion and puts it back at the head, rolling
/// back to an earlier interface also rolls back everything completed after
/// it, and the schedule stays in its original order.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipeline<T> {
  config: HubConfig,
  ledger: InterfaceLedger<T>,
}

impl<T> Pipeline<T> {
  pub fn new<S: Into<String>>(interface_type: S) -> Self {
    Self::with_config(HubConfig::new(interface_type))
  }

  pub fn with_config(config: HubConfig) -> Self {
    event!(Level::TRACE, interface_type = %config.interface_type, no_complete = config.no_complete, "Pipeline constructed.");
    Self {
      config,
      ledger: InterfaceLedger::new(),
    }
  }
}

impl<T: Clone + 'static> Pipeline<T> {
  /// Completes whatever is at the head of the schedule and returns its name.
  ///
  /// With `no_complete` set nothing moves: the head, if any, is returned and
  /// stays scheduled, and an empty pipeline is not an error.
  pub fn complete_next(&mut self) -> HubResult<Option<String>> {
    let next = self.ledger.front_scheduled().map(str::to_string);
    if self.config.no_complete {
      event!(Level::TRACE, interface_type = %self.config.interface_type, next = ?next, "Completion suppressed by no_complete.");
      return Ok(next);
    }
    let next = next.ok_or_else(|| HubError::NothingScheduled {
      interface_type: self.config.interface_type.clone(),
    })?;
    self.set_completed(&next)?;
    Ok(Some(next))
  }
}

impl<T: Clone + 'static> InterfaceHub<T> for Pipeline<T> {
  fn config(&self) -> &HubConfig {
    &self.config
  }

  fn order(&self) -> HubOrder {
    HubOrder::Linear
  }

  fn ledger(&self) -> &InterfaceLedger<T> {
    &self.ledger
  }

  fn ledger_mut(&mut self) -> &mut InterfaceLedger<T> {
    &mut self.ledger
  }

  /// The only interface allowed to complete next.
  fn next_scheduled(&self) -> Option<&str> {
    self.ledger.front_scheduled()
  }

  fn set_completed(&mut self, name: &str) -> HubResult<()> {
    let next = self.next_scheduled();
    if next != Some(name) {
      event!(Level::WARN, interface_type = %self.config.interface_type, interface = name, expected = ?next, "Out of order completion rejected.");
      return Err(HubError::OutOfOrder {
        name: name.to_string(),
        expected: next.map(str::to_string),
      });
    }
    if self.config.no_complete {
      event!(Level::TRACE, interface_type = %self.config.interface_type, interface = name, "Completion suppressed by no_complete.");
      return Ok(());
    }
    self.ledger.complete(name);
    event!(Level::DEBUG, interface_type = %self.config.interface_type, interface = name, next = ?self.ledger.front_scheduled(), "Interface completed.");
    Ok(())
  }

  /// Accepts the current head, rolls back a completed interface, and rejects
  /// everything else, including scheduled interfaces further down the queue.
  fn check_next_scheduled(&mut self, name: &str) -> HubResult<()> {
    if self.next_scheduled() == Some(name) {
      Ok(())
    } else if self.ledger.is_completed(name) {
      self.rollback(name)
    } else {
      event!(Level::WARN, interface_type = %self.config.interface_type, interface = name, next = ?self.next_scheduled(), "Interface can not be scheduled.");
      Err(HubError::NotSchedulable { name: name.to_string() })
    }
  }
}
