// stagehub/src/core/hub_trait.rs

//! Defines the `InterfaceHub<T>` trait shared by [`Hub`](crate::Hub) and
//! [`Pipeline`](crate::Pipeline).
//!
//! Implementors only expose their configuration, ordering and ledger; the
//! registry and history operations are provided here. A pipeline overrides
//! `next_scheduled`, `set_completed` and `check_next_scheduled` to enforce
//! strict FIFO completion.

use crate::core::config::HubConfig;
use crate::core::control::{HubOrder, PrecedingView, UpcomingView};
use crate::core::ledger::{InterfaceLedger, InterfaceMap};
use crate::error::{HubError, HubResult, MapScope};
use tracing::{event, instrument, Level};

/// A registry of named interface objects split into scheduled and completed.
///
/// The trait is object safe, so a controller can drive hubs and pipelines
/// through `&mut dyn InterfaceHub<T>`.
pub trait InterfaceHub<T: Clone + 'static> {
  fn config(&self) -> &HubConfig;

  fn order(&self) -> HubOrder;

  fn ledger(&self) -> &InterfaceLedger<T>;

  fn ledger_mut(&mut self) -> &mut InterfaceLedger<T>;

  fn interface_type(&self) -> &str {
    &self.config().interface_type
  }

  fn has_order(&self) -> bool {
    self.order().is_linear()
  }

  fn contains(&self, name: &str) -> bool {
    self.ledger().contains(name)
  }

  fn len(&self) -> usize {
    self.ledger().len()
  }

  fn is_empty(&self) -> bool {
    self.ledger().is_empty()
  }

  // --- Registration ---

  /// Associates an interface object with the hub, at the back of the schedule.
  fn add_interface(&mut self, name: &str, obj: T) -> HubResult<()> {
    if self.ledger().contains(name) {
      event!(Level::WARN, interface_type = %self.interface_type(), interface = name, "Interface already associated.");
      return Err(HubError::DuplicateKey {
        interface_type: self.interface_type().to_string(),
        name: name.to_string(),
      });
    }
    self.ledger_mut().push_scheduled(name.to_string(), obj);
    event!(Level::DEBUG, interface_type = %self.interface_type(), interface = name, "Interface added.");
    Ok(())
  }

  /// Dissociates an interface from the hub, returning its object.
  fn remove_interface(&mut self, name: &str) -> HubResult<T> {
    let (slot, obj) = self
      .ledger_mut()
      .remove(name)
      .ok_or_else(|| HubError::not_found(name, MapScope::Any))?;
    event!(Level::DEBUG, interface_type = %self.interface_type(), interface = name, ?slot, "Interface removed.");
    Ok(obj)
  }

  /// Replaces the object stored for `name`, leaving it in its current map.
  fn refresh_interface(&mut self, name: &str, obj: T) -> HubResult<()> {
    let slot = self
      .ledger_mut()
      .get_mut(name)
      .ok_or_else(|| HubError::not_found(name, MapScope::Any))?;
    *slot = obj;
    event!(Level::DEBUG, interface_type = %self.interface_type(), interface = name, "Interface refreshed.");
    Ok(())
  }

  // --- Object access ---

  /// An owned copy of the stored object. Scheduled interfaces are searched
  /// before completed ones.
  fn interface_obj(&self, name: &str) -> HubResult<T> {
    self
      .ledger()
      .get(name)
      .cloned()
      .ok_or_else(|| HubError::not_found(name, MapScope::Any))
  }

  /// Same as [`interface_obj`](InterfaceHub::interface_obj).
  fn snapshot(&self, name: &str) -> HubResult<T> {
    self.interface_obj(name)
  }

  /// Live handle on the stored object, e.g. to bind inputs just before the
  /// interface runs. The borrow ends before the hub can be mutated again.
  fn checkout(&mut self, name: &str) -> HubResult<&mut T> {
    self
      .ledger_mut()
      .get_mut(name)
      .ok_or_else(|| HubError::not_found(name, MapScope::Any))
  }

  // --- Ordered views ---

  /// Entries strictly before `name`. Always empty for unordered hubs, and
  /// when `name` is not part of the chosen view.
  fn preceding_interfaces(&self, name: &str, view: PrecedingView) -> InterfaceMap<T> {
    if !self.has_order() {
      return InterfaceMap::new();
    }
    let sequence = match view {
      PrecedingView::Full => full_sequence(self.ledger()),
      PrecedingView::ScheduledOnly => self.ledger().scheduled_entries().collect(),
    };
    match sequence.iter().position(|(key, _)| *key == name) {
      Some(index) => to_map(&sequence[..index]),
      None => InterfaceMap::new(),
    }
  }

  /// Entries at or after `name`. Always empty for unordered hubs, and when
  /// `name` is not part of the chosen view.
  fn upcoming_interfaces(&self, name: &str, view: UpcomingView) -> InterfaceMap<T> {
    if !self.has_order() {
      return InterfaceMap::new();
    }
    let sequence = match view {
      UpcomingView::Full => full_sequence(self.ledger()),
      UpcomingView::CompletedOnly => self.ledger().completed_entries().collect(),
    };
    match sequence.iter().position(|(key, _)| *key == name) {
      Some(index) => to_map(&sequence[index..]),
      None => InterfaceMap::new(),
    }
  }

  /// Completed interfaces, oldest completion first.
  fn completed_map(&self) -> InterfaceMap<T> {
    to_map(&self.ledger().completed_entries().collect::<Vec<_>>())
  }

  fn scheduled_map(&self) -> InterfaceMap<T> {
    self.ledger().scheduled().clone()
  }

  /// Scheduled interfaces in run order, then completed ones oldest first.
  fn interface_map(&self) -> InterfaceMap<T> {
    to_map(&full_sequence(self.ledger()))
  }

  // --- Names ---

  /// The first scheduled interface.
  fn next_scheduled(&self) -> Option<&str> {
    self.ledger().front_scheduled()
  }

  fn last_completed(&self) -> Option<&str> {
    self.ledger().last_completed()
  }

  fn scheduled_cls_names(&self) -> Vec<String> {
    self.ledger().scheduled_names().map(str::to_string).collect()
  }

  /// Completed names, oldest completion first.
  fn completed_cls_names(&self) -> Vec<String> {
    self.ledger().completed_names().map(str::to_string).collect()
  }

  /// Completed names, most recent completion first. This is the order
  /// `undo` walks.
  fn recent_completions(&self) -> Vec<String> {
    self.ledger().completed_names().rev().map(str::to_string).collect()
  }

  fn sequenced_cls_names(&self) -> Vec<String> {
    let ledger = self.ledger();
    ledger
      .scheduled_names()
      .chain(ledger.completed_names())
      .map(str::to_string)
      .collect()
  }

  // --- History ---

  /// Marks a scheduled interface as completed. Any scheduled name is
  /// accepted. Does nothing when the hub was built with `no_complete`.
  fn set_completed(&mut self, name: &str) -> HubResult<()> {
    if self.config().no_complete {
      event!(Level::TRACE, interface_type = %self.interface_type(), interface = name, "Completion suppressed by no_complete.");
      return Ok(());
    }
    if !self.ledger_mut().complete(name) {
      return Err(HubError::not_found(name, MapScope::Scheduled));
    }
    event!(Level::DEBUG, interface_type = %self.interface_type(), interface = name, "Interface completed.");
    Ok(())
  }

  fn is_completed(&self, name: &str) -> bool {
    self.ledger().is_completed(name)
  }

  /// Moves the most recent completion back to the head of the schedule.
  /// Returns false if nothing was completed.
  fn undo(&mut self) -> bool {
    let interface_type = self.interface_type().to_string();
    match self.ledger_mut().undo_last() {
      Some(name) => {
        event!(Level::DEBUG, interface_type = %interface_type, interface = name, "Completion undone.");
        true
      }
      None => false,
    }
  }

  /// Undoes completions until `name` is scheduled again.
  #[instrument(
    name = "InterfaceHub::rollback",
    skip(self),
    fields(interface_type = %self.interface_type()),
    err(Display)
  )]
  fn rollback(&mut self, name: &str) -> HubResult<()> {
    if !self.ledger().is_completed(name) {
      return Err(HubError::not_found(name, MapScope::Completed));
    }
    while self.ledger().is_completed(name) {
      self.undo();
    }
    event!(Level::DEBUG, next = ?self.next_scheduled(), "Rollback finished.");
    Ok(())
  }

  /// Undoes every completion.
  #[instrument(name = "InterfaceHub::reset", skip_all, fields(interface_type = %self.interface_type()))]
  fn reset(&mut self) {
    let mut undone = 0usize;
    while self.undo() {
      undone += 1;
    }
    event!(Level::INFO, undone, "Hub reset.");
  }

  /// Makes `name` eligible to run next if possible. A scheduled name needs
  /// nothing; a completed one is rolled back.
  fn check_next_scheduled(&mut self, name: &str) -> HubResult<()> {
    if self.ledger().is_scheduled(name) {
      Ok(())
    } else if self.ledger().is_completed(name) {
      self.rollback(name)
    } else {
      event!(Level::WARN, interface_type = %self.interface_type(), interface = name, "Interface can not be scheduled.");
      Err(HubError::NotSchedulable { name: name.to_string() })
    }
  }
}

fn full_sequence<T>(ledger: &InterfaceLedger<T>) -> Vec<(&str, &T)> {
  ledger.scheduled_entries().chain(ledger.completed_entries()).collect()
}

fn to_map<T: Clone>(entries: &[(&str, &T)]) -> InterfaceMap<T> {
  entries
    .iter()
    .map(|(name, obj)| ((*name).to_string(), (*obj).clone()))
    .collect()
}
