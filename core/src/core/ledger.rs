// stagehub/src/core/ledger.rs

//! The two-map store behind every hub: a FIFO queue of scheduled interfaces
//! and a LIFO stack of completed ones, both keyed by class name.

use indexmap::IndexMap;

/// Interface records keyed by class name, in a meaningful order.
pub type InterfaceMap<T> = IndexMap<String, T>;

/// Where a record currently lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
  Scheduled,
  Completed,
}

/// Scheduled and completed interface records of one hub.
///
/// The scheduled map is a queue: index 0 is the next interface to run. The
/// completed map is a stack: its LAST entry is the most recently completed
/// interface, so completing and undoing are both O(1) at the completed end.
/// Every registered name lives in exactly one of the two maps.
#[derive(Debug, Clone)]
pub struct InterfaceLedger<T> {
  scheduled: InterfaceMap<T>,
  completed: InterfaceMap<T>,
}

impl<T> Default for InterfaceLedger<T> {
  fn default() -> Self {
    Self {
      scheduled: IndexMap::new(),
      completed: IndexMap::new(),
    }
  }
}

// IndexMap equality ignores order; two ledgers are only equal when both
// queues line up entry for entry.
impl<T: PartialEq> PartialEq for InterfaceLedger<T> {
  fn eq(&self, other: &Self) -> bool {
    self.scheduled.iter().eq(other.scheduled.iter()) && self.completed.iter().eq(other.completed.iter())
  }
}

impl<T> InterfaceLedger<T> {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn slot_of(&self, name: &str) -> Option<Slot> {
    if self.scheduled.contains_key(name) {
      Some(Slot::Scheduled)
    } else if self.completed.contains_key(name) {
      Some(Slot::Completed)
    } else {
      None
    }
  }

  pub fn contains(&self, name: &str) -> bool {
    self.slot_of(name).is_some()
  }

  pub fn is_scheduled(&self, name: &str) -> bool {
    self.scheduled.contains_key(name)
  }

  pub fn is_completed(&self, name: &str) -> bool {
    self.completed.contains_key(name)
  }

  pub fn len(&self) -> usize {
    self.scheduled.len() + self.completed.len()
  }

  pub fn is_empty(&self) -> bool {
    self.scheduled.is_empty() && self.completed.is_empty()
  }

  /// Appends to the back of the scheduled queue. The caller checks uniqueness.
  pub(crate) fn push_scheduled(&mut self, name: String, obj: T) {
    debug_assert!(!self.contains(&name));
    self.scheduled.insert(name, obj);
  }

  /// Removes a record from whichever map holds it, keeping the order of the rest.
  pub(crate) fn remove(&mut self, name: &str) -> Option<(Slot, T)> {
    if let Some(obj) = self.scheduled.shift_remove(name) {
      return Some((Slot::Scheduled, obj));
    }
    self.completed.shift_remove(name).map(|obj| (Slot::Completed, obj))
  }

  pub fn get(&self, name: &str) -> Option<&T> {
    self.scheduled.get(name).or_else(|| self.completed.get(name))
  }

  pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut T> {
    match self.scheduled.get_mut(name) {
      Some(obj) => Some(obj),
      None => self.completed.get_mut(name),
    }
  }

  /// Moves a scheduled record onto the top of the completed stack.
  /// Returns false, touching nothing, if `name` is not scheduled.
  pub(crate) fn complete(&mut self, name: &str) -> bool {
    match self.scheduled.shift_remove_entry(name) {
      Some((key, obj)) => {
        self.completed.insert(key, obj);
        true
      }
      None => false,
    }
  }

  /// Pops the most recent completion back to the head of the scheduled queue.
  pub(crate) fn undo_last(&mut self) -> Option<&str> {
    let (name, obj) = self.completed.pop()?;
    self.scheduled.shift_insert(0, name, obj);
    self.scheduled.get_index(0).map(|(name, _)| name.as_str())
  }

  pub fn front_scheduled(&self) -> Option<&str> {
    self.scheduled.get_index(0).map(|(name, _)| name.as_str())
  }

  pub fn last_completed(&self) -> Option<&str> {
    self.completed.last().map(|(name, _)| name.as_str())
  }

  pub fn scheduled(&self) -> &InterfaceMap<T> {
    &self.scheduled
  }

  pub fn scheduled_names(&self) -> impl DoubleEndedIterator<Item = &str> + '_ {
    self.scheduled.keys().map(String::as_str)
  }

  /// Completed names, oldest completion first.
  pub fn completed_names(&self) -> impl DoubleEndedIterator<Item = &str> + '_ {
    self.completed.keys().map(String::as_str)
  }

  /// Completed records, oldest completion first.
  pub fn completed_entries(&self) -> impl DoubleEndedIterator<Item = (&str, &T)> + '_ {
    self.completed.iter().map(|(name, obj)| (name.as_str(), obj))
  }

  pub fn scheduled_entries(&self) -> impl DoubleEndedIterator<Item = (&str, &T)> + '_ {
    self.scheduled.iter().map(|(name, obj)| (name.as_str(), obj))
  }
}
