// stagehub/src/core/shared.rs

//! `SharedHub<H>`: one hub or pipeline shared between threads.
//!
//! Hubs themselves do no locking. Every mutating call takes `&mut self`, and
//! a check followed by a mutation (read the head, bind inputs, complete it)
//! spans several calls. `SharedHub` puts the hub behind a
//! `parking_lot::RwLock` and runs each such sequence under a single guard.

use crate::core::hub_trait::InterfaceHub;
use crate::error::HubResult;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;
use tracing::{event, Level};

#[derive(Debug)]
pub struct SharedHub<H>(Arc<RwLock<H>>);

impl<H> SharedHub<H> {
  pub fn new(hub: H) -> Self {
    SharedHub(Arc::new(RwLock::new(hub)))
  }

  pub fn read(&self) -> RwLockReadGuard<'_, H> {
    self.0.read()
  }

  pub fn write(&self) -> RwLockWriteGuard<'_, H> {
    self.0.write()
  }

  /// The write guard, or `None` while another handle holds any guard.
  pub fn try_write(&self) -> Option<RwLockWriteGuard<'_, H>> {
    self.0.try_write()
  }

  /// Runs `f` against the hub under one read guard.
  pub fn with_read<R>(&self, f: impl FnOnce(&H) -> R) -> R {
    f(&self.0.read())
  }

  /// Runs `f` against the hub under one write guard. No other handle can
  /// observe the hub between the calls `f` makes.
  pub fn with_write<R>(&self, f: impl FnOnce(&mut H) -> R) -> R {
    f(&mut self.0.write())
  }

  /// Number of handles sharing this hub.
  pub fn handle_count(&self) -> usize {
    Arc::strong_count(&self.0)
  }

  /// Takes the hub back once every other handle is gone.
  pub fn into_inner(self) -> Result<H, Self> {
    Arc::try_unwrap(self.0).map(RwLock::into_inner).map_err(SharedHub)
  }

  /// Claims the next scheduled interface, hands it to `run` and completes it,
  /// all under one write guard.
  ///
  /// Returns `None` when nothing is scheduled. A failed completion (for
  /// example an interface `run` removed) is returned as the error and the
  /// result of `run` is dropped.
  pub fn run_next<T, R>(&self, run: impl FnOnce(&str, &mut T) -> R) -> HubResult<Option<(String, R)>>
  where
    H: InterfaceHub<T>,
    T: Clone + 'static,
  {
    let mut hub = self.0.write();
    let Some(name) = hub.next_scheduled().map(str::to_string) else {
      return Ok(None);
    };
    let output = run(&name, hub.checkout(&name)?);
    hub.set_completed(&name)?;
    event!(Level::TRACE, interface_type = %hub.interface_type(), interface = %name, "Shared interface run.");
    Ok(Some((name, output)))
  }

  /// Rolls `name` back if it was completed, leaving it ready to run again.
  /// Returns false, touching nothing, for a name that is not completed.
  pub fn rerun_from<T>(&self, name: &str) -> HubResult<bool>
  where
    H: InterfaceHub<T>,
    T: Clone + 'static,
  {
    let mut hub = self.0.write();
    if !hub.is_completed(name) {
      return Ok(false);
    }
    hub.rollback(name)?;
    Ok(true)
  }
}

impl<H> Clone for SharedHub<H> {
  fn clone(&self) -> Self {
    SharedHub(Arc::clone(&self.0))
  }
}

impl<H: Default> Default for SharedHub<H> {
  fn default() -> Self {
    Self::new(H::default())
  }
}

impl<H> From<H> for SharedHub<H> {
  fn from(hub: H) -> Self {
    Self::new(hub)
  }
}
