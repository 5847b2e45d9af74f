// stagehub/src/core/config.rs

//! Construction-time settings for hubs and pipelines.

/// Settings fixed when a hub or pipeline is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HubConfig {
  /// Category of interface the hub manages, e.g. `"ModuleInterface"`.
  pub interface_type: String,
  /// Makes `set_completed` a no-op: members are tracked but never run.
  pub no_complete: bool,
  /// Carried for controllers that treat every member as already run.
  /// The hub itself does not consult it.
  pub force_completed: bool,
}

impl HubConfig {
  pub fn new<S: Into<String>>(interface_type: S) -> Self {
    Self {
      interface_type: interface_type.into(),
      no_complete: false,
      force_completed: false,
    }
  }

  pub fn with_no_complete(mut self, no_complete: bool) -> Self {
    self.no_complete = no_complete;
    self
  }

  pub fn with_force_completed(mut self, force_completed: bool) -> Self {
    self.force_completed = force_completed;
    self
  }
}
