// stagehub/src/core/control.rs

//! Signals selecting how a hub is ordered and which view feeds its
//! preceding/upcoming queries.

/// Whether a hub imposes a run order on its interfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HubOrder {
  /// Interfaces may be completed in any order. Preceding/upcoming queries
  /// always come back empty.
  Unordered,
  /// Interfaces complete strictly in scheduled order.
  Linear,
}

impl HubOrder {
  pub fn is_linear(self) -> bool {
    matches!(self, HubOrder::Linear)
  }
}

/// Sequence searched by `preceding_interfaces`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrecedingView {
  /// Scheduled interfaces followed by completed ones, oldest first.
  #[default]
  Full,
  /// Only the scheduled interfaces.
  ScheduledOnly,
}

/// Sequence searched by `upcoming_interfaces`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpcomingView {
  /// Scheduled interfaces followed by completed ones, oldest first.
  #[default]
  Full,
  /// Only the completed interfaces, oldest first.
  CompletedOnly,
}
