// stagehub/src/error.rs
use anyhow::Error as AnyhowError;
use std::fmt;
use thiserror::Error;

/// Which of a hub's maps an operation searched before giving up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapScope {
  /// Both the scheduled and the completed map.
  Any,
  Scheduled,
  Completed,
}

impl fmt::Display for MapScope {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      MapScope::Any => f.write_str("interface maps"),
      MapScope::Scheduled => f.write_str("scheduled interface map"),
      MapScope::Completed => f.write_str("completed interface map"),
    }
  }
}

/// Coarse classification of a [`HubError`].
///
/// The first four kinds come from hubs and pipelines themselves; the last two
/// are raised by the [`Sequencer`](crate::Sequencer) and its sockets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
  DuplicateKey,
  NotFound,
  OutOfOrder,
  NotSchedulable,
  Configuration,
  Construction,
}

#[derive(Debug, Error)]
pub enum HubError {
  #[error("Interface '{name}' is already associated to the {interface_type} hub")]
  DuplicateKey { interface_type: String, name: String },

  #[error("Class '{name}' not found in {scope}")]
  NotFound { name: String, scope: MapScope },

  #[error("No interface is scheduled in the {interface_type} pipeline")]
  NothingScheduled { interface_type: String },

  #[error("Interface '{name}' is not the next interface in the pipeline (next: {})", .expected.as_deref().unwrap_or("none"))]
  OutOfOrder { name: String, expected: Option<String> },

  #[error("Interface '{name}' can not be scheduled")]
  NotSchedulable { name: String },

  #[error("No socket available for interface type '{interface_type}'")]
  UnknownInterfaceType { interface_type: String },

  #[error("Interface '{name}' is not type '{interface_type}'")]
  UnavailableInterface { interface_type: String, name: String },

  #[error("Duplicate interface names found: {}", .names.join(", "))]
  DuplicateDisplayNames { interface_type: String, names: Vec<String> },

  #[error("Interface weights are not monotonic. Found weights: {weights:?}")]
  NonMonotonicWeights { interface_type: String, weights: Vec<f64> },

  #[error("Failed to construct interface '{cls_name}'. Source: {source}")]
  Construction {
    cls_name: String,
    #[source]
    source: AnyhowError,
  },
}

impl HubError {
  pub(crate) fn not_found(name: &str, scope: MapScope) -> Self {
    HubError::NotFound {
      name: name.to_string(),
      scope,
    }
  }

  pub fn kind(&self) -> ErrorKind {
    match self {
      HubError::DuplicateKey { .. } => ErrorKind::DuplicateKey,
      HubError::NotFound { .. } | HubError::NothingScheduled { .. } => ErrorKind::NotFound,
      HubError::OutOfOrder { .. } => ErrorKind::OutOfOrder,
      HubError::NotSchedulable { .. } => ErrorKind::NotSchedulable,
      HubError::UnknownInterfaceType { .. }
      | HubError::UnavailableInterface { .. }
      | HubError::DuplicateDisplayNames { .. }
      | HubError::NonMonotonicWeights { .. } => ErrorKind::Configuration,
      HubError::Construction { .. } => ErrorKind::Construction,
    }
  }

  /// The interface name the error refers to, when there is one.
  pub fn interface_name(&self) -> Option<&str> {
    match self {
      HubError::DuplicateKey { name, .. }
      | HubError::NotFound { name, .. }
      | HubError::OutOfOrder { name, .. }
      | HubError::NotSchedulable { name }
      | HubError::UnavailableInterface { name, .. } => Some(name),
      HubError::Construction { cls_name, .. } => Some(cls_name),
      _ => None,
    }
  }
}

// Factory failures that are not already wrapped carry no class name.
impl From<AnyhowError> for HubError {
  fn from(err: AnyhowError) -> Self {
    match err.downcast::<HubError>() {
      Ok(hub_err) => hub_err,
      Err(err) => HubError::Construction {
        cls_name: "<unknown>".to_string(),
        source: err,
      },
    }
  }
}

pub type HubResult<T, E = HubError> = std::result::Result<T, E>;
