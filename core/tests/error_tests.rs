// tests/error_tests.rs
use stagehub::{ErrorKind, HubError, MapScope};

#[test]
fn test_error_messages_name_the_interface() {
  let err = HubError::DuplicateKey {
    interface_type: "ModuleInterface".to_string(),
    name: "Hydro".to_string(),
  };
  assert_eq!(err.to_string(), "Interface 'Hydro' is already associated to the ModuleInterface hub");

  let err = HubError::NotFound {
    name: "Hydro".to_string(),
    scope: MapScope::Completed,
  };
  assert_eq!(err.to_string(), "Class 'Hydro' not found in completed interface map");

  let err = HubError::OutOfOrder {
    name: "Moorings".to_string(),
    expected: Some("Hydro".to_string()),
  };
  assert_eq!(
    err.to_string(),
    "Interface 'Moorings' is not the next interface in the pipeline (next: Hydro)"
  );

  let err = HubError::OutOfOrder {
    name: "Moorings".to_string(),
    expected: None,
  };
  assert!(err.to_string().ends_with("(next: none)"));

  let err = HubError::NotSchedulable { name: "Hydro".to_string() };
  assert_eq!(err.to_string(), "Interface 'Hydro' can not be scheduled");
  assert_eq!(err.interface_name(), Some("Hydro"));
}

#[test]
fn test_error_kinds() {
  let weights = HubError::NonMonotonicWeights {
    interface_type: "ModuleInterface".to_string(),
    weights: vec![1.0, 1.0],
  };
  assert_eq!(weights.kind(), ErrorKind::Configuration);
  assert_eq!(weights.interface_name(), None);

  let empty = HubError::NothingScheduled {
    interface_type: "ModuleInterface".to_string(),
  };
  assert_eq!(empty.kind(), ErrorKind::NotFound);
}

#[test]
fn test_anyhow_conversion_preserves_hub_errors() {
  let wrapped = anyhow::Error::new(HubError::NotSchedulable { name: "Hydro".to_string() });
  let err = HubError::from(wrapped);
  assert!(matches!(err, HubError::NotSchedulable { .. }));

  let foreign = HubError::from(anyhow::anyhow!("solver crashed"));
  assert_eq!(foreign.kind(), ErrorKind::Construction);
  assert!(std::error::Error::source(&foreign).is_some());
}
