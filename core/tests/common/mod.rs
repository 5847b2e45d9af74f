// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use stagehub::{InterfaceClass, Sequencer, SequencerConfig};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::Level;

pub const MODULE_TYPE: &str = "ModuleInterface";
pub const THEME_TYPE: &str = "ThemeInterface";

// --- Common Interface Object ---
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TestInterface {
  pub label: String,
  pub inputs: BTreeMap<String, f64>,
  pub build_id: usize,
}

impl TestInterface {
  pub fn new(label: &str) -> Self {
    Self {
      label: label.to_string(),
      ..Default::default()
    }
  }
}

pub fn obj(label: &str) -> TestInterface {
  TestInterface::new(label)
}

// --- Common Sequencer Fixture ---
/// Modules: "Early Interface" (weight 1), "Later Interface" (weight 2),
/// "Final Interface" (weight 3). Themes: "Economics Theme", unweighted.
pub fn sequencer_fixture() -> Sequencer<TestInterface> {
  let mut sequencer = Sequencer::new([MODULE_TYPE, THEME_TYPE], SequencerConfig::default());

  // Registered out of weight order on purpose.
  sequencer
    .register_interface(
      MODULE_TYPE,
      InterfaceClass::new("LaterInterface", "Later Interface", || Ok(TestInterface::new("later")))
        .with_weight(2.0)
        .with_inputs(["bathymetry", "device_power"])
        .with_outputs(["layout"]),
    )
    .unwrap();
  sequencer
    .register_interface(
      MODULE_TYPE,
      InterfaceClass::new("EarlyInterface", "Early Interface", || Ok(TestInterface::new("early")))
        .with_weight(1.0)
        .with_inputs(["bathymetry"])
        .with_outputs(["device_power"]),
    )
    .unwrap();
  sequencer
    .register_interface(
      MODULE_TYPE,
      InterfaceClass::new("FinalInterface", "Final Interface", || Ok(TestInterface::new("final")))
        .with_weight(3.0)
        .with_inputs(["layout"])
        .with_outputs(["cost"]),
    )
    .unwrap();
  sequencer
    .register_interface(
      THEME_TYPE,
      InterfaceClass::new("EconomicsTheme", "Economics Theme", || Ok(TestInterface::new("economics"))),
    )
    .unwrap();

  sequencer
}

/// A factory that stamps every object it builds with a running count.
pub fn counting_class(cls_name: &str, display_name: &str, counter: Arc<AtomicUsize>) -> InterfaceClass<TestInterface> {
  let label = cls_name.to_string();
  InterfaceClass::new(cls_name, display_name, move || {
    let build_id = counter.fetch_add(1, Ordering::SeqCst) + 1;
    Ok(TestInterface {
      label: label.clone(),
      inputs: BTreeMap::new(),
      build_id,
    })
  })
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
