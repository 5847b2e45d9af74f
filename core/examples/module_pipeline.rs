// stagehub/examples/module_pipeline.rs

use stagehub::{HubResult, InterfaceClass, InterfaceHub, Sequencer, SequencerConfig};
use std::collections::BTreeMap;
use tracing::info;

// 1. Define the interface object the hubs will hold
#[derive(Clone, Debug, Default)]
struct Module {
  inputs: BTreeMap<String, f64>,
  result: Option<f64>,
}

fn module_class(cls_name: &str, display_name: &str, weight: f64) -> InterfaceClass<Module> {
  InterfaceClass::new(cls_name, display_name, || Ok(Module::default())).with_weight(weight)
}

fn main() -> HubResult<()> {
  // Initialize tracing (optional, for demonstration)
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Module Pipeline Example ---");

  // 2. Register the available modules, weighted in run order
  let mut sequencer = Sequencer::new(["ModuleInterface"], SequencerConfig::default());
  sequencer.register_interface("ModuleInterface", module_class("Hydrodynamics", "Hydrodynamics", 1.0))?;
  sequencer.register_interface("ModuleInterface", module_class("ElectricalSubSystems", "Electrical Sub-Systems", 2.0))?;
  sequencer.register_interface("ModuleInterface", module_class("Economics", "Economics", 3.0))?;

  // 3. Sequence everything available into a fresh pipeline
  let mut pipeline = sequencer.create_new_pipeline("ModuleInterface", false)?;
  for name in sequencer.available_names(&pipeline)? {
    sequencer.sequence(&mut pipeline, &name)?;
  }

  // 4. Run each module in turn, binding inputs through a checkout
  let mut carry = 1.0;
  while let Some(next) = pipeline.next_scheduled().map(str::to_string) {
    let module = pipeline.checkout(&next)?;
    module.inputs.insert("upstream".to_string(), carry);
    carry *= 2.0;
    module.result = Some(carry);
    pipeline.set_completed(&next)?;
    info!("Completed {}", next);
  }
  info!("Completed modules: {:?}", sequencer.completed_names(&pipeline)?);

  // 5. Rerun from the electrical stage
  sequencer.check_next(&mut pipeline, "Electrical Sub-Systems")?;
  info!("Next: {:?}", sequencer.next_name(&pipeline)?);
  info!("Still completed: {:?}", sequencer.completed_names(&pipeline)?);

  pipeline.reset();
  info!("After reset, scheduled: {:?}", pipeline.scheduled_cls_names());

  Ok(())
}
