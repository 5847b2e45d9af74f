// stagehub/src/socket.rs

//! Defines `InterfaceClass<T>`, a buildable catalog entry, and `Socket<T>`,
//! the catalog of every class available for one interface type.

use crate::error::{HubError, HubResult};
use indexmap::IndexMap;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{event, Level};

/// Builds a fresh interface object. Failures are reported as
/// [`HubError::Construction`].
pub type InterfaceFactory<T> = Arc<dyn Fn() -> anyhow::Result<T> + Send + Sync + 'static>;

/// Everything the catalog knows about one interface class.
pub struct InterfaceClass<T> {
  /// Registry key used inside hubs.
  pub cls_name: String,
  /// Human readable name shown to users.
  pub display_name: String,
  /// Position among weighted classes of the same type; lower runs earlier.
  pub weight: Option<f64>,
  /// Variable identifiers the interface consumes.
  pub inputs: Vec<String>,
  /// Variable identifiers the interface produces.
  pub outputs: Vec<String>,
  factory: InterfaceFactory<T>,
}

impl<T> InterfaceClass<T> {
  pub fn new<C, D, F>(cls_name: C, display_name: D, factory: F) -> Self
  where
    C: Into<String>,
    D: Into<String>,
    F: Fn() -> anyhow::Result<T> + Send + Sync + 'static,
  {
    Self {
      cls_name: cls_name.into(),
      display_name: display_name.into(),
      weight: None,
      inputs: Vec::new(),
      outputs: Vec::new(),
      factory: Arc::new(factory),
    }
  }

  pub fn with_weight(mut self, weight: f64) -> Self {
    self.weight = Some(weight);
    self
  }

  pub fn with_inputs<I, S>(mut self, inputs: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.inputs = inputs.into_iter().map(Into::into).collect();
    self
  }

  pub fn with_outputs<I, S>(mut self, outputs: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.outputs = outputs.into_iter().map(Into::into).collect();
    self
  }

  pub fn build(&self) -> HubResult<T> {
    (self.factory)().map_err(|source| HubError::Construction {
      cls_name: self.cls_name.clone(),
      source,
    })
  }
}

impl<T> Clone for InterfaceClass<T> {
  fn clone(&self) -> Self {
    Self {
      cls_name: self.cls_name.clone(),
      display_name: self.display_name.clone(),
      weight: self.weight,
      inputs: self.inputs.clone(),
      outputs: self.outputs.clone(),
      factory: Arc::clone(&self.factory),
    }
  }
}

// The factory closure has no Debug; report the rest.
impl<T> std::fmt::Debug for InterfaceClass<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("InterfaceClass")
      .field("cls_name", &self.cls_name)
      .field("display_name", &self.display_name)
      .field("weight", &self.weight)
      .field("inputs", &self.inputs)
      .field("outputs", &self.outputs)
      .finish()
  }
}

/// The interface classes available for one interface type, keyed by class
/// name in registration order.
#[derive(Debug, Clone)]
pub struct Socket<T> {
  interface_type: String,
  classes: IndexMap<String, InterfaceClass<T>>,
}

impl<T> Socket<T> {
  pub fn new<S: Into<String>>(interface_type: S) -> Self {
    Self {
      interface_type: interface_type.into(),
      classes: IndexMap::new(),
    }
  }

  pub fn interface_type(&self) -> &str {
    &self.interface_type
  }

  /// Registers a class, replacing any class already registered under the
  /// same class name.
  pub fn add_interface(&mut self, class: InterfaceClass<T>) -> Option<InterfaceClass<T>> {
    event!(Level::DEBUG, interface_type = %self.interface_type, cls_name = %class.cls_name, display_name = %class.display_name, "Interface class registered.");
    self.classes.insert(class.cls_name.clone(), class)
  }

  pub fn class(&self, cls_name: &str) -> Option<&InterfaceClass<T>> {
    self.classes.get(cls_name)
  }

  pub fn contains(&self, cls_name: &str) -> bool {
    self.classes.contains_key(cls_name)
  }

  pub fn len(&self) -> usize {
    self.classes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.classes.is_empty()
  }

  pub fn classes(&self) -> impl Iterator<Item = &InterfaceClass<T>> + '_ {
    self.classes.values()
  }

  /// Builds a new object of the named class.
  pub fn interface_object(&self, cls_name: &str) -> HubResult<T> {
    let class = self.classes.get(cls_name).ok_or_else(|| HubError::UnavailableInterface {
      interface_type: self.interface_type.clone(),
      name: cls_name.to_string(),
    })?;
    class.build()
  }

  /// Display name to class name for every registered class.
  ///
  /// With `sort_weighted`, weighted classes come first in ascending weight
  /// order, followed by unweighted ones in registration order. Weights must
  /// then be strictly increasing.
  pub fn interface_names(&self, sort_weighted: bool) -> HubResult<IndexMap<String, String>> {
    let mut entries: Vec<&InterfaceClass<T>> = self.classes.values().collect();

    if sort_weighted && entries.iter().any(|class| class.weight.is_some()) {
      // Stable sort keeps unweighted classes in registration order at the back.
      entries.sort_by(|a, b| match (a.weight, b.weight) {
        (Some(wa), Some(wb)) => wa.total_cmp(&wb),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
      });

      let weights: Vec<f64> = entries.iter().filter_map(|class| class.weight).collect();
      if !weights.windows(2).all(|pair| pair[0] < pair[1]) {
        return Err(HubError::NonMonotonicWeights {
          interface_type: self.interface_type.clone(),
          weights,
        });
      }
    }

    let mut names = IndexMap::with_capacity(entries.len());
    let mut dupes = Vec::new();
    for class in entries {
      if names
        .insert(class.display_name.clone(), class.cls_name.clone())
        .is_some()
      {
        dupes.push(class.display_name.clone());
      }
    }

    if !dupes.is_empty() {
      return Err(HubError::DuplicateDisplayNames {
        interface_type: self.interface_type.clone(),
        names: dupes,
      });
    }

    Ok(names)
  }

  /// Every variable identifier declared as an input or output, sorted.
  pub fn all_variables(&self) -> Vec<String> {
    let all: BTreeSet<&String> = self
      .classes
      .values()
      .flat_map(|class| class.inputs.iter().chain(class.outputs.iter()))
      .collect();
    all.into_iter().cloned().collect()
  }

  /// Class names of the interfaces that output `variable_id`.
  pub fn providing_interfaces(&self, variable_id: &str) -> Vec<String> {
    self
      .classes
      .values()
      .filter(|class| class.outputs.iter().any(|var| var == variable_id))
      .map(|class| class.cls_name.clone())
      .collect()
  }

  /// Class names of the interfaces that take `variable_id` as an input.
  pub fn receiving_interfaces(&self, variable_id: &str) -> Vec<String> {
    self
      .classes
      .values()
      .filter(|class| class.inputs.iter().any(|var| var == variable_id))
      .map(|class| class.cls_name.clone())
      .collect()
  }
}
