// stagehub/src/registry.rs

//! Defines the `Sequencer<T>` struct, a controller that owns one
//! [`Socket`] per interface type and drives hubs and pipelines by display
//! name.
//!
//! Hubs only know class names. The sequencer translates between the display
//! names users pick and those class names, builds interface objects from the
//! registered factories, and forwards scheduling calls to the hub.

use crate::core::config::HubConfig;
use crate::core::hub_trait::InterfaceHub;
use crate::error::{HubError, HubResult};
use crate::hub::Hub;
use crate::pipeline::Pipeline;
use crate::socket::{InterfaceClass, Socket};
use indexmap::IndexMap;
use std::collections::HashMap;
use tracing::{event, instrument, Level};

/// Settings for a [`Sequencer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequencerConfig {
  /// Order available names by class weight where weights are declared.
  pub sort_weighted: bool,
}

impl Default for SequencerConfig {
  fn default() -> Self {
    Self { sort_weighted: true }
  }
}

/// The sequencer registry.
#[derive(Debug)]
pub struct Sequencer<T> {
  config: SequencerConfig,
  sockets: IndexMap<String, Socket<T>>,
}

impl<T> Sequencer<T> {
  /// Creates a sequencer with an empty socket for each interface type.
  pub fn new<I, S>(interface_types: I, config: SequencerConfig) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    let sockets = interface_types
      .into_iter()
      .map(|interface_type| {
        let interface_type = interface_type.into();
        (interface_type.clone(), Socket::new(interface_type))
      })
      .collect();
    Self { config, sockets }
  }

  pub fn config(&self) -> &SequencerConfig {
    &self.config
  }

  pub fn interface_types(&self) -> impl Iterator<Item = &str> + '_ {
    self.sockets.keys().map(String::as_str)
  }

  pub fn socket(&self, interface_type: &str) -> HubResult<&Socket<T>> {
    self.sockets.get(interface_type).ok_or_else(|| unknown_type(interface_type))
  }

  /// Makes an interface class available to hubs of `interface_type`.
  pub fn register_interface(&mut self, interface_type: &str, class: InterfaceClass<T>) -> HubResult<()> {
    let socket = self
      .sockets
      .get_mut(interface_type)
      .ok_or_else(|| unknown_type(interface_type))?;
    socket.add_interface(class);
    Ok(())
  }

  pub fn create_new_hub(&self, interface_type: &str, no_complete: bool) -> HubResult<Hub<T>> {
    self.socket(interface_type)?;
    let hub = Hub::with_config(HubConfig::new(interface_type).with_no_complete(no_complete));
    event!(Level::INFO, interface_type, "New Hub created.");
    Ok(hub)
  }

  pub fn create_new_pipeline(&self, interface_type: &str, no_complete: bool) -> HubResult<Pipeline<T>> {
    self.socket(interface_type)?;
    let pipeline = Pipeline::with_config(HubConfig::new(interface_type).with_no_complete(no_complete));
    event!(Level::INFO, interface_type, "New Pipeline created.");
    Ok(pipeline)
  }
}

impl<T: Clone + 'static> Sequencer<T> {
  /// Display name to class name for the hub's interface type.
  fn names<H>(&self, hub: &H) -> HubResult<IndexMap<String, String>>
  where
    H: InterfaceHub<T> + ?Sized,
  {
    self
      .socket(hub.interface_type())?
      .interface_names(self.config.sort_weighted)
  }

  /// Maps class names to display names, keeping the given order and dropping
  /// classes the socket does not know.
  fn display_names<H>(&self, hub: &H, cls_names: &[String]) -> HubResult<Vec<String>>
  where
    H: InterfaceHub<T> + ?Sized,
  {
    let by_cls: HashMap<String, String> = self
      .names(hub)?
      .into_iter()
      .map(|(display, cls)| (cls, display))
      .collect();
    Ok(
      cls_names
        .iter()
        .filter_map(|cls| by_cls.get(cls).cloned())
        .collect(),
    )
  }

  fn require_cls_name<H>(&self, hub: &H, interface_name: &str) -> HubResult<String>
  where
    H: InterfaceHub<T> + ?Sized,
  {
    self
      .cls_name(hub, interface_name)?
      .ok_or_else(|| HubError::UnavailableInterface {
        interface_type: hub.interface_type().to_string(),
        name: interface_name.to_string(),
      })
  }

  /// Every display name registered for the hub's interface type.
  pub fn available_names<H>(&self, hub: &H) -> HubResult<Vec<String>>
  where
    H: InterfaceHub<T> + ?Sized,
  {
    Ok(self.names(hub)?.into_keys().collect())
  }

  /// Scheduled display names in run order. Like the other name lists built
  /// from hub state, the result follows the hub, not the weighted catalog
  /// order of [`available_names`](Sequencer::available_names).
  pub fn scheduled_names<H>(&self, hub: &H) -> HubResult<Vec<String>>
  where
    H: InterfaceHub<T> + ?Sized,
  {
    self.display_names(hub, &hub.scheduled_cls_names())
  }

  /// Completed display names, oldest completion first. This is hub order:
  /// a class completed before a lighter-weighted one is listed first.
  pub fn completed_names<H>(&self, hub: &H) -> HubResult<Vec<String>>
  where
    H: InterfaceHub<T> + ?Sized,
  {
    self.display_names(hub, &hub.completed_cls_names())
  }

  /// Scheduled display names in run order, then completed ones oldest first.
  /// Hub order, not catalog order.
  pub fn sequenced_names<H>(&self, hub: &H) -> HubResult<Vec<String>>
  where
    H: InterfaceHub<T> + ?Sized,
  {
    self.display_names(hub, &hub.sequenced_cls_names())
  }

  pub fn next_name<H>(&self, hub: &H) -> HubResult<Option<String>>
  where
    H: InterfaceHub<T> + ?Sized,
  {
    match hub.next_scheduled() {
      Some(cls_name) => Ok(self.display_names(hub, &[cls_name.to_string()])?.into_iter().next()),
      None => Ok(None),
    }
  }

  pub fn is_available<H>(&self, hub: &H, interface_name: &str) -> HubResult<bool>
  where
    H: InterfaceHub<T> + ?Sized,
  {
    Ok(self.names(hub)?.contains_key(interface_name))
  }

  pub fn cls_name<H>(&self, hub: &H, interface_name: &str) -> HubResult<Option<String>>
  where
    H: InterfaceHub<T> + ?Sized,
  {
    Ok(self.names(hub)?.swap_remove(interface_name))
  }

  pub fn weight<H>(&self, hub: &H, interface_name: &str) -> HubResult<Option<f64>>
  where
    H: InterfaceHub<T> + ?Sized,
  {
    let Some(cls_name) = self.cls_name(hub, interface_name)? else {
      return Ok(None);
    };
    Ok(
      self
        .socket(hub.interface_type())?
        .class(&cls_name)
        .and_then(|class| class.weight),
    )
  }

  /// Whether the interface behind `interface_name` is registered in the hub.
  pub fn has_name<H>(&self, hub: &H, interface_name: &str) -> HubResult<bool>
  where
    H: InterfaceHub<T> + ?Sized,
  {
    Ok(match self.cls_name(hub, interface_name)? {
      Some(cls_name) => hub.contains(&cls_name),
      None => false,
    })
  }

  /// Builds the named interface and schedules it in the hub.
  #[instrument(
    name = "Sequencer::sequence",
    skip_all,
    fields(interface_type = %hub.interface_type(), interface = interface_name),
    err(Display)
  )]
  pub fn sequence<H>(&self, hub: &mut H, interface_name: &str) -> HubResult<()>
  where
    H: InterfaceHub<T> + ?Sized,
  {
    let cls_name = self.require_cls_name(hub, interface_name)?;
    let obj = self.socket(hub.interface_type())?.interface_object(&cls_name)?;
    hub.add_interface(&cls_name, obj)
  }

  #[instrument(
    name = "Sequencer::check_next",
    skip_all,
    fields(interface_type = %hub.interface_type(), interface = interface_name),
    err(Display)
  )]
  pub fn check_next<H>(&self, hub: &mut H, interface_name: &str) -> HubResult<()>
  where
    H: InterfaceHub<T> + ?Sized,
  {
    let cls_name = self.require_cls_name(hub, interface_name)?;
    hub.check_next_scheduled(&cls_name)
  }

  #[instrument(
    name = "Sequencer::complete",
    skip_all,
    fields(interface_type = %hub.interface_type(), interface = interface_name),
    err(Display)
  )]
  pub fn complete<H>(&self, hub: &mut H, interface_name: &str) -> HubResult<()>
  where
    H: InterfaceHub<T> + ?Sized,
  {
    let cls_name = self.require_cls_name(hub, interface_name)?;
    hub.set_completed(&cls_name)
  }

  pub fn is_complete<H>(&self, hub: &H, interface_name: &str) -> HubResult<bool>
  where
    H: InterfaceHub<T> + ?Sized,
  {
    let cls_name = self.require_cls_name(hub, interface_name)?;
    Ok(hub.is_completed(&cls_name))
  }

  /// Rebuilds every sequenced interface from its factory, keeping each one
  /// in its current map.
  pub fn refresh_interfaces<H>(&self, hub: &mut H) -> HubResult<()>
  where
    H: InterfaceHub<T> + ?Sized,
  {
    let socket = self.socket(hub.interface_type())?;
    let mut refreshed = 0usize;
    for cls_name in hub.sequenced_cls_names() {
      if !socket.contains(&cls_name) {
        continue;
      }
      let obj = socket.interface_object(&cls_name)?;
      hub.refresh_interface(&cls_name, obj)?;
      refreshed += 1;
    }
    event!(Level::DEBUG, interface_type = %hub.interface_type(), refreshed, "Interfaces refreshed.");
    Ok(())
  }
}

fn unknown_type(interface_type: &str) -> HubError {
  HubError::UnknownInterfaceType {
    interface_type: interface_type.to_string(),
  }
}
