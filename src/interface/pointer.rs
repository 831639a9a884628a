//! Laser pointer events and click dispatch.
//!
//! Handlers are attached to each [`LaserPointer`] entity as entity-scoped
//! observers whose ids are kept in [`PointerObservers`]. Removing the
//! component deactivates the device and despawns its observers; despawning
//! the hand takes them down with it.

use std::str::FromStr;

use bevy::prelude::*;
use log::{error, info, warn};

use super::label::{display_strata, PendingLabelHides};
use super::menu::{MenuState, Panel};
use crate::components::{LaserPointer, PointerObservers, SurfaceMaterial};
use crate::scene::{SwitchLine, SwitchPerspective};
use crate::strata::is_strata_object;

/// The laser started pointing at `hit`.
#[derive(EntityEvent, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerIn {
    /// Laser pointer that produced the event.
    pub entity: Entity,
    /// Object under the laser.
    pub hit: Entity,
}

/// The laser stopped pointing at `hit`.
#[derive(EntityEvent, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerOut {
    /// Laser pointer that produced the event.
    pub entity: Entity,
    /// Object the laser left.
    pub hit: Entity,
}

/// The trigger was pulled while pointing at `hit`.
#[derive(EntityEvent, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerClick {
    /// Laser pointer that produced the event.
    pub entity: Entity,
    /// Object under the laser.
    pub hit: Entity,
}

/// Menu buttons recognised by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuButton {
    /// `ProjectOverviewButton`
    ProjectOverview,
    /// `LogBookButton`
    LogBook,
    /// `StrataInformationButton`
    StrataInformation,
    /// `TutorialsButton`
    Tutorials,
    /// `SwitchLineButton`
    SwitchLine,
    /// `SwitchPerspectiveButton`
    SwitchPerspective,
}

/// Returned when an object name is not a menu button.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown button: {0}")]
pub struct UnknownButton(pub String);

impl FromStr for MenuButton {
    type Err = UnknownButton;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "ProjectOverviewButton" => Ok(Self::ProjectOverview),
            "LogBookButton" => Ok(Self::LogBook),
            "StrataInformationButton" => Ok(Self::StrataInformation),
            "TutorialsButton" => Ok(Self::Tutorials),
            "SwitchLineButton" => Ok(Self::SwitchLine),
            "SwitchPerspectiveButton" => Ok(Self::SwitchPerspective),
            other => Err(UnknownButton(other.to_owned())),
        }
    }
}

impl MenuButton {
    /// Panel opened by this button, if it opens one.
    #[must_use]
    pub const fn panel(self) -> Option<Panel> {
        match self {
            Self::ProjectOverview => Some(Panel::ProjectOverview),
            Self::LogBook => Some(Panel::LogBook),
            Self::StrataInformation => Some(Panel::StrataInformation),
            Self::Tutorials => Some(Panel::Tutorials),
            Self::SwitchLine | Self::SwitchPerspective => None,
        }
    }
}

fn hit_name(names: &Query<&Name>, hit: Entity) -> String {
    names
        .get(hit)
        .map_or_else(|_| format!("{hit:?}"), |name| name.as_str().to_owned())
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value."
)]
fn on_pointer_in(event: On<PointerIn>, names: Query<&Name>) {
    info!("Laser has entered {}", hit_name(&names, event.event().hit));
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value."
)]
fn on_pointer_out(event: On<PointerOut>, names: Query<&Name>) {
    info!("Laser has exited {}", hit_name(&names, event.event().hit));
}

/// Reacts to a laser click: strata label first, then name-based dispatch.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value."
)]
pub fn on_pointer_click(
    event: On<PointerClick>,
    mut commands: Commands,
    names: Query<&Name>,
    materials: Query<&SurfaceMaterial>,
    mut menu: ResMut<MenuState>,
    mut pending: ResMut<PendingLabelHides>,
) {
    let hit = event.event().hit;
    let Ok(name) = names.get(hit) else {
        warn!("pointer clicked {hit:?}, which has no name");
        return;
    };

    if is_strata_object(name.as_str()) {
        match materials.get(hit) {
            Ok(material) => display_strata(&mut menu, &mut pending, material),
            Err(_) => error!("strata object {name} has no surface material"),
        }
    }

    match name.as_str().parse::<MenuButton>() {
        Ok(MenuButton::SwitchLine) => commands.trigger(SwitchLine),
        Ok(MenuButton::SwitchPerspective) => commands.trigger(SwitchPerspective),
        Ok(button) => {
            if let Some(panel) = button.panel() {
                menu.show_panel(panel);
            }
        }
        Err(UnknownButton(other)) => info!("Unknown button clicked: {other}"),
    }
}

/// Attaches pointer observers to laser pointers that are not bound yet.
pub fn bind_laser_pointers(
    mut commands: Commands,
    pointers: Query<Entity, (With<LaserPointer>, Without<PointerObservers>)>,
) {
    for entity in &pointers {
        let observers = vec![
            commands
                .spawn(Observer::new(on_pointer_in).with_entity(entity))
                .id(),
            commands
                .spawn(Observer::new(on_pointer_out).with_entity(entity))
                .id(),
            commands
                .spawn(Observer::new(on_pointer_click).with_entity(entity))
                .id(),
        ];
        commands.entity(entity).insert(PointerObservers(observers));
        info!("laser pointer {entity:?} bound");
    }
}

/// Detaches a device's pointer observers when it stops being a laser
/// pointer. The device is bound again if the component comes back.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value."
)]
pub fn unbind_laser_pointer(
    event: On<Remove, LaserPointer>,
    mut commands: Commands,
    bound: Query<&PointerObservers>,
) {
    let device = event.event().entity;
    let Ok(observers) = bound.get(device) else {
        return;
    };
    for observer in &observers.0 {
        if let Ok(mut observer_commands) = commands.get_entity(*observer) {
            observer_commands.try_despawn();
        }
    }
    if let Ok(mut device_commands) = commands.get_entity(device) {
        device_commands.try_remove::<PointerObservers>();
    }
    info!("laser pointer {device:?} unbound");
}
