//! In-world menu, floating strata label and laser pointer handling.
//!
//! [`MenuState`] is the single source of truth for what is on screen. Each
//! frame `sync_ui_elements_system` mirrors it onto every entity tagged with
//! a [`UiElement`], so panel entities never hold visibility state of their
//! own.

mod label;
mod menu;
mod pointer;

use bevy::prelude::*;
use log::info;

use crate::components::{LabelText, UiActive, UiElement};
use crate::plugins::{configure_tunnel_sets, TunnelSet};
use crate::scene::SceneRig;

pub use label::{
    billboard_label_system, display_strata, expire_label_system, label_pose, PendingLabelHides,
};
pub use menu::{MenuState, Panel};
pub use pointer::{
    bind_laser_pointers, on_pointer_click, unbind_laser_pointer, MenuButton, PointerClick,
    PointerIn, PointerOut, UnknownButton,
};

/// Edge of the global menu-toggle action.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuToggled;

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value."
)]
fn on_menu_toggled(_event: On<MenuToggled>, mut menu: ResMut<MenuState>) {
    menu.toggle_main_menu();
    info!("main menu toggled; showing {:?}", menu.shown());
}

/// Mirrors [`MenuState`] onto managed UI entities.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn sync_ui_elements_system(
    menu: Res<MenuState>,
    mut elements: Query<(&UiElement, &mut UiActive, Option<&mut LabelText>)>,
) {
    for (element, mut active, label_text) in &mut elements {
        let is_active = menu.is_active(*element);
        if active.0 != is_active {
            active.0 = is_active;
        }
        if let (Some(mut text), Some(strata)) = (label_text, menu.label()) {
            if text.0 != strata.label() {
                text.0 = strata.label().to_owned();
            }
        }
    }
}

#[cfg(feature = "render")]
fn mirror_visibility_system(mut elements: Query<(&UiActive, &mut Visibility), Changed<UiActive>>) {
    for (active, mut visibility) in &mut elements {
        *visibility = if active.0 {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
fn log_initial_menu(menu: Res<MenuState>) {
    info!(
        "menu initialised with {} active elements",
        menu.active_count()
    );
}

/// Plugin installing the menu, label and pointer handling.
#[derive(Debug, Default)]
pub struct InterfacePlugin;

impl Plugin for InterfacePlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<UiElement>()
            .register_type::<UiActive>()
            .register_type::<LabelText>()
            .register_type::<MenuState>();
        configure_tunnel_sets(app);
        app.init_resource::<MenuState>();
        app.init_resource::<PendingLabelHides>();
        app.init_resource::<SceneRig>();
        app.add_observer(on_menu_toggled);
        app.add_observer(unbind_laser_pointer);
        app.add_systems(Startup, log_initial_menu);
        app.add_systems(Update, bind_laser_pointers.in_set(TunnelSet::Input));
        app.add_systems(
            Update,
            (
                expire_label_system,
                billboard_label_system,
                sync_ui_elements_system,
            )
                .chain()
                .in_set(TunnelSet::Interface),
        );
        #[cfg(feature = "render")]
        app.add_systems(
            Update,
            mirror_visibility_system
                .after(sync_ui_elements_system)
                .in_set(TunnelSet::Interface),
        );
    }
}
