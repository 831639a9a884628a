//! Explicit menu state: which content panel is up and whether the strata
//! label is showing.
//!
//! Every transition rewrites the whole state, so "hide everything, then show
//! one panel" can never leave two panels visible.

use bevy::prelude::*;
use log::debug;

use crate::components::UiElement;
use crate::strata::StrataType;

/// Mutually exclusive menu surfaces.
#[derive(Reflect, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    /// Root menu.
    MainMenu,
    /// Project overview.
    ProjectOverview,
    /// Log book, shown together with the keyboard and mallet props.
    LogBook,
    /// Strata information.
    StrataInformation,
    /// Tutorials.
    Tutorials,
}

impl Panel {
    /// UI elements made active while this panel is shown.
    #[must_use]
    pub const fn elements(self) -> &'static [UiElement] {
        match self {
            Self::MainMenu => &[UiElement::MainMenu],
            Self::ProjectOverview => &[UiElement::ProjectOverview],
            Self::LogBook => &[UiElement::LogBook, UiElement::Keyboard, UiElement::Mallet],
            Self::StrataInformation => &[UiElement::StrataInformation],
            Self::Tutorials => &[UiElement::Tutorials],
        }
    }
}

/// Visible state of the in-world menu.
#[derive(Resource, Reflect, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[reflect(Resource, Default)]
pub struct MenuState {
    shown: Option<Panel>,
    #[reflect(ignore)]
    label: Option<StrataType>,
}

impl MenuState {
    /// Panel currently on screen.
    #[must_use]
    pub const fn shown(&self) -> Option<Panel> {
        self.shown
    }

    /// Stratum displayed on the floating label, if visible.
    #[must_use]
    pub const fn label(&self) -> Option<StrataType> {
        self.label
    }

    /// Hides every panel, prop and the label.
    pub fn hide_all(&mut self) {
        *self = Self::default();
    }

    /// Hides everything, then shows `panel`.
    pub fn show_panel(&mut self, panel: Panel) {
        self.hide_all();
        self.shown = Some(panel);
        debug!("showing panel {panel:?}");
    }

    /// Closes the main menu when it is open; otherwise opens it in place of
    /// whatever was showing.
    pub fn toggle_main_menu(&mut self) {
        if self.shown == Some(Panel::MainMenu) {
            self.hide_all();
        } else {
            self.show_panel(Panel::MainMenu);
        }
    }

    /// Shows the floating label for `strata`.
    pub const fn show_label(&mut self, strata: StrataType) {
        self.label = Some(strata);
    }

    /// Hides the floating label. Safe to call repeatedly.
    pub const fn hide_label(&mut self) {
        self.label = None;
    }

    /// Whether `element` should currently be active.
    #[must_use]
    pub fn is_active(&self, element: UiElement) -> bool {
        if element == UiElement::StrataLabel {
            return self.label.is_some();
        }
        self.shown
            .is_some_and(|panel| panel.elements().contains(&element))
    }

    /// Number of managed elements currently active.
    #[must_use]
    pub fn active_count(&self) -> usize {
        UiElement::ALL
            .iter()
            .filter(|element| self.is_active(**element))
            .count()
    }
}
