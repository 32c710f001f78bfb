//! Page-session state shared by the event handlers.

use crate::config::SiteConfig;
use crate::menu::MenuState;
use crate::nav::{NavUpdate, ScrollState};

/// Everything the handlers mutate, created once at startup.
#[derive(Clone, Debug)]
pub struct SiteState {
    config: SiteConfig,
    scroll: ScrollState,
    menu: MenuState,
}

impl SiteState {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            scroll: ScrollState::new(config.scroll_threshold),
            menu: MenuState::Closed,
            config,
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    pub fn menu(&self) -> MenuState {
        self.menu
    }

    pub fn on_scroll(&mut self, offset: f64) -> NavUpdate {
        self.scroll.update(offset)
    }

    /// Flip the menu; returns the new state.
    pub fn toggle_menu(&mut self) -> MenuState {
        self.menu = self.menu.toggled();
        log::debug!("menu {:?}", self.menu);
        self.menu
    }

    /// Force the menu closed. Returns `true` if it was open.
    pub fn close_menu(&mut self) -> bool {
        let was_open = self.menu.is_open();
        self.menu = MenuState::Closed;
        if was_open {
            log::debug!("menu closed");
        }
        was_open
    }

    /// A document click. Clicks on the toggle or inside the menu are handled
    /// elsewhere; anything else closes the menu.
    pub fn document_click(&mut self, on_toggle: bool, in_menu: bool) -> bool {
        if on_toggle || in_menu {
            return false;
        }
        self.close_menu()
    }
}

impl Default for SiteState {
    fn default() -> Self {
        Self::new(SiteConfig::default())
    }
}
