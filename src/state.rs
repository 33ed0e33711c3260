/// Visibility flags for the two toggled surfaces.
///
/// This record is the source of truth; the DOM classes are derived from it on
/// every render and only read back once, when hydrating from markup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub menu_open: bool,
    pub modal_open: bool,
}

impl UiState {
    #[inline]
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    #[inline]
    pub fn open_modal(&mut self) {
        self.modal_open = true;
    }

    #[inline]
    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }

    /// Hamburger is shown while the menu is closed.
    #[inline]
    pub fn hamburger_visible(&self) -> bool {
        !self.menu_open
    }

    /// Close icon is shown while the menu is open.
    #[inline]
    pub fn close_icon_visible(&self) -> bool {
        self.menu_open
    }
}
