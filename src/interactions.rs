use crate::classes::{is_shown, set_display, set_hidden, Page};
use crate::config::ElementIds;
use crate::state::UiState;

/// Mobile menu and feedback modal behavior.
///
/// Every operation updates [`UiState`] first and then renders each affected
/// element independently, so a missing element only skips its own update.
#[derive(Clone, Debug)]
pub struct Interactions {
    ids: ElementIds,
    state: UiState,
}

impl Interactions {
    pub fn new(ids: ElementIds, state: UiState) -> Self {
        Self { ids, state }
    }

    /// Build the state from the classes present in the initial markup.
    /// Icons are not read; the first render derives them from the menu flag.
    pub fn hydrate<P: Page>(page: &P, ids: ElementIds) -> Self {
        let shown = |id: &str| page.element(id).map(|el| is_shown(&el)).unwrap_or(false);
        let state = UiState {
            menu_open: shown(&ids.mobile_menu),
            modal_open: shown(&ids.feedback_modal),
        };
        log::debug!(
            "[ui] hydrated menu_open={} modal_open={}",
            state.menu_open,
            state.modal_open
        );
        Self { ids, state }
    }

    #[inline]
    pub fn state(&self) -> UiState {
        self.state
    }

    #[inline]
    pub fn ids(&self) -> &ElementIds {
        &self.ids
    }

    pub fn toggle_mobile_menu<P: Page>(&mut self, page: &P) {
        self.state.toggle_menu();
        self.render_menu(page);
    }

    pub fn open_feedback_modal<P: Page>(&mut self, page: &P) {
        self.state.open_modal();
        self.render_modal(page);
    }

    pub fn close_feedback_modal<P: Page>(&mut self, page: &P) {
        self.state.close_modal();
        self.render_modal(page);
    }

    /// Document-level click: closes the modal only when the click landed on
    /// the modal container itself. Returns true if the modal was dismissed.
    pub fn handle_document_click<P: Page>(
        &mut self,
        page: &P,
        target: Option<&P::Element>,
    ) -> bool {
        let Some(target) = target else {
            return false;
        };
        match page.element(&self.ids.feedback_modal) {
            Some(modal) if modal == *target => {
                self.close_feedback_modal(page);
                true
            }
            _ => false,
        }
    }

    fn render_menu<P: Page>(&self, page: &P) {
        if let Some(menu) = lookup(page, &self.ids.mobile_menu) {
            set_display(&menu, self.state.menu_open);
        }
        if let Some(icon) = lookup(page, &self.ids.hamburger_icon) {
            set_hidden(&icon, !self.state.hamburger_visible());
        }
        if let Some(icon) = lookup(page, &self.ids.close_icon) {
            set_hidden(&icon, !self.state.close_icon_visible());
        }
    }

    fn render_modal<P: Page>(&self, page: &P) {
        if let Some(modal) = lookup(page, &self.ids.feedback_modal) {
            set_display(&modal, self.state.modal_open);
        }
    }
}

fn lookup<P: Page>(page: &P, id: &str) -> Option<P::Element> {
    let el = page.element(id);
    if el.is_none() {
        log::debug!("[ui] #{} not in page; skipped", id);
    }
    el
}
