use crate::constants::{CLOSE_ICON_ID, FEEDBACK_MODAL_ID, HAMBURGER_ICON_ID, MOBILE_MENU_ID};

/// Identifiers of the elements the interaction handler drives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementIds {
    pub mobile_menu: String,
    pub hamburger_icon: String,
    pub close_icon: String,
    pub feedback_modal: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            mobile_menu: MOBILE_MENU_ID.to_string(),
            hamburger_icon: HAMBURGER_ICON_ID.to_string(),
            close_icon: CLOSE_ICON_ID.to_string(),
            feedback_modal: FEEDBACK_MODAL_ID.to_string(),
        }
    }
}
