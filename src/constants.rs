// Element identifiers expected in the page markup
pub const MOBILE_MENU_ID: &str = "mobile-menu";
pub const HAMBURGER_ICON_ID: &str = "hamburger-icon";
pub const CLOSE_ICON_ID: &str = "close-icon";
pub const FEEDBACK_MODAL_ID: &str = "feedbackModal";

// Display markers (Tailwind utility classes)
pub const CLASS_HIDDEN: &str = "hidden";
pub const CLASS_FLEX: &str = "flex";

// Console logging threshold
pub const LOG_LEVEL: log::Level = log::Level::Info;
