#![cfg(target_arch = "wasm32")]
use crate::config::ElementIds;
use crate::interactions::Interactions;
use std::cell::RefCell;
use std::sync::atomic::AtomicBool;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod aos;
mod classes;
mod config;
mod constants;
mod dom;
mod events;
mod interactions;
mod startup;
mod state;

thread_local! {
    static INTERACTIONS: RefCell<Option<Interactions>> = const { RefCell::new(None) };
}

static STARTED: AtomicBool = AtomicBool::new(false);

/// Run `f` against the page state, hydrating it from markup on first use.
/// Returns None when there is no document to act on.
pub(crate) fn with_interactions<R>(
    f: impl FnOnce(&mut Interactions, &web::Document) -> R,
) -> Option<R> {
    let document = dom::window_document()?;
    INTERACTIONS.with(|cell| {
        let mut slot = cell.borrow_mut();
        let ui =
            slot.get_or_insert_with(|| Interactions::hydrate(&document, ElementIds::default()));
        Some(f(ui, &document))
    })
}

#[wasm_bindgen(js_name = toggleMobileMenu)]
pub fn toggle_mobile_menu() {
    with_interactions(|ui, doc| ui.toggle_mobile_menu(doc));
}

#[wasm_bindgen(js_name = openFeedbackModal)]
pub fn open_feedback_modal() {
    with_interactions(|ui, doc| ui.open_feedback_modal(doc));
}

#[wasm_bindgen(js_name = closeFeedbackModal)]
pub fn close_feedback_modal() {
    with_interactions(|ui, doc| ui.close_feedback_modal(doc));
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(constants::LOG_LEVEL).ok();

    if !startup::first_start(&STARTED) {
        log::debug!("engler-web already started");
        return Ok(());
    }
    log::info!("engler-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let ui = Interactions::hydrate(&document, ElementIds::default());
    INTERACTIONS.with(|cell| *cell.borrow_mut() = Some(ui));

    dom::expose_global(&window, "toggleMobileMenu", toggle_mobile_menu);
    dom::expose_global(&window, "openFeedbackModal", open_feedback_modal);
    dom::expose_global(&window, "closeFeedbackModal", close_feedback_modal);

    events::wire_backdrop_dismiss(&document);

    startup::init_scroll_reveal(&aos::Aos);
    Ok(())
}
