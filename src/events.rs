use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Close the feedback modal when a click lands on its backdrop.
pub fn wire_backdrop_dismiss(document: &web::Document) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        let target = ev.target().and_then(|t| t.dyn_into::<web::Element>().ok());
        let dismissed =
            crate::with_interactions(|ui, doc| ui.handle_document_click(doc, target.as_ref()));
        if dismissed == Some(true) {
            log::debug!("[ui] backdrop click closed feedback modal");
        }
    }) as Box<dyn FnMut(web::Event)>);
    _ = document.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
