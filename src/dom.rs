use crate::classes::{ClassList, Page};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

impl ClassList for web::Element {
    #[inline]
    fn add_class(&self, class: &str) {
        _ = self.class_list().add_1(class);
    }

    #[inline]
    fn remove_class(&self, class: &str) {
        _ = self.class_list().remove_1(class);
    }

    #[inline]
    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }
}

impl Page for web::Document {
    type Element = web::Element;

    #[inline]
    fn element(&self, id: &str) -> Option<web::Element> {
        self.get_element_by_id(id)
    }
}

/// Publish a handler as `window[name]` so inline `onclick` attributes can reach it.
pub fn expose_global(window: &web::Window, name: &str, handler: fn()) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    if let Err(e) = js_sys::Reflect::set(window, &JsValue::from_str(name), closure.as_ref()) {
        log::warn!("could not expose window.{}: {:?}", name, e);
    }
    closure.forget();
}
