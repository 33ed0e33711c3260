use crate::startup::ScrollReveal;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = AOS, js_name = init)]
    fn aos_init() -> Result<(), JsValue>;
}

/// The global `AOS` (Animate On Scroll) library loaded by the page.
pub struct Aos;

impl ScrollReveal for Aos {
    fn init(&self) -> anyhow::Result<()> {
        let loaded =
            js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str("AOS")).unwrap_or(false);
        if !loaded {
            anyhow::bail!("global AOS is not loaded");
        }
        aos_init().map_err(|e| anyhow::anyhow!("AOS.init threw: {:?}", e))
    }
}
