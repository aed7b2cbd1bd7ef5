use readmekit_core::SectionValues;
use wasm_bindgen::prelude::*;

/// Renders markdown into an HTML `String`.
#[wasm_bindgen(js_name = render_html)]
pub fn render_html(input: &str) -> String {
    readmekit_core::render(input)
}

/// Assembles a `{section id: text}` object into one markdown document.
///
/// `order` optionally reorders and narrows the emitted sections; it must
/// stay within the catalog and must not repeat an id.
#[wasm_bindgen(js_name = assemble_markdown)]
pub fn assemble_markdown(values: JsValue, order: Option<Vec<String>>) -> Result<String, JsError> {
    let values: SectionValues = serde_wasm_bindgen::from_value(values).map_err(to_js_error)?;

    match order {
        Some(ids) => {
            let ids: Vec<&str> = ids.iter().map(String::as_str).collect();
            readmekit_core::assemble(&values, Some(&ids)).map_err(to_js_error)
        }
        None => readmekit_core::assemble(&values, None).map_err(to_js_error),
    }
}

/// Returns the section catalog as an array of definition objects, in
/// default assembly order.
#[wasm_bindgen(js_name = section_catalog)]
pub fn section_catalog() -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(readmekit_core::SECTIONS).map_err(to_js_error)
}

fn to_js_error<E: ToString>(err: E) -> JsError {
    JsError::new(&err.to_string())
}
