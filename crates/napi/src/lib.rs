#![deny(missing_docs)]
//! Node.js bindings that surface the readmekit core.

use std::collections::HashMap;

use napi_derive::napi;

/// Returns the version string reported by the core crate.
#[napi]
pub fn version() -> String {
    readmekit_core::version().to_string()
}

/// Renders markdown into an HTML string.
#[napi]
pub fn render_html(input: String) -> String {
    readmekit_core::render(&input)
}

/// Assembles per-section values into one markdown document.
///
/// `order` optionally reorders and narrows the emitted sections; an order
/// naming an unknown or repeated section id rejects with an error.
#[napi]
pub fn assemble_markdown(
    values: HashMap<String, String>,
    order: Option<Vec<String>>,
) -> napi::Result<String> {
    let result = match &order {
        Some(ids) => {
            let ids: Vec<&str> = ids.iter().map(String::as_str).collect();
            readmekit_core::assemble(&values, Some(&ids))
        }
        None => readmekit_core::assemble(&values, None),
    };

    result.map_err(|err| napi::Error::from_reason(err.to_string()))
}
