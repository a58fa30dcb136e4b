use crate::constants::CLIPBOARD_INPUT_ID;
use crate::dom;
use anyhow::anyhow;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Put `text` on the system clipboard through a throwaway input element.
///
/// Returns whether the browser reported the copy as successful. The input is
/// removed again on every path once it has been attached.
pub fn copy_text(document: &web::Document, text: &str) -> anyhow::Result<bool> {
    let input: web::HtmlInputElement = document
        .create_element("input")
        .map_err(|e| anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow!("{:?}", e))?;
    input.set_id(CLIPBOARD_INPUT_ID);
    input.set_value(text);
    input
        .set_attribute("style", "position:fixed;top:0;left:0;opacity:0;pointer-events:none")
        .map_err(|e| anyhow!("{:?}", e))?;

    dom::body(document)?
        .append_child(&input)
        .map_err(|e| anyhow!("{:?}", e))?;
    input.select();

    let copied = document
        .dyn_ref::<web::HtmlDocument>()
        .ok_or_else(|| anyhow!("document is not an HTML document"))
        .and_then(|doc| doc.exec_command("copy").map_err(|e| anyhow!("{:?}", e)));
    input.remove();
    copied
}
