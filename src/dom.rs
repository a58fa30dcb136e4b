use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn query(document: &web::Document, selector: &str) -> Option<web::Element> {
    document.query_selector(selector).ok().flatten()
}

pub fn body(document: &web::Document) -> anyhow::Result<web::HtmlElement> {
    document.body().ok_or_else(|| anyhow::anyhow!("document has no <body>"))
}

/// Add or remove `class` on the element matched by `selector`, if any.
pub fn set_class(document: &web::Document, selector: &str, class: &str, on: bool) {
    match query(document, selector) {
        Some(el) => {
            if let Err(e) = el.class_list().toggle_with_force(class, on) {
                log::warn!("[dom] toggle .{} on {}: {:?}", class, selector, e);
            }
        }
        None => log::debug!("[dom] no element for {}", selector),
    }
}

/// Set width and height of every element in `list` to `size` (a CSS length).
pub fn set_square_size(list: &web::NodeList, size: &str) {
    for i in 0..list.length() {
        let Some(el) = list.item(i).and_then(|n| n.dyn_into::<web::HtmlElement>().ok()) else {
            continue;
        };
        let style = el.style();
        _ = style.set_property("width", size);
        _ = style.set_property("height", size);
    }
}
