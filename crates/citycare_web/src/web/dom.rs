use chrono::NaiveDateTime;
use citycare::clock::local_datetime;
use wasm_bindgen::JsCast;

pub(super) fn window() -> Result<web_sys::Window, String> {
    web_sys::window().ok_or("no window".to_string())
}

pub(super) fn document() -> Result<web_sys::Document, String> {
    window()?.document().ok_or("no document".to_string())
}

pub(super) fn by_id(id: &str) -> Option<web_sys::Element> {
    web_sys::window()?.document()?.get_element_by_id(id)
}

pub(super) fn html_by_id(id: &str) -> Option<web_sys::HtmlElement> {
    by_id(id)?.dyn_into::<web_sys::HtmlElement>().ok()
}

pub(super) fn query_all(selector: &str) -> Result<Vec<web_sys::Element>, String> {
    let list = document()?
        .query_selector_all(selector)
        .map_err(|_| format!("query_selector_all({selector}) threw"))?;
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(el) = list.get(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) {
            out.push(el);
        }
    }
    Ok(out)
}

pub(super) fn set_text_by_id(id: &str, text: &str) {
    if let Some(el) = by_id(id) {
        el.set_text_content(Some(text));
    }
}

pub(super) fn set_style(el: &web_sys::HtmlElement, prop: &str, value: &str) {
    let _ = el.style().set_property(prop, value);
}

pub(super) fn set_width_by_id(id: &str, width: &str) {
    if let Some(el) = html_by_id(id) {
        set_style(&el, "width", width);
    }
}

/// Milliseconds from `performance.now()`, 0 when unavailable.
pub(super) fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

/// Current local wall-clock time.
pub(super) fn local_now() -> Option<NaiveDateTime> {
    let d = js_sys::Date::new_0();
    local_datetime(
        d.get_full_year() as i32,
        d.get_month() + 1,
        d.get_date(),
        d.get_hours(),
        d.get_minutes(),
        d.get_seconds(),
    )
}
