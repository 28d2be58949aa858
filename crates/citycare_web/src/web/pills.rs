use std::cell::RefCell;
use std::rc::Rc;

use citycare::pills::PillGroup;
use tracing::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use super::dom::{by_id, query_all};

fn option_texts(select: &web_sys::HtmlSelectElement) -> Vec<String> {
    let options = select.options();
    (0..options.length())
        .filter_map(|i| options.get_with_index(i))
        .filter_map(|el| el.dyn_into::<web_sys::HtmlOptionElement>().ok())
        .map(|o| o.text())
        .collect()
}

fn scroll_to_appointment() {
    let Some(section) = by_id("appointment") else {
        return;
    };
    let opts = web_sys::ScrollIntoViewOptions::new();
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    opts.set_block(web_sys::ScrollLogicalPosition::Start);
    section.scroll_into_view_with_scroll_into_view_options(&opts);
}

/// Department pills: exclusive active state mirrored into `#department`.
pub(super) fn install() -> Result<(), String> {
    let pills = query_all(".pill")?;
    let dept = by_id("department").and_then(|el| el.dyn_into::<web_sys::HtmlSelectElement>().ok());
    let Some(dept) = dept.filter(|_| !pills.is_empty()) else {
        debug!("pills: no pills or no department select");
        return Ok(());
    };

    let labels = pills.iter().map(|p| p.get_attribute("data-pill")).collect();
    let group = Rc::new(RefCell::new(PillGroup::new(labels)));
    let pills = Rc::new(pills);

    for (index, pill) in pills.iter().enumerate() {
        let group = group.clone();
        let all = pills.clone();
        let dept = dept.clone();
        let on_click = Closure::wrap(Box::new(move |_ev: web_sys::Event| {
            let Some(sel) = group.borrow_mut().select(index, &option_texts(&dept)) else {
                return;
            };
            for (i, p) in all.iter().enumerate() {
                let _ = p
                    .class_list()
                    .toggle_with_force(PillGroup::ACTIVE_CLASS, i == sel.active);
            }
            if let Some(value) = sel.department.as_deref() {
                dept.set_value(value);
            }
            scroll_to_appointment();
        }) as Box<dyn FnMut(_)>);
        pill.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .map_err(|_| "pills: add click listener failed".to_string())?;
        on_click.forget();
    }

    Ok(())
}
