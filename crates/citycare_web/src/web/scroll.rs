use citycare::fmt::css_pct;
use citycare::motion::{parallax_transform, scroll_progress_pct};
use tracing::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use super::dom::{document, html_by_id, set_style, window};

/// Run `f` now and on every passive window scroll event.
fn on_scroll(mut f: impl FnMut() + 'static) -> Result<(), String> {
    f();
    let cb = Closure::wrap(Box::new(move |_ev: web_sys::Event| f()) as Box<dyn FnMut(_)>);
    let opts = web_sys::AddEventListenerOptions::new();
    opts.set_passive(true);
    window()?
        .add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            cb.as_ref().unchecked_ref(),
            &opts,
        )
        .map_err(|_| "add scroll listener failed".to_string())?;
    cb.forget();
    Ok(())
}

pub(super) fn install_progress() -> Result<(), String> {
    let Some(bar) = html_by_id("scrollBar") else {
        debug!("scroll progress: no #scrollBar");
        return Ok(());
    };
    let root = document()?
        .document_element()
        .ok_or("scroll progress: no document element".to_string())?;

    on_scroll(move || {
        let pct = scroll_progress_pct(
            root.scroll_top() as f64,
            root.scroll_height() as f64,
            root.client_height() as f64,
        );
        set_style(&bar, "width", &css_pct(pct));
    })
}

pub(super) fn install_parallax(factor: f64) -> Result<(), String> {
    let Some(bg) = html_by_id("parallaxBg") else {
        debug!("parallax: no #parallaxBg");
        return Ok(());
    };
    let win = window()?;

    on_scroll(move || {
        let y = win.scroll_y().unwrap_or(0.0);
        set_style(&bg, "transform", &parallax_transform(y, factor));
    })
}
