use citycare::appointment::{message_link, AppointmentRequest};
use citycare::config::SiteConfig;
use tracing::{debug, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use super::dom::{by_id, window};

/// `(name, value)` pairs of a form in document order. File inputs are skipped.
fn form_fields(form: &web_sys::HtmlFormElement) -> Result<Vec<(String, String)>, String> {
    let data = web_sys::FormData::new_with_form(form)
        .map_err(|_| "appointment: FormData::new failed".to_string())?;
    let iter = js_sys::try_iter(&data)
        .map_err(|_| "appointment: FormData is not iterable".to_string())?
        .ok_or("appointment: FormData is not iterable".to_string())?;

    let mut out = Vec::new();
    for item in iter {
        let Some(pair) = item.ok().and_then(|v| v.dyn_into::<js_sys::Array>().ok()) else {
            continue;
        };
        let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) else {
            continue;
        };
        out.push((name, value));
    }
    Ok(out)
}

fn open_in_new_tab(url: &str) -> Result<(), String> {
    window()?
        .open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer")
        .map(|_| ())
        .map_err(|_| "window.open threw".to_string())
}

/// Appointment form: compose the request and open the prefilled chat.
pub(super) fn install(cfg: &SiteConfig) -> Result<(), String> {
    let Some(form) = by_id("appointmentForm")
        .and_then(|el| el.dyn_into::<web_sys::HtmlFormElement>().ok())
    else {
        debug!("appointment: no #appointmentForm");
        return Ok(());
    };

    let hospital = cfg.hospital_name.clone();
    let base = cfg.messaging_base.clone();
    let phone = cfg.messaging_phone.clone();
    let submitted = form.clone();

    let on_submit = Closure::wrap(Box::new(move |ev: web_sys::Event| {
        ev.prevent_default();

        let fields = match form_fields(&submitted) {
            Ok(f) => f,
            Err(e) => {
                warn!("{e}");
                return;
            }
        };
        let request = AppointmentRequest::from_fields(fields);
        let message = request.compose_message(&hospital);
        let url = message_link(&base, &phone, &message);

        match open_in_new_tab(&url) {
            Ok(()) => info!(tests = request.tests.len(), "appointment: chat opened"),
            Err(e) => warn!("appointment: {e}"),
        }
    }) as Box<dyn FnMut(_)>);

    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())
        .map_err(|_| "appointment: add submit listener failed".to_string())?;
    on_submit.forget();
    Ok(())
}
