//! Trigger-once-on-visibility: reveal-on-scroll and animated counters.

use std::cell::RefCell;
use std::rc::Rc;

use citycare::motion::CounterAnimation;
use citycare::trigger::TriggerOnce;
use tracing::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use super::dom::{now_ms, query_all};
use super::timer::animate;

const REVEAL_SELECTOR: &str = ".reveal";
const REVEAL_CLASS: &str = "is-visible";
const COUNTER_SELECTOR: &str = "[data-counter]";
const COUNTER_ATTR: &str = "data-counter";

fn intersection_observer_supported() -> bool {
    web_sys::window()
        .map(|w| js_sys::Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
        .unwrap_or(false)
}

/// Call `on_visible` once per target, the first time it is at least
/// `threshold` visible. Each target is unobserved as soon as it fires.
///
/// Without `IntersectionObserver` every target fires immediately.
pub(super) fn observe_once(
    targets: Vec<web_sys::Element>,
    threshold: f64,
    on_visible: impl Fn(&web_sys::Element) + 'static,
) -> Result<(), String> {
    let mut trigger = TriggerOnce::new(threshold);
    for i in 0..targets.len() {
        trigger.arm(i);
    }

    if !intersection_observer_supported() {
        debug!("IntersectionObserver unavailable; firing {} targets now", targets.len());
        for i in trigger.fire_all() {
            on_visible(&targets[i]);
        }
        return Ok(());
    }

    let trigger = Rc::new(RefCell::new(trigger));
    let watched = targets.clone();
    let cb = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(key) = watched.iter().position(|t| *t == target) else {
                    continue;
                };
                let fired = trigger.borrow_mut().observe(
                    &key,
                    entry.is_intersecting(),
                    entry.intersection_ratio(),
                );
                if fired {
                    observer.unobserve(&target);
                    on_visible(&target);
                }
            }
            if trigger.borrow().pending() == 0 {
                observer.disconnect();
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

    let init = web_sys::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        web_sys::IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init)
            .map_err(|_| "IntersectionObserver::new failed".to_string())?;
    for t in &targets {
        observer.observe(t);
    }
    cb.forget();
    Ok(())
}

pub(super) fn install_reveal(threshold: f64) -> Result<(), String> {
    let items = query_all(REVEAL_SELECTOR)?;
    if items.is_empty() {
        debug!("reveal: no targets");
        return Ok(());
    }
    observe_once(items, threshold, |el| {
        let _ = el.class_list().add_1(REVEAL_CLASS);
    })
}

pub(super) fn install_counters(threshold: f64, duration_ms: u32) -> Result<(), String> {
    let nodes = query_all(COUNTER_SELECTOR)?;
    if nodes.is_empty() {
        debug!("counters: no targets");
        return Ok(());
    }
    // Frame timestamps share the `performance.now()` time origin.
    observe_once(nodes, threshold, move |el| {
        let target = CounterAnimation::parse_target(el.get_attribute(COUNTER_ATTR).as_deref());
        let anim = CounterAnimation::new(target, duration_ms as f64, now_ms());
        let el = el.clone();
        let res = animate(move |now| {
            el.set_text_content(Some(&anim.text_at(now)));
            !anim.is_finished(now)
        });
        if let Err(e) = res {
            warn!("counters: {e}");
        }
    })
}
