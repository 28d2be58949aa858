use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use super::dom::window;

/// Browser interval that is cleared on `cancel()` or drop.
pub(super) struct IntervalHandle {
    id: Option<i32>,
    _cb: Closure<dyn FnMut()>,
}

impl IntervalHandle {
    pub(super) fn start(period_ms: u32, f: impl FnMut() + 'static) -> Result<Self, String> {
        let cb = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
        let id = window()?
            .set_interval_with_callback_and_timeout_and_arguments_0(
                cb.as_ref().unchecked_ref(),
                period_ms.min(i32::MAX as u32) as i32,
            )
            .map_err(|_| "set_interval failed".to_string())?;
        Ok(Self {
            id: Some(id),
            _cb: cb,
        })
    }

    pub(super) fn cancel(&mut self) {
        if let Some(id) = self.id.take() {
            if let Some(w) = web_sys::window() {
                w.clear_interval_with_handle(id);
            }
        }
    }
}

impl Drop for IntervalHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Run `f` once after `delay_ms`.
pub(super) fn set_timeout(delay_ms: u32, f: impl FnOnce() + 'static) -> Result<(), String> {
    let cb = Closure::once_into_js(f);
    window()?
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.unchecked_ref(),
            delay_ms.min(i32::MAX as u32) as i32,
        )
        .map(|_| ())
        .map_err(|_| "set_timeout failed".to_string())
}

/// Call `step(now_ms)` every animation frame until it returns `false`.
pub(super) fn animate(mut step: impl FnMut(f64) -> bool + 'static) -> Result<(), String> {
    let f: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();

    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
        if !step(now) {
            // Drop our handle so the closure is freed once this call returns.
            let _ = f.borrow_mut().take();
            return;
        }
        if let Some(cb) = f.borrow().as_ref() {
            let _ = request_frame(cb);
        }
    }) as Box<dyn FnMut(f64)>));

    let res = match g.borrow().as_ref() {
        Some(cb) => request_frame(cb),
        None => Ok(()),
    };
    res
}

fn request_frame(cb: &Closure<dyn FnMut(f64)>) -> Result<(), String> {
    window()?
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .map(|_| ())
        .map_err(|_| "request_animation_frame failed".to_string())
}
