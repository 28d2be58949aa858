use std::cell::Cell;
use std::rc::Rc;

use citycare::nav::NavMenu;
use tracing::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use super::dom::{by_id, query_all};

fn apply(menu: NavMenu, links: &web_sys::Element, toggle: &web_sys::Element) {
    let _ = links
        .class_list()
        .toggle_with_force(NavMenu::OPEN_CLASS, menu.is_open());
    let _ = toggle.set_attribute("aria-expanded", menu.aria_expanded());
}

/// Mobile menu: the toggle flips it, any link inside closes it.
pub(super) fn install() -> Result<(), String> {
    let (Some(toggle), Some(links)) = (by_id("navToggle"), by_id("navLinks")) else {
        debug!("nav: toggle or link container missing");
        return Ok(());
    };

    let menu = Rc::new(Cell::new(NavMenu::default()));

    {
        let menu = menu.clone();
        let (links, toggle_el) = (links.clone(), toggle.clone());
        let on_toggle = Closure::wrap(Box::new(move |_ev: web_sys::Event| {
            let mut m = menu.get();
            m.toggle();
            menu.set(m);
            apply(m, &links, &toggle_el);
        }) as Box<dyn FnMut(_)>);
        toggle
            .add_event_listener_with_callback("click", on_toggle.as_ref().unchecked_ref())
            .map_err(|_| "nav: add click listener failed".to_string())?;
        on_toggle.forget();
    }

    for a in query_all("#navLinks a")? {
        let menu = menu.clone();
        let (links, toggle_el) = (links.clone(), toggle.clone());
        let on_link = Closure::wrap(Box::new(move |_ev: web_sys::Event| {
            let mut m = menu.get();
            m.close();
            menu.set(m);
            apply(m, &links, &toggle_el);
        }) as Box<dyn FnMut(_)>);
        a.add_event_listener_with_callback("click", on_link.as_ref().unchecked_ref())
            .map_err(|_| "nav: add link listener failed".to_string())?;
        on_link.forget();
    }

    Ok(())
}
