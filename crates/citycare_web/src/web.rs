use citycare::clock::year_text;
use citycare::config::SiteConfig;
use citycare::prng::Prng;
use tracing::{debug, info, warn};

mod appointment;
mod beds;
mod dom;
mod intro;
mod logging;
mod nav;
mod observe;
mod pills;
mod scroll;
mod timer;

const CONFIG_SCRIPT_ID: &str = "siteConfig";

/// Wire every page behavior. Each one is independent: a behavior whose
/// elements are missing is skipped without affecting the others.
pub fn start() {
    logging::init();

    let cfg = load_config();
    let mut rng = match cfg.seed {
        Some(seed) => Prng::new(seed),
        None => Prng::from_unit_f64(js_sys::Math::random()),
    };

    run("intro", || intro::install(&cfg, Prng::new(rng.next_u32() as u64 + 1)));
    run("nav", nav::install);
    run("scroll progress", scroll::install_progress);
    run("parallax", || scroll::install_parallax(cfg.parallax_factor));
    run("reveal", || observe::install_reveal(cfg.reveal_threshold));
    run("counters", || {
        observe::install_counters(cfg.counter_threshold, cfg.counter_duration_ms)
    });
    run("pills", pills::install);
    run("beds", || beds::install(&cfg, Prng::new(rng.next_u32() as u64 + 1)));
    run("appointment", || appointment::install(&cfg));
    run("year", install_year);

    info!(hospital = %cfg.hospital_name, "page behaviors installed");
}

/// Halt the bed-availability demo updates.
#[wasm_bindgen::prelude::wasm_bindgen(js_name = stopBedFeed)]
pub fn stop_bed_feed() {
    beds::stop();
}

fn run(name: &str, install: impl FnOnce() -> Result<(), String>) {
    if let Err(e) = install() {
        warn!("{name}: {e}");
    }
}

fn load_config() -> SiteConfig {
    let raw = dom::by_id(CONFIG_SCRIPT_ID).and_then(|el| el.text_content());
    match SiteConfig::from_optional_json(raw.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!("ignoring page config: {e}");
            SiteConfig::default()
        }
    }
}

fn install_year() -> Result<(), String> {
    let Some(el) = dom::by_id("year") else {
        debug!("year: no #year slot");
        return Ok(());
    };
    let now = dom::local_now().ok_or("year: invalid local date".to_string())?;
    el.set_text_content(Some(&year_text(&now)));
    Ok(())
}
