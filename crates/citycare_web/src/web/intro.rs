use citycare::config::SiteConfig;
use citycare::motion::LoadingProgress;
use citycare::prng::Prng;
use tracing::{debug, warn};

use super::dom::{html_by_id, set_style};
use super::timer::{animate, set_timeout};

/// Loading overlay: random-increment bar, then fade out and remove.
pub(super) fn install(cfg: &SiteConfig, mut rng: Prng) -> Result<(), String> {
    let (Some(overlay), Some(bar)) = (html_by_id("intro"), html_by_id("introBar")) else {
        debug!("intro: overlay or bar missing");
        return Ok(());
    };

    let mut progress = LoadingProgress::new(cfg.intro_max_step);
    let hide_delay_ms = cfg.intro_hide_delay_ms;

    // Short pause so the brand is visible before the bar moves.
    set_timeout(cfg.intro_delay_ms, move || {
        let res = animate(move |_now| {
            let done = progress.tick(&mut rng);
            set_style(&bar, "width", &progress.width_css());
            if done {
                hide(overlay.clone(), hide_delay_ms);
                return false;
            }
            true
        });
        if let Err(e) = res {
            warn!("intro: {e}");
        }
    })
}

fn hide(overlay: web_sys::HtmlElement, delay_ms: u32) {
    set_style(
        &overlay,
        "transition",
        "opacity .5s ease, transform .6s cubic-bezier(.2,.8,.2,1)",
    );
    set_style(&overlay, "opacity", "0");
    set_style(&overlay, "transform", "translateY(-6px)");

    let res = set_timeout(delay_ms, move || {
        set_style(&overlay, "display", "none");
        debug!("intro: overlay removed");
    });
    if let Err(e) = res {
        warn!("intro: {e}");
    }
}
