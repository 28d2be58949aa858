use std::cell::RefCell;
use std::rc::Rc;

use citycare::beds::{parse_total, BedBoard, BedKind, BedSimulation, BedSnapshot, BedTotals};
use citycare::config::SiteConfig;
use citycare::prng::Prng;
use tracing::{debug, info, warn};

use super::dom::{by_id, local_now, now_ms, set_text_by_id, set_width_by_id};
use super::timer::IntervalHandle;

/// Capacities come from the page when it carries them.
fn read_totals(defaults: BedTotals) -> BedTotals {
    let read = |kind: BedKind| {
        let id = format!("{}Total", kind.id_prefix());
        let text = by_id(&id).and_then(|el| el.text_content());
        parse_total(text.as_deref(), defaults.get(kind))
    };
    BedTotals::new(
        read(BedKind::GeneralWard),
        read(BedKind::Icu),
        read(BedKind::PrivateRoom),
    )
}

/// Write a snapshot to the hero card and the dashboard. Missing elements are skipped.
fn render(snapshot: &BedSnapshot) {
    for line in &snapshot.lines {
        let p = line.kind.id_prefix();
        let count = line.count_text();
        let fill = line.fill_css();

        set_text_by_id(&format!("{p}Count"), &count);
        set_width_by_id(&format!("{p}Meter"), &fill);

        set_text_by_id(&format!("{p}Avail"), &count);
        set_width_by_id(&format!("{p}DashFill"), &fill);
        set_text_by_id(&format!("{p}Badge"), line.availability.as_str());
    }
    set_text_by_id("lastUpdated", &snapshot.last_updated);
}

fn render_now(sim: &BedSimulation) {
    match local_now() {
        Some(now) => render(&sim.board().snapshot(&now)),
        None => warn!("beds: invalid local date; skipping render"),
    }
}

thread_local! {
    static FEED: RefCell<Option<BedFeed>> = const { RefCell::new(None) };
}

/// Live demo feed. Holds the board and the browser interval that drives it.
pub(super) struct BedFeed {
    sim: Rc<RefCell<BedSimulation>>,
    interval: Option<IntervalHandle>,
}

impl BedFeed {
    pub(super) fn start(cfg: &SiteConfig, rng: Prng) -> Result<Self, String> {
        let totals = read_totals(cfg.bed_totals);
        let board = BedBoard::new(totals, cfg.bed_initial);
        let sim = Rc::new(RefCell::new(BedSimulation::new(
            board,
            rng,
            cfg.bed_update_interval_ms,
        )));

        render_now(&sim.borrow());
        sim.borrow_mut().start(now_ms());

        let tick_sim = sim.clone();
        let interval = IntervalHandle::start(cfg.bed_update_interval_ms, move || {
            let stepped = tick_sim.borrow_mut().advance(now_ms());
            if stepped {
                render_now(&tick_sim.borrow());
            }
        })?;

        info!(
            gw = totals.general_ward,
            icu = totals.icu,
            pr = totals.private_room,
            "beds: demo feed running"
        );
        Ok(Self {
            sim,
            interval: Some(interval),
        })
    }

    pub(super) fn stop(&mut self) {
        self.sim.borrow_mut().cancel();
        if let Some(mut interval) = self.interval.take() {
            interval.cancel();
        }
    }
}

pub(super) fn install(cfg: &SiteConfig, rng: Prng) -> Result<(), String> {
    if by_id("lastUpdated").is_none() && by_id("gwCount").is_none() && by_id("gwAvail").is_none() {
        debug!("beds: no availability elements");
        return Ok(());
    }
    let feed = BedFeed::start(cfg, rng)?;
    FEED.with(|slot| {
        if let Some(mut old) = slot.borrow_mut().replace(feed) {
            old.stop();
        }
    });
    Ok(())
}

/// Stop the periodic updates; the last rendered values stay on the page.
pub(super) fn stop() {
    FEED.with(|slot| {
        if let Some(mut feed) = slot.borrow_mut().take() {
            feed.stop();
            info!("beds: demo feed stopped");
        }
    });
}
