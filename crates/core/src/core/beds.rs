//! Bed-availability demo board.
//!
//! Three counters take a bounded random walk against fixed capacities. This is
//! a cosmetic simulation for the landing page, not an occupancy model.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::clock::format_time;
use super::fmt::css_pct;
use super::prng::Prng;
use super::schedule::RepeatingTask;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BedKind {
    GeneralWard,
    Icu,
    PrivateRoom,
}

impl BedKind {
    pub const ALL: [BedKind; 3] = [BedKind::GeneralWard, BedKind::Icu, BedKind::PrivateRoom];

    /// Prefix of the page element ids for this category (`gwCount`, `icuBadge`, ...).
    pub fn id_prefix(self) -> &'static str {
        match self {
            BedKind::GeneralWard => "gw",
            BedKind::Icu => "icu",
            BedKind::PrivateRoom => "pr",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BedCounts {
    pub general_ward: u32,
    pub icu: u32,
    pub private_room: u32,
}

impl BedCounts {
    pub const fn new(general_ward: u32, icu: u32, private_room: u32) -> Self {
        Self {
            general_ward,
            icu,
            private_room,
        }
    }

    pub fn get(&self, kind: BedKind) -> u32 {
        match kind {
            BedKind::GeneralWard => self.general_ward,
            BedKind::Icu => self.icu,
            BedKind::PrivateRoom => self.private_room,
        }
    }

    pub fn get_mut(&mut self, kind: BedKind) -> &mut u32 {
        match kind {
            BedKind::GeneralWard => &mut self.general_ward,
            BedKind::Icu => &mut self.icu,
            BedKind::PrivateRoom => &mut self.private_room,
        }
    }
}

/// Capacity per category.
pub type BedTotals = BedCounts;

pub const DEFAULT_TOTALS: BedTotals = BedCounts::new(60, 20, 40);
pub const DEFAULT_AVAILABLE: BedCounts = BedCounts::new(18, 4, 10);

/// Qualitative status shown on the dashboard badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Good,
    Limited,
    Critical,
}

impl Availability {
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= 0.5 {
            Availability::Good
        } else if ratio >= 0.2 {
            Availability::Limited
        } else {
            // NaN lands here too.
            Availability::Critical
        }
    }

    /// A zero capacity is always `Critical`.
    pub fn from_counts(available: u32, total: u32) -> Self {
        if total == 0 {
            return Availability::Critical;
        }
        Self::from_ratio(available as f64 / total as f64)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Availability::Good => "Good",
            Availability::Limited => "Limited",
            Availability::Critical => "Critical",
        }
    }
}

/// Parse a capacity read from page text; missing or unparsable uses `default`.
pub fn parse_total(raw: Option<&str>, default: u32) -> u32 {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(default)
}

/// One random step of magnitude 1 (60%) or 2 (40%) in a random direction,
/// clamped to `[0, total]`.
pub fn random_step(value: u32, total: u32, rng: &mut Prng) -> u32 {
    let up = rng.above(0.5);
    let magnitude: i64 = if rng.above(0.6) { 2 } else { 1 };
    let delta = if up { magnitude } else { -magnitude };
    (value as i64 + delta).clamp(0, total as i64) as u32
}

/// Rendered view of one category.
#[derive(Debug, Clone, PartialEq)]
pub struct BedLine {
    pub kind: BedKind,
    pub available: u32,
    pub total: u32,
    /// Fill percentage in `[0,100]`.
    pub fill_pct: f64,
    pub availability: Availability,
}

impl BedLine {
    pub fn count_text(&self) -> String {
        self.available.to_string()
    }

    pub fn fill_css(&self) -> String {
        css_pct(self.fill_pct)
    }
}

/// Everything the page shows for the board after an update.
#[derive(Debug, Clone, PartialEq)]
pub struct BedSnapshot {
    pub lines: Vec<BedLine>,
    pub last_updated: String,
}

impl BedSnapshot {
    pub fn line(&self, kind: BedKind) -> Option<&BedLine> {
        self.lines.iter().find(|l| l.kind == kind)
    }
}

#[derive(Debug, Clone)]
pub struct BedBoard {
    totals: BedTotals,
    available: BedCounts,
}

impl BedBoard {
    /// Initial counts are clamped into `[0, total]`.
    pub fn new(totals: BedTotals, initial: BedCounts) -> Self {
        let mut available = initial;
        for kind in BedKind::ALL {
            let v = available.get_mut(kind);
            *v = (*v).min(totals.get(kind));
        }
        Self { totals, available }
    }

    pub fn totals(&self) -> BedTotals {
        self.totals
    }

    pub fn available(&self) -> BedCounts {
        self.available
    }

    /// Advance every counter one independent random step.
    pub fn step(&mut self, rng: &mut Prng) {
        for kind in BedKind::ALL {
            let total = self.totals.get(kind);
            let v = self.available.get_mut(kind);
            *v = random_step(*v, total, rng);
        }
    }

    pub fn line(&self, kind: BedKind) -> BedLine {
        let available = self.available.get(kind);
        let total = self.totals.get(kind);
        let fill_pct = if total == 0 {
            0.0
        } else {
            available as f64 / total as f64 * 100.0
        };
        BedLine {
            kind,
            available,
            total,
            fill_pct,
            availability: Availability::from_counts(available, total),
        }
    }

    pub fn snapshot(&self, now: &NaiveDateTime) -> BedSnapshot {
        BedSnapshot {
            lines: BedKind::ALL.iter().map(|&k| self.line(k)).collect(),
            last_updated: format_time(now),
        }
    }
}

/// Board + randomness + schedule: the whole periodic demo feed.
#[derive(Debug, Clone)]
pub struct BedSimulation {
    board: BedBoard,
    rng: Prng,
    task: RepeatingTask,
}

impl BedSimulation {
    pub fn new(board: BedBoard, rng: Prng, period_ms: u32) -> Self {
        Self {
            board,
            rng,
            task: RepeatingTask::new(period_ms),
        }
    }

    pub fn board(&self) -> &BedBoard {
        &self.board
    }

    pub fn task(&self) -> &RepeatingTask {
        &self.task
    }

    pub fn start(&mut self, now_ms: f64) {
        self.task.start(now_ms);
    }

    pub fn cancel(&mut self) {
        self.task.cancel();
        debug!(fired = self.task.fired(), "bed simulation cancelled");
    }

    /// Take one step if the schedule is due at `now_ms`. Returns whether the
    /// board changed, so the caller knows to re-render.
    pub fn advance(&mut self, now_ms: f64) -> bool {
        if !self.task.poll(now_ms) {
            return false;
        }
        self.board.step(&mut self.rng);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::local_datetime;

    #[test]
    fn thresholds_are_exact() {
        assert_eq!(Availability::from_ratio(0.5), Availability::Good);
        assert_eq!(Availability::from_ratio(0.49999), Availability::Limited);
        assert_eq!(Availability::from_ratio(0.2), Availability::Limited);
        assert_eq!(Availability::from_ratio(0.19999), Availability::Critical);
        assert_eq!(Availability::from_ratio(f64::NAN), Availability::Critical);
    }

    #[test]
    fn counts_map_to_labels() {
        assert_eq!(Availability::from_counts(30, 60), Availability::Good);
        assert_eq!(Availability::from_counts(18, 60), Availability::Limited);
        assert_eq!(Availability::from_counts(4, 20), Availability::Limited);
        assert_eq!(Availability::from_counts(3, 20), Availability::Critical);
        assert_eq!(Availability::from_counts(0, 0), Availability::Critical);
        assert_eq!(Availability::Good.as_str(), "Good");
    }

    #[test]
    fn walk_stays_in_bounds() {
        let mut rng = Prng::new(2024);
        let mut gw = 18u32;
        for _ in 0..50_000 {
            gw = random_step(gw, 60, &mut rng);
            assert!(gw <= 60);
        }
    }

    #[test]
    fn walk_hits_both_walls_without_escaping() {
        let mut rng = Prng::new(5);
        let mut v = 1u32;
        let mut saw_zero = false;
        let mut saw_top = false;
        for _ in 0..20_000 {
            v = random_step(v, 3, &mut rng);
            assert!(v <= 3);
            saw_zero |= v == 0;
            saw_top |= v == 3;
        }
        assert!(saw_zero && saw_top);
    }

    #[test]
    fn steps_are_one_or_two_until_clamped() {
        let mut rng = Prng::new(77);
        for _ in 0..5_000 {
            let next = random_step(50, 100, &mut rng);
            let d = (next as i64 - 50).abs();
            assert!(d == 1 || d == 2, "d={d}");
        }
    }

    #[test]
    fn board_step_keeps_every_counter_in_range() {
        let mut board = BedBoard::new(DEFAULT_TOTALS, DEFAULT_AVAILABLE);
        let mut rng = Prng::new(42);
        for _ in 0..10_000 {
            board.step(&mut rng);
            for kind in BedKind::ALL {
                assert!(board.available().get(kind) <= board.totals().get(kind));
            }
        }
    }

    #[test]
    fn initial_counts_are_clamped_to_totals() {
        let board = BedBoard::new(BedCounts::new(10, 2, 0), DEFAULT_AVAILABLE);
        assert_eq!(board.available(), BedCounts::new(10, 2, 0));
    }

    #[test]
    fn snapshot_renders_every_category() {
        let board = BedBoard::new(DEFAULT_TOTALS, DEFAULT_AVAILABLE);
        let now = local_datetime(2026, 1, 2, 9, 3, 0).unwrap();
        let snap = board.snapshot(&now);

        assert_eq!(snap.lines.len(), 3);
        assert_eq!(snap.last_updated, "02-01-2026 9:03 AM");

        let gw = snap.line(BedKind::GeneralWard).unwrap();
        assert_eq!(gw.count_text(), "18");
        assert_eq!(gw.fill_css(), "30%");
        assert_eq!(gw.availability, Availability::Limited);

        let pr = snap.line(BedKind::PrivateRoom).unwrap();
        assert_eq!(pr.fill_css(), "25%");
    }

    #[test]
    fn zero_capacity_renders_empty() {
        let board = BedBoard::new(BedCounts::new(0, 20, 40), BedCounts::new(5, 4, 10));
        let line = board.line(BedKind::GeneralWard);
        assert_eq!(line.available, 0);
        assert_eq!(line.fill_css(), "0%");
        assert_eq!(line.availability, Availability::Critical);
    }

    #[test]
    fn simulation_steps_on_schedule_and_stops_when_cancelled() {
        let board = BedBoard::new(DEFAULT_TOTALS, DEFAULT_AVAILABLE);
        let mut sim = BedSimulation::new(board, Prng::new(3), 10_000);

        assert!(!sim.advance(50_000.0), "not started");

        sim.start(0.0);
        assert!(!sim.advance(5_000.0));
        assert!(sim.advance(10_000.0));
        assert!(sim.advance(40_000.0));
        assert!(!sim.advance(45_000.0));
        assert!(sim.advance(50_000.0));
        assert_eq!(sim.task().fired(), 3);

        sim.cancel();
        let frozen = sim.board().available();
        assert!(!sim.advance(1_000_000.0));
        assert_eq!(sim.board().available(), frozen);
    }

    #[test]
    fn simulation_is_reproducible_for_a_seed() {
        let run = |seed| {
            let board = BedBoard::new(DEFAULT_TOTALS, DEFAULT_AVAILABLE);
            let mut sim = BedSimulation::new(board, Prng::new(seed), 10_000);
            sim.start(0.0);
            for i in 1..=60 {
                sim.advance(i as f64 * 10_000.0);
            }
            sim.board().available()
        };
        assert_eq!(run(11), run(11));
    }

    #[test]
    fn late_update_moves_each_counter_at_most_two() {
        for seed in 1..200 {
            let board = BedBoard::new(DEFAULT_TOTALS, DEFAULT_AVAILABLE);
            let mut sim = BedSimulation::new(board, Prng::new(seed), 10_000);
            sim.start(0.0);
            let before = sim.board().available();

            // Six periods late, e.g. a throttled background tab.
            assert!(sim.advance(60_000.0));
            assert_eq!(sim.task().fired(), 1);

            let after = sim.board().available();
            for kind in BedKind::ALL {
                let d = (after.get(kind) as i64 - before.get(kind) as i64).abs();
                assert!(d <= 2, "seed {seed}: {kind:?} moved by {d}");
            }
        }
    }

    #[test]
    fn totals_fall_back_to_defaults() {
        assert_eq!(parse_total(Some("75"), 60), 75);
        assert_eq!(parse_total(Some(" 12 "), 60), 12);
        assert_eq!(parse_total(Some(""), 60), 60);
        assert_eq!(parse_total(Some("n/a"), 20), 20);
        assert_eq!(parse_total(None, 40), 40);
    }
}
