//! # citycare
//!
//! DOM-free logic behind the City Hospital landing page: the loading bar,
//! scroll progress and parallax math, one-shot visibility triggers, counter
//! easing, department pills, the bed-availability demo feed, and the
//! appointment request message.
//!
//! The browser crate (`citycare_web`) owns every element handle and event
//! listener; everything here is plain data in, plain data out, so it runs and
//! tests on native targets.
//!
//! ## Modules
//!
//! - [`motion`]: loading progress, scroll progress, parallax, counter animation
//! - [`trigger`]: trigger-once-on-visibility bookkeeping
//! - [`beds`]: bed-availability board and its periodic simulation
//! - [`appointment`]: form values -> message -> deep link
//! - [`schedule`]: cancellable repeating task
//! - [`config`]: page tunables

#[path = "core/appointment.rs"]
pub mod appointment;

#[path = "core/beds.rs"]
pub mod beds;

#[path = "core/clock.rs"]
pub mod clock;

#[path = "core/config.rs"]
pub mod config;

#[path = "core/error.rs"]
pub mod error;

#[path = "core/fmt.rs"]
pub mod fmt;

#[path = "core/motion.rs"]
pub mod motion;

#[path = "core/nav.rs"]
pub mod nav;

#[path = "core/pills.rs"]
pub mod pills;

#[path = "core/prng.rs"]
pub mod prng;

#[path = "core/schedule.rs"]
pub mod schedule;

#[path = "core/trigger.rs"]
pub mod trigger;

pub use error::{Error, Result};

/// Prelude module for convenient imports.
///
/// ```
/// use citycare::prelude::*;
///
/// let cfg = SiteConfig::default();
/// let board = BedBoard::new(cfg.bed_totals, cfg.bed_initial);
/// assert_eq!(board.line(BedKind::Icu).availability, Availability::Limited);
/// ```
pub mod prelude {
    pub use crate::appointment::{encode_uri_component, message_link, AppointmentRequest};
    pub use crate::beds::{
        Availability, BedBoard, BedCounts, BedKind, BedLine, BedSimulation, BedSnapshot,
        BedTotals,
    };
    pub use crate::config::SiteConfig;
    pub use crate::motion::{CounterAnimation, LoadingProgress};
    pub use crate::nav::NavMenu;
    pub use crate::pills::{PillGroup, PillSelection};
    pub use crate::prng::Prng;
    pub use crate::schedule::{RepeatingTask, TaskState};
    pub use crate::trigger::TriggerOnce;
}
