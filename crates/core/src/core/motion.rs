//! Scroll and animation math: loading bar, scroll progress, parallax, counters.

use super::fmt::fmt_trimmed;
use super::prng::Prng;

/// Fraction of the document scrolled, as a percentage in `[0,100]`.
///
/// Returns 0 when the content does not overflow the viewport.
pub fn scroll_progress_pct(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let range = scroll_height - client_height;
    if !range.is_finite() || range <= 0.0 || !scroll_top.is_finite() {
        return 0.0;
    }
    (scroll_top / range * 100.0).clamp(0.0, 100.0)
}

/// Vertical background shift for a scroll offset.
#[inline]
pub fn parallax_offset(scroll_y: f64, factor: f64) -> f64 {
    if scroll_y.is_finite() {
        scroll_y * factor
    } else {
        0.0
    }
}

/// CSS transform for the parallax layer.
pub fn parallax_transform(scroll_y: f64, factor: f64) -> String {
    format!(
        "translate3d(0, {}px, 0)",
        fmt_trimmed(parallax_offset(scroll_y, factor), 3)
    )
}

#[inline]
pub fn ease_out_cubic(p: f64) -> f64 {
    let p = p.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

/// Round half up (towards +inf), matching what the page displayed before.
#[inline]
fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

/// One counter animating from 0 to `target` over `duration_ms`.
#[derive(Debug, Clone, Copy)]
pub struct CounterAnimation {
    target: f64,
    duration_ms: f64,
    start_ms: f64,
}

impl CounterAnimation {
    pub fn new(target: f64, duration_ms: f64, start_ms: f64) -> Self {
        let target = if target.is_finite() { target } else { 0.0 };
        Self {
            target,
            duration_ms: duration_ms.max(0.0),
            start_ms,
        }
    }

    /// Parse a `data-counter` attribute; missing or non-numeric animates to 0.
    pub fn parse_target(raw: Option<&str>) -> f64 {
        raw.and_then(|s| s.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite())
            .unwrap_or(0.0)
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Linear progress in `[0,1]`.
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Displayed value at `now_ms`. Exactly `target` once the duration elapsed.
    pub fn value_at(&self, now_ms: f64) -> f64 {
        let p = self.progress(now_ms);
        if p >= 1.0 {
            return round_half_up(self.target);
        }
        round_half_up(self.target * ease_out_cubic(p))
    }

    pub fn is_finished(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    /// Text for the element at `now_ms`.
    pub fn text_at(&self, now_ms: f64) -> String {
        fmt_trimmed(self.value_at(now_ms), 0)
    }
}

/// Progress of the loading overlay bar.
#[derive(Debug, Clone)]
pub struct LoadingProgress {
    value: f64,
    max_step: f64,
}

impl LoadingProgress {
    pub fn new(max_step: f64) -> Self {
        Self {
            value: 0.0,
            max_step: max_step.max(0.0),
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn is_complete(&self) -> bool {
        self.value >= 100.0
    }

    /// Add a fixed increment, clamped to `[0,100]`. Returns true once complete.
    pub fn advance_by(&mut self, increment: f64) -> bool {
        let inc = if increment.is_finite() { increment } else { 0.0 };
        self.value = (self.value + inc).clamp(0.0, 100.0);
        self.is_complete()
    }

    /// One animation frame: a random increment in `[0, max_step)`.
    pub fn tick(&mut self, rng: &mut Prng) -> bool {
        let inc = rng.gen_range_f64(0.0, self.max_step);
        self.advance_by(inc)
    }

    /// Bar width as a whole percentage.
    pub fn width_css(&self) -> String {
        super::fmt::css_pct_whole(self.value)
    }
}
