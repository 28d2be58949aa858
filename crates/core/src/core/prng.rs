// Minimal PRNG (no external crates).
//
// This is NOT cryptographically secure.
// It drives the cosmetic bed-availability walk and the loading bar jitter,
// and is seedable so both are reproducible in tests.

#[derive(Debug, Clone)]
pub struct Prng {
    state: u64,
}

impl Prng {
    pub fn new(seed: u64) -> Self {
        // Avoid a zero state.
        let seed = if seed == 0 { 0x9E3779B97F4A7C15 } else { seed };
        Self { state: seed }
    }

    /// Seed from a float in `[0,1)`, e.g. `Math.random()` in the browser.
    pub fn from_unit_f64(x: f64) -> Self {
        let x = if x.is_finite() { x.clamp(0.0, 1.0) } else { 0.0 };
        Self::new((x * u64::MAX as f64) as u64)
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        // xorshift64*
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    #[inline]
    pub fn next_f64_01(&mut self) -> f64 {
        // 53 random bits into [0,1).
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    #[inline]
    pub fn gen_range_f64(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.next_f64_01()
    }

    /// True when a uniform draw lands strictly above `threshold`.
    #[inline]
    pub fn above(&mut self, threshold: f64) -> bool {
        self.next_f64_01() > threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = Prng::new(7);
        let mut b = Prng::new(7);
        for _ in 0..32 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn unit_draws_stay_in_range() {
        let mut r = Prng::new(0);
        for _ in 0..10_000 {
            let x = r.next_f64_01();
            assert!((0.0..1.0).contains(&x));
            let y = r.gen_range_f64(0.0, 18.0);
            assert!((0.0..18.0).contains(&y));
        }
    }

    #[test]
    fn above_matches_rough_probability() {
        let mut r = Prng::new(1234);
        let n = 20_000;
        let hits = (0..n).filter(|_| r.above(0.6)).count();
        let rate = hits as f64 / n as f64;
        assert!((rate - 0.4).abs() < 0.02, "rate={rate}");
    }
}
