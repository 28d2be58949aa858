//! One-shot visibility triggers.
//!
//! Each observed target moves `Armed -> Fired` exactly once. Later visibility
//! events for a fired (or never-armed) target are ignored, so the browser
//! layer can forward every intersection entry without deduplicating.

use std::collections::HashSet;
use std::hash::Hash;

/// Browsers report threshold crossings with a little rounding error.
const RATIO_EPSILON: f64 = 1e-3;

#[derive(Debug, Clone)]
pub struct TriggerOnce<K> {
    threshold: f64,
    armed: HashSet<K>,
    fired: usize,
}

impl<K: Eq + Hash + Clone> TriggerOnce<K> {
    /// `threshold` is the visible fraction in `[0,1]` required to fire.
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            armed: HashSet::new(),
            fired: 0,
        }
    }

    pub fn arm(&mut self, key: K) {
        self.armed.insert(key);
    }

    pub fn is_armed(&self, key: &K) -> bool {
        self.armed.contains(key)
    }

    pub fn pending(&self) -> usize {
        self.armed.len()
    }

    pub fn fired(&self) -> usize {
        self.fired
    }

    /// Feed one visibility event. Returns true only on the first qualifying
    /// event for an armed key; the key is disarmed at that point.
    pub fn observe(&mut self, key: &K, is_intersecting: bool, ratio: f64) -> bool {
        if !is_intersecting || ratio + RATIO_EPSILON < self.threshold {
            return false;
        }
        if self.armed.remove(key) {
            self.fired += 1;
            true
        } else {
            false
        }
    }

    /// Fire every armed key at once (used when visibility cannot be observed).
    pub fn fire_all(&mut self) -> Vec<K> {
        let keys: Vec<K> = self.armed.drain().collect();
        self.fired += keys.len();
        keys
    }
}
