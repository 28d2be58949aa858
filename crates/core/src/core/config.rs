use serde::{Deserialize, Serialize};

use super::beds::{BedCounts, DEFAULT_AVAILABLE, DEFAULT_TOTALS};
use super::error::{Error, Result};

fn default_hospital_name() -> String {
    "City Hospital".to_string()
}

fn default_messaging_base() -> String {
    "https://wa.me".to_string()
}

fn default_messaging_phone() -> String {
    "918605463560".to_string()
}

fn default_intro_delay_ms() -> u32 {
    350
}

fn default_intro_hide_delay_ms() -> u32 {
    520
}

fn default_intro_max_step() -> f64 {
    18.0
}

fn default_parallax_factor() -> f64 {
    0.08
}

fn default_reveal_threshold() -> f64 {
    0.14
}

fn default_counter_threshold() -> f64 {
    0.35
}

fn default_counter_duration_ms() -> u32 {
    900
}

fn default_bed_update_interval_ms() -> u32 {
    10_000
}

fn default_bed_totals() -> BedCounts {
    DEFAULT_TOTALS
}

fn default_bed_initial() -> BedCounts {
    DEFAULT_AVAILABLE
}

/// Every tunable of the page behaviors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_hospital_name")]
    pub hospital_name: String,
    #[serde(default = "default_messaging_base")]
    pub messaging_base: String,
    /// Destination id of the appointment chat.
    #[serde(default = "default_messaging_phone")]
    pub messaging_phone: String,

    #[serde(default = "default_intro_delay_ms")]
    pub intro_delay_ms: u32,
    #[serde(default = "default_intro_hide_delay_ms")]
    pub intro_hide_delay_ms: u32,
    /// Upper bound of the per-frame loading bar increment.
    #[serde(default = "default_intro_max_step")]
    pub intro_max_step: f64,

    #[serde(default = "default_parallax_factor")]
    pub parallax_factor: f64,
    #[serde(default = "default_reveal_threshold")]
    pub reveal_threshold: f64,
    #[serde(default = "default_counter_threshold")]
    pub counter_threshold: f64,
    #[serde(default = "default_counter_duration_ms")]
    pub counter_duration_ms: u32,

    #[serde(default = "default_bed_update_interval_ms")]
    pub bed_update_interval_ms: u32,
    /// Used when the page does not carry its own totals.
    #[serde(default = "default_bed_totals")]
    pub bed_totals: BedCounts,
    #[serde(default = "default_bed_initial")]
    pub bed_initial: BedCounts,

    /// Pin the RNG for reproducible demos; random per page load otherwise.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            hospital_name: default_hospital_name(),
            messaging_base: default_messaging_base(),
            messaging_phone: default_messaging_phone(),
            intro_delay_ms: default_intro_delay_ms(),
            intro_hide_delay_ms: default_intro_hide_delay_ms(),
            intro_max_step: default_intro_max_step(),
            parallax_factor: default_parallax_factor(),
            reveal_threshold: default_reveal_threshold(),
            counter_threshold: default_counter_threshold(),
            counter_duration_ms: default_counter_duration_ms(),
            bed_update_interval_ms: default_bed_update_interval_ms(),
            bed_totals: default_bed_totals(),
            bed_initial: default_bed_initial(),
            seed: None,
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        let cfg: SiteConfig = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Config embedded in the page; absent or blank means defaults.
    pub fn from_optional_json(raw: Option<&str>) -> Result<Self> {
        match raw.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => Self::from_json(raw),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let bad = |field: &'static str, reason: &str| Error::Config {
            field,
            reason: reason.to_string(),
        };

        if self.messaging_phone.trim().is_empty() {
            return Err(bad("messaging_phone", "must not be empty"));
        }
        if !self.messaging_phone.chars().all(|c| c.is_ascii_digit()) {
            return Err(bad("messaging_phone", "digits only"));
        }
        if !self.messaging_base.starts_with("https://") {
            return Err(bad("messaging_base", "must be an https url"));
        }
        for (field, v) in [
            ("reveal_threshold", self.reveal_threshold),
            ("counter_threshold", self.counter_threshold),
        ] {
            if !(0.0..=1.0).contains(&v) {
                return Err(bad(field, "must be within [0, 1]"));
            }
        }
        if !self.parallax_factor.is_finite() {
            return Err(bad("parallax_factor", "must be finite"));
        }
        if !self.intro_max_step.is_finite() || self.intro_max_step <= 0.0 {
            return Err(bad("intro_max_step", "must be positive"));
        }
        if self.counter_duration_ms == 0 {
            return Err(bad("counter_duration_ms", "must be positive"));
        }
        if self.bed_update_interval_ms == 0 {
            return Err(bad("bed_update_interval_ms", "must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_page() {
        let cfg = SiteConfig::default();
        assert_eq!(cfg.messaging_phone, "918605463560");
        assert_eq!(cfg.counter_duration_ms, 900);
        assert_eq!(cfg.bed_update_interval_ms, 10_000);
        assert_eq!(cfg.bed_totals, BedCounts::new(60, 20, 40));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = SiteConfig::from_json(r#"{ "hospital_name": "Lakeside Clinic", "seed": 7 }"#)
            .unwrap();
        assert_eq!(cfg.hospital_name, "Lakeside Clinic");
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.reveal_threshold, 0.14);
        assert_eq!(cfg.bed_initial, BedCounts::new(18, 4, 10));
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
    }

    #[test]
    fn missing_page_config_is_default() {
        assert_eq!(SiteConfig::from_optional_json(None).unwrap(), SiteConfig::default());
        assert_eq!(
            SiteConfig::from_optional_json(Some("  \n ")).unwrap(),
            SiteConfig::default()
        );
        let cfg = SiteConfig::from_optional_json(Some(r#"{"counter_duration_ms": 1200}"#)).unwrap();
        assert_eq!(cfg.counter_duration_ms, 1200);
    }

    #[test]
    fn rejects_bad_values() {
        let err = SiteConfig::from_json(r#"{ "reveal_threshold": 1.5 }"#).unwrap_err();
        assert!(err.to_string().contains("reveal_threshold"));

        let err = SiteConfig::from_json(r#"{ "messaging_phone": "+91 86" }"#).unwrap_err();
        assert!(err.to_string().contains("messaging_phone"));

        let err = SiteConfig::from_json(r#"{ "bed_update_interval_ms": 0 }"#).unwrap_err();
        assert!(matches!(err, Error::Config { field: "bed_update_interval_ms", .. }));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = SiteConfig::from_json("{ nope").unwrap_err();
        assert!(matches!(err, Error::ConfigJson(_)));
    }
}
