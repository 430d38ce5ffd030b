use crate::motion::{CarouselConfig, SequencerConfig};
use serde::Deserialize;

const SITE_JSON: &str = include_str!("../content/site.json");

/// Outbound links shared by the nav bar, CTA and footer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteLinks {
    pub waitlist: String,
    pub github: String,
    pub x: String,
}

impl Default for SiteLinks {
    fn default() -> Self {
        Self {
            waitlist: "https://tally.so/r/w4Yber".to_string(),
            github: "/#".to_string(),
            x: "/#".to_string(),
        }
    }
}

/// Page-wide tunables, decoded from `content/site.json`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub features: SequencerConfig,
    pub reviews: CarouselConfig,
    pub links: SiteLinks,
}

/// Decode site configuration, falling back to defaults on malformed input.
///
/// Missing fields take their defaults individually, so a partial file only
/// overrides what it names.
pub fn parse_site_config(raw: &str) -> SiteConfig {
    serde_json::from_str(raw).unwrap_or_else(|e| {
        log::warn!("Trowser: failed to parse site config (using defaults): {}", e);
        SiteConfig::default()
    })
}

pub fn site_config() -> SiteConfig {
    parse_site_config(SITE_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::{ProgressDivisor, RevealMode};

    #[test]
    fn test_embedded_config_matches_defaults() {
        assert_eq!(site_config(), SiteConfig::default());
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let config = parse_site_config(r#"{ "reviews": { "interval_ms": 3000 } }"#);
        assert_eq!(config.reviews.interval_ms, 3000);
        assert!(config.reviews.auto_rotate);
        assert_eq!(config.features, SequencerConfig::default());
        assert_eq!(config.links, SiteLinks::default());
    }

    #[test]
    fn test_malformed_config_falls_back() {
        assert_eq!(parse_site_config("{ not json"), SiteConfig::default());
        assert_eq!(parse_site_config(""), SiteConfig::default());
    }

    #[test]
    fn test_variant_options_decode() {
        let config = parse_site_config(
            r#"{ "features": { "divisor": "section_height", "reveal": "overlay", "exempt_first_slide": false } }"#,
        );
        assert_eq!(config.features.divisor, ProgressDivisor::SectionHeight);
        assert_eq!(config.features.reveal, RevealMode::Overlay);
        assert!(!config.features.exempt_first_slide);
        assert_eq!(config.features.stagger, 1.2);
    }
}
