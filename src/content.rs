use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use std::num::NonZeroUsize;
use thiserror::Error;

const FEATURES_FILE: &str = "content/features.json";
const REVIEWS_FILE: &str = "content/reviews.json";
const FAQS_FILE: &str = "content/faqs.json";

const FEATURES_JSON: &str = include_str!("../content/features.json");
const REVIEWS_JSON: &str = include_str!("../content/reviews.json");
const FAQS_JSON: &str = include_str!("../content/faqs.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("{file} is malformed: {source}")]
    Malformed {
        file: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("{file} has no entries")]
    Empty { file: &'static str },
}

/// Icons available to slides and cards, rendered as inline SVG.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Shield,
    Brain,
    Palette,
    Zap,
    Globe,
    Lock,
    Smartphone,
    Cloud,
}

/// Which half of the screen a slide's text sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Narrow screens put the text opposite the large glyph.
    pub fn for_viewport(self, mobile: bool) -> Self {
        match (self, mobile) {
            (side, false) => side,
            (Side::Left, true) => Side::Right,
            (Side::Right, true) => Side::Left,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// Colour scheme of a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Lavender to coral.
    Ember,
    /// White to pale grey.
    Frost,
}

impl Tone {
    pub fn title_gradient(self) -> &'static str {
        match self {
            Tone::Ember => "linear-gradient(315deg, rgb(140, 140, 217) 5%, rgb(235, 71, 96) 95%)",
            Tone::Frost => {
                "radial-gradient(100% 100% at 0% 0%, rgb(255, 255, 255) 0%, rgb(235, 235, 244) 100%)"
            }
        }
    }

    pub fn glyph_gradient(self) -> &'static str {
        match self {
            Tone::Ember => {
                "linear-gradient(315deg, rgba(140, 140, 217, 0.3) 5%, rgba(235, 71, 96, 0.3) 95%)"
            }
            Tone::Frost => {
                "linear-gradient(315deg, rgba(255, 255, 255, 0.3) 0%, rgba(235, 235, 244, 0.3) 100%)"
            }
        }
    }
}

/// One entry in the scroll-driven feature showcase.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Slide {
    pub id: String,
    pub side: Side,
    pub icon: Icon,
    pub tone: Tone,
    pub title: String,
    pub description: String,
}

/// One card of the review carousel.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CarouselCard {
    pub id: String,
    pub category: String,
    pub title: String,
    pub icon: Icon,
    pub preview: String,
    pub content: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub image_url: Option<String>,
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

/// A non-empty, ordered set of carousel cards.
#[derive(Debug, Clone, PartialEq)]
pub struct CardDeck {
    cards: Vec<CarouselCard>,
}

impl CardDeck {
    /// Returns `None` for an empty list; the carousel needs at least one card.
    pub fn new(cards: Vec<CarouselCard>) -> Option<Self> {
        if cards.is_empty() {
            None
        } else {
            Some(Self { cards })
        }
    }

    pub fn len(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.cards.len()).unwrap_or(NonZeroUsize::MIN)
    }

    pub fn cards(&self) -> &[CarouselCard] {
        &self.cards
    }

    /// Card at `index`, wrapping around the deck.
    pub fn get(&self, index: usize) -> &CarouselCard {
        &self.cards[index % self.cards.len()]
    }
}

fn decode_list<T: DeserializeOwned>(file: &'static str, raw: &str) -> Result<Vec<T>, ContentError> {
    let items: Vec<T> =
        serde_json::from_str(raw).map_err(|source| ContentError::Malformed { file, source })?;
    if items.is_empty() {
        return Err(ContentError::Empty { file });
    }
    Ok(items)
}

pub fn feature_slides() -> Result<Vec<Slide>, ContentError> {
    decode_list(FEATURES_FILE, FEATURES_JSON)
}

pub fn review_deck() -> Result<CardDeck, ContentError> {
    let cards = decode_list(REVIEWS_FILE, REVIEWS_JSON)?;
    CardDeck::new(cards).ok_or(ContentError::Empty { file: REVIEWS_FILE })
}

pub fn faq_entries() -> Result<Vec<FaqEntry>, ContentError> {
    decode_list(FAQS_FILE, FAQS_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_features_decode() {
        let slides = feature_slides().unwrap();
        assert_eq!(slides.len(), 4);
        assert_eq!(slides[0].id, "privacy");
        // sides alternate down the page
        for pair in slides.windows(2) {
            assert_ne!(pair[0].side, pair[1].side);
        }
    }

    #[test]
    fn test_embedded_reviews_decode() {
        let deck = review_deck().unwrap();
        assert_eq!(deck.len().get(), 6);
        assert!(deck.cards().iter().all(|c| c.image_url.is_none()));
        assert_eq!(deck.get(7).id, "r2");
    }

    #[test]
    fn test_embedded_faqs_decode() {
        let faqs = faq_entries().unwrap();
        assert_eq!(faqs.len(), 6);
        assert!(faqs.iter().all(|f| f.question.ends_with('?')));
    }

    #[test]
    fn test_empty_deck_rejected() {
        assert!(CardDeck::new(Vec::new()).is_none());
        let err = decode_list::<CarouselCard>(REVIEWS_FILE, "[]").unwrap_err();
        assert!(matches!(err, ContentError::Empty { file } if file == REVIEWS_FILE));
    }

    #[test]
    fn test_malformed_content_reports_file() {
        let err = decode_list::<Slide>(FEATURES_FILE, r#"[{ "id": "x" }]"#).unwrap_err();
        assert!(matches!(err, ContentError::Malformed { .. }));
        assert!(err.to_string().starts_with(FEATURES_FILE));
    }

    #[test]
    fn test_image_url_kept_when_present() {
        let raw = r#"[{
            "id": "a", "category": "C", "title": "T", "icon": "globe",
            "preview": "p", "content": "c", "image_url": "/cards/a.webp"
        }]"#;
        let cards = decode_list::<CarouselCard>(REVIEWS_FILE, raw).unwrap();
        assert_eq!(cards[0].image_url.as_deref(), Some("/cards/a.webp"));
        assert_eq!(cards[0].icon, Icon::Globe);
    }

    #[test]
    fn test_side_mirrors_on_mobile() {
        assert_eq!(Side::Left.for_viewport(false), Side::Left);
        assert_eq!(Side::Left.for_viewport(true), Side::Right);
        assert_eq!(Side::Right.for_viewport(true), Side::Left);
    }
}
