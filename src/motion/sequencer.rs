use serde::Deserialize;

/// Which distance scroll progress is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressDivisor {
    /// `(slides - 1) × viewport height`, the spacer rendered below the sticky container.
    SpacerSpan,
    /// `slides × viewport height`.
    FullSpan,
    /// Height of the enclosing section minus one viewport.
    SectionHeight,
}

/// What happens to a slide once the next one starts revealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealMode {
    /// Revealed slides stay fully visible underneath the newer ones.
    Stacking,
    /// A slide fades out while its successor fades in.
    Overlay,
}

/// Tunables for the scroll-driven feature reveal.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SequencerConfig {
    /// Multiplier on `progress × slides`; above 1.0 each slide finishes before its scroll step ends.
    pub stagger: f64,
    /// Keep slide 0 on screen at rest instead of animating it in.
    pub exempt_first_slide: bool,
    pub divisor: ProgressDivisor,
    pub reveal: RevealMode,
    /// Vertical offset (px) of a slide at local progress 0.
    pub travel_px: f64,
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            stagger: 1.2,
            exempt_first_slide: true,
            divisor: ProgressDivisor::SpacerSpan,
            reveal: RevealMode::Stacking,
            travel_px: 60.0,
        }
    }
}

impl SequencerConfig {
    /// Total scroll distance (px) that maps onto progress 0..=1.
    pub fn scroll_distance(&self, geometry: &ScrollGeometry, slide_count: usize) -> f64 {
        let vh = geometry.viewport_height;
        match self.divisor {
            ProgressDivisor::SpacerSpan => slide_count.saturating_sub(1) as f64 * vh,
            ProgressDivisor::FullSpan => slide_count as f64 * vh,
            ProgressDivisor::SectionHeight => (geometry.section_height - vh).max(0.0),
        }
    }

    /// Number of viewport heights the host must add below the sticky container.
    pub fn spacer_viewports(&self, slide_count: usize) -> usize {
        match self.divisor {
            ProgressDivisor::FullSpan => slide_count,
            ProgressDivisor::SpacerSpan | ProgressDivisor::SectionHeight => {
                slide_count.saturating_sub(1)
            }
        }
    }
}

/// Bounding-box readings taken on a scroll frame, in CSS pixels relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollGeometry {
    /// Top edge of the sticky slide container.
    pub container_top: f64,
    /// Top edge of the section wrapping the container and its spacer.
    pub section_top: f64,
    pub section_height: f64,
    pub viewport_height: f64,
}

/// Normalized progress through the animated region.
///
/// Returns 0.0 while the container has not reached the top of the viewport
/// yet. Past the scroll distance the container unpins and scrolls away; it
/// holds 1.0 while any of it is on screen and drops back to 0.0 once it has
/// left the viewport, so the rest state is the same above and below the section.
pub fn scroll_progress(geometry: &ScrollGeometry, slide_count: usize, config: &SequencerConfig) -> f64 {
    if slide_count == 0 || geometry.viewport_height <= 0.0 {
        return 0.0;
    }
    if geometry.container_top > 0.0 {
        return 0.0;
    }
    let distance = config.scroll_distance(geometry, slide_count);
    if distance <= 0.0 {
        return 0.0;
    }
    let scrolled = -geometry.section_top;
    if scrolled > distance {
        let on_screen = geometry.container_top + geometry.viewport_height > 0.0;
        return if on_screen { 1.0 } else { 0.0 };
    }
    (scrolled / distance).clamp(0.0, 1.0)
}

/// Index of the slide the reader has scrolled into: `floor(progress × slides)`.
pub fn current_index(progress: f64, slide_count: usize) -> usize {
    if slide_count == 0 {
        return 0;
    }
    let raw = (progress.clamp(0.0, 1.0) * slide_count as f64).floor() as usize;
    raw.min(slide_count - 1)
}

/// Per-slide animation progress: `clamp(progress × slides × stagger − index, 0, 1)`.
pub fn local_progress(progress: f64, index: usize, slide_count: usize, stagger: f64) -> f64 {
    (progress * slide_count as f64 * stagger - index as f64).clamp(0.0, 1.0)
}

/// Style descriptor for one slide at one scroll position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideVisual {
    /// Animation progress driving the slide's inner layers.
    pub progress: f64,
    pub opacity: f64,
    pub translate_y: f64,
    pub scale: f64,
    pub z_index: i32,
    pub delay_ms: u32,
}

const EASING: &str = "cubic-bezier(0.4, 0, 0.2, 1)";
const STAGGER_DELAY_MS: u32 = 200;

impl SlideVisual {
    fn at(index: usize, progress: f64, travel_px: f64) -> Self {
        Self {
            progress,
            opacity: progress,
            translate_y: (1.0 - progress) * travel_px,
            scale: 0.9 + progress * 0.1,
            z_index: 10 + index as i32,
            delay_ms: STAGGER_DELAY_MS * index as u32,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }

    /// Inline style for the slide's full-screen layer.
    pub fn style(&self) -> String {
        format!(
            "opacity: {:.3}; transform: translateY({:.2}px) scale({:.4}); z-index: {}; \
             transition: opacity 0.8s {EASING} {d}ms, transform 0.8s {EASING} {d}ms;",
            self.opacity,
            self.translate_y,
            self.scale,
            self.z_index,
            d = self.delay_ms,
        )
    }

    /// Opacity of the two blurred colour blobs behind the content.
    pub fn backdrop_opacity(&self) -> f64 {
        0.3 * self.progress
    }

    pub fn backdrop_style(&self, extra_delay_ms: u32) -> String {
        format!(
            "opacity: {:.3}; transition: opacity 0.8s {EASING} {}ms;",
            self.backdrop_opacity(),
            self.delay_ms + extra_delay_ms,
        )
    }

    /// Large background glyph: fades to 0.4 and grows from 0.8 to 1.0.
    pub fn glyph_style(&self) -> String {
        format!(
            "opacity: {:.3}; transform: scale({:.4}); \
             transition: opacity 0.8s {EASING} {d}ms, transform 0.8s {EASING} {d}ms;",
            0.4 * self.progress,
            0.8 + 0.2 * self.progress,
            d = self.delay_ms + 400,
        )
    }

    /// Content block rising by `offset_px` at progress 0.
    pub fn rise_style(&self, offset_px: f64, extra_delay_ms: u32) -> String {
        format!(
            "opacity: {:.3}; transform: translateY({:.2}px); \
             transition: opacity 0.6s {EASING} {d}ms, transform 0.6s {EASING} {d}ms;",
            self.progress,
            (1.0 - self.progress) * offset_px,
            d = self.delay_ms + extra_delay_ms,
        )
    }
}

/// Compute the visual state of every slide for a given scroll progress.
pub fn slide_visuals(progress: f64, slide_count: usize, config: &SequencerConfig) -> Vec<SlideVisual> {
    let current = current_index(progress, slide_count);
    let eased: Vec<f64> = (0..slide_count)
        .map(|i| {
            if i == 0 && config.exempt_first_slide {
                1.0
            } else if i > current {
                0.0
            } else if i < current && config.reveal == RevealMode::Stacking {
                1.0
            } else {
                local_progress(progress, i, slide_count, config.stagger)
            }
        })
        .collect();

    eased
        .iter()
        .enumerate()
        .map(|(i, &p)| {
            let mut visual = SlideVisual::at(i, p, config.travel_px);
            if config.reveal == RevealMode::Overlay {
                if let Some(&successor) = eased.get(i + 1) {
                    visual.opacity = p * (1.0 - successor);
                }
            }
            visual
        })
        .collect()
}

/// Indices of the slides currently showing any opacity.
pub fn visible_slides(visuals: &[SlideVisual]) -> Vec<usize> {
    visuals
        .iter()
        .enumerate()
        .filter(|(_, v)| v.is_visible())
        .map(|(i, _)| i)
        .collect()
}
