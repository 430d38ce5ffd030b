mod carousel;
mod geometry;
mod sequencer;

pub use carousel::{CarouselConfig, CarouselEvent, CarouselPhase, CarouselState};
pub use geometry::{
    card_angle, place_card, ring_placement, signed_offset, tiered_placement, CardPlacement,
    CarouselLayout,
};
pub use sequencer::{
    current_index, local_progress, scroll_progress, slide_visuals, visible_slides,
    ProgressDivisor, RevealMode, ScrollGeometry, SequencerConfig, SlideVisual,
};
