use std::f64::consts::{FRAC_PI_2, PI};
use std::num::NonZeroUsize;

/// How cards are arranged around the active one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselLayout {
    /// Cards on a circle in 3D space (desktop).
    Ring,
    /// Fixed 2D tiers: centre, left/right partials, one background card (narrow screens).
    Tiered,
}

/// Style descriptor for one card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardPlacement {
    pub translate_x: f64,
    pub translate_z: f64,
    pub rotate_y_deg: f64,
    pub scale: f64,
    pub opacity: f64,
    pub z_index: i32,
    pub active: bool,
}

const RING_ACTIVE_SCALE: f64 = 1.05;
const RING_IDLE_SCALE: f64 = 0.85;
const RING_FAR_OPACITY: f64 = 0.4;
const TIER_OFFSET_PX: f64 = 200.0;

impl CardPlacement {
    pub fn style(&self) -> String {
        format!(
            "transform: translateX({:.2}px) translateZ({:.2}px) rotateY({:.2}deg) scale({:.3}); \
             opacity: {:.3}; z-index: {};",
            self.translate_x,
            self.translate_z,
            self.rotate_y_deg,
            self.scale,
            self.opacity,
            self.z_index,
        )
    }
}

/// Shortest signed distance from the active card to `index`, in `(-n/2, n/2]`.
pub fn signed_offset(index: usize, active: usize, count: NonZeroUsize) -> isize {
    let n = count.get() as isize;
    let raw = (index as isize - active as isize).rem_euclid(n);
    if raw * 2 > n {
        raw - n
    } else {
        raw
    }
}

/// Angular offset (radians) of `index` from the active card, in `(-π, π]`.
pub fn card_angle(index: usize, active: usize, count: NonZeroUsize) -> f64 {
    let step = 2.0 * PI / count.get() as f64;
    signed_offset(index, active, count) as f64 * step
}

/// Place a card on the ring. `translate_z` is measured from the ring centre;
/// the stage pulls the whole ring back by `radius` so the front card sits at z = 0.
pub fn ring_placement(index: usize, active: usize, count: NonZeroUsize, radius: f64) -> CardPlacement {
    let angle = card_angle(index, active, count);
    let is_active = index % count.get() == active;
    let depth = angle.cos();
    CardPlacement {
        translate_x: angle.sin() * radius,
        translate_z: depth * radius,
        rotate_y_deg: angle.to_degrees(),
        scale: if is_active { RING_ACTIVE_SCALE } else { RING_IDLE_SCALE },
        opacity: if angle.abs() > FRAC_PI_2 + 1e-9 { RING_FAR_OPACITY } else { 1.0 },
        z_index: if is_active { 100 } else { ((depth + 1.0) * 45.0).round() as i32 },
        active: is_active,
    }
}

/// Place a card in the flat narrow-screen layout.
pub fn tiered_placement(index: usize, active: usize, count: NonZeroUsize) -> CardPlacement {
    let offset = signed_offset(index, active, count);
    let (translate_x, translate_z, scale, opacity, z_index) = match offset {
        0 => (0.0, 0.0, 1.0, 1.0, 10),
        1 => (TIER_OFFSET_PX, -50.0, 0.8, 0.7, 8),
        -1 => (-TIER_OFFSET_PX, -50.0, 0.8, 0.7, 8),
        2 | -2 => (0.0, -100.0, 0.7, 0.3, 5),
        _ => (0.0, -200.0, 0.6, 0.0, 1),
    };
    CardPlacement {
        translate_x,
        translate_z,
        rotate_y_deg: 0.0,
        scale,
        opacity,
        z_index,
        active: offset == 0,
    }
}

pub fn place_card(
    index: usize,
    active: usize,
    count: NonZeroUsize,
    radius: f64,
    layout: CarouselLayout,
) -> CardPlacement {
    match layout {
        CarouselLayout::Ring => ring_placement(index, active, count, radius),
        CarouselLayout::Tiered => tiered_placement(index, active, count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(count: usize) -> NonZeroUsize {
        NonZeroUsize::new(count).unwrap()
    }

    #[test]
    fn test_active_card_has_zero_angle() {
        for count in 1..=8 {
            for active in 0..count {
                let angle = card_angle(active, active, n(count));
                assert_eq!(angle, 0.0, "count={} active={}", count, active);
                let actives = (0..count)
                    .filter(|&i| ring_placement(i, active, n(count), 650.0).active)
                    .count();
                assert_eq!(actives, 1);
            }
        }
    }

    #[test]
    fn test_signed_offset_takes_short_way_round() {
        assert_eq!(signed_offset(5, 0, n(6)), -1);
        assert_eq!(signed_offset(1, 0, n(6)), 1);
        assert_eq!(signed_offset(3, 0, n(6)), 3);
        assert_eq!(signed_offset(0, 3, n(4)), 1);
        assert_eq!(signed_offset(1, 3, n(4)), 2);
        assert_eq!(signed_offset(0, 0, n(1)), 0);
    }

    #[test]
    fn test_angles_stay_in_half_open_range() {
        for count in 1..=9 {
            for active in 0..count {
                for i in 0..count {
                    let a = card_angle(i, active, n(count));
                    assert!(a > -PI - 1e-9 && a <= PI + 1e-9, "angle {} out of range", a);
                }
            }
        }
    }

    #[test]
    fn test_ring_positions() {
        let radius = 650.0;
        let front = ring_placement(0, 0, n(4), radius);
        assert!(front.translate_x.abs() < 1e-9);
        assert!((front.translate_z - radius).abs() < 1e-9);
        assert!((front.scale - 1.05).abs() < 1e-9);
        assert_eq!(front.opacity, 1.0);

        let right = ring_placement(1, 0, n(4), radius);
        assert!((right.translate_x - radius).abs() < 1e-9);
        assert!(right.translate_z.abs() < 1e-9);
        assert!((right.rotate_y_deg - 90.0).abs() < 1e-9);
        assert!((right.scale - 0.85).abs() < 1e-9);
        // exactly 90° is still in front
        assert_eq!(right.opacity, 1.0);

        let back = ring_placement(2, 0, n(4), radius);
        assert!((back.translate_z + radius).abs() < 1e-9);
        assert_eq!(back.opacity, 0.4);
        assert!(back.z_index < right.z_index);
        assert!(right.z_index < front.z_index);
    }

    #[test]
    fn test_tiered_layout() {
        let count = n(6);
        let centre = tiered_placement(2, 2, count);
        assert_eq!((centre.z_index, centre.opacity, centre.scale), (10, 1.0, 1.0));

        let next = tiered_placement(3, 2, count);
        assert_eq!(next.translate_x, 200.0);
        assert_eq!((next.z_index, next.opacity), (8, 0.7));

        let prev = tiered_placement(1, 2, count);
        assert_eq!(prev.translate_x, -200.0);

        let background = tiered_placement(4, 2, count);
        assert_eq!((background.z_index, background.opacity, background.scale), (5, 0.3, 0.7));

        let hidden = tiered_placement(5, 2, count);
        assert_eq!((hidden.z_index, hidden.opacity), (1, 0.0));
    }

    #[test]
    fn test_style_string() {
        let style = tiered_placement(1, 0, n(3)).style();
        assert!(style.contains("translateX(200.00px)"));
        assert!(style.contains("opacity: 0.700"));
        assert!(style.contains("z-index: 8"));
    }
}
