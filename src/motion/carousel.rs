use serde::Deserialize;
use std::collections::BTreeSet;
use std::num::NonZeroUsize;

/// Timer callbacks may land a frame early; treat anything within one frame of the deadline as due.
const TIMER_SLACK_MS: f64 = 16.0;

/// Behaviour knobs for the rotating review carousel.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub auto_rotate: bool,
    pub interval_ms: u32,
    pub pause_on_hover: bool,
    /// Degrees of virtual rotation per pixel of horizontal drag.
    pub drag_sensitivity: f64,
    /// Rotation (degrees) a drag has to accumulate before the carousel steps.
    pub drag_threshold_deg: f64,
    pub radius_px: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            auto_rotate: true,
            interval_ms: 4000,
            pause_on_hover: true,
            drag_sensitivity: 0.25,
            drag_threshold_deg: 30.0,
            radius_px: 650.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselPhase {
    Idle,
    Dragging,
    AutoRotating,
}

/// Notifications produced by state transitions, forwarded to the host's callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEvent {
    Rotated(usize),
    CardClicked(usize),
    Flipped { index: usize, flipped: bool },
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Drag {
    origin_x: f64,
    origin_y: f64,
    last_x: f64,
    last_y: f64,
}

/// Logical state of one carousel instance.
///
/// Every input channel (autoplay, drag, buttons, keyboard) goes through this
/// type; the component only forwards DOM events and renders the result.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselState {
    card_count: NonZeroUsize,
    active: usize,
    flipped: BTreeSet<usize>,
    drag: Option<Drag>,
    hovered: bool,
    autoplay: bool,
    next_advance_ms: f64,
    config: CarouselConfig,
}

impl CarouselState {
    pub fn new(card_count: NonZeroUsize, config: CarouselConfig, now_ms: f64) -> Self {
        Self {
            card_count,
            active: 0,
            flipped: BTreeSet::new(),
            drag: None,
            hovered: false,
            autoplay: config.auto_rotate,
            next_advance_ms: now_ms + config.interval_ms as f64,
            config,
        }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn card_count(&self) -> NonZeroUsize {
        self.card_count
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn is_active(&self, index: usize) -> bool {
        index == self.active
    }

    pub fn is_flipped(&self, index: usize) -> bool {
        self.flipped.contains(&index)
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Whether autoplay is switched on at all, hover and drag aside.
    pub fn autoplay_enabled(&self) -> bool {
        self.autoplay
    }

    /// When the next autoplay advance is due, in the same clock as `now_ms`.
    pub fn next_advance_ms(&self) -> f64 {
        self.next_advance_ms
    }

    pub fn phase(&self) -> CarouselPhase {
        if self.drag.is_some() {
            CarouselPhase::Dragging
        } else if self.autoplay && !(self.config.pause_on_hover && self.hovered) {
            CarouselPhase::AutoRotating
        } else {
            CarouselPhase::Idle
        }
    }

    pub fn set_autoplay(&mut self, enabled: bool, now_ms: f64) {
        self.autoplay = enabled;
        self.rearm(now_ms);
    }

    fn rearm(&mut self, now_ms: f64) {
        self.next_advance_ms = now_ms + self.config.interval_ms as f64;
    }

    fn rotate_by(&mut self, delta: isize) -> usize {
        let n = self.card_count.get() as isize;
        self.active = (self.active as isize + delta).rem_euclid(n) as usize;
        self.active
    }

    pub fn next(&mut self, now_ms: f64) -> CarouselEvent {
        self.rearm(now_ms);
        CarouselEvent::Rotated(self.rotate_by(1))
    }

    pub fn prev(&mut self, now_ms: f64) -> CarouselEvent {
        self.rearm(now_ms);
        CarouselEvent::Rotated(self.rotate_by(-1))
    }

    /// Jump straight to `index` (dot indicators). Returns `None`, and leaves
    /// the autoplay deadline alone, if it is already active.
    pub fn select(&mut self, index: usize, now_ms: f64) -> Option<CarouselEvent> {
        let index = index % self.card_count.get();
        if index == self.active {
            return None;
        }
        self.rearm(now_ms);
        self.active = index;
        Some(CarouselEvent::Rotated(index))
    }

    /// Toggle the back face of `index`. Returns the new flipped state.
    ///
    /// Flips are per card and survive rotation.
    pub fn toggle_flip(&mut self, index: usize) -> bool {
        let index = index % self.card_count.get();
        if self.flipped.remove(&index) {
            false
        } else {
            self.flipped.insert(index);
            true
        }
    }

    /// A click on a card: brings a side card to the front, or flips the front card.
    pub fn click_card(&mut self, index: usize, now_ms: f64) -> Vec<CarouselEvent> {
        let index = index % self.card_count.get();
        let mut events = vec![CarouselEvent::CardClicked(index)];
        if index == self.active {
            let flipped = self.toggle_flip(index);
            events.push(CarouselEvent::Flipped { index, flipped });
        } else {
            events.extend(self.select(index, now_ms));
        }
        events
    }

    /// Map a `KeyboardEvent::key()` value onto prev/next.
    pub fn handle_key(&mut self, key: &str, now_ms: f64) -> Option<CarouselEvent> {
        match key {
            "ArrowLeft" => Some(self.prev(now_ms)),
            "ArrowRight" => Some(self.next(now_ms)),
            _ => None,
        }
    }

    pub fn drag_start(&mut self, x: f64, y: f64) {
        self.drag = Some(Drag {
            origin_x: x,
            origin_y: y,
            last_x: x,
            last_y: y,
        });
    }

    /// Feed a pointer position while dragging.
    ///
    /// Each crossing of the rotation threshold steps the carousel by one card
    /// and moves the drag origin forward, so a long drag walks through
    /// several cards. Dragging left advances, dragging right goes back.
    /// Returns one `Rotated` per step, in order.
    pub fn drag_move(&mut self, x: f64, y: f64, now_ms: f64) -> Vec<CarouselEvent> {
        let sensitivity = self.config.drag_sensitivity;
        let threshold = self.config.drag_threshold_deg;
        let Some(drag) = self.drag.as_mut() else {
            return Vec::new();
        };
        drag.last_x = x;
        drag.last_y = y;
        if sensitivity <= 0.0 || threshold <= 0.0 {
            return Vec::new();
        }

        let rotation = (x - drag.origin_x) * sensitivity;
        let steps = (rotation.abs() / threshold).floor() as usize;
        if steps == 0 {
            return Vec::new();
        }
        let direction = rotation.signum();
        drag.origin_x += direction * steps as f64 * threshold / sensitivity;

        self.rearm(now_ms);
        let delta = if direction < 0.0 { 1 } else { -1 };
        (0..steps)
            .map(|_| CarouselEvent::Rotated(self.rotate_by(delta)))
            .collect()
    }

    pub fn drag_end(&mut self, now_ms: f64) {
        if self.drag.take().is_some() {
            self.rearm(now_ms);
        }
    }

    /// Pointer origin and latest position of the drag in progress.
    pub fn drag_points(&self) -> Option<((f64, f64), (f64, f64))> {
        self.drag
            .map(|d| ((d.origin_x, d.origin_y), (d.last_x, d.last_y)))
    }

    pub fn set_hovered(&mut self, hovered: bool, now_ms: f64) {
        if self.hovered && !hovered {
            self.rearm(now_ms);
        }
        self.hovered = hovered;
    }

    /// Called from the autoplay interval. Advances one card if autoplay is
    /// running and the deadline has passed.
    pub fn autoplay_tick(&mut self, now_ms: f64) -> Option<CarouselEvent> {
        if self.phase() != CarouselPhase::AutoRotating {
            return None;
        }
        if now_ms + TIMER_SLACK_MS < self.next_advance_ms {
            return None;
        }
        self.rearm(now_ms);
        Some(CarouselEvent::Rotated(self.rotate_by(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(cards: usize) -> CarouselState {
        let count = NonZeroUsize::new(cards).unwrap();
        CarouselState::new(count, CarouselConfig::default(), 0.0)
    }

    #[test]
    fn test_forward_round_trip() {
        for n in 1..=7 {
            let mut c = carousel(n);
            for start in 0..n {
                c.select(start, 0.0);
                for _ in 0..n {
                    c.next(0.0);
                }
                assert_eq!(c.active(), start, "n={} start={}", n, start);
            }
        }
    }

    #[test]
    fn test_prev_wraps_to_last() {
        let mut c = carousel(5);
        assert_eq!(c.prev(0.0), CarouselEvent::Rotated(4));
        assert_eq!(c.next(0.0), CarouselEvent::Rotated(0));
    }

    #[test]
    fn test_exactly_one_active() {
        let mut c = carousel(6);
        for step in 0..12 {
            let active: Vec<_> = (0..6).filter(|&i| c.is_active(i)).collect();
            assert_eq!(active.len(), 1, "step {}", step);
            c.next(0.0);
        }
    }

    #[test]
    fn test_autoplay_three_ticks() {
        let mut c = carousel(4);
        let mut seen = vec![c.active()];
        for tick in 1..=3 {
            c.autoplay_tick(tick as f64 * 4000.0);
            seen.push(c.active());
        }
        assert_eq!(seen, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_autoplay_tolerates_early_timer() {
        let mut c = carousel(4);
        assert_eq!(c.autoplay_tick(3995.0), Some(CarouselEvent::Rotated(1)));
        assert_eq!(c.autoplay_tick(5000.0), None);
    }

    #[test]
    fn test_manual_next_cancels_pending_advance() {
        let mut c = carousel(4);
        // user presses next 3.5s into the first interval
        assert_eq!(c.next(3500.0), CarouselEvent::Rotated(1));
        // the old deadline (4000) must not fire
        assert_eq!(c.autoplay_tick(4000.0), None);
        assert_eq!(c.autoplay_tick(7000.0), None);
        assert_eq!(c.active(), 1);
        // a full interval after the manual step autoplay resumes
        assert_eq!(c.autoplay_tick(7500.0), Some(CarouselEvent::Rotated(2)));
    }

    #[test]
    fn test_hover_suspends_autoplay() {
        let mut c = carousel(3);
        c.set_hovered(true, 100.0);
        assert_eq!(c.phase(), CarouselPhase::Idle);
        assert_eq!(c.autoplay_tick(9000.0), None);

        c.set_hovered(false, 9000.0);
        assert_eq!(c.phase(), CarouselPhase::AutoRotating);
        assert_eq!(c.autoplay_tick(9500.0), None);
        assert_eq!(c.autoplay_tick(13000.0), Some(CarouselEvent::Rotated(1)));
    }

    #[test]
    fn test_hover_ignored_without_pause_on_hover() {
        let config = CarouselConfig {
            pause_on_hover: false,
            ..Default::default()
        };
        let mut c = CarouselState::new(NonZeroUsize::new(3).unwrap(), config, 0.0);
        c.set_hovered(true, 0.0);
        assert_eq!(c.phase(), CarouselPhase::AutoRotating);
    }

    #[test]
    fn test_drag_suspends_autoplay() {
        let mut c = carousel(3);
        c.drag_start(100.0, 50.0);
        assert_eq!(c.phase(), CarouselPhase::Dragging);
        assert_eq!(c.autoplay_tick(10_000.0), None);
        c.drag_end(10_000.0);
        assert_eq!(c.phase(), CarouselPhase::AutoRotating);
        assert!(!c.is_dragging());
    }

    #[test]
    fn test_disabled_autoplay_stays_idle() {
        let mut c = carousel(3);
        assert!(c.autoplay_enabled());
        c.set_autoplay(false, 0.0);
        assert!(!c.autoplay_enabled());
        assert_eq!(c.phase(), CarouselPhase::Idle);
        assert_eq!(c.autoplay_tick(60_000.0), None);
        assert_eq!(c.next(0.0), CarouselEvent::Rotated(1));
    }

    #[test]
    fn test_short_drag_does_nothing() {
        let mut c = carousel(5);
        c.drag_start(500.0, 0.0);
        // 100px × 0.25 = 25° < 30°
        assert!(c.drag_move(400.0, 0.0, 0.0).is_empty());
        assert!(c.drag_move(600.0, 3.0, 0.0).is_empty());
        assert_eq!(c.active(), 0);
    }

    #[test]
    fn test_drag_steps_once_per_threshold() {
        let mut c = carousel(5);
        c.drag_start(500.0, 0.0);
        // 120px left = 30°: one step forward
        assert_eq!(c.drag_move(380.0, 0.0, 0.0), vec![CarouselEvent::Rotated(1)]);
        // origin moved to 380; another 60px is not enough
        assert!(c.drag_move(320.0, 0.0, 0.0).is_empty());
        // reaching 260 crosses the second threshold
        assert_eq!(c.drag_move(260.0, 0.0, 0.0), vec![CarouselEvent::Rotated(2)]);
        // drag back right past two thresholds in a single move
        assert_eq!(
            c.drag_move(500.0, 0.0, 0.0),
            vec![CarouselEvent::Rotated(1), CarouselEvent::Rotated(0)]
        );
        assert_eq!(c.drag_points(), Some(((500.0, 0.0), (500.0, 0.0))));
    }

    #[test]
    fn test_long_drag_reports_every_card() {
        let mut c = carousel(5);
        c.drag_start(500.0, 0.0);
        // 300px left = 75°: two whole thresholds
        assert_eq!(
            c.drag_move(200.0, 0.0, 0.0),
            vec![CarouselEvent::Rotated(1), CarouselEvent::Rotated(2)]
        );
        assert_eq!(c.active(), 2);
        // the leftover 15° carries into the next move
        assert_eq!(c.drag_move(140.0, 0.0, 0.0), vec![CarouselEvent::Rotated(3)]);
    }

    #[test]
    fn test_drag_move_without_start_is_ignored() {
        let mut c = carousel(3);
        assert!(c.drag_move(0.0, 0.0, 0.0).is_empty());
        assert_eq!(c.active(), 0);
    }

    #[test]
    fn test_drag_end_rearms_autoplay() {
        let mut c = carousel(3);
        c.drag_start(0.0, 0.0);
        c.drag_end(5000.0);
        assert_eq!(c.next_advance_ms(), 9000.0);
    }

    #[test]
    fn test_double_flip_restores_state() {
        let mut c = carousel(4);
        assert!(c.toggle_flip(0));
        assert!(c.is_flipped(0));
        assert!(!c.toggle_flip(0));
        assert!(!c.is_flipped(0));
    }

    #[test]
    fn test_click_side_card_selects_it() {
        let mut c = carousel(4);
        let events = c.click_card(2, 0.0);
        assert_eq!(
            events,
            vec![CarouselEvent::CardClicked(2), CarouselEvent::Rotated(2)]
        );
        assert!(!c.is_flipped(2));
    }

    #[test]
    fn test_click_active_card_flips_it() {
        let mut c = carousel(4);
        let events = c.click_card(0, 0.0);
        assert_eq!(
            events,
            vec![
                CarouselEvent::CardClicked(0),
                CarouselEvent::Flipped { index: 0, flipped: true }
            ]
        );
        assert_eq!(c.active(), 0);
    }

    #[test]
    fn test_flip_survives_rotation() {
        let mut c = carousel(4);
        c.click_card(0, 0.0);
        c.next(0.0);
        c.next(0.0);
        assert!(c.is_flipped(0));
        c.select(0, 0.0);
        assert!(c.is_flipped(0));
    }

    #[test]
    fn test_select_same_index_is_noop() {
        let mut c = carousel(4);
        assert_eq!(c.select(0, 0.0), None);
        assert_eq!(c.select(6, 0.0), Some(CarouselEvent::Rotated(2)));
    }

    #[test]
    fn test_select_active_keeps_deadline() {
        let mut c = carousel(4);
        assert_eq!(c.next_advance_ms(), 4000.0);
        assert_eq!(c.select(0, 3000.0), None);
        assert_eq!(c.next_advance_ms(), 4000.0);
        // the running interval still advances on schedule
        assert_eq!(c.autoplay_tick(4000.0), Some(CarouselEvent::Rotated(1)));

        assert_eq!(c.select(3, 5000.0), Some(CarouselEvent::Rotated(3)));
        assert_eq!(c.next_advance_ms(), 9000.0);
    }

    #[test]
    fn test_arrow_keys() {
        let mut c = carousel(3);
        assert_eq!(c.handle_key("ArrowRight", 0.0), Some(CarouselEvent::Rotated(1)));
        assert_eq!(c.handle_key("ArrowLeft", 0.0), Some(CarouselEvent::Rotated(0)));
        assert_eq!(c.handle_key("ArrowLeft", 0.0), Some(CarouselEvent::Rotated(2)));
        assert_eq!(c.handle_key("Enter", 0.0), None);
    }

    #[test]
    fn test_single_card_carousel() {
        let mut c = carousel(1);
        assert_eq!(c.next(0.0), CarouselEvent::Rotated(0));
        assert_eq!(c.prev(0.0), CarouselEvent::Rotated(0));
        assert_eq!(c.autoplay_tick(4000.0), Some(CarouselEvent::Rotated(0)));
    }
}
