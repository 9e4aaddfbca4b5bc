//! Scroll-reveal: one-shot entrance animation for flagged elements.
//!
//! Elements carrying the [`ANIMATE_ATTR`](crate::document::ANIMATE_ATTR)
//! marker start hidden and receive the
//! [`VISIBLE_CLASS`](crate::document::VISIBLE_CLASS) once they scroll into
//! the visibility band. The controller is host-agnostic: everything it
//! needs from the page goes through [`RevealSurface`]. The generated site
//! ships the browser binding of the same rules in `static/page.js`.
//!
//! ## Lifecycle of one element
//!
//! ```text
//!            process()
//! unseen ───────────────┬─ no observation support ──▶ revealed
//!                       ├─ inside band ──────────────▶ revealed
//!                       └─ otherwise ──▶ observing ──▶ revealed
//!                                          (first crossing; unobserved)
//! ```
//!
//! `process()` runs at most once per element: the `seen` record makes the
//! initial scan, later rescans and explicit registrations safe to overlap.
//!
//! ## Safety sweep
//!
//! After the page's load event plus a fixed grace delay, everything still
//! unrevealed is revealed unconditionally, so a missed crossing can never
//! leave content hidden for good.

use crate::config::RevealConfig;
use std::collections::HashSet;
use std::hash::Hash;
use std::time::{Duration, Instant};

/// Vertical extent of an element, in viewport coordinates (pixels).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub top: f64,
    pub bottom: f64,
}

/// The region of the viewport in which an element counts as "in view",
/// expressed as fractions of the viewport height.
///
/// An element is in view when its top edge is above `top * height` and its
/// bottom edge is below `bottom * height` (a negative `bottom` reaches above
/// the top of the viewport).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealBand {
    pub top: f64,
    pub bottom: f64,
}

impl Default for RevealBand {
    fn default() -> Self {
        Self {
            top: 0.95,
            bottom: -0.10,
        }
    }
}

impl RevealBand {
    pub fn contains(&self, bounds: Bounds, viewport_height: f64) -> bool {
        bounds.top < viewport_height * self.top && bounds.bottom > viewport_height * self.bottom
    }
}

/// What the controller needs from the page it animates.
pub trait RevealSurface {
    type Element: Clone + Eq + Hash;

    /// Every element currently carrying the animation marker.
    fn marked_elements(&self) -> Vec<Self::Element>;
    /// Current bounds, or `None` if the element is no longer laid out.
    fn bounds(&self, element: &Self::Element) -> Option<Bounds>;
    fn viewport_height(&self) -> f64;
    /// Add the visible class.
    fn reveal(&mut self, element: &Self::Element);
    /// Whether visibility observation is available at all.
    fn supports_observation(&self) -> bool;
    fn observe(&mut self, element: &Self::Element);
    fn unobserve(&mut self, element: &Self::Element);
}

#[derive(Debug)]
pub struct RevealController<E> {
    band: RevealBand,
    grace: Duration,
    seen: HashSet<E>,
    observing: HashSet<E>,
    revealed: HashSet<E>,
    sweep_at: Option<Instant>,
}

impl<E: Clone + Eq + Hash> RevealController<E> {
    pub const DEFAULT_GRACE: Duration = Duration::from_millis(1000);

    pub fn new(band: RevealBand, grace: Duration) -> Self {
        Self {
            band,
            grace,
            seen: HashSet::new(),
            observing: HashSet::new(),
            revealed: HashSet::new(),
            sweep_at: None,
        }
    }

    pub fn from_config(config: &RevealConfig) -> Self {
        Self::new(
            RevealBand {
                top: config.band_top,
                bottom: config.band_bottom,
            },
            Duration::from_millis(config.grace_ms),
        )
    }

    pub fn is_revealed(&self, element: &E) -> bool {
        self.revealed.contains(element)
    }

    pub fn is_observing(&self, element: &E) -> bool {
        self.observing.contains(element)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }

    /// Initial scan: process every marked element on the page.
    pub fn start<S>(&mut self, surface: &mut S)
    where
        S: RevealSurface<Element = E>,
    {
        self.rescan(surface);
    }

    /// Process marked elements not seen before. Call whenever content has
    /// been inserted into the page; already-seen elements are skipped.
    pub fn rescan<S>(&mut self, surface: &mut S)
    where
        S: RevealSurface<Element = E>,
    {
        for element in surface.marked_elements() {
            self.process(surface, element);
        }
    }

    /// Explicitly hand newly inserted elements to the controller.
    pub fn register<S, I>(&mut self, surface: &mut S, elements: I)
    where
        S: RevealSurface<Element = E>,
        I: IntoIterator<Item = E>,
    {
        for element in elements {
            self.process(surface, element);
        }
    }

    fn process<S>(&mut self, surface: &mut S, element: E)
    where
        S: RevealSurface<Element = E>,
    {
        if !self.seen.insert(element.clone()) {
            return;
        }
        if !surface.supports_observation() || self.in_band(surface, &element) {
            self.reveal(surface, &element);
            return;
        }
        surface.observe(&element);
        self.observing.insert(element);
    }

    fn in_band<S>(&self, surface: &S, element: &E) -> bool
    where
        S: RevealSurface<Element = E>,
    {
        surface
            .bounds(element)
            .is_some_and(|b| self.band.contains(b, surface.viewport_height()))
    }

    fn reveal<S>(&mut self, surface: &mut S, element: &E)
    where
        S: RevealSurface<Element = E>,
    {
        if self.observing.remove(element) {
            surface.unobserve(element);
        }
        if self.revealed.insert(element.clone()) {
            surface.reveal(element);
        }
    }

    /// Visibility callback for an observed element. The first crossing into
    /// view reveals it and ends its observation.
    pub fn intersection<S>(&mut self, surface: &mut S, element: &E, intersecting: bool)
    where
        S: RevealSurface<Element = E>,
    {
        if intersecting && self.observing.contains(element) {
            self.reveal(surface, element);
        }
    }

    /// Re-check observed elements against the band, for hosts that report
    /// scroll or resize instead of per-element crossings.
    pub fn viewport_changed<S>(&mut self, surface: &mut S)
    where
        S: RevealSurface<Element = E>,
    {
        let view: &S = surface;
        let crossed: Vec<E> = self
            .observing
            .iter()
            .filter(|e| self.in_band(view, e))
            .cloned()
            .collect();
        for element in crossed {
            self.reveal(surface, &element);
        }
    }

    /// The page finished loading at `at`; arm the safety sweep.
    pub fn page_loaded(&mut self, at: Instant) {
        self.sweep_at = Some(at + self.grace);
    }

    /// Run the safety sweep if its time has come. Returns how many elements
    /// it had to force-reveal.
    pub fn poll<S>(&mut self, surface: &mut S, now: Instant) -> usize
    where
        S: RevealSurface<Element = E>,
    {
        match self.sweep_at {
            Some(at) if now >= at => {
                self.sweep_at = None;
                let mut forced = 0;
                for element in surface.marked_elements() {
                    self.seen.insert(element.clone());
                    if !self.revealed.contains(&element) {
                        self.reveal(surface, &element);
                        forced += 1;
                    }
                }
                forced
            }
            _ => 0,
        }
    }
}

impl<E: Clone + Eq + Hash> Default for RevealController<E> {
    fn default() -> Self {
        Self::new(RevealBand::default(), Self::DEFAULT_GRACE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    /// A page of stacked elements with a scrollable viewport.
    struct FakePage {
        viewport: f64,
        scroll: f64,
        observer: bool,
        elements: Vec<(u32, f64, f64)>,
        visible: BTreeSet<u32>,
        observed: BTreeSet<u32>,
        reveal_calls: usize,
    }

    impl FakePage {
        fn new(observer: bool) -> Self {
            Self {
                viewport: 800.0,
                scroll: 0.0,
                observer,
                elements: Vec::new(),
                visible: BTreeSet::new(),
                observed: BTreeSet::new(),
                reveal_calls: 0,
            }
        }

        /// Element `id` spanning page offsets `top..bottom`.
        fn with(mut self, id: u32, top: f64, bottom: f64) -> Self {
            self.elements.push((id, top, bottom));
            self
        }

        fn insert(&mut self, id: u32, top: f64, bottom: f64) {
            self.elements.push((id, top, bottom));
        }
    }

    impl RevealSurface for FakePage {
        type Element = u32;

        fn marked_elements(&self) -> Vec<u32> {
            self.elements.iter().map(|(id, _, _)| *id).collect()
        }

        fn bounds(&self, element: &u32) -> Option<Bounds> {
            self.elements
                .iter()
                .find(|(id, _, _)| id == element)
                .map(|(_, top, bottom)| Bounds {
                    top: top - self.scroll,
                    bottom: bottom - self.scroll,
                })
        }

        fn viewport_height(&self) -> f64 {
            self.viewport
        }

        fn reveal(&mut self, element: &u32) {
            self.reveal_calls += 1;
            self.visible.insert(*element);
        }

        fn supports_observation(&self) -> bool {
            self.observer
        }

        fn observe(&mut self, element: &u32) {
            self.observed.insert(*element);
        }

        fn unobserve(&mut self, element: &u32) {
            self.observed.remove(element);
        }
    }

    #[test]
    fn band_matches_definition() {
        let band = RevealBand::default();
        // Top edge must be above 95% of 1000px
        assert!(band.contains(Bounds { top: 949.0, bottom: 1200.0 }, 1000.0));
        assert!(!band.contains(Bounds { top: 950.0, bottom: 1200.0 }, 1000.0));
        // Bottom edge must be below 10% above the viewport top
        assert!(band.contains(Bounds { top: -500.0, bottom: -99.0 }, 1000.0));
        assert!(!band.contains(Bounds { top: -500.0, bottom: -100.0 }, 1000.0));
    }

    #[test]
    fn element_in_view_revealed_during_scan() {
        let mut page = FakePage::new(true).with(1, 100.0, 300.0);
        let mut reveal = RevealController::default();
        reveal.start(&mut page);

        assert!(reveal.is_revealed(&1));
        assert!(page.visible.contains(&1));
        assert!(page.observed.is_empty());
    }

    #[test]
    fn element_below_fold_observed_then_revealed_once() {
        let mut page = FakePage::new(true).with(1, 2000.0, 2300.0);
        let mut reveal = RevealController::default();
        reveal.start(&mut page);

        assert!(!reveal.is_revealed(&1));
        assert!(reveal.is_observing(&1));
        assert!(page.observed.contains(&1));

        reveal.intersection(&mut page, &1, false);
        assert!(!reveal.is_revealed(&1));

        reveal.intersection(&mut page, &1, true);
        assert!(page.visible.contains(&1));
        assert!(page.observed.is_empty(), "observation stops after reveal");

        // A later crossing is ignored
        reveal.intersection(&mut page, &1, true);
        assert_eq!(page.reveal_calls, 1);
    }

    #[test]
    fn no_observer_reveals_everything_immediately() {
        let mut page = FakePage::new(false)
            .with(1, 100.0, 200.0)
            .with(2, 5000.0, 5200.0);
        let mut reveal = RevealController::default();
        reveal.start(&mut page);

        assert_eq!(reveal.revealed_count(), 2);
        assert!(page.observed.is_empty());
    }

    #[test]
    fn scan_and_register_do_not_double_register() {
        let mut page = FakePage::new(true).with(1, 3000.0, 3100.0);
        let mut reveal = RevealController::default();
        reveal.start(&mut page);
        reveal.rescan(&mut page);
        reveal.register(&mut page, [1]);

        assert_eq!(page.observed.len(), 1);
        reveal.intersection(&mut page, &1, true);
        assert_eq!(page.reveal_calls, 1);
    }

    #[test]
    fn inserted_content_picked_up_by_rescan() {
        let mut page = FakePage::new(true).with(1, 100.0, 200.0);
        let mut reveal = RevealController::default();
        reveal.start(&mut page);

        page.insert(2, 300.0, 400.0);
        reveal.rescan(&mut page);
        assert!(reveal.is_revealed(&2));
    }

    #[test]
    fn inserted_content_picked_up_by_register() {
        let mut page = FakePage::new(true);
        let mut reveal = RevealController::default();
        reveal.start(&mut page);

        page.insert(7, 4000.0, 4100.0);
        reveal.register(&mut page, [7]);
        assert!(reveal.is_observing(&7));

        page.scroll = 3500.0;
        reveal.viewport_changed(&mut page);
        assert!(reveal.is_revealed(&7));
        assert!(!reveal.is_observing(&7));
    }

    #[test]
    fn viewport_change_leaves_out_of_band_elements_observed() {
        let mut page = FakePage::new(true).with(1, 4000.0, 4100.0);
        let mut reveal = RevealController::default();
        reveal.start(&mut page);

        page.scroll = 1000.0;
        reveal.viewport_changed(&mut page);
        assert!(reveal.is_observing(&1));
        assert!(!reveal.is_revealed(&1));
    }

    #[test]
    fn sweep_waits_for_grace_then_forces_reveal() {
        let mut page = FakePage::new(true).with(1, 4000.0, 4100.0);
        let mut reveal = RevealController::new(RevealBand::default(), Duration::from_millis(500));
        reveal.start(&mut page);
        // Inserted without any registration at all
        page.insert(2, 9000.0, 9100.0);

        let loaded = Instant::now();
        reveal.page_loaded(loaded);
        assert_eq!(reveal.poll(&mut page, loaded + Duration::from_millis(499)), 0);
        assert!(!reveal.is_revealed(&1));

        assert_eq!(reveal.poll(&mut page, loaded + Duration::from_millis(500)), 2);
        assert!(page.visible.contains(&1));
        assert!(page.visible.contains(&2));
        assert!(page.observed.is_empty());
    }

    #[test]
    fn sweep_runs_once() {
        let mut page = FakePage::new(true).with(1, 4000.0, 4100.0);
        let mut reveal = RevealController::default();
        reveal.start(&mut page);
        let loaded = Instant::now();
        reveal.page_loaded(loaded);

        let later = loaded + Duration::from_secs(5);
        assert_eq!(reveal.poll(&mut page, later), 1);
        page.insert(2, 9000.0, 9100.0);
        assert_eq!(reveal.poll(&mut page, later), 0);
    }

    #[test]
    fn poll_before_load_does_nothing() {
        let mut page = FakePage::new(true).with(1, 4000.0, 4100.0);
        let mut reveal = RevealController::default();
        reveal.start(&mut page);
        assert_eq!(reveal.poll(&mut page, Instant::now()), 0);
    }

    #[test]
    fn from_config_uses_configured_band() {
        let config = RevealConfig {
            band_top: 0.5,
            band_bottom: 0.0,
            grace_ms: 10,
        };
        let mut page = FakePage::new(true).with(1, 500.0, 600.0);
        let mut reveal = RevealController::from_config(&config);
        reveal.start(&mut page);
        // 500 is not above 50% of 800
        assert!(!reveal.is_revealed(&1));
    }

    #[test]
    fn missing_elements_are_a_no_op() {
        let mut page = FakePage::new(true);
        let mut reveal: RevealController<u32> = RevealController::default();
        reveal.start(&mut page);
        reveal.intersection(&mut page, &42, true);
        assert_eq!(reveal.revealed_count(), 0);
    }
}
