// Viewport state - the displayed extent, animated goTo, and settle detection
use crate::layout;
use crate::model::{zoom_out_delta, Extent, Point, Rect};
use eframe::egui;
use std::time::{Duration, Instant};

struct GoToAnimation {
    from: Extent,
    to: Extent,
    started: Instant,
    duration: Duration,
}

/// The map view: owns the extent currently on screen.
///
/// All motion funnels through here so that "the view stopped moving"
/// can be reported as a single serialized stream: after any pan, zoom
/// or goTo animation, once no motion has happened for a short delay,
/// `take_settled` yields the new extent exactly once. The freshly
/// constructed viewport counts as moved, so the initial extent settles
/// too and becomes the first history entry.
pub struct MapViewport {
    extent: Extent,
    full_extent: Extent,
    animation: Option<GoToAnimation>,
    animation_duration: Duration,
    last_motion: Option<Instant>,
    settle_pending: bool,
}

impl MapViewport {
    pub fn new(initial: Extent, animation_ms: u64) -> Self {
        Self {
            extent: initial,
            // Captured once; constant for the life of the view.
            full_extent: initial,
            animation: None,
            animation_duration: Duration::from_millis(animation_ms),
            last_motion: Some(Instant::now()),
            settle_pending: true,
        }
    }

    pub fn extent(&self) -> Extent {
        self.extent
    }

    pub fn full_extent(&self) -> Extent {
        self.full_extent
    }

    /// Travels to `target`, fitted to the screen aspect, with an
    /// ease-out animation. A newer goTo supersedes an in-flight one.
    pub fn go_to(&mut self, target: Extent, aspect: f64) {
        let to = target.aspect_fitted(aspect);
        if self.animation_duration.is_zero() {
            self.extent = to;
            self.mark_moved();
            return;
        }
        self.animation = Some(GoToAnimation {
            from: self.extent,
            to,
            started: Instant::now(),
            duration: self.animation_duration,
        });
        self.mark_moved();
    }

    /// Shifts the view by a map-space delta (mouse drag or arrow keys).
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.animation = None;
        self.extent = self.extent.translated(dx, dy);
        self.mark_moved();
    }

    /// Scales the view about an anchor point, keeping the anchor at the
    /// same screen position (wheel zoom).
    pub fn zoom_about(&mut self, anchor: Point, factor: f64) {
        self.animation = None;
        let e = self.extent;
        self.extent = Extent::new(
            anchor.x - (anchor.x - e.xmin) * factor,
            anchor.y - (anchor.y - e.ymin) * factor,
            anchor.x + (e.xmax - anchor.x) * factor,
            anchor.y + (e.ymax - anchor.y) * factor,
            e.spatial_ref,
        );
        self.mark_moved();
    }

    /// Scales the view about its center. A plain click with the zoom-in
    /// tool halves the view, the zoom-out tool doubles it.
    pub fn zoom_centered(&mut self, factor: f64, aspect: f64) {
        let target = self.extent.scaled_about_center(factor);
        self.go_to(target, aspect);
    }

    /// Zooms in to a drawn rectangle.
    pub fn zoom_to_rect(&mut self, rect: Rect, aspect: f64) {
        let target = Extent::from_rect(rect, self.extent.spatial_ref);
        self.go_to(target, aspect);
    }

    /// Zooms out by a drawn rectangle: the view grows on every side by
    /// an amount inversely proportional to the rectangle's width.
    pub fn zoom_out_by_rect(&mut self, rect: Rect, aspect: f64) {
        if rect.width <= 0.0 {
            return;
        }
        let delta = zoom_out_delta(self.extent.width(), rect.width);
        let target = self.extent.expanded(delta);
        self.go_to(target, aspect);
    }

    /// Advances the goTo animation. Call once per frame before reading
    /// the extent; returns true while more frames are needed.
    pub fn tick(&mut self) -> bool {
        let Some(anim) = &self.animation else {
            return false;
        };
        let t = anim.started.elapsed().as_secs_f64() / anim.duration.as_secs_f64();
        if t >= 1.0 {
            self.extent = anim.to;
            self.animation = None;
            self.mark_moved();
            false
        } else {
            let eased = ease_out_cubic(t);
            self.extent = anim.from.lerp(&anim.to, eased);
            self.mark_moved();
            true
        }
    }

    /// Fits the current extent to a new screen aspect ratio (window
    /// resize). Resizing is not a user move, so it does not re-arm the
    /// settle timer on its own.
    pub fn apply_aspect(&mut self, aspect: f64) {
        if self.animation.is_none() {
            self.extent = self.extent.aspect_fitted(aspect);
        }
    }

    fn mark_moved(&mut self) {
        self.last_motion = Some(Instant::now());
        self.settle_pending = true;
    }

    /// The stationary notification: yields the extent exactly once per
    /// episode of motion, after the view has been still for the
    /// stationary delay.
    pub fn take_settled(&mut self) -> Option<Extent> {
        if !self.settle_pending || self.animation.is_some() {
            return None;
        }
        let quiet_for = self.last_motion?.elapsed();
        if quiet_for >= Duration::from_millis(layout::STATIONARY_DELAY_MS) {
            self.settle_pending = false;
            Some(self.extent)
        } else {
            None
        }
    }

    /// True while a settle notification is still due, so the frame loop
    /// keeps repainting until it fires.
    pub fn settle_pending(&self) -> bool {
        self.settle_pending
    }

    /// Maps a map-space point to a screen position inside `rect`.
    pub fn to_screen(&self, p: Point, rect: egui::Rect) -> egui::Pos2 {
        let e = self.extent;
        let x = rect.left() + ((p.x - e.xmin) / e.width()) as f32 * rect.width();
        let y = rect.top() + ((e.ymax - p.y) / e.height()) as f32 * rect.height();
        egui::pos2(x, y)
    }

    /// Maps a screen position inside `rect` back to map space.
    pub fn to_map(&self, pos: egui::Pos2, rect: egui::Rect) -> Point {
        let e = self.extent;
        let x = e.xmin + ((pos.x - rect.left()) / rect.width()) as f64 * e.width();
        let y = e.ymax - ((pos.y - rect.top()) / rect.height()) as f64 * e.height();
        Point::new(x, y)
    }

    /// Map units per screen pixel along x.
    pub fn units_per_pixel(&self, rect: egui::Rect) -> f64 {
        self.extent.width() / rect.width().max(1.0) as f64
    }
}

fn ease_out_cubic(t: f64) -> f64 {
    let u = 1.0 - t.clamp(0.0, 1.0);
    1.0 - u * u * u
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SpatialRef;

    fn viewport() -> MapViewport {
        // Zero animation keeps goTo synchronous in tests.
        MapViewport::new(
            Extent::new(0.0, 0.0, 100.0, 100.0, SpatialRef::WEB_MERCATOR),
            0,
        )
    }

    fn drain_settle(v: &mut MapViewport) -> Option<Extent> {
        // The stationary delay is wall-clock; rewind the motion stamp
        // instead of sleeping.
        v.last_motion = v
            .last_motion
            .map(|t| t - Duration::from_millis(layout::STATIONARY_DELAY_MS + 1));
        v.take_settled()
    }

    #[test]
    fn test_initial_extent_settles_once() {
        let mut v = viewport();
        let settled = drain_settle(&mut v);
        assert_eq!(settled, Some(v.extent()));
        // Second read without new motion: nothing.
        assert_eq!(v.take_settled(), None);
    }

    #[test]
    fn test_motion_rearms_settle() {
        let mut v = viewport();
        drain_settle(&mut v);
        v.pan_by(10.0, 0.0);
        assert!(v.settle_pending());
        let settled = drain_settle(&mut v).unwrap();
        assert_eq!(settled.xmin, 10.0);
        assert_eq!(settled.xmax, 110.0);
    }

    #[test]
    fn test_settle_waits_for_quiet_period() {
        let mut v = viewport();
        // Fresh motion: not yet stationary.
        assert_eq!(v.take_settled(), None);
        assert!(v.settle_pending());
    }

    #[test]
    fn test_full_extent_is_constant() {
        let mut v = viewport();
        let full = v.full_extent();
        v.pan_by(50.0, 50.0);
        v.zoom_centered(0.5, 1.0);
        assert_eq!(v.full_extent(), full);
    }

    #[test]
    fn test_zoom_about_keeps_anchor_fraction() {
        let mut v = viewport();
        v.zoom_about(Point::new(25.0, 25.0), 0.5);
        let e = v.extent();
        assert_eq!(e, Extent::new(12.5, 12.5, 62.5, 62.5, SpatialRef::WEB_MERCATOR));
        // The anchor stays a quarter of the way across the view.
        assert!(((25.0 - e.xmin) / e.width() - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_zoom_out_by_rect_expands_all_sides() {
        let mut v = viewport();
        // Half-width rectangle: delta is half the extent width.
        let rect = Rect {
            x: 10.0,
            y: 90.0,
            width: 50.0,
            height: 30.0,
        };
        v.zoom_out_by_rect(rect, 1.0);
        assert_eq!(
            v.extent(),
            Extent::new(-50.0, -50.0, 150.0, 150.0, SpatialRef::WEB_MERCATOR)
        );
    }

    #[test]
    fn test_zoom_out_by_zero_width_rect_is_ignored() {
        let mut v = viewport();
        let before = v.extent();
        v.zoom_out_by_rect(
            Rect {
                x: 10.0,
                y: 90.0,
                width: 0.0,
                height: 30.0,
            },
            1.0,
        );
        assert_eq!(v.extent(), before);
    }

    #[test]
    fn test_zoom_to_rect_fits_aspect() {
        let mut v = viewport();
        let rect = Rect {
            x: 20.0,
            y: 80.0,
            width: 40.0,
            height: 20.0,
        };
        v.zoom_to_rect(rect, 1.0);
        let e = v.extent();
        // Square screen: the 2:1 rect gains height to fit.
        assert_eq!(e.width(), 40.0);
        assert_eq!(e.height(), 40.0);
        assert_eq!(e.center().x, 40.0);
        assert_eq!(e.center().y, 70.0);
    }

    #[test]
    fn test_zoom_to_zero_width_rect_keeps_usable_extent() {
        let mut v = viewport();
        // A vertical-line drag is a kept gesture; the resulting view
        // must still have area so panning and zooming keep working.
        let band = Rect {
            x: 40.0,
            y: 80.0,
            width: 0.0,
            height: 30.0,
        };
        v.zoom_to_rect(band, 1.0);
        let e = v.extent();
        assert_eq!(e.height(), 30.0);
        assert_eq!(e.width(), 30.0);
        assert_eq!(e.center().x, 40.0);
        let screen = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(300.0, 300.0));
        assert!(v.units_per_pixel(screen) > 0.0);
        v.zoom_centered(2.0, 1.0);
        assert_eq!(v.extent().width(), 60.0);
    }

    #[test]
    fn test_screen_round_trip() {
        let v = viewport();
        let rect = egui::Rect::from_min_size(egui::pos2(5.0, 10.0), egui::vec2(400.0, 400.0));
        let p = Point::new(30.0, 70.0);
        let back = v.to_map(v.to_screen(p, rect), rect);
        assert!((back.x - p.x).abs() < 1e-4);
        assert!((back.y - p.y).abs() < 1e-4);
    }

    #[test]
    fn test_to_screen_orientation() {
        let v = viewport();
        let rect = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(100.0, 100.0));
        // Top-left of the extent is the top-left of the screen rect.
        let top_left = v.to_screen(Point::new(0.0, 100.0), rect);
        assert_eq!(top_left, egui::pos2(0.0, 0.0));
        let bottom_right = v.to_screen(Point::new(100.0, 0.0), rect);
        assert_eq!(bottom_right, egui::pos2(100.0, 100.0));
    }
}
