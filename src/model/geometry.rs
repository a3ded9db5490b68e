// Map-space geometry primitives
// Extents, drag rectangles, and the arithmetic that converts between them

use serde::{Deserialize, Serialize};

/// A coordinate in map units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Well-known id of a spatial reference system (e.g. 4326, 3857).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpatialRef(pub i32);

impl SpatialRef {
    pub const WEB_MERCATOR: SpatialRef = SpatialRef(3857);
}

/// An axis-aligned rectangular region in map coordinates.
///
/// Value type: two extents compare equal when all four edges and the
/// spatial reference match.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    pub xmin: f64,
    pub ymin: f64,
    pub xmax: f64,
    pub ymax: f64,
    pub spatial_ref: SpatialRef,
}

impl Extent {
    pub fn new(xmin: f64, ymin: f64, xmax: f64, ymax: f64, spatial_ref: SpatialRef) -> Self {
        Self {
            xmin,
            ymin,
            xmax,
            ymax,
            spatial_ref,
        }
    }

    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.xmin + self.xmax) / 2.0,
            (self.ymin + self.ymax) / 2.0,
        )
    }

    /// Extent scaled about its own center. Factors below 1.0 zoom in,
    /// above 1.0 zoom out.
    pub fn scaled_about_center(&self, factor: f64) -> Self {
        let c = self.center();
        let hw = self.width() * factor / 2.0;
        let hh = self.height() * factor / 2.0;
        Self::new(c.x - hw, c.y - hh, c.x + hw, c.y + hh, self.spatial_ref)
    }

    /// Extent grown by `delta` map units on every side.
    pub fn expanded(&self, delta: f64) -> Self {
        Self::new(
            self.xmin - delta,
            self.ymin - delta,
            self.xmax + delta,
            self.ymax + delta,
            self.spatial_ref,
        )
    }

    /// Extent shifted by `(dx, dy)` map units.
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self::new(
            self.xmin + dx,
            self.ymin + dy,
            self.xmax + dx,
            self.ymax + dy,
            self.spatial_ref,
        )
    }

    /// Grows one axis so that width / height equals `aspect`, keeping
    /// the center fixed. Applying a target extent to a window does this
    /// so the target stays fully visible. An extent with one zero
    /// dimension (a line) is repaired from the other dimension, so a
    /// line target still yields a usable view; only a point extent
    /// comes back unchanged.
    pub fn aspect_fitted(&self, aspect: f64) -> Self {
        if aspect <= 0.0 || (self.width() <= 0.0 && self.height() <= 0.0) {
            return *self;
        }
        let c = self.center();
        if self.height() <= 0.0 || (self.width() > 0.0 && self.width() / self.height() >= aspect) {
            // Too wide (or flat): derive the height from the width.
            let half = self.width() / aspect / 2.0;
            Self::new(self.xmin, c.y - half, self.xmax, c.y + half, self.spatial_ref)
        } else {
            // Too narrow (or zero-width): derive the width from the height.
            let half = self.height() * aspect / 2.0;
            Self::new(c.x - half, self.ymin, c.x + half, self.ymax, self.spatial_ref)
        }
    }

    /// Extent covered by a normalized drag rectangle.
    pub fn from_rect(rect: Rect, spatial_ref: SpatialRef) -> Self {
        Self::new(
            rect.x,
            rect.y - rect.height,
            rect.x + rect.width,
            rect.y,
            spatial_ref,
        )
    }

    /// Linear interpolation between two extents, for animated goTo.
    pub fn lerp(&self, other: &Extent, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self::new(
            self.xmin + (other.xmin - self.xmin) * t,
            self.ymin + (other.ymin - self.ymin) * t,
            self.xmax + (other.xmax - self.xmax) * t,
            self.ymax + (other.ymax - self.ymax) * t,
            other.spatial_ref,
        )
    }
}

/// A normalized rectangle from a rubber-band drag. `y` is the top edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Normalizes two arbitrary corner points of a drawn rectangle.
///
/// Returns `None` when both dimensions are zero: a click with no drag
/// is an ignored gesture, not a rectangle.
pub fn rect_from_corners(a: Point, b: Point) -> Option<Rect> {
    let rect = Rect {
        x: a.x.min(b.x),
        y: a.y.max(b.y),
        width: (a.x - b.x).abs(),
        height: (a.y - b.y).abs(),
    };
    if rect.width != 0.0 || rect.height != 0.0 {
        Some(rect)
    } else {
        None
    }
}

/// Expansion applied to every side of the view extent when zooming out
/// by rectangle: the smaller the drawn rectangle relative to the view,
/// the further out the view moves.
pub fn zoom_out_delta(extent_width: f64, rect_width: f64) -> f64 {
    (extent_width * (extent_width / rect_width) - extent_width) / 2.0
}
