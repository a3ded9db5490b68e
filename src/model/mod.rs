mod geometry;

pub use geometry::{rect_from_corners, zoom_out_delta, Extent, Point, Rect, SpatialRef};
