//! Geometry on the normalized map plane

/// Distance units per normalized unit; the plane is roughly 750 x 750 units.
pub const DISTANCE_SCALE: f64 = 750.0;

/// Euclidean distance between two normalized points, scaled to distance
/// units and rounded to one decimal place.
pub fn scaled_distance(from: (f64, f64), to: (f64, f64)) -> f64 {
    let dx = (to.0 - from.0) * DISTANCE_SCALE;
    let dy = (to.1 - from.1) * DISTANCE_SCALE;
    (dx.hypot(dy) * 10.0).round() / 10.0
}

/// Distance from `point` to the segment `start`-`end`, in normalized units.
pub fn point_segment_distance(point: (f64, f64), start: (f64, f64), end: (f64, f64)) -> f64 {
    let (x, y) = point;
    let (x1, y1) = start;
    let (x2, y2) = end;

    let length_sq = (x2 - x1).powi(2) + (y2 - y1).powi(2);
    if length_sq == 0.0 {
        return (x - x1).hypot(y - y1);
    }

    let t = (((x - x1) * (x2 - x1) + (y - y1) * (y2 - y1)) / length_sq).clamp(0.0, 1.0);
    let proj_x = x1 + t * (x2 - x1);
    let proj_y = y1 + t * (y2 - y1);
    (x - proj_x).hypot(y - proj_y)
}
