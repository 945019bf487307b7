//! Geometry helpers for connection curves

use egui::Pos2;

/// Calculates a point on a cubic Bézier curve at parameter t (0.0 to 1.0).
/// Used for drawing smooth connection curves between nodes.
pub fn cubic_bezier_point(t: f32, p0: Pos2, p1: Pos2, p2: Pos2, p3: Pos2) -> Pos2 {
    let t2 = t * t;
    let t3 = t2 * t;
    let mt = 1.0 - t;
    let mt2 = mt * mt;
    let mt3 = mt2 * mt;

    Pos2::new(
        mt3 * p0.x + 3.0 * mt2 * t * p1.x + 3.0 * mt * t2 * p2.x + t3 * p3.x,
        mt3 * p0.y + 3.0 * mt2 * t * p1.y + 3.0 * mt * t2 * p2.y + t3 * p3.y,
    )
}

/// Calculates the minimum distance from a point to a line segment.
pub fn distance_to_line_segment(point: Pos2, a: Pos2, b: Pos2) -> f32 {
    let ab = b - a;
    let ap = point - a;
    let ab_len_sq = ab.x * ab.x + ab.y * ab.y;

    if ab_len_sq == 0.0 {
        return (point - a).length();
    }

    let t = ((ap.x * ab.x + ap.y * ab.y) / ab_len_sq).clamp(0.0, 1.0);
    let projection = a + ab * t;
    (point - projection).length()
}

/// Approximate distance from a point to a cubic Bézier curve by sampling.
/// Used for detecting clicks on connection curves.
pub fn distance_to_bezier_curve(point: Pos2, p0: Pos2, p1: Pos2, p2: Pos2, p3: Pos2) -> f32 {
    let mut min_distance = f32::MAX;
    let mut prev = p0;
    for i in 1..=20 {
        let t = i as f32 / 20.0;
        let current = cubic_bezier_point(t, p0, p1, p2, p3);
        min_distance = min_distance.min(distance_to_line_segment(point, prev, current));
        prev = current;
    }
    min_distance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bezier_endpoints() {
        let p0 = Pos2::new(0.0, 0.0);
        let p1 = Pos2::new(0.0, 50.0);
        let p2 = Pos2::new(100.0, 50.0);
        let p3 = Pos2::new(100.0, 100.0);
        assert_eq!(cubic_bezier_point(0.0, p0, p1, p2, p3), p0);
        assert_eq!(cubic_bezier_point(1.0, p0, p1, p2, p3), p3);
    }

    #[test]
    fn test_distance_to_segment() {
        let a = Pos2::new(0.0, 0.0);
        let b = Pos2::new(10.0, 0.0);
        assert_eq!(distance_to_line_segment(Pos2::new(5.0, 3.0), a, b), 3.0);
        // Beyond the endpoint the nearest point is the endpoint itself.
        assert_eq!(distance_to_line_segment(Pos2::new(13.0, 4.0), a, b), 5.0);
    }
}
