use super::Point2;

/// Computes the area of a closed polygon via the shoelace formula.
///
/// The polygon is implicitly closed (last vertex connects back to the
/// first). The result is non-negative regardless of winding direction.
/// Fewer than 3 points yield an area of 0.
///
/// Inputs are in centimeters; the result is in cm².
#[must_use]
pub fn polygon_area(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum.abs() * 0.5
}

/// Computes the perimeter of a closed polygon, including the wrap-around
/// segment from the last vertex back to the first.
///
/// Fewer than 2 points yield a perimeter of 0. Inputs are in centimeters;
/// the result is in cm.
#[must_use]
pub fn polygon_perimeter(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 2 {
        return 0.0;
    }
    let mut perimeter = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        let dx = points[i].x - points[j].x;
        let dy = points[i].y - points[j].y;
        perimeter += dx.hypot(dy);
    }
    perimeter
}

/// Tests whether a point lies strictly inside a closed polygon using the
/// even-odd rule (horizontal ray cast, edge-crossing parity).
#[must_use]
pub fn point_in_polygon(points: &[Point2], point: &Point2) -> bool {
    let n = points.len();
    let mut inside = false;
    let mut j = n.wrapping_sub(1);
    for i in 0..n {
        let a = &points[i];
        let b = &points[j];
        let crosses = (a.y > point.y) != (b.y > point.y)
            && point.x < (b.x - a.x) * (point.y - a.y) / (b.y - a.y) + a.x;
        if crosses {
            inside = !inside;
        }
        j = i;
    }
    inside
}
