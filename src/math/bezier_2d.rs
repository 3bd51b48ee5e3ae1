use super::Point2;

/// Number of line segments used to approximate one cubic Bézier edge.
pub const CUBIC_SEGMENTS: u32 = 20;

/// Evaluates a cubic Bézier at parameter `t` using the Bernstein blend:
///
/// `P(t) = (1-t)³·p0 + 3(1-t)²t·c1 + 3(1-t)t²·c2 + t³·p3`
#[must_use]
pub fn cubic_point(p0: &Point2, c1: &Point2, c2: &Point2, p3: &Point2, t: f64) -> Point2 {
    let u = 1.0 - t;
    let b0 = u * u * u;
    let b1 = 3.0 * u * u * t;
    let b2 = 3.0 * u * t * t;
    let b3 = t * t * t;
    Point2::new(
        b0 * p0.x + b1 * c1.x + b2 * c2.x + b3 * p3.x,
        b0 * p0.y + b1 * c1.y + b2 * c2.y + b3 * p3.y,
    )
}

/// Appends a sampled cubic Bézier to `points` as `segments` line segments.
///
/// The start point `p0` is pushed only when `points` is empty, so
/// consecutive segments of a polyline share endpoints without
/// duplication. Samples are taken at `t = i/segments` for
/// `i = 1..=segments`, endpoint inclusive.
pub fn sample_cubic(
    points: &mut Vec<Point2>,
    p0: &Point2,
    c1: &Point2,
    c2: &Point2,
    p3: &Point2,
    segments: u32,
) {
    if points.is_empty() {
        points.push(*p0);
    }
    for i in 1..=segments {
        let t = f64::from(i) / f64::from(segments);
        points.push(cubic_point(p0, c1, c2, p3, t));
    }
}
