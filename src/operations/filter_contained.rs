use crate::graph::Cycle;
use crate::math::polygon_2d::point_in_polygon;
use crate::math::Point2;

/// A cycle candidate awaiting containment filtering: the cycle, its
/// sampled boundary and the metrics already computed over it.
#[derive(Debug, Clone)]
pub struct ShapeCandidate {
    /// The boundary cycle.
    pub cycle: Cycle,
    /// The sampled closed polyline.
    pub points: Vec<Point2>,
    /// Enclosed area in cm².
    pub area_cm2: f64,
    /// Boundary perimeter in cm.
    pub perimeter_cm: f64,
}

/// Removes candidates that fully contain a smaller candidate.
///
/// A larger loop enclosing an independently valid smaller loop is a
/// spurious artifact of enumeration (typically produced by curved edges),
/// not a board with a hole: the outer loop is dropped entirely, never
/// converted to an annulus. Containment is decided by testing the inner
/// candidate's first sampled vertex against the outer polygon with the
/// even-odd rule, and only against strictly larger outers. Candidates
/// with fewer than 3 sampled points neither contain nor get tested.
///
/// O(n²) over the candidates, fine at the tens of cycles a hand-drawn
/// layout produces.
#[must_use]
pub fn filter_contained(candidates: Vec<ShapeCandidate>) -> Vec<ShapeCandidate> {
    if candidates.len() <= 1 {
        return candidates;
    }
    let mut keep = vec![true; candidates.len()];
    for (i, outer) in candidates.iter().enumerate() {
        if outer.points.len() < 3 {
            continue;
        }
        for (j, inner) in candidates.iter().enumerate() {
            if i == j || outer.area_cm2 <= inner.area_cm2 || inner.points.len() < 3 {
                continue;
            }
            if point_in_polygon(&outer.points, &inner.points[0]) {
                keep[i] = false;
                break;
            }
        }
    }
    candidates
        .into_iter()
        .zip(keep)
        .filter_map(|(candidate, kept)| kept.then_some(candidate))
        .collect()
}
