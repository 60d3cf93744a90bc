use super::Point2;

/// Decimal places kept when quantizing incoming boundary vertices.
const QUANTIZE_SCALE: f64 = 1e4;

/// Returns `true` if `a` and `b` agree within `tol` on both axes.
#[must_use]
pub fn same_vertex(a: &Point2, b: &Point2, tol: f64) -> bool {
    (a.x - b.x).abs() < tol && (a.y - b.y).abs() < tol
}

/// Index of the first vertex in `verts` equal to `target` within `tol`.
#[must_use]
pub fn position_of(verts: &[Point2], target: &Point2, tol: f64) -> Option<usize> {
    verts.iter().position(|v| same_vertex(v, target, tol))
}

/// Finds the first vertex of `a` (in `a`'s order) that also occurs in `b`.
///
/// Returns the pair of indices `(i, j)` into `a` and `b`.
#[must_use]
pub fn first_shared(a: &[Point2], b: &[Point2], tol: f64) -> Option<(usize, usize)> {
    a.iter()
        .enumerate()
        .find_map(|(i, v)| position_of(b, v, tol).map(|j| (i, j)))
}

/// Appends `verts` to `out`, skipping values already present.
pub fn extend_unique(out: &mut Vec<Point2>, verts: &[Point2], tol: f64) {
    for v in verts {
        if position_of(out, v, tol).is_none() {
            out.push(*v);
        }
    }
}

/// Rounds every vertex to four decimal places and collapses exact repeats,
/// keeping first-occurrence order.
#[must_use]
pub fn quantize(verts: &[Point2]) -> Vec<Point2> {
    let mut out: Vec<Point2> = Vec::with_capacity(verts.len());
    for v in verts {
        let q = Point2::new(
            (v.x * QUANTIZE_SCALE).round() / QUANTIZE_SCALE,
            (v.y * QUANTIZE_SCALE).round() / QUANTIZE_SCALE,
        );
        if !out.contains(&q) {
            out.push(q);
        }
    }
    out
}
