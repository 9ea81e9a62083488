//! Planar closest pair of points by divide and conquer.
//!
//! The points are sorted by x once and kept in that order for the whole run.
//! The y-ordering is a list of indices into the x-ordered vector; each
//! recursion level splits it in two by index, which preserves y-order without
//! sorting again and keeps the total cost at `O(n log n)`.

use crate::context::Recorder;
use crate::error::{Error, Result};
use crate::geometry::{Point, PointPair};
use crate::metrics::Metrics;

use super::run_instrumented;

/// Segments of at most this many points are solved by comparing every pair.
pub const BRUTE_FORCE_MAX: usize = 3;

pub fn find_closest_pair(points: &[Point]) -> Result<PointPair> {
    validate(points)?;
    Ok(closest_pair(points, Recorder::detached()))
}

pub fn find_closest_pair_with_metrics(points: &[Point], metrics: &mut Metrics) -> Result<PointPair> {
    validate(points)?;
    Ok(run_instrumented(metrics, "closest_pair", points.len(), |m| {
        closest_pair(points, Recorder::new(Some(m)))
    }))
}

pub fn brute_force_closest_pair(points: &[Point]) -> Result<PointPair> {
    validate(points)?;
    Ok(brute_force(points, &mut Recorder::detached()))
}

fn validate(points: &[Point]) -> Result<()> {
    if points.len() < 2 {
        return Err(Error::InvalidArgument("closest pair needs at least 2 points"));
    }
    Ok(())
}

fn closest_pair(points: &[Point], mut rec: Recorder<'_>) -> PointPair {
    let mut by_x = points.to_vec();
    by_x.sort_by(|a, b| {
        rec.record_comparison();
        a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y))
    });

    let mut by_y: Vec<usize> = (0..by_x.len()).collect();
    by_y.sort_by(|&a, &b| {
        rec.record_comparison();
        by_x[a].y.total_cmp(&by_x[b].y).then(a.cmp(&b))
    });

    let last = by_x.len() - 1;
    closest_in_range(&by_x, &by_y, 0, last, &mut rec)
}

/// Closest pair among `by_x[left..=right]`; `by_y` holds exactly those
/// indices, ordered by y.
fn closest_in_range(
    by_x: &[Point],
    by_y: &[usize],
    left: usize,
    right: usize,
    rec: &mut Recorder<'_>,
) -> PointPair {
    debug_assert_eq!(by_y.len(), right - left + 1);
    rec.enter_recursion();

    let best = if right - left + 1 <= BRUTE_FORCE_MAX {
        brute_force(&by_x[left..=right], rec)
    } else {
        let mid = left + (right - left) / 2;
        rec.record_access();
        let mid_x = by_x[mid].x;

        let (left_y, right_y): (Vec<usize>, Vec<usize>) = by_y.iter().copied().partition(|&i| {
            rec.record_comparison();
            i <= mid
        });

        let from_left = closest_in_range(by_x, &left_y, left, mid, rec);
        let from_right = closest_in_range(by_x, &right_y, mid + 1, right, rec);

        // Exact ties keep the left result.
        rec.record_comparison();
        let bound = if from_left.distance <= from_right.distance {
            from_left
        } else {
            from_right
        };

        let strip: Vec<Point> = by_y
            .iter()
            .map(|&i| by_x[i])
            .filter(|p| {
                rec.record_access();
                rec.record_comparison();
                (p.x - mid_x).abs() < bound.distance
            })
            .collect();

        closest_in_strip(&strip, bound.distance, rec).unwrap_or(bound)
    };

    rec.exit_recursion();
    best
}

/// Best pair in `strip` (y-ordered) strictly closer than `bound`, if any.
///
/// The inner scan stops once the y-gap reaches the current best distance;
/// only a constant number of strip points fit in that window, so the scan is
/// linear in the strip length.
fn closest_in_strip(strip: &[Point], bound: f64, rec: &mut Recorder<'_>) -> Option<PointPair> {
    let mut limit = bound;
    let mut best = None;

    for (i, a) in strip.iter().enumerate() {
        for b in &strip[i + 1..] {
            rec.record_access();
            rec.record_comparison();
            if b.y - a.y >= limit {
                break;
            }
            let distance = a.distance_to(b);
            rec.record_comparison();
            if distance < limit {
                limit = distance;
                best = Some(PointPair::with_distance(*a, *b, distance));
            }
        }
    }
    best
}

fn brute_force(points: &[Point], rec: &mut Recorder<'_>) -> PointPair {
    debug_assert!(points.len() >= 2);
    let mut best = PointPair::new(points[0], points[1]);

    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            rec.record_access();
            rec.record_access();
            let distance = a.distance_to(b);
            rec.record_comparison();
            // A NaN first pair must not block every later candidate.
            if distance < best.distance || best.distance.is_nan() {
                best = PointPair::with_distance(*a, *b, distance);
            }
        }
    }
    best
}
