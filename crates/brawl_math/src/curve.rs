//! Quadratic Bezier curves.
//!
//! Jump arcs are quadratic curves through three known points: the takeoff
//! point, the peak, and the landing point. The curve itself is described by
//! its two endpoints and a single control point, which [`solve_control_point`]
//! derives from the peak.

use glam::Vec2;

/// Evaluate the quadratic Bezier `origin → control → destination` at `t`.
///
/// `t = 0` yields `origin` and `t = 1` yields `destination`, both exactly:
/// the other two weights are zero at the endpoints.
#[must_use]
pub fn quadratic_point(origin: Vec2, control: Vec2, destination: Vec2, t: f32) -> Vec2 {
    let u = 1.0 - t;
    origin * (u * u) + control * (2.0 * u * t) + destination * (t * t)
}

/// Solve for the control point of a quadratic curve that starts at `origin`,
/// ends at `destination`, and passes through `peak`.
///
/// `reference` is the fraction of the curve measured from the destination
/// end at which the peak lies, so the peak is hit at Bezier parameter
/// `1 - reference`. Per axis:
///
/// ```text
/// control = peak / (2r(1-r)) - origin * r / (2(1-r)) - destination * (1-r) / (2r)
/// ```
///
/// `reference` must lie strictly between 0 and 1.
#[must_use]
pub fn solve_control_point(origin: Vec2, peak: Vec2, destination: Vec2, reference: f32) -> Vec2 {
    let r = reference;
    peak / (2.0 * r * (1.0 - r))
        - origin * (r / (2.0 * (1.0 - r)))
        - destination * ((1.0 - r) / (2.0 * r))
}
