use std::f64::consts::PI;

use crate::entities::{Coordinates, RouteKind};
use crate::error::{degenerate_path_error, Error};

// Curvature as a fraction of the straight-line span.
const SAFE_BEND: f64 = 0.18;
const REGULAR_BEND: f64 = 0.12;
const REGULAR_WIGGLE: f64 = 0.06;

/// Interpolates `point_count` waypoints from `base` to `destination`.
///
/// Safe paths bow north, regular paths bow south and wiggle east-west. The
/// first and last waypoints are exactly `base` and `destination`.
pub fn build_path(
    base: Coordinates,
    destination: Coordinates,
    kind: RouteKind,
    point_count: usize,
) -> Result<Vec<Coordinates>, Error> {
    if point_count < 2 {
        return Err(degenerate_path_error(point_count));
    }

    let span = base.span_to(destination);
    let last = point_count - 1;

    let path = (0..point_count)
        .map(|i| {
            if i == 0 {
                return base;
            }
            if i == last {
                return destination;
            }

            let t = i as f64 / last as f64;
            let arc = (t * PI).sin();
            let point = base.lerp(destination, t);

            match kind {
                RouteKind::Safe => point.offset(arc * SAFE_BEND * span, 0.0),
                RouteKind::Regular => point.offset(
                    -arc * REGULAR_BEND * span,
                    (2.0 * t * PI).sin() * REGULAR_WIGGLE * span,
                ),
            }
        })
        .collect();

    Ok(path)
}
