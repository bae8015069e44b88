//! Synthetic route generation.
//!
//! Location names are hashed into anchor points around a city center, two
//! bowed paths are drawn between them and each is measured with the Haversine
//! formula. Everything is seeded from the name hashes, so a pair of names always
//! yields the same two routes.

mod directions;
mod estimate;
mod hash;
mod offsets;
mod path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

pub use directions::turn_by_turn;
pub use estimate::{estimate, eta_minutes, haversine_km, path_length_km, Estimate, EARTH_RADIUS_KM};
pub use hash::seed_hash;
pub use offsets::{anchors, derive_offsets, Offsets};
pub use path::build_path;

use crate::entities::{Coordinates, RouteEstimate, RouteKind};
use crate::error::{invalid_input_error, unexpected_error, Error};

pub const MIN_POINTS: usize = 5;
pub const MAX_POINTS: usize = 7;

// Standard deviation of waypoint jitter, as a fraction of the span.
const JITTER: f64 = 0.02;

/// Trims a location name, rejecting blank ones.
pub fn location_name<'a>(field: &str, name: &'a str) -> Result<&'a str, Error> {
    let name = name.trim();

    if name.is_empty() {
        return Err(invalid_input_error(format!("{} location is required", field)));
    }

    Ok(name)
}

/// PRNG for everything derived from a pair of location names.
pub fn route_rng(start: &str, end: &str) -> StdRng {
    let seed = u64::from(seed_hash(start)) << 32 | u64::from(seed_hash(end));

    StdRng::seed_from_u64(seed)
}

/// Builds the safe and regular routes between two named locations, in that order.
pub fn compare_routes(
    start: &str,
    end: &str,
    center: Coordinates,
) -> Result<[RouteEstimate; 2], Error> {
    let start = location_name("start", start)?;
    let end = location_name("end", end)?;

    let (origin, destination) = anchors(center, seed_hash(start), seed_hash(end));
    let mut rng = route_rng(start, end);

    let safe = generate(origin, destination, RouteKind::Safe, &mut rng)?;
    let regular = generate(origin, destination, RouteKind::Regular, &mut rng)?;

    Ok([safe, regular])
}

/// The route of one kind from a comparison.
pub fn generate_route(
    start: &str,
    end: &str,
    center: Coordinates,
    kind: RouteKind,
) -> Result<RouteEstimate, Error> {
    let [safe, regular] = compare_routes(start, end, center)?;

    Ok(match kind {
        RouteKind::Safe => safe,
        RouteKind::Regular => regular,
    })
}

fn generate(
    origin: Coordinates,
    destination: Coordinates,
    kind: RouteKind,
    rng: &mut StdRng,
) -> Result<RouteEstimate, Error> {
    let point_count = rng.gen_range(MIN_POINTS..=MAX_POINTS);
    let mut coordinates = build_path(origin, destination, kind, point_count)?;

    jitter(&mut coordinates, origin.span_to(destination), rng)?;

    let Estimate {
        distance_km,
        eta_minutes,
    } = estimate(&coordinates, kind);

    Ok(RouteEstimate {
        coordinates,
        distance_km,
        eta_minutes,
        kind,
    })
}

/// Shakes intermediate waypoints; the endpoints stay put.
fn jitter(path: &mut [Coordinates], span: f64, rng: &mut StdRng) -> Result<(), Error> {
    let noise = Normal::new(0.0, span * JITTER).map_err(unexpected_error)?;

    if let [_, middle @ .., _] = path {
        for point in middle {
            *point = point.offset(noise.sample(rng), noise.sample(rng));
        }
    }

    Ok(())
}
