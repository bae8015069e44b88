use geo_types::Point;

use crate::entities::{Coordinates, RouteKind};

pub const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Estimate {
    pub distance_km: f64,
    pub eta_minutes: u32,
}

/// Great-circle distance between two points (x = longitude, y = latitude).
pub fn haversine_km(from: Point<f64>, to: Point<f64>) -> f64 {
    let d_lat = (to.y() - from.y()).to_radians();
    let d_lng = (to.x() - from.x()).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + from.y().to_radians().cos() * to.y().to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

pub fn path_length_km(path: &[Coordinates]) -> f64 {
    path.windows(2)
        .map(|pair| haversine_km(pair[0].into(), pair[1].into()))
        .sum()
}

pub fn eta_minutes(distance_km: f64, kind: RouteKind) -> u32 {
    (distance_km * kind.minutes_per_km()).round() as u32
}

pub fn estimate(path: &[Coordinates], kind: RouteKind) -> Estimate {
    let distance_km = path_length_km(path);

    Estimate {
        distance_km,
        eta_minutes: eta_minutes(distance_km, kind),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connaught_place() -> Coordinates {
        Coordinates::new(77.2167, 28.6315)
    }

    fn india_gate() -> Coordinates {
        Coordinates::new(77.2295, 28.6129)
    }

    #[test]
    fn same_point_is_zero() {
        let p = connaught_place();

        assert_eq!(haversine_km(p.into(), p.into()), 0.0);
        assert_eq!(path_length_km(&[p, p, p]), 0.0);
    }

    #[test]
    fn is_symmetric() {
        let forward = path_length_km(&[connaught_place(), india_gate()]);
        let backward = path_length_km(&[india_gate(), connaught_place()]);

        assert!((forward - backward).abs() < 1e-12);
    }

    #[test]
    fn known_distance() {
        // Connaught Place to India Gate is roughly 2.4 km as the crow flies.
        let km = path_length_km(&[connaught_place(), india_gate()]);

        assert!((2.2..2.6).contains(&km), "got {}", km);
    }

    #[test]
    fn one_degree_of_latitude() {
        let km = haversine_km(Point::new(0.0, 0.0), Point::new(0.0, 1.0));

        assert!((km - 111.195).abs() < 0.01);
    }

    #[test]
    fn short_paths_have_no_length() {
        assert_eq!(path_length_km(&[]), 0.0);
        assert_eq!(path_length_km(&[india_gate()]), 0.0);
    }

    #[test]
    fn safe_eta_never_below_regular() {
        for tenth in 0..500 {
            let km = f64::from(tenth) / 10.0;
            assert!(eta_minutes(km, RouteKind::Safe) >= eta_minutes(km, RouteKind::Regular));
        }
    }

    #[test]
    fn eta_uses_kind_pace() {
        let path = [connaught_place(), india_gate()];
        let safe = estimate(&path, RouteKind::Safe);
        let regular = estimate(&path, RouteKind::Regular);

        assert_eq!(safe.distance_km, regular.distance_km);
        assert_eq!(safe.eta_minutes, (safe.distance_km * 12.0).round() as u32);
        assert_eq!(regular.eta_minutes, (regular.distance_km * 10.0).round() as u32);
    }
}
