use rand::Rng;

use crate::entities::{format_distance, format_minutes, RouteKind, RouteOption, TurnDirection};

const STREETS: [&str; 8] = [
    "Main Road",
    "MG Road",
    "Station Road",
    "Ring Road",
    "Market Street",
    "College Road",
    "Temple Street",
    "Gandhi Marg",
];

// A turn is announced at every third intermediate waypoint.
const TURN_EVERY: usize = 3;

/// Turn-by-turn steps for a generated route: a start step, a turn at every
/// third intermediate waypoint, and an arrival step carrying the route totals.
pub fn turn_by_turn<R: Rng>(route: &RouteOption, rng: &mut R) -> Vec<TurnDirection> {
    if route.coordinates.len() < 2 {
        return vec![];
    }

    let mut steps = vec![TurnDirection {
        instruction: "Start your journey".into(),
        distance: format_distance(0.0),
        time: format_minutes(0),
        street_name: route.start_location.clone(),
        safety_note: Some(
            match route.route_type {
                RouteKind::Safe => "You're on the safest route with good visibility and security",
                RouteKind::Regular => "Take caution, this route includes some less secure areas",
            }
            .into(),
        ),
    }];

    for i in (1..route.coordinates.len() - 1).filter(|i| i % TURN_EVERY == 0) {
        let turn = if i % 2 == 0 { "Turn right" } else { "Turn left" };
        let street = STREETS[i % STREETS.len()];

        steps.push(TurnDirection {
            instruction: format!("{} onto {}", turn, street),
            distance: format_distance(rng.gen_range(0.3..1.0)),
            time: format_minutes(rng.gen_range(3..8)),
            street_name: street.into(),
            safety_note: Some(
                match route.route_type {
                    RouteKind::Safe => "This area has good street lighting and security presence",
                    RouteKind::Regular => "Stay alert, this area has limited visibility at night",
                }
                .into(),
            ),
        });
    }

    steps.push(TurnDirection {
        instruction: "Arrive at destination".into(),
        distance: route.distance.clone(),
        time: route.time.clone(),
        street_name: route.end_location.clone(),
        safety_note: Some("You have arrived safely at your destination!".into()),
    });

    steps
}
