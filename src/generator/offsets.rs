use crate::entities::Coordinates;

/// Degree offsets in `[0, 0.1)` used to nudge a city center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Offsets {
    pub lat: f64,
    pub lng: f64,
}

pub fn derive_offsets(start_hash: u32, end_hash: u32) -> Offsets {
    Offsets {
        lat: f64::from(start_hash % 100) / 1000.0,
        lng: f64::from(end_hash % 100) / 1000.0,
    }
}

/// Origin and destination of a comparison around `center`.
///
/// The destination uses the offsets with the hashes swapped, so identical
/// start and end names collapse to a single point.
pub fn anchors(center: Coordinates, start_hash: u32, end_hash: u32) -> (Coordinates, Coordinates) {
    let to_origin = derive_offsets(start_hash, end_hash);
    let to_destination = derive_offsets(end_hash, start_hash);

    (
        center.offset(to_origin.lat, to_origin.lng),
        center.offset(to_destination.lat, to_destination.lng),
    )
}
