//! Functional-zone ordering applied before placement when requested.
//!
//! Rooms are stably reordered living/dining → kitchen → bathroom → bedroom →
//! everything else, so related spaces end up near each other in the row packer.

use crate::layout::catalog::RoomCatalog;
use crate::layout::room::RoomSpec;

pub fn order_by_zone(rooms: &[RoomSpec], catalog: &RoomCatalog) -> Vec<RoomSpec> {
    let mut ordered = rooms.to_vec();
    ordered.sort_by_key(|room| catalog.zone_of(&room.name));
    ordered
}
