//! Cell occupancy across all three factions

use crate::core::types::Position;
use crate::entity::{Hunter, Located, Police, Prey};

/// True if any entity sits on `pos`.
///
/// Scans prey, then hunters, then police, stopping at the first hit. No
/// entity is excluded, so a mover's own cell reports as occupied.
pub fn is_occupied(pos: Position, prey: &[Prey], hunters: &[Hunter], police: &[Police]) -> bool {
    occupied_by(pos, prey) || occupied_by(pos, hunters) || occupied_by(pos, police)
}

#[inline]
fn occupied_by<T: Located>(pos: Position, entities: &[T]) -> bool {
    entities.iter().any(|e| e.position() == pos)
}
