//! Segment-routing state and path edits.

pub mod moves;
pub mod state;

pub use moves::{Move, MoveKind, MoveRecord};
pub use state::SrteState;
