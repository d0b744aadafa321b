//! Path edit moves.
//!
//! Positions index the full node list of a demand's path, endpoints
//! included. For a path `[s, a, b, t]`:
//!
//! - `Insert { position: 1, node: x }` yields `[s, x, a, b, t]`
//! - `Remove { position: 2 }` yields `[s, a, t]`
//! - `Swap { position: 1, node: x }` yields `[s, x, b, t]`
//! - `Clear` yields `[s, t]`

use serde::{Deserialize, Serialize};

use crate::error::SrteError;
use crate::topology::{DemandId, NodeId};

/// Discriminant of a [`Move`], also used as the wire kind code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MoveKind {
    Unknown = 0,
    Clear = 1,
    Remove = 2,
    Swap = 3,
    Insert = 4,
}

impl TryFrom<u8> for MoveKind {
    type Error = SrteError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(MoveKind::Unknown),
            1 => Ok(MoveKind::Clear),
            2 => Ok(MoveKind::Remove),
            3 => Ok(MoveKind::Swap),
            4 => Ok(MoveKind::Insert),
            other => Err(SrteError::InvalidMoveRecord(format!("unknown move kind {}", other))),
        }
    }
}

/// A single edit to one demand's waypoint list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Insert { demand: DemandId, position: usize, node: NodeId },
    Remove { demand: DemandId, position: usize },
    Swap { demand: DemandId, position: usize, node: NodeId },
    Clear { demand: DemandId },
    /// "No move found"; never applied
    Unknown,
}

impl Move {
    pub fn kind(&self) -> MoveKind {
        match self {
            Move::Insert { .. } => MoveKind::Insert,
            Move::Remove { .. } => MoveKind::Remove,
            Move::Swap { .. } => MoveKind::Swap,
            Move::Clear { .. } => MoveKind::Clear,
            Move::Unknown => MoveKind::Unknown,
        }
    }

    pub fn demand(&self) -> Option<DemandId> {
        match *self {
            Move::Insert { demand, .. }
            | Move::Remove { demand, .. }
            | Move::Swap { demand, .. }
            | Move::Clear { demand } => Some(demand),
            Move::Unknown => None,
        }
    }
}

/// Flat move encoding for callers on the other side of a binding layer.
///
/// Kind codes: Unknown = 0, Clear = 1, Remove = 2, Swap = 3, Insert = 4.
/// Fields a kind does not use are zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub kind: u8,
    pub demand: i32,
    pub position: i32,
    pub node: i32,
}

impl From<Move> for MoveRecord {
    fn from(mv: Move) -> Self {
        let (demand, position, node) = match mv {
            Move::Insert { demand, position, node } | Move::Swap { demand, position, node } => {
                (demand, position, node)
            }
            Move::Remove { demand, position } => (demand, position, 0),
            Move::Clear { demand } => (demand, 0, 0),
            Move::Unknown => (0, 0, 0),
        };
        MoveRecord {
            kind: mv.kind() as u8,
            demand: saturate(demand),
            position: saturate(position),
            node: saturate(node),
        }
    }
}

impl TryFrom<MoveRecord> for Move {
    type Error = SrteError;

    fn try_from(record: MoveRecord) -> Result<Self, Self::Error> {
        let kind = MoveKind::try_from(record.kind)?;
        if kind == MoveKind::Unknown {
            return Ok(Move::Unknown);
        }

        let demand = non_negative("demand", record.demand)?;
        Ok(match kind {
            MoveKind::Insert => Move::Insert {
                demand,
                position: non_negative("position", record.position)?,
                node: non_negative("node", record.node)?,
            },
            MoveKind::Swap => Move::Swap {
                demand,
                position: non_negative("position", record.position)?,
                node: non_negative("node", record.node)?,
            },
            MoveKind::Remove => Move::Remove {
                demand,
                position: non_negative("position", record.position)?,
            },
            MoveKind::Clear => Move::Clear { demand },
            MoveKind::Unknown => Move::Unknown,
        })
    }
}

fn non_negative(field: &str, value: i32) -> Result<usize, SrteError> {
    usize::try_from(value).map_err(|_| {
        SrteError::InvalidMoveRecord(format!("{} must be non-negative, got {}", field, value))
    })
}

fn saturate(value: usize) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
