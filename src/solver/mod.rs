//! Link-guided local search over an [`SrteState`](crate::srte::SrteState).

pub mod link_guided;
mod selection;

pub use link_guided::LinkGuidedSolver;
