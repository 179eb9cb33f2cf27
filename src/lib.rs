//! Implementation of the Glicko-1 rating system as specified in
//! <http://www.glicko.net/glicko/glicko.pdf>.
//!
//! This crate is a pure computation library: callers own persistence of
//! player ratings, assembly of the per-period game batch, and the choice
//! of the uncertainty growth constant `c`.

pub mod model;
pub mod utils;
