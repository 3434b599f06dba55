//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `notation.rs` - Setup notation parsing and serialization
//! - `movegen.rs` - Pseudo-legal destinations per piece kind
//! - `legality.rs` - Check, move safety, checkmate and stalemate
//! - `shift.rs` - Committing moves, clocks and history
//! - `proptest.rs` - Property-based tests over random playouts

mod legality;
mod shift;

use crate::board::{Square, SquareSet};

pub(super) fn sq(label: &str) -> Square {
    label.parse().expect("test square label")
}

pub(super) fn squares(labels: &[&str]) -> SquareSet {
    labels.iter().map(|label| sq(label)).collect()
}
