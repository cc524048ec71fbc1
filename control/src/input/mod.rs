//! Processing of raw hardware input.

pub mod button;
pub mod snapshot;
