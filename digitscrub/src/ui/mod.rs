// digitscrub/src/ui/mod.rs
//! Console output helpers for the digitscrub CLI.

pub mod summary;
