// digitscrub/src/lib.rs
//! # Digitscrub CLI Application
//!
//! This crate provides the command-line surface for the digitscrub engine:
//! argument parsing, logging setup, sequential batch file processing, and
//! console summary rendering.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
