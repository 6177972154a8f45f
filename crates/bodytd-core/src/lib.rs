//! Core types and definitions for the BODYTD simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! entity enums, stat tables, commands, state snapshots, events, and
//! constants. It has no dependency on any runtime framework.

pub mod commands;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
