//! BODYTD application shell.
//!
//! Hosts the simulation loop thread and the shared state a frontend talks
//! to: a command channel in, a snapshot mutex out.

pub mod game_loop;
pub mod state;

pub use bodytd_core as core;
