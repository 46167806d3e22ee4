//! SfxForge CLI library.
//!
//! This crate provides the core functionality for the `sfxforge` binary:
//! catalog loading, render options, logging setup, manifest generation and
//! the command implementations.

pub mod commands;
pub mod input;
pub mod logging;
pub mod manifest;
