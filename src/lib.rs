// src/lib.rs
// #![allow(dead_code)]

#[macro_use]
pub mod macros;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod specs;

pub mod file;
pub mod gui;
pub mod log;
pub mod mood;
pub mod note;
pub mod progress;
pub mod prompt;
pub mod runner;

pub use error::{Error, Result};
