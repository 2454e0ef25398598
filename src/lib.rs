#![allow(dead_code)]
//! wordgen - random word generator for imagined languages
//!
//! wordgen is a CLI tool that assembles synthetic words from a reference
//! file of named categories, each listing alternative text fragments. A word
//! is built by drawing one random fragment per requested category index and
//! concatenating the draws in caller order.
//!
//! # Architecture
//!
//! - **commands**: CLI command implementations (categories, generate)
//! - **core**: Core functionality (reference loader, sampler, generator, config)
//! - **models**: Data structures (category table, config)
//! - **error**: Error types

pub mod commands;
pub mod core;
pub mod error;
pub mod models;

pub use error::{Result, WordGenError};
