//! autograde-core — grading engine, attempt model, and batch statistics.
//!
//! This crate defines the data model for multiple-choice test attempts and
//! the pure grading function that scores them, plus the attempt-set file
//! parser and report types the CLI builds on.

pub mod engine;
pub mod error;
pub mod model;
pub mod parser;
pub mod report;
pub mod statistics;
