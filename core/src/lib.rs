//! Estimation pipeline: calculator, tip selection, and report assembly.
//! Pure computation over [`footprintr_common`] types; rendering lives in
//! the CLI.

pub mod calculator;
pub mod report;
pub mod tips;
