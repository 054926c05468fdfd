//! # p11-core — Foundational Types for the p11 Stack
//!
//! Leaf crate of the workspace: defines the error taxonomy for mechanism
//! parameter assembly and the hex rendering helpers used by parameter
//! diagnostics. Every other crate in the workspace depends on `p11-core`;
//! it depends on nothing internal.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `p11-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod hex;

pub use error::ParameterError;
