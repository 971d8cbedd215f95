//! Domain layer for Domain Guard
//!
//! CDD Principle: Domain Model - Pure contracts for expressing domain invariants
//! - Contains the failure contracts the guard dispatcher is generic over
//! - Independent of any infrastructure concern; no I/O, no shared state
//! - Expresses the ubiquitous language of precondition violations

pub mod errors;

// Re-export main domain types for convenience
pub use errors::*;
