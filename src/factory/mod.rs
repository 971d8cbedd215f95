//! Construction contract for aggregate roots
//!
//! Architecture: Factory - One method, one fully-formed aggregate
//! - A factory accumulates whatever inputs it needs, then builds exactly one
//!   instance of its aggregate root
//! - No dependency on the guard dispatcher; factories that validate do so
//!   through their own fields before building

/// Marker for domain entities that form a consistency boundary
pub trait AggregateRoot {}

/// One-method construction contract for an aggregate root.
///
/// Building consumes the factory, so a factory produces exactly one
/// aggregate per configured set of inputs.
pub trait Factory {
    /// The aggregate this factory builds.
    type Output: AggregateRoot;

    /// Build one fully-formed instance of the aggregate.
    fn build(self) -> Self::Output;
}
