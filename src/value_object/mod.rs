//! Structural equality base for value objects
//!
//! Architecture: Value Object - Identity is the data, not a reference
//! - A value object declares which of its fields are its components
//! - Two instances are equal iff all declared components are pairwise equal
//! - Implementors route their `PartialEq` through [`components_equal`] so the
//!   declared components stay the single source of truth for equality

/// A small immutable data carrier whose identity is its component values.
///
/// ```
/// use domain_guard::value_object::{components_equal, ValueObject};
///
/// struct Money {
///     amount: i64,
///     currency: String,
/// }
///
/// impl ValueObject for Money {
///     type Components<'a>
///         = (&'a i64, &'a str)
///     where
///         Self: 'a;
///
///     fn components(&self) -> Self::Components<'_> {
///         (&self.amount, self.currency.as_str())
///     }
/// }
///
/// impl PartialEq for Money {
///     fn eq(&self, other: &Self) -> bool {
///         components_equal(self, other)
///     }
/// }
/// ```
pub trait ValueObject {
    /// The declared component values, typically a tuple of references.
    type Components<'a>: PartialEq
    where
        Self: 'a;

    /// The component values that define this object's identity.
    fn components(&self) -> Self::Components<'_>;
}

/// Whether two value objects have pairwise-equal components
pub fn components_equal<T: ValueObject>(left: &T, right: &T) -> bool {
    left.components() == right.components()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Address {
        street: String,
        city: String,
        postal_code: String,
    }

    impl Address {
        fn new(street: &str, city: &str, postal_code: &str) -> Self {
            Self {
                street: street.to_string(),
                city: city.to_string(),
                postal_code: postal_code.to_string(),
            }
        }
    }

    impl ValueObject for Address {
        type Components<'a>
            = (&'a str, &'a str, &'a str)
        where
            Self: 'a;

        fn components(&self) -> Self::Components<'_> {
            (
                self.street.as_str(),
                self.city.as_str(),
                self.postal_code.as_str(),
            )
        }
    }

    impl PartialEq for Address {
        fn eq(&self, other: &Self) -> bool {
            components_equal(self, other)
        }
    }

    impl Eq for Address {}

    #[test]
    fn test_equal_components_compare_equal() {
        let first = Address::new("1 High St", "Bristol", "BS1 4ST");
        let second = Address::new("1 High St", "Bristol", "BS1 4ST");

        assert_eq!(first, second);
    }

    #[test]
    fn test_any_differing_component_compares_unequal() {
        let base = Address::new("1 High St", "Bristol", "BS1 4ST");

        assert_ne!(base, Address::new("2 High St", "Bristol", "BS1 4ST"));
        assert_ne!(base, Address::new("1 High St", "Bath", "BS1 4ST"));
        assert_ne!(base, Address::new("1 High St", "Bristol", "BA1 1AA"));
    }
}
