//! Domain Guard - Guard clauses and failure contracts for domain models
//!
//! Architecture: Clean Architecture - Library interface serves as the application layer
//! - Pure domain contracts separated from any infrastructure concern
//! - Guards are stateless; the failure type is selected per call site
//! - Value-object equality and aggregate factories round out the domain toolkit
//!
//! ```
//! use domain_guard::{domain_error, Guard};
//!
//! domain_error!(pub InvalidProduct, "The product is invalid.");
//!
//! fn check_product(title: &str, price: f64) -> Result<(), InvalidProduct> {
//!     Guard::on("Title").for_string_length(title, 3, 60)?;
//!     Guard::on("Price").against_negative_or_zero(price)?;
//!     Ok(())
//! }
//!
//! assert!(check_product("Espresso beans", 11.50).is_ok());
//! assert!(check_product("ab", 11.50).is_err());
//! ```

pub mod domain;
pub mod factory;
pub mod guard;
pub mod value_object;

// Re-export main types for convenient access
pub use domain::errors::{DomainError, DomainFailure, GuardResult};

pub use guard::{EnumMembership, Guard, DEFAULT_SUBJECT};

pub use factory::{AggregateRoot, Factory};

pub use value_object::{components_equal, ValueObject};

#[cfg(test)]
mod tests {
    use super::*;

    domain_error!(InvalidUser, "The user is invalid.");
    domain_error!(UserNotFound, "The requested user does not exist.");

    struct User {
        email: String,
        display_name: String,
    }

    impl AggregateRoot for User {}

    struct UserFactory {
        email: String,
        display_name: String,
    }

    impl UserFactory {
        fn validate(&self) -> GuardResult<InvalidUser> {
            Guard::on("Email").for_valid_email_address(&self.email)?;
            Guard::on("Display name").for_string_length(&self.display_name, 2, 40)?;
            Ok(())
        }
    }

    impl Factory for UserFactory {
        type Output = User;

        fn build(self) -> User {
            User {
                email: self.email,
                display_name: self.display_name,
            }
        }
    }

    #[test]
    fn test_guards_compose_across_a_factory() {
        let factory = UserFactory {
            email: "ada@example.com".to_string(),
            display_name: "Ada".to_string(),
        };

        assert!(factory.validate().is_ok());

        let user = factory.build();
        assert_eq!(user.email, "ada@example.com");
        assert_eq!(user.display_name, "Ada");
    }

    #[test]
    fn test_first_failing_guard_wins() {
        let factory = UserFactory {
            email: "not-an-address".to_string(),
            display_name: "x".to_string(),
        };

        let error = factory.validate().unwrap_err();
        assert_eq!(error.message(), "Email must be a valid email address.");
    }

    #[test]
    fn test_different_violations_map_to_different_failure_types() {
        let lookup: Option<&User> = None;

        let not_found = Guard::on("User")
            .against_null::<UserNotFound, User>(lookup)
            .unwrap_err();
        assert_eq!(not_found.message(), "User cannot be null.");

        let invalid = Guard::on("Email")
            .for_valid_email_address::<InvalidUser>("")
            .unwrap_err();
        assert_eq!(invalid.message(), "Email cannot be null or empty.");
    }

    #[test]
    fn test_default_guard_uses_placeholder_subject() {
        assert_eq!(Guard::default().subject(), DEFAULT_SUBJECT);

        let error = Guard::default()
            .against_negative_or_zero::<DomainError, _>(-3)
            .unwrap_err();
        assert_eq!(error.message(), "Value must be greater than zero.");
    }
}
