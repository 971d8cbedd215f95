//! Guard dispatcher for domain preconditions
//!
//! Architecture: Stateless Domain Service - Each guard is a pure predicate plus a message
//! - A guard either returns `Ok(())` or exactly one failure of the type the
//!   caller selected; it never raises a different type and never reports more
//!   than one violation per call
//! - Composite checks short-circuit: the first failing check wins and its
//!   message is propagated unchanged
//! - No shared mutable state; a `Guard` only carries the subject name used in
//!   messages and is safe to copy across threads

use crate::domain::errors::{DomainFailure, GuardResult};
use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt::Display;

/// Placeholder subject used when the caller does not name the checked value
pub const DEFAULT_SUBJECT: &str = "Value";

lazy_static! {
    // Absolute URL: a scheme followed by a hierarchical part, no whitespace.
    static ref ABSOLUTE_URL: Regex =
        Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://\S+$").expect("URL pattern compiles");

    // Bare mailbox: one '@' separating a non-empty local part and domain.
    static ref BARE_ADDRESS: Regex =
        Regex::new(r"^[^@\s]+@[^@\s]+$").expect("address pattern compiles");

    // Display-name form, e.g. `Support Team <help@example.com>`.
    static ref NAMED_ADDRESS: Regex =
        Regex::new(r"^[^<>]*<([^<>\s]+@[^<>\s]+)>$").expect("named address pattern compiles");
}

/// Membership contract for enumerations validated from raw discriminants.
///
/// Rust enums are closed types, so an out-of-set value can only arrive as a
/// raw discriminant from outside the type system (a wire value, a database
/// column). Implementors map those raw values back onto defined members.
pub trait EnumMembership: Sized {
    /// Name of the enumeration, used in violation messages.
    const TYPE_NAME: &'static str;

    /// Map a raw discriminant onto a defined member, if any.
    fn from_raw(raw: i64) -> Option<Self>;

    /// Whether the raw discriminant names a defined member.
    fn is_defined(raw: i64) -> bool {
        Self::from_raw(raw).is_some()
    }
}

/// Precondition dispatcher carrying the subject name for violation messages.
///
/// Every operation evaluates its predicate against its own arguments only and
/// reports a violation as an `Err` of the caller-selected failure type:
///
/// ```
/// use domain_guard::{DomainError, Guard};
///
/// let quantity = 12;
/// Guard::on("Quantity").against_out_of_range::<DomainError, _>(quantity, 1, 100)?;
/// # Ok::<(), DomainError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Guard<'a> {
    subject: &'a str,
}

impl Default for Guard<'_> {
    fn default() -> Self {
        Self {
            subject: DEFAULT_SUBJECT,
        }
    }
}

impl<'a> Guard<'a> {
    /// Create a guard naming the value under check
    pub fn on(subject: &'a str) -> Self {
        Self { subject }
    }

    /// The subject name interpolated into violation messages
    pub fn subject(&self) -> &str {
        self.subject
    }

    /// Check that a string value is present and non-empty
    pub fn against_empty_string<E>(&self, value: Option<&str>) -> GuardResult<E>
    where
        E: DomainFailure,
    {
        match value {
            Some(value) if !value.is_empty() => Ok(()),
            _ => self.violation(format!("{} cannot be null or empty.", self.subject)),
        }
    }

    /// Check that a string is non-empty and its length falls within `[min_length, max_length]`
    pub fn for_string_length<E>(
        &self,
        value: &str,
        min_length: usize,
        max_length: usize,
    ) -> GuardResult<E>
    where
        E: DomainFailure,
    {
        self.against_empty_string(Some(value))?;

        let length = value.chars().count();
        if min_length <= length && length <= max_length {
            return Ok(());
        }

        self.violation(format!(
            "{} must have between {} and {} symbols.",
            self.subject, min_length, max_length
        ))
    }

    /// Check that a number falls within `[min, max]`
    pub fn against_out_of_range<E, T>(&self, number: T, min: T, max: T) -> GuardResult<E>
    where
        E: DomainFailure,
        T: PartialOrd + Display,
    {
        if min <= number && number <= max {
            return Ok(());
        }

        self.violation(format!(
            "{} must be between {} and {}.",
            self.subject, min, max
        ))
    }

    /// Check that a string is an absolute, well-formed URL of at most 2048 characters
    pub fn for_valid_url<E>(&self, url: &str) -> GuardResult<E>
    where
        E: DomainFailure,
    {
        if url.len() <= 2048 && ABSOLUTE_URL.is_match(url) {
            return Ok(());
        }

        self.violation(format!("{} must be a valid URL.", self.subject))
    }

    /// Check that a value does not equal a forbidden one
    pub fn against<E, T>(&self, actual: &T, unexpected: &T) -> GuardResult<E>
    where
        E: DomainFailure,
        T: PartialEq + Display,
    {
        if actual != unexpected {
            return Ok(());
        }

        self.violation(format!("{} must not be {}.", self.subject, unexpected))
    }

    /// Check that a date falls strictly between two bounds.
    ///
    /// Both bounds are exclusive, unlike the inclusive numeric and length
    /// ranges: a date equal to either bound is a violation.
    pub fn against_date_range<E>(
        &self,
        date: DateTime<Utc>,
        min_date: DateTime<Utc>,
        max_date: DateTime<Utc>,
    ) -> GuardResult<E>
    where
        E: DomainFailure,
    {
        if date > min_date && date < max_date {
            return Ok(());
        }

        self.violation(format!(
            "{} must be between {} and {}.",
            self.subject, min_date, max_date
        ))
    }

    /// Check that a string matches a compiled pattern
    pub fn against_regex<E>(&self, value: &str, pattern: &Regex) -> GuardResult<E>
    where
        E: DomainFailure,
    {
        if pattern.is_match(value) {
            return Ok(());
        }

        self.violation(format!(
            "{} must match pattern {}.",
            self.subject, pattern
        ))
    }

    /// Check that an optional value is present
    pub fn against_null<E, T>(&self, value: Option<&T>) -> GuardResult<E>
    where
        E: DomainFailure,
        T: ?Sized,
    {
        if value.is_some() {
            return Ok(());
        }

        self.violation(format!("{} cannot be null.", self.subject))
    }

    /// Check that a value differs from its type's default, by value equality
    pub fn against_default<E, T>(&self, value: &T) -> GuardResult<E>
    where
        E: DomainFailure,
        T: Default + PartialEq,
    {
        if *value != T::default() {
            return Ok(());
        }

        self.violation(format!("{} cannot have a default value.", self.subject))
    }

    /// Check that a string is a single valid e-mail address.
    ///
    /// The address must normalize back to the input verbatim, so forms that
    /// parse but carry extra structure (a display name around the mailbox)
    /// are rejected. Whatever shape the parse failure takes, the reported
    /// message is uniformly "must be a valid email address".
    pub fn for_valid_email_address<E>(&self, email: &str) -> GuardResult<E>
    where
        E: DomainFailure,
    {
        self.against_empty_string(Some(email))?;

        if normalized_address(email).as_deref() == Some(email) {
            return Ok(());
        }

        self.violation(format!("{} must be a valid email address.", self.subject))
    }

    /// Check that a value is strictly greater than zero
    pub fn against_negative_or_zero<E, T>(&self, value: T) -> GuardResult<E>
    where
        E: DomainFailure,
        T: Default + PartialOrd,
    {
        if value > T::default() {
            return Ok(());
        }

        self.violation(format!("{} must be greater than zero.", self.subject))
    }

    /// Check that a raw discriminant names a defined member of an enumeration
    pub fn against_invalid_enum_value<E, M>(&self, raw: i64) -> GuardResult<E>
    where
        E: DomainFailure,
        M: EnumMembership,
    {
        if M::is_defined(raw) {
            return Ok(());
        }

        self.violation(format!(
            "{} is not a valid value for {}.",
            self.subject,
            M::TYPE_NAME
        ))
    }

    /// Build the failure value for a violation and surface it to the caller
    fn violation<E>(&self, message: String) -> GuardResult<E>
    where
        E: DomainFailure,
    {
        tracing::debug!(subject = self.subject, message = %message, "guard violation");
        Err(E::from_message(message))
    }
}

/// Extract the bare mailbox from an address, stripping a display name if one
/// is present. Returns `None` when the input has neither shape.
fn normalized_address(input: &str) -> Option<String> {
    if let Some(captures) = NAMED_ADDRESS.captures(input) {
        return Some(captures[1].to_string());
    }

    if BARE_ADDRESS.is_match(input) {
        return Some(input.to_string());
    }

    None
}
