//! Field-level validation rule for numeric enum membership.

use strum::IntoEnumIterator;

/// Checks whether an integer field value names a variant of `E` by its
/// 1-based ordinal position.
///
/// The variant list is captured once at construction, binding the rule
/// to its enumeration the way a declarative field annotation would.
/// Absent values are treated as valid so the rule composes with
/// optional fields; presence checks are a separate concern.
///
/// # Example
///
/// ```
/// use date_kit::EnumMembership;
/// use strum::EnumIter;
///
/// #[derive(EnumIter)]
/// enum OrderStatus {
///     Created,
///     Paid,
///     Delivered,
/// }
///
/// let rule = EnumMembership::<OrderStatus>::new();
/// assert!(rule.validate(Some(2)));
/// assert!(!rule.validate(Some(4)));
/// assert!(rule.validate(None));
/// ```
#[derive(Debug, Clone)]
pub struct EnumMembership<E> {
    variants: Vec<E>,
}

impl<E: IntoEnumIterator> EnumMembership<E> {
    /// Captures the enumeration's variant list.
    pub fn new() -> Self {
        Self {
            variants: E::iter().collect(),
        }
    }

    /// Whether `value` is absent or matches some variant's 1-based
    /// ordinal. Never fails.
    pub fn validate(&self, value: Option<i64>) -> bool {
        match value {
            None => true,
            Some(v) => self
                .variants
                .iter()
                .enumerate()
                .any(|(position, _)| position as i64 + 1 == v),
        }
    }
}

impl<E: IntoEnumIterator> Default for EnumMembership<E> {
    fn default() -> Self {
        Self::new()
    }
}
