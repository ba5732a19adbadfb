//! Named defaults for optional operator arguments.
//!
//! Operators without a callback argument (`count()`, `first()`, `distinct()`,
//! `take_while` in its no-argument form, ...) behave as if these were passed.

/// Predicate that accepts everything.
pub fn always_true<T: ?Sized>(_: &T) -> bool {
    true
}

/// Predicate that rejects everything.
pub fn always_false<T: ?Sized>(_: &T) -> bool {
    false
}

/// Selector that returns its argument.
pub fn identity<T>(item: T) -> T {
    item
}

/// Equality comparer backed by `PartialEq`.
pub fn structural_eq<A, B>(a: &A, b: &B) -> bool
where
    A: PartialEq<B> + ?Sized,
    B: ?Sized,
{
    a == b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert!(always_true(&0));
        assert!(!always_false("anything"));
        assert_eq!(identity(7), 7);
        assert!(structural_eq(&String::from("a"), &"a"));
        assert!(!structural_eq(&1, &2));
    }
}
