//! Shared test infrastructure.
//!
//! - [`TestDatabase`]: disposable PostgreSQL container (feature `postgres`)
//! - [`TestDataBuilder`]: deterministic usernames/emails so concurrent tests
//!   on a shared schema never collide on the unique indexes

#[cfg(feature = "postgres")]
mod postgres;

#[cfg(feature = "postgres")]
pub use postgres::TestDatabase;

/// Deterministic test data, seeded per test.
///
/// Values from the same seed are reproducible across runs; values from
/// different tests are disjoint, which matters for tables with unique
/// indexes.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Derive the seed from the test's own name.
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_user");
    /// assert_eq!(builder.user_name("a"), TestDataBuilder::from_test_name("test_create_user").user_name("a"));
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// A username that passes the alphanumeric validation rules.
    pub fn user_name(&self, suffix: &str) -> String {
        format!("test{}{}", self.seed, suffix)
    }

    pub fn email(&self, suffix: &str) -> String {
        format!("test-{}-{}@example.com", self.seed, suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_data() {
        let a = TestDataBuilder::new(42);
        let b = TestDataBuilder::new(42);

        assert_eq!(a.user_name("x"), b.user_name("x"));
        assert_eq!(a.email("x"), b.email("x"));
    }

    #[test]
    fn test_different_tests_get_disjoint_data() {
        let mine = TestDataBuilder::from_test_name("some_test");
        let other = TestDataBuilder::from_test_name("other_test");

        assert_ne!(mine.user_name("x"), other.user_name("x"));
        assert_ne!(mine.email("x"), other.email("x"));
    }

    #[test]
    fn test_user_name_satisfies_validation_rules() {
        let name = TestDataBuilder::from_test_name("charset_test").user_name("a");
        assert!(name.chars().all(|c| c.is_ascii_alphanumeric()));
        assert!(name.len() >= 4);
    }
}
