//! Unique test data so tests never collide on unique columns.

use ulid::Ulid;

/// `{prefix}-{ulid}`, lower-cased so it is also a valid user name.
pub fn unique_name(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new()).to_lowercase()
}

/// `{prefix}-{ulid}@example.test`
pub fn unique_email(prefix: &str) -> String {
    format!("{}@example.test", unique_name(prefix))
}
