//! Deterministic element identifiers
//!
//! Components need stable ids to wire labels, descriptions and live
//! regions together. Ids come from a monotonic counter owned by the
//! generator, or from a caller-supplied stable key, so the same sequence
//! of mounts always produces the same ids.

use std::sync::atomic::{AtomicU64, Ordering};

/// Generates `<prefix>-<n>` identifiers from a monotonic counter
#[derive(Debug, Default)]
pub struct IdGenerator {
    next: AtomicU64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next id for `prefix`, starting at 1
    pub fn next(&self, prefix: &str) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}-{}", prefix, n)
    }

    /// Builds an id from a stable key instead of the counter
    pub fn keyed(prefix: &str, key: &str) -> String {
        format!("{}-{}", prefix, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_sequential() {
        let ids = IdGenerator::new();
        assert_eq!(ids.next("secret"), "secret-1");
        assert_eq!(ids.next("secret-status"), "secret-status-2");
        assert_eq!(ids.next("secret"), "secret-3");
    }

    #[test]
    fn test_generators_are_independent() {
        let a = IdGenerator::new();
        let b = IdGenerator::new();
        a.next("qr-code");
        assert_eq!(b.next("qr-code"), "qr-code-1");
    }

    #[test]
    fn test_keyed_id() {
        assert_eq!(IdGenerator::keyed("qr-status", "receive"), "qr-status-receive");
    }
}
