use crc32fast::Hasher;
use serde::{Deserialize, Serialize};

/// Derive a stable document seed from the template name using CRC32.
pub fn document_seed(name: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(name.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Sequential id generator for nodes within a document.
///
/// Ids have the shape `{seed}-{n}`. The generator is serialized alongside the
/// document so a hydrated template keeps counting where it left off instead
/// of re-issuing ids that are (or were) live in the tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdGenerator {
    seed: String,
    count: u32,
}

impl IdGenerator {
    pub fn new(name: &str) -> Self {
        Self {
            seed: document_seed(name),
            count: 0,
        }
    }

    pub fn from_seed(seed: String) -> Self {
        Self { seed, count: 0 }
    }

    /// Generate the next sequential id.
    pub fn new_id(&mut self) -> String {
        self.count += 1;
        format!("{}-{}", self.seed, self.count)
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// Bump the counter past every sequence number present in `ids`.
    ///
    /// Called on hydration: a hand-edited or merged template may carry ids
    /// the serialized counter never saw, and minting a colliding id would
    /// break selection and future edits on the duplicate.
    pub fn ensure_past<'a>(&mut self, ids: impl Iterator<Item = &'a str>) {
        for id in ids {
            if let Some(n) = id.rsplit('-').next().and_then(|s| s.parse::<u32>().ok()) {
                self.count = self.count.max(n);
            }
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::from_seed("doc".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_seed_is_stable() {
        let a = document_seed("Spring Sale");
        let b = document_seed("Spring Sale");
        assert_eq!(a, b);

        let c = document_seed("Autumn Sale");
        assert_ne!(a, c);
    }

    #[test]
    fn test_sequential_ids() {
        let mut gen = IdGenerator::new("Newsletter");

        let id1 = gen.new_id();
        let id2 = gen.new_id();
        let id3 = gen.new_id();

        assert!(id1.ends_with("-1"));
        assert!(id2.ends_with("-2"));
        assert!(id3.ends_with("-3"));

        let seed = gen.seed();
        assert!(id1.starts_with(seed));
        assert!(id2.starts_with(seed));
        assert!(id3.starts_with(seed));
    }

    #[test]
    fn test_ensure_past_skips_colliding_ids() {
        let mut gen = IdGenerator::from_seed("abc".to_string());
        gen.ensure_past(["abc-7", "abc-3", "not-a-number"].into_iter());

        assert_eq!(gen.new_id(), "abc-8");
    }
}
