// src/crawl/frontier.rs
// =============================================================================
// The link set: every path discovered since the crawl began.
//
// It only ever grows, never holds the same path twice, and remembers the
// order paths were first seen so output is deterministic. IndexSet gives us
// both O(1) membership checks and insertion order in one structure.
// =============================================================================

use indexmap::IndexSet;

/// Path every crawl starts from
pub const ROOT_PATH: &str = "/";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkSet {
    links: IndexSet<String>,
}

impl LinkSet {
    /// A link set holding only the root path
    pub fn seeded() -> Self {
        let mut links = IndexSet::new();
        links.insert(ROOT_PATH.to_string());
        Self { links }
    }

    pub fn contains(&self, link: &str) -> bool {
        self.links.contains(link)
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Paths in the order they were first discovered
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.links.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.iter().map(str::to_string).collect()
    }

    /// Adds every candidate not already known and returns those new paths,
    /// in candidate order, as the next frontier.
    ///
    /// A candidate repeated within `candidates` is only added (and returned)
    /// the first time.
    pub fn merge_and_advance<I>(&mut self, candidates: I) -> Vec<String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut next = Vec::new();
        for candidate in candidates {
            if self.contains(&candidate) {
                continue;
            }
            self.links.insert(candidate.clone());
            next.push(candidate);
        }
        next
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why IndexSet instead of HashSet?
//    - HashSet iterates in an arbitrary order
//    - IndexSet keeps insertion order and still has O(1) contains()
//
// 2. Why does merge_and_advance take IntoIterator?
//    - The driver passes a lazy iterator straight from the extractor
//    - Tests can pass a plain Vec<String>
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_seeded_with_root() {
        let links = LinkSet::seeded();
        assert_eq!(links.to_vec(), vec!["/"]);
        assert!(links.contains("/"));
        assert_eq!(links.len(), 1);
    }

    #[test]
    fn test_iter_in_discovery_order() {
        let mut links = LinkSet::seeded();
        links.merge_and_advance(strings(&["/z", "/a", "/m"]));
        let seen: Vec<&str> = links.iter().collect();
        assert_eq!(seen, vec!["/", "/z", "/a", "/m"]);
    }

    #[test]
    fn test_merge_skips_known_and_repeated() {
        let mut links = LinkSet::seeded();
        let next = links.merge_and_advance(strings(&["/a", "/", "/a", "/b"]));

        assert_eq!(next, vec!["/a", "/b"]);
        assert_eq!(links.to_vec(), vec!["/", "/a", "/b"]);
    }

    #[test]
    fn test_merge_is_union_preserving_order() {
        let mut links = LinkSet::seeded();
        links.merge_and_advance(strings(&["/x", "/y"]));

        let next = links.merge_and_advance(strings(&["/z", "/y", "/w", "/x"]));

        assert_eq!(next, vec!["/z", "/w"]);
        assert_eq!(links.to_vec(), vec!["/", "/x", "/y", "/z", "/w"]);
    }

    #[test]
    fn test_merge_twice_is_idempotent() {
        let mut links = LinkSet::seeded();
        let candidates = strings(&["/a", "/b", "/a"]);

        let first = links.merge_and_advance(candidates.clone());
        let after_first = links.clone();
        let second = links.merge_and_advance(candidates);

        assert_eq!(first, vec!["/a", "/b"]);
        assert!(second.is_empty());
        assert_eq!(links, after_first);
    }

    #[test]
    fn test_merge_nothing() {
        let mut links = LinkSet::seeded();
        assert!(links.merge_and_advance(Vec::new()).is_empty());
        assert_eq!(links.len(), 1);
    }

    #[test]
    fn test_paths_compared_as_plain_strings() {
        let mut links = LinkSet::seeded();
        let next = links.merge_and_advance(strings(&["/a", "/a/", "/A"]));
        assert_eq!(next, vec!["/a", "/a/", "/A"]);
    }
}
