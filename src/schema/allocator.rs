//! Class key allocation

use std::collections::HashSet;

/// Deduplicates class keys within one inference run
///
/// The first request for a name gets it unchanged; later requests get the
/// first free `name_1`, `name_2`, ...
#[derive(Debug, Default)]
pub struct NameAllocator {
    taken: HashSet<String>,
}

impl NameAllocator {
    /// Create an allocator with no taken names
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve and return a unique key for the desired name
    pub fn allocate(&mut self, desired: &str) -> String {
        let mut next = desired.to_string();
        let mut i = 0;

        while self.taken.contains(&next) {
            i += 1;
            next = format!("{desired}_{i}");
        }

        self.taken.insert(next.clone());
        next
    }
}
