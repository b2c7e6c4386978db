//! Defines the storage strategy variants
//!
//! Provides the [`Storage`] enum, which enumerates both backing stores.

/// Storage strategy variants.
/// - [`Storage::Array`]      contiguous buffer, binary-search lookup
/// - [`Storage::LinkedList`] circular doubly-linked nodes, linear scan
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Storage {
    Array,
    LinkedList,
}

impl Storage {
    pub const fn storage_name(self) -> &'static str {
        match self {
            Storage::Array      => "array",
            Storage::LinkedList => "linked list",
        }
    }
}

impl std::fmt::Display for Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.storage_name())
    }
}
