//! List Configuration
//!
//! Defines construction limits for tag lists.
//! Configuration specifies constraints only; enforcement is handled by the list.

/// Tag list configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListConfig {
    /// Number of elements reserved up front
    pub initial_capacity: usize,

    /// Maximum number of elements a list will accept (`None` is unlimited)
    pub max_len: Option<usize>,
}

impl Default for ListConfig {
    fn default() -> Self {
        ListConfig {
            initial_capacity: 0,
            max_len: None,
        }
    }
}

impl ListConfig {
    /// Create a new configuration with default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration for a decoder that already knows the element count
    pub fn with_capacity(initial_capacity: usize) -> Self {
        ListConfig {
            initial_capacity,
            ..Self::default()
        }
    }
}
