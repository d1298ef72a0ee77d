//! Filtering traits.

/// immutable, pure filter (2 successive equal inputs -> 2 equal outputs)
pub trait Filter<T>: Default {
    /// returns `true` if `item` passes the filter.
    fn detect(&self, item: T) -> bool;
}
