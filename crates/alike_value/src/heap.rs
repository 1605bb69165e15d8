//! Shared allocation handle with observable identity.
//!
//! `Heap<T>` wraps `Arc<T>` and is the only way heap payloads enter a
//! [`Value`](crate::Value). The constructor is crate-private, so callers go
//! through the `Value` factory methods. Unlike a plain `Arc`, the wrapper
//! exposes [`Heap::addr`], the identity key used for cycle detection.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// A shared, immutable-by-default heap allocation.
///
/// Cloning is an atomic increment; clones share one allocation and therefore
/// one identity.
#[repr(transparent)]
pub struct Heap<T: ?Sized>(Arc<T>);

impl<T> Heap<T> {
    #[inline]
    pub(crate) fn new(value: T) -> Self {
        Heap(Arc::new(value))
    }
}

impl<T: ?Sized> Heap<T> {
    /// Address of the shared allocation.
    ///
    /// Stable for as long as any clone is alive. Two handles have the same
    /// address exactly when they are clones of each other.
    #[inline]
    pub fn addr(&self) -> usize {
        Arc::as_ptr(&self.0).cast::<()>() as usize
    }

    /// Reference identity, never structural equality.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Number of live handles to this allocation.
    #[inline]
    pub fn handle_count(&self) -> usize {
        Arc::strong_count(&self.0)
    }
}

impl<T: ?Sized> Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized> Clone for Heap<T> {
    #[inline]
    fn clone(&self) -> Self {
        Heap(Arc::clone(&self.0))
    }
}

impl<T: ?Sized> AsRef<T> for Heap<T> {
    #[inline]
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests;
