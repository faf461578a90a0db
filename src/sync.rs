//! Mutex shim: `std::sync::Mutex` with poisoning ignored, or `spin` on
//! `no_std`.

#[cfg(feature = "std")]
type Inner<T> = std::sync::Mutex<T>;
#[cfg(feature = "std")]
type Guard<'a, T> = std::sync::MutexGuard<'a, T>;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
type Inner<T> = spin::Mutex<T>;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
type Guard<'a, T> = spin::MutexGuard<'a, T>;

/// A mutex that never reports poisoning.
#[derive(Debug, Default)]
pub struct Mutex<T>(Inner<T>);

impl<T> Mutex<T> {
    /// Wraps a value.
    pub const fn new(value: T) -> Self {
        Self(Inner::new(value))
    }

    /// Locks the mutex.
    #[cfg(feature = "std")]
    pub fn lock(&self) -> Guard<'_, T> {
        self.0
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Locks the mutex.
    #[cfg(all(not(feature = "std"), feature = "alloc"))]
    pub fn lock(&self) -> Guard<'_, T> {
        self.0.lock()
    }
}
