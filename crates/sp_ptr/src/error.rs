use thiserror::Error;

// -----------------------------------------------------------------------------
// Error

/// Errors reported by the pointer accessors.
///
/// Duplicating ownership has no variant here: neither pointer implements
/// [`Clone`], so that mistake is rejected at compile time.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum PtrError {
    /// The pointer was null when its pointee was requested.
    #[error("invalid access: `{pointer}<{type_name}>` is null")]
    InvalidAccess {
        pointer: &'static str,
        type_name: &'static str,
    },
}

impl PtrError {
    #[inline]
    pub(crate) fn invalid_access<T: ?Sized>(pointer: &'static str) -> Self {
        PtrError::InvalidAccess {
            pointer,
            type_name: core::any::type_name::<T>(),
        }
    }

    #[cold]
    #[inline(never)]
    #[track_caller]
    pub fn handle_error(&self) -> ! {
        panic!("{self}");
    }
}

// -----------------------------------------------------------------------------
// Tests
