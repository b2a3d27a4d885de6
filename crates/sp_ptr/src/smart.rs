use crate::common::impl_owning_ptr;
use crate::slot::Slot;

/// An owning pointer to a single heap value.
///
/// `SmartPtr` frees its pointee exactly once, when the pointer itself is
/// dropped. It is either null or points to a value it owns alone.
///
/// # No copies
///
/// Copying the handle would produce two owners that both free the same
/// allocation, so `SmartPtr` implements neither [`Clone`] nor [`Copy`]:
///
/// ```compile_fail
/// # use sp_ptr::SmartPtr;
/// struct Widget;
///
/// let a = SmartPtr::new(Widget);
/// let b: SmartPtr<Widget> = Clone::clone(&a);
/// ```
///
/// The pointer may still be moved by value, which never duplicates ownership.
/// For transfer between live pointers, [`release`](crate::UniquePtr::release)
/// and [`reset`](crate::UniquePtr::reset), use [`UniquePtr`](crate::UniquePtr).
///
/// # Examples
///
/// ```
/// use sp_ptr::SmartPtr;
///
/// let ptr = SmartPtr::new(String::from("hello"));
///
/// assert_eq!(ptr.len(), 5); // member access
/// assert_eq!(ptr.get(), "hello"); // dereference
/// ```
///
/// A null pointer reports [`PtrError::InvalidAccess`](crate::PtrError::InvalidAccess):
///
/// ```
/// use sp_ptr::{PtrError, SmartPtr};
///
/// let ptr = SmartPtr::<u32>::null();
/// assert!(matches!(ptr.try_get(), Err(PtrError::InvalidAccess { .. })));
/// ```
pub struct SmartPtr<T: ?Sized> {
    slot: Slot<T>,
}

impl_owning_ptr!(SmartPtr);

impl<T: ?Sized> SmartPtr<T> {
    /// Moves the slot out, skipping the destruct event of `self`.
    #[inline]
    pub(crate) fn into_slot(mut self) -> Slot<T> {
        let slot = core::mem::take(&mut self.slot);
        core::mem::forget(self);
        slot
    }
}

// -----------------------------------------------------------------------------
// Tests
