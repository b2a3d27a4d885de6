use alloc::boxed::Box;
use core::marker::PhantomData;
use core::ptr::NonNull;

/// The single storage location of an owning pointer.
///
/// A non-null slot always points to a live allocation obtained from [`Box`],
/// and no other slot points to it. Dropping the slot frees that allocation.
pub(crate) struct Slot<T: ?Sized> {
    ptr: Option<NonNull<T>>,
    _marker: PhantomData<T>,
}

// SAFETY: A slot owns its pointee exactly like `Box<T>` does.
unsafe impl<T: ?Sized + Send> Send for Slot<T> {}

// SAFETY: `&Slot<T>` only hands out `&T`.
unsafe impl<T: ?Sized + Sync> Sync for Slot<T> {}

impl<T: ?Sized> Drop for Slot<T> {
    fn drop(&mut self) {
        drop(self.take());
    }
}

impl<T: ?Sized> Slot<T> {
    #[inline(always)]
    pub const fn empty() -> Self {
        Self {
            ptr: None,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub fn from_box(value: Box<T>) -> Self {
        Self {
            ptr: Some(NonNull::from(Box::leak(value))),
            _marker: PhantomData,
        }
    }

    #[inline]
    pub fn from_option(value: Option<Box<T>>) -> Self {
        match value {
            Some(value) => Self::from_box(value),
            None => Self::empty(),
        }
    }

    /// # Safety
    /// - A non-null `ptr` must come from [`Box::into_raw`].
    /// - Nothing else may free or own `ptr` afterwards.
    #[inline]
    pub unsafe fn from_raw(ptr: *mut T) -> Self {
        Self {
            ptr: NonNull::new(ptr),
            _marker: PhantomData,
        }
    }

    #[inline(always)]
    pub const fn is_null(&self) -> bool {
        self.ptr.is_none()
    }

    #[inline(always)]
    pub const fn as_non_null(&self) -> Option<NonNull<T>> {
        self.ptr
    }

    #[inline]
    pub fn get(&self) -> Option<&T> {
        // SAFETY: a non-null slot points to a live, uniquely owned value,
        // and the returned borrow is tied to `&self`.
        self.ptr.map(|ptr| unsafe { ptr.as_ref() })
    }

    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        // SAFETY: as `get`, and `&mut self` guarantees exclusivity.
        self.ptr.map(|mut ptr| unsafe { ptr.as_mut() })
    }

    /// Empties the slot and returns its allocation without freeing it.
    #[inline]
    pub fn take(&mut self) -> Option<Box<T>> {
        // SAFETY: the pointer came from `Box` and the slot no longer refers to it.
        self.ptr
            .take()
            .map(|ptr| unsafe { Box::from_raw(ptr.as_ptr()) })
    }

    /// Moves the allocation of `other` into `self`, leaving `other` empty.
    ///
    /// The previous value of `self` is freed before the move.
    #[inline]
    pub fn move_from(&mut self, other: &mut Slot<T>) {
        drop(self.take());
        self.ptr = other.ptr.take();
    }
}

impl<T> Slot<T> {
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        match self.ptr {
            Some(ptr) => ptr.as_ptr().cast_const(),
            None => core::ptr::null(),
        }
    }

    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        match self.ptr {
            Some(ptr) => ptr.as_ptr(),
            None => core::ptr::null_mut(),
        }
    }
}

impl<T: ?Sized> Default for Slot<T> {
    #[inline(always)]
    fn default() -> Self {
        Self::empty()
    }
}

// -----------------------------------------------------------------------------
// Tests
