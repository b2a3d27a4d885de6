// -----------------------------------------------------------------------------
// Common methods

/// Implements the API shared by every owning pointer.
///
/// The target must be a struct with a single `slot: Slot<T>` field.
macro_rules! impl_owning_ptr {
    ($ptr:ident) => {
        impl<T: ?Sized> Drop for $ptr<T> {
            fn drop(&mut self) {
                $crate::trace::emit::<T>(stringify!($ptr), $crate::TraceEvent::Destruct);
                // `slot` frees the pointee after this.
            }
        }

        impl<T> $ptr<T> {
            /// Allocates `value` on the heap and takes ownership of it.
            #[inline]
            pub fn new(value: T) -> Self {
                Self::from_box(::alloc::boxed::Box::new(value))
            }

            /// Returns the raw pointer to the pointee, or null.
            ///
            /// The pointee stays owned by `self`.
            #[inline]
            pub fn as_ptr(&self) -> *const T {
                $crate::trace::emit::<T>(stringify!($ptr), $crate::TraceEvent::MemberAccess);
                self.slot.as_ptr()
            }

            /// Returns the raw mutable pointer to the pointee, or null.
            ///
            /// The pointee stays owned by `self`.
            #[inline]
            pub fn as_mut_ptr(&mut self) -> *mut T {
                $crate::trace::emit::<T>(stringify!($ptr), $crate::TraceEvent::MemberAccess);
                self.slot.as_mut_ptr()
            }
        }

        impl<T: ?Sized> $ptr<T> {
            /// Takes ownership of an existing allocation.
            #[inline]
            pub fn from_box(value: ::alloc::boxed::Box<T>) -> Self {
                Self::with_slot($crate::slot::Slot::from_box(value))
            }

            /// Creates a null pointer.
            #[inline]
            pub fn null() -> Self {
                Self::with_slot($crate::slot::Slot::empty())
            }

            /// Takes ownership of `value`, or creates a null pointer for `None`.
            #[inline]
            pub fn from_option(value: Option<::alloc::boxed::Box<T>>) -> Self {
                Self::with_slot($crate::slot::Slot::from_option(value))
            }

            /// Takes ownership of a raw pointer. A null `ptr` yields a null pointer.
            ///
            /// # Safety
            /// - A non-null `ptr` must come from [`Box::into_raw`](alloc::boxed::Box::into_raw).
            /// - The caller must not use or free `ptr` afterwards.
            #[inline]
            pub unsafe fn from_raw(ptr: *mut T) -> Self {
                // SAFETY: guaranteed by the caller.
                Self::with_slot(unsafe { $crate::slot::Slot::from_raw(ptr) })
            }

            #[inline]
            fn with_slot(slot: $crate::slot::Slot<T>) -> Self {
                $crate::trace::emit::<T>(stringify!($ptr), $crate::TraceEvent::Construct);
                Self { slot }
            }

            /// Returns `true` if the pointer owns nothing.
            #[inline]
            pub fn is_null(&self) -> bool {
                self.slot.is_null()
            }

            /// Returns the pointee.
            ///
            /// # Panics
            /// Panics with [`PtrError::InvalidAccess`](crate::PtrError::InvalidAccess)
            /// if the pointer is null.
            #[inline]
            #[track_caller]
            pub fn get(&self) -> &T {
                match self.try_get() {
                    Ok(value) => value,
                    Err(e) => e.handle_error(),
                }
            }

            /// Returns the pointee mutably.
            ///
            /// # Panics
            /// Panics with [`PtrError::InvalidAccess`](crate::PtrError::InvalidAccess)
            /// if the pointer is null.
            #[inline]
            #[track_caller]
            pub fn get_mut(&mut self) -> &mut T {
                match self.try_get_mut() {
                    Ok(value) => value,
                    Err(e) => e.handle_error(),
                }
            }

            /// Returns the pointee, or [`PtrError::InvalidAccess`](crate::PtrError::InvalidAccess)
            /// if the pointer is null.
            #[inline]
            pub fn try_get(&self) -> Result<&T, $crate::PtrError> {
                $crate::trace::emit::<T>(stringify!($ptr), $crate::TraceEvent::Dereference);
                self.slot
                    .get()
                    .ok_or_else(|| $crate::PtrError::invalid_access::<T>(stringify!($ptr)))
            }

            /// Returns the pointee mutably, or
            /// [`PtrError::InvalidAccess`](crate::PtrError::InvalidAccess) if the pointer is null.
            #[inline]
            pub fn try_get_mut(&mut self) -> Result<&mut T, $crate::PtrError> {
                $crate::trace::emit::<T>(stringify!($ptr), $crate::TraceEvent::Dereference);
                self.slot
                    .get_mut()
                    .ok_or_else(|| $crate::PtrError::invalid_access::<T>(stringify!($ptr)))
            }

            /// Returns the address of the pointee, or `None` if null.
            #[inline]
            pub fn as_non_null(&self) -> Option<::core::ptr::NonNull<T>> {
                $crate::trace::emit::<T>(stringify!($ptr), $crate::TraceEvent::MemberAccess);
                self.slot.as_non_null()
            }
        }

        impl<T: ?Sized> ::core::ops::Deref for $ptr<T> {
            type Target = T;

            #[inline]
            #[track_caller]
            fn deref(&self) -> &T {
                $crate::trace::emit::<T>(stringify!($ptr), $crate::TraceEvent::MemberAccess);
                match self.slot.get() {
                    Some(value) => value,
                    None => $crate::PtrError::invalid_access::<T>(stringify!($ptr)).handle_error(),
                }
            }
        }

        impl<T: ?Sized> ::core::ops::DerefMut for $ptr<T> {
            #[inline]
            #[track_caller]
            fn deref_mut(&mut self) -> &mut T {
                $crate::trace::emit::<T>(stringify!($ptr), $crate::TraceEvent::MemberAccess);
                match self.slot.get_mut() {
                    Some(value) => value,
                    None => $crate::PtrError::invalid_access::<T>(stringify!($ptr)).handle_error(),
                }
            }
        }

        impl<T: ?Sized> Default for $ptr<T> {
            #[inline]
            fn default() -> Self {
                Self::null()
            }
        }

        impl<T: ?Sized> From<::alloc::boxed::Box<T>> for $ptr<T> {
            #[inline]
            fn from(value: ::alloc::boxed::Box<T>) -> Self {
                Self::from_box(value)
            }
        }

        impl<T: ?Sized> From<Option<::alloc::boxed::Box<T>>> for $ptr<T> {
            #[inline]
            fn from(value: Option<::alloc::boxed::Box<T>>) -> Self {
                Self::from_option(value)
            }
        }

        impl<T: ?Sized> ::core::fmt::Pointer for $ptr<T> {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                match self.slot.as_non_null() {
                    Some(ptr) => ::core::fmt::Pointer::fmt(&ptr, f),
                    None => f.write_str("null"),
                }
            }
        }

        impl<T: ?Sized + ::core::fmt::Debug> ::core::fmt::Debug for $ptr<T> {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                match self.slot.get() {
                    Some(value) => f.debug_tuple(stringify!($ptr)).field(&value).finish(),
                    None => write!(f, "{}(null)", stringify!($ptr)),
                }
            }
        }
    };
}

pub(crate) use impl_owning_ptr;
