use alloc::boxed::Box;
use core::mem;

use crate::SmartPtr;
use crate::common::impl_owning_ptr;
use crate::slot::Slot;
use crate::trace::{TraceEvent, emit};

/// A move-only owning pointer to a single heap value.
///
/// Like [`SmartPtr`], a `UniquePtr` is either null or the only owner of its
/// pointee, and frees it when dropped. On top of that it can hand its pointee
/// to another `UniquePtr`, give it back to the caller, or replace it.
///
/// # Ownership
///
/// - Moving the pointer (`let b = a;`) transfers ownership and makes `a`
///   unusable. [`take`](Self::take) and [`assign`](Self::assign) transfer
///   ownership while keeping the source usable, emptied.
/// - [`release`](Self::release) hands the pointee back as a `Box` without
///   freeing it.
/// - [`reset`](Self::reset) frees the current pointee, then owns the new one.
///
/// # Duplication
///
/// `UniquePtr` cannot be cloned:
///
/// ```compile_fail
/// # use sp_ptr::UniquePtr;
/// struct Widget;
///
/// let a = UniquePtr::new(Widget);
/// let b: UniquePtr<Widget> = Clone::clone(&a);
/// ```
///
/// nor used after being moved:
///
/// ```compile_fail
/// # use sp_ptr::UniquePtr;
/// let a = UniquePtr::new(5);
/// let b = a;
/// assert_eq!(*a, 5);
/// ```
///
/// and a transfer from a pointer into itself cannot be expressed:
///
/// ```compile_fail
/// # use sp_ptr::UniquePtr;
/// let mut a = UniquePtr::new(5);
/// a.assign_from(&mut a);
/// ```
///
/// # Examples
///
/// ```
/// use sp_ptr::UniquePtr;
///
/// let mut a = UniquePtr::new(String::from("x"));
/// let b = a.take();
///
/// assert!(a.is_null());
/// assert_eq!(*b, "x");
///
/// let mut b = b;
/// let value = b.release();
/// assert!(b.is_null());
/// assert_eq!(value.as_deref().map(String::as_str), Some("x"));
/// ```
pub struct UniquePtr<T: ?Sized> {
    slot: Slot<T>,
}

impl_owning_ptr!(UniquePtr);

impl<T: ?Sized> UniquePtr<T> {
    /// Moves the pointee into a new `UniquePtr`, leaving `self` null.
    ///
    /// # Examples
    ///
    /// ```
    /// use sp_ptr::UniquePtr;
    ///
    /// let mut a = UniquePtr::new(1);
    /// let b = a.take();
    /// assert!(a.is_null());
    /// assert_eq!(*b, 1);
    /// ```
    #[inline]
    pub fn take(&mut self) -> UniquePtr<T> {
        emit::<T>("UniquePtr", TraceEvent::Transfer);
        let mut target = UniquePtr::null();
        target.slot.move_from(&mut self.slot);
        target
    }

    /// Frees the current pointee, then takes over the pointee of `source`.
    ///
    /// This is the method form of `*self = source`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sp_ptr::UniquePtr;
    ///
    /// let mut a = UniquePtr::new(1);
    /// a.assign(UniquePtr::new(2));
    /// assert_eq!(*a, 2);
    /// ```
    #[inline]
    pub fn assign(&mut self, mut source: UniquePtr<T>) {
        self.assign_from(&mut source);
    }

    /// Frees the current pointee, then takes over the pointee of `source`,
    /// leaving `source` null.
    ///
    /// `source` and `self` are always distinct pointers, so the transfer can
    /// neither free nor duplicate the value being moved.
    ///
    /// # Examples
    ///
    /// ```
    /// use sp_ptr::UniquePtr;
    ///
    /// let mut a = UniquePtr::new(1);
    /// let mut b = UniquePtr::new(2);
    /// b.assign_from(&mut a);
    ///
    /// assert!(a.is_null());
    /// assert_eq!(*b, 1);
    /// ```
    #[inline]
    pub fn assign_from(&mut self, source: &mut UniquePtr<T>) {
        emit::<T>("UniquePtr", TraceEvent::Transfer);
        self.slot.move_from(&mut source.slot);
    }

    /// Gives up ownership of the pointee and returns it without freeing it.
    ///
    /// Returns `None` if the pointer was already null. Either way `self` is
    /// null afterwards.
    ///
    /// # Examples
    ///
    /// ```
    /// use sp_ptr::UniquePtr;
    ///
    /// let mut ptr = UniquePtr::new(3);
    /// assert_eq!(ptr.release(), Some(Box::new(3)));
    /// assert_eq!(ptr.release(), None);
    /// ```
    #[inline]
    #[must_use = "the released value is dropped if unused, use `reset(None)` to free it"]
    pub fn release(&mut self) -> Option<Box<T>> {
        emit::<T>("UniquePtr", TraceEvent::Release);
        self.slot.take()
    }

    /// Frees the current pointee (if any), then takes ownership of `value`.
    ///
    /// Passing `None` leaves the pointer null.
    ///
    /// # Examples
    ///
    /// ```
    /// use sp_ptr::UniquePtr;
    ///
    /// let mut ptr = UniquePtr::new(3);
    /// ptr.reset(Box::new(4));
    /// assert_eq!(*ptr, 4);
    ///
    /// ptr.reset(None);
    /// assert!(ptr.is_null());
    /// ```
    #[inline]
    pub fn reset(&mut self, value: impl Into<Option<Box<T>>>) {
        emit::<T>("UniquePtr", TraceEvent::Reset);
        drop(self.slot.take());
        self.slot = Slot::from_option(value.into());
    }

    /// Takes ownership of `value` and returns the previous pointee
    /// without freeing it.
    #[inline]
    #[must_use = "the previous value is dropped if unused, use `reset` instead"]
    pub fn replace(&mut self, value: impl Into<Option<Box<T>>>) -> Option<Box<T>> {
        emit::<T>("UniquePtr", TraceEvent::Reset);
        mem::replace(&mut self.slot, Slot::from_option(value.into())).take()
    }

    /// Exchanges the pointees of two pointers without freeing either.
    #[inline]
    pub fn swap(&mut self, other: &mut UniquePtr<T>) {
        emit::<T>("UniquePtr", TraceEvent::Transfer);
        mem::swap(&mut self.slot, &mut other.slot);
    }

    /// Consumes the pointer and returns its pointee without freeing it.
    #[inline]
    pub fn into_box(mut self) -> Option<Box<T>> {
        self.release()
    }
}

impl<T: ?Sized> From<SmartPtr<T>> for UniquePtr<T> {
    #[inline]
    fn from(value: SmartPtr<T>) -> Self {
        emit::<T>("UniquePtr", TraceEvent::Transfer);
        UniquePtr::with_slot(value.into_slot())
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::UniquePtr;
    use crate::testing::{Tracked, counter};
    use crate::{PtrError, SmartPtr};
    use alloc::boxed::Box;
    use core::ptr;

    #[test]
    fn dereference_yields_same_value() {
        let value = Box::new(7i32);
        let addr: *const i32 = &*value;

        let p = UniquePtr::from_box(value);
        assert!(ptr::eq(p.get(), addr));
        assert!(ptr::eq(&*p, addr));
    }

    #[test]
    fn take_empties_source() {
        let drops = counter();
        let mut a = UniquePtr::new(Tracked::new(1, &drops));
        let addr = a.as_ptr();

        let b = a.take();
        assert!(a.is_null());
        assert_eq!(b.as_ptr(), addr);
        assert_eq!(drops.get(), 0);

        drop(a);
        assert_eq!(drops.get(), 0);
        drop(b);
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn assign_releases_previous_value() {
        let (x, y) = (counter(), counter());
        let mut a = UniquePtr::new(Tracked::new(1, &x));
        let mut b = UniquePtr::new(Tracked::new(2, &y));

        b.assign_from(&mut a);
        assert!(a.is_null());
        assert_eq!(b.id, 1);
        assert_eq!((x.get(), y.get()), (0, 1));

        b.assign(UniquePtr::null());
        assert!(b.is_null());
        assert_eq!((x.get(), y.get()), (1, 1));
    }

    #[test]
    fn native_move_assignment() {
        let (x, y) = (counter(), counter());
        let a = UniquePtr::new(Tracked::new(1, &x));
        let mut b = UniquePtr::new(Tracked::new(2, &y));
        assert_eq!(b.id, 2);

        b = a;
        assert_eq!(b.id, 1);
        assert_eq!((x.get(), y.get()), (0, 1));
    }

    #[test]
    fn release_is_idempotent() {
        let drops = counter();
        let mut p = UniquePtr::new(Tracked::new(5, &drops));

        let value = p.release();
        assert!(p.is_null());
        assert_eq!(value.as_ref().map(|t| t.id), Some(5));
        assert_eq!(drops.get(), 0);

        assert!(p.release().is_none());
        assert!(p.is_null());

        drop(p);
        assert_eq!(drops.get(), 0);
        drop(value);
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn reset_releases_exactly_once() {
        let (x, y) = (counter(), counter());
        let mut p = UniquePtr::new(Tracked::new(1, &x));

        p.reset(Box::new(Tracked::new(2, &y)));
        assert_eq!(x.get(), 1);
        assert_eq!(p.get().id, 2);

        drop(p);
        assert_eq!((x.get(), y.get()), (1, 1));
    }

    #[test]
    fn reset_null() {
        let drops = counter();
        let mut p = UniquePtr::<Tracked>::null();
        p.reset(None);
        assert!(p.is_null());

        p.reset(Box::new(Tracked::new(1, &drops)));
        p.reset(None);
        assert!(p.is_null());
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn replace_returns_previous() {
        let (x, y) = (counter(), counter());
        let mut p = UniquePtr::new(Tracked::new(1, &x));

        let old = p.replace(Box::new(Tracked::new(2, &y)));
        assert_eq!(x.get(), 0);
        assert_eq!(old.map(|t| t.id), Some(1));
        assert_eq!(x.get(), 1);
        assert_eq!(p.id, 2);
    }

    #[test]
    fn swap_frees_nothing() {
        let (x, y) = (counter(), counter());
        let mut a = UniquePtr::new(Tracked::new(1, &x));
        let mut b = UniquePtr::new(Tracked::new(2, &y));

        a.swap(&mut b);
        assert_eq!((a.id, b.id), (2, 1));
        assert_eq!((x.get(), y.get()), (0, 0));
    }

    #[test]
    fn into_box_keeps_value() {
        let drops = counter();
        let p = UniquePtr::new(Tracked::new(4, &drops));
        let value = p.into_box();
        assert_eq!(drops.get(), 0);
        assert_eq!(value.map(|t| t.id), Some(4));
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn from_smart_ptr() {
        let drops = counter();
        let p = UniquePtr::from(SmartPtr::new(Tracked::new(8, &drops)));
        assert_eq!(drops.get(), 0);
        assert_eq!(p.id, 8);
        drop(p);
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn access_after_transfer() {
        let mut a = UniquePtr::new(1u8);
        let _b = a.take();
        assert_eq!(
            a.try_get(),
            Err(PtrError::InvalidAccess {
                pointer: "UniquePtr",
                type_name: "u8",
            })
        );
    }

    #[test]
    #[should_panic(expected = "`UniquePtr<u8>` is null")]
    fn deref_after_release_panics() {
        let mut p = UniquePtr::new(1u8);
        drop(p.release());
        let _value: u8 = *p;
    }

    /// Move into a second pointer, release, free by hand: one release total.
    #[test]
    fn move_release_scenario() {
        let drops = counter();
        let a = UniquePtr::new(Tracked::new(10, &drops));
        let addr = a.as_ptr();
        assert_eq!(a.get().id, 10);

        let mut a = a;
        let mut b = a.take();
        assert!(a.is_null());
        assert!(ptr::eq(b.get(), addr));

        let x = b.release();
        assert!(b.is_null());
        assert_eq!(drops.get(), 0);
        assert!(x.as_deref().is_some_and(|x| ptr::eq(x, addr)));

        drop(x);
        drop(a);
        drop(b);
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn trait_object() {
        let double: Box<dyn Fn(u32) -> u32> = Box::new(|x| x * 2);
        let mut p = UniquePtr::from_box(double);
        assert_eq!(p(21), 42);
        p.reset(None);
        assert!(p.is_null());
    }
}
