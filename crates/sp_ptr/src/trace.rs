use core::fmt;

// -----------------------------------------------------------------------------
// TraceEvent

/// An operation performed on a [`SmartPtr`](crate::SmartPtr) or
/// [`UniquePtr`](crate::UniquePtr).
///
/// With the `trace` feature enabled, each event is logged at `trace` level
/// under the `sp_ptr` target, e.g.
/// `UniquePtr<alloc::string::String>: ownership transferred`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraceEvent {
    Construct,
    Destruct,
    Dereference,
    MemberAccess,
    Transfer,
    Release,
    Reset,
}

impl TraceEvent {
    /// Short human-readable description of the event.
    pub const fn as_str(self) -> &'static str {
        match self {
            TraceEvent::Construct => "constructed",
            TraceEvent::Destruct => "destroyed",
            TraceEvent::Dereference => "dereferenced",
            TraceEvent::MemberAccess => "member access",
            TraceEvent::Transfer => "ownership transferred",
            TraceEvent::Release => "ownership released",
            TraceEvent::Reset => "reset with a new value",
        }
    }
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// -----------------------------------------------------------------------------
// Emit

#[cfg(feature = "trace")]
#[inline]
pub(crate) fn emit<T: ?Sized>(pointer: &'static str, event: TraceEvent) {
    log::trace!(
        target: "sp_ptr",
        "{pointer}<{}>: {event}",
        core::any::type_name::<T>(),
    );
}

#[cfg(not(feature = "trace"))]
#[inline(always)]
pub(crate) fn emit<T: ?Sized>(_pointer: &'static str, _event: TraceEvent) {}

// -----------------------------------------------------------------------------
// Tests
