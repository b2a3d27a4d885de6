//! This crate provides two owning pointer wrappers around a single heap value.
//!
//! **SmartPtr**
//!
//! [`SmartPtr<T>`] owns at most one `T` and frees it when dropped. It cannot be
//! cloned: copying the handle would leave two owners of one allocation, so the
//! type simply does not implement [`Clone`].
//!
//! **UniquePtr**
//!
//! [`UniquePtr<T>`] is the move-only variant with the full ownership API:
//! transfer between wrappers ([`take`](UniquePtr::take), [`assign`](UniquePtr::assign)),
//! handing the value back to the caller ([`release`](UniquePtr::release)) and
//! replacing it ([`reset`](UniquePtr::reset)).
//!
//! Both pointers may be null. Accessing a null pointer through
//! [`get`](UniquePtr::get) or `*` panics with [`PtrError::InvalidAccess`];
//! the `try_` accessors return the error instead.
//!
//! With the `trace` feature, every operation emits a [`TraceEvent`] through
//! the [`log`](https://docs.rs/log) facade at `trace` level.
#![expect(unsafe_code, reason = "Raw pointers are inherently unsafe.")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// no_std support

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod common;
mod error;
mod slot;
mod smart;
mod trace;
mod unique;

#[cfg(test)]
mod testing;

// -----------------------------------------------------------------------------
// Top-level exports

pub use error::PtrError;
pub use smart::SmartPtr;
pub use trace::TraceEvent;
pub use unique::UniquePtr;
