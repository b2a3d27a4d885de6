//! Walks through the lifecycle of [`SmartPtr`] and [`UniquePtr`].
//!
//! Run with `RUST_LOG=sp_ptr=trace,sp_demo=info` to pick which part of the
//! trace to see; everything is shown by default.

use std::process::ExitCode;

use sp_ptr::{PtrError, SmartPtr, UniquePtr};

mod widget;

use widget::Widget;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("trace")).init();

    if let Err(e) = run() {
        log::error!("{e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run() -> Result<(), PtrError> {
    smart_ptr()?;
    unique_ptr()?;
    release_and_reset()?;
    Ok(())
}

/// The widget lives exactly as long as `ptr`.
fn smart_ptr() -> Result<(), PtrError> {
    log::info!("-- SmartPtr --");
    let ptr = SmartPtr::new(Widget::new("a"));

    ptr.show();
    ptr.try_get()?.show();
    Ok(())
}

/// Ownership moves from `first` to `second`; only `second` frees the widget.
fn unique_ptr() -> Result<(), PtrError> {
    log::info!("-- UniquePtr --");
    let mut first = UniquePtr::new(Widget::new("b"));
    first.display();

    let second = first.take();
    if first.release().is_none() {
        log::info!("ownership transferred");
    }

    second.try_get()?.display();
    Ok(())
}

/// A released widget is freed by the caller, a reset one by the pointer.
fn release_and_reset() -> Result<(), PtrError> {
    log::info!("-- release / reset --");
    let mut ptr = UniquePtr::new(Widget::new("c"));

    if let Some(widget) = ptr.release() {
        log::info!("released Widget({}), freeing it by hand", widget.name());
        drop(widget);
    }

    ptr.reset(Box::new(Widget::new("d")));
    ptr.reset(Box::new(Widget::new("e")));
    log::info!("now holding Widget({})", ptr.try_get()?.name());
    Ok(())
}

// -----------------------------------------------------------------------------
// Tests
