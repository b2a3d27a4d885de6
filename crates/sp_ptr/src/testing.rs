//! Test payloads that count how many times they are freed.

use alloc::rc::Rc;
use core::cell::Cell;

pub(crate) type Counter = Rc<Cell<usize>>;

pub(crate) fn counter() -> Counter {
    Rc::new(Cell::new(0))
}

/// Increments its counter exactly once, when dropped.
#[derive(Debug)]
pub(crate) struct Tracked {
    pub id: u32,
    drops: Counter,
}

impl Tracked {
    pub fn new(id: u32, drops: &Counter) -> Self {
        Self {
            id,
            drops: Rc::clone(drops),
        }
    }

    pub fn bump(&mut self) {
        self.id += 1;
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}
