#![allow(dead_code)] // each test binary uses its own subset of the fixtures

use std::cell::Cell;
use std::rc::Rc;

// ============================================================================
// Test Message Types
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct MessageA(pub u32);

#[derive(Clone, Debug, PartialEq)]
pub struct MessageB(pub &'static str);

// ============================================================================
// Shared counters
// ============================================================================

/// A cheap shared counter for asserting invocation counts.
#[derive(Clone, Default)]
pub struct Counter(Rc<Cell<usize>>);

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bump(&self) {
        self.0.set(self.0.get() + 1);
    }

    pub fn get(&self) -> usize {
        self.0.get()
    }
}
