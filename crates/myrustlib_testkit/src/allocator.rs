//! Allocation tracking.
//!
//! [`CountingAllocator`] forwards to the system allocator and keeps
//! per-thread counters, so a test can measure what it allocated without
//! interference from tests running on other threads. Install it in a test
//! binary with `#[global_allocator]`.
//!
//! Counters are per thread: memory allocated on one thread and freed on
//! another shows up as a leak on the first and a surplus on the second.

#![allow(unsafe_code)]

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

thread_local! {
    static ALLOCATED: Cell<u64> = const { Cell::new(0) };
    static FREED: Cell<u64> = const { Cell::new(0) };
    static ALLOCATIONS: Cell<u64> = const { Cell::new(0) };
    static DEALLOCATIONS: Cell<u64> = const { Cell::new(0) };
}

fn bump(counter: &'static std::thread::LocalKey<Cell<u64>>, by: u64) {
    // try_with: the allocator can run during thread teardown.
    let _ = counter.try_with(|c| c.set(c.get().wrapping_add(by)));
}

fn read(counter: &'static std::thread::LocalKey<Cell<u64>>) -> u64 {
    counter.try_with(Cell::get).unwrap_or(0)
}

/// Global allocator wrapper that counts bytes and calls per thread.
#[derive(Debug, Default)]
pub struct CountingAllocator;

impl CountingAllocator {
    /// Creates the allocator.
    pub const fn new() -> Self {
        Self
    }
}

unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc(layout);
        if !ptr.is_null() {
            bump(&ALLOCATED, layout.size() as u64);
            bump(&ALLOCATIONS, 1);
        }
        ptr
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc_zeroed(layout);
        if !ptr.is_null() {
            bump(&ALLOCATED, layout.size() as u64);
            bump(&ALLOCATIONS, 1);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout);
        bump(&FREED, layout.size() as u64);
        bump(&DEALLOCATIONS, 1);
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = System.realloc(ptr, layout, new_size);
        if !new_ptr.is_null() {
            // Counted as a free of the old block and an allocation of the new one.
            bump(&FREED, layout.size() as u64);
            bump(&DEALLOCATIONS, 1);
            bump(&ALLOCATED, new_size as u64);
            bump(&ALLOCATIONS, 1);
        }
        new_ptr
    }
}

/// Counter values for the current thread at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AllocationSnapshot {
    /// Bytes allocated so far.
    pub allocated: u64,
    /// Bytes freed so far.
    pub freed: u64,
    /// Number of allocations.
    pub allocations: u64,
    /// Number of deallocations.
    pub deallocations: u64,
}

impl AllocationSnapshot {
    /// Reads the current thread's counters.
    pub fn now() -> Self {
        Self {
            allocated: read(&ALLOCATED),
            freed: read(&FREED),
            allocations: read(&ALLOCATIONS),
            deallocations: read(&DEALLOCATIONS),
        }
    }

    /// Difference between `self` and an earlier snapshot.
    pub fn since(&self, earlier: &AllocationSnapshot) -> AllocationDelta {
        AllocationDelta {
            allocated: self.allocated.wrapping_sub(earlier.allocated),
            freed: self.freed.wrapping_sub(earlier.freed),
            allocations: self.allocations.wrapping_sub(earlier.allocations),
            deallocations: self.deallocations.wrapping_sub(earlier.deallocations),
        }
    }
}

/// Allocation activity between two snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AllocationDelta {
    /// Bytes allocated.
    pub allocated: u64,
    /// Bytes freed.
    pub freed: u64,
    /// Number of allocations.
    pub allocations: u64,
    /// Number of deallocations.
    pub deallocations: u64,
}

impl AllocationDelta {
    /// Bytes still held (negative if more was freed than allocated).
    pub fn net_bytes(&self) -> i128 {
        i128::from(self.allocated) - i128::from(self.freed)
    }

    /// Allocations not yet freed.
    pub fn net_allocations(&self) -> i128 {
        i128::from(self.allocations) - i128::from(self.deallocations)
    }

    /// True when every allocation was matched by a free.
    pub fn is_balanced(&self) -> bool {
        self.net_bytes() == 0 && self.net_allocations() == 0
    }
}

/// Runs `f` and returns the allocation activity it caused on this thread.
///
/// Only meaningful when [`CountingAllocator`] is the global allocator;
/// otherwise the delta is always zero.
pub fn measure<F: FnOnce()>(f: F) -> AllocationDelta {
    let before = AllocationSnapshot::now();
    f();
    AllocationSnapshot::now().since(&before)
}
