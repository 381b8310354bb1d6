//! Free address pool with greedy split-and-reclaim allocation.

use crate::models::Ipv4;

/// The ranges of the parent network not yet assigned to any demand.
///
/// Invariants: ranges are pairwise disjoint, each lies inside the parent
/// network and each starts on a boundary matching its own size.
#[derive(Debug, Clone)]
pub struct FreePool {
    free: Vec<Ipv4>,
}

impl FreePool {
    /// A pool holding the whole parent network as one free range.
    pub fn new(parent: Ipv4) -> FreePool {
        FreePool { free: vec![parent] }
    }

    /// Carve one block of `prefix` length out of the pool.
    ///
    /// The pool is re-sorted before the scan, largest range first and equal
    /// sizes by ascending base address, so candidate selection is
    /// deterministic. The first range coarse enough to hold the block is
    /// removed and split into `2^(prefix - mask)` equal sub-ranges; the
    /// first sub-range becomes the allocation and the rest flow back into
    /// the pool. Returns `None`, leaving the pool contents untouched, when
    /// no free range is big enough.
    pub fn allocate(&mut self, prefix: u8) -> Option<Ipv4> {
        self.free.sort_by_key(|range| (range.mask, range.addr));
        let position = self.free.iter().position(|range| range.mask <= prefix)?;

        let selected = self.free.remove(position);
        // The scan guarantees selected.mask <= prefix, so the split holds.
        let mut sub_ranges = selected.split(prefix).unwrap();
        let allocated = sub_ranges.remove(0);
        self.free.append(&mut sub_ranges);

        log::debug!(
            "Allocated {allocated} out of {selected}, {} free ranges remain",
            self.free.len()
        );
        Some(allocated)
    }

    /// The currently free ranges, in no particular order.
    pub fn free_ranges(&self) -> &[Ipv4] {
        &self.free
    }
}
