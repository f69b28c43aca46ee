// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Operation counters for one coloring pass, stored in a fixed array sized
//! by the counter enum. Useful for tests and for the binary's log output;
//! the algorithm itself never reads them.

use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(Debug, EnumCountMacro, Copy, Clone)]
#[repr(u8)]
pub enum Counters {
    /// Maximal fans constructed.
    FansBuilt,
    /// cd-path inversions performed.
    PathsInverted,
    /// Fan rotations performed.
    FansRotated,
    /// Edges given their final color.
    EdgesColored,
}

/// Counters accumulated across one [`color_graph`](crate::coloring::color_graph) pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}
