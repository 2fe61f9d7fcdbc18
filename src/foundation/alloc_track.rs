//! Optional allocation accounting for a session run.
//!
//! With the `alloc-track` feature the process allocator is wrapped by `stats_alloc` and
//! [`AllocMeter`] reports what happened between its creation and [`AllocMeter::finish`].
//! Without the feature every report is zeroed and `tracked` is `false`.

/// Allocation counters observed over a measured region.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct AllocStats {
    /// Whether the counters come from an instrumented allocator.
    pub tracked: bool,
    /// Number of allocations.
    pub allocations: usize,
    /// Number of deallocations.
    pub deallocations: usize,
    /// Number of reallocations (amortized growth shows up here).
    pub reallocations: usize,
    /// Bytes handed out.
    pub bytes_allocated: usize,
    /// Bytes returned.
    pub bytes_deallocated: usize,
}

impl AllocStats {
    /// Bytes still held at the end of the region (negative when more was freed than allocated).
    pub fn net_bytes(&self) -> i128 {
        self.bytes_allocated as i128 - self.bytes_deallocated as i128
    }

    /// Allocations without a matching deallocation.
    pub fn outstanding_blocks(&self) -> isize {
        self.allocations as isize - self.deallocations as isize
    }
}

#[cfg(feature = "alloc-track")]
mod imp {
    use super::AllocStats;
    use stats_alloc::{INSTRUMENTED_SYSTEM, Region, StatsAlloc};
    use std::alloc::System;

    #[global_allocator]
    static GLOBAL: &StatsAlloc<System> = &INSTRUMENTED_SYSTEM;

    pub(crate) struct AllocMeter {
        region: Region<'static, System>,
    }

    impl AllocMeter {
        pub(crate) fn start() -> Self {
            Self {
                region: Region::new(GLOBAL),
            }
        }

        pub(crate) fn finish(self) -> AllocStats {
            let s = self.region.change();
            AllocStats {
                tracked: true,
                allocations: s.allocations,
                deallocations: s.deallocations,
                reallocations: s.reallocations,
                bytes_allocated: s.bytes_allocated,
                bytes_deallocated: s.bytes_deallocated,
            }
        }
    }
}

#[cfg(not(feature = "alloc-track"))]
mod imp {
    use super::AllocStats;

    pub(crate) struct AllocMeter;

    impl AllocMeter {
        pub(crate) fn start() -> Self {
            Self
        }

        pub(crate) fn finish(self) -> AllocStats {
            AllocStats::default()
        }
    }
}

pub(crate) use imp::AllocMeter;
