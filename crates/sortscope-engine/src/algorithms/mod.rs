#![forbid(unsafe_code)]

//! The ten algorithm routines.
//!
//! Each routine is a free function over [`TraceChannel`] that sorts the
//! sequence ascending, routing every comparison, swap, and write through
//! the channel's entry points. [`AlgorithmId`] names and dispatches them.
//!
//! Counter semantics per algorithm are deliberate and part of the
//! contract: e.g. selection sort performs exactly `n(n-1)/2` comparisons
//! regardless of input order, and counting/radix/bucket tally their scan
//! and staging phases into the comparison/swap counters so the live
//! display keeps moving through non-comparison phases.

mod distribution;
mod heap;
mod merge;
mod quadratic;
mod quick;

use std::fmt;
use std::str::FromStr;

use crate::channel::TraceChannel;
use crate::errors::EngineError;

/// Identifier for one of the ten sorting algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmId {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Heap,
    Shell,
    Counting,
    Radix,
    Bucket,
}

impl AlgorithmId {
    /// All ten algorithms, in menu order.
    pub const ALL: [AlgorithmId; 10] = [
        AlgorithmId::Bubble,
        AlgorithmId::Selection,
        AlgorithmId::Insertion,
        AlgorithmId::Merge,
        AlgorithmId::Quick,
        AlgorithmId::Heap,
        AlgorithmId::Shell,
        AlgorithmId::Counting,
        AlgorithmId::Radix,
        AlgorithmId::Bucket,
    ];

    /// Stable string key, as used by the controls boundary.
    pub fn key(self) -> &'static str {
        match self {
            AlgorithmId::Bubble => "bubble",
            AlgorithmId::Selection => "selection",
            AlgorithmId::Insertion => "insertion",
            AlgorithmId::Merge => "merge",
            AlgorithmId::Quick => "quick",
            AlgorithmId::Heap => "heap",
            AlgorithmId::Shell => "shell",
            AlgorithmId::Counting => "counting",
            AlgorithmId::Radix => "radix",
            AlgorithmId::Bucket => "bucket",
        }
    }

    /// Whether the algorithm derives a value range from the sequence and
    /// therefore rejects empty input with `InvalidInput`.
    pub fn requires_value_range(self) -> bool {
        matches!(
            self,
            AlgorithmId::Counting | AlgorithmId::Radix | AlgorithmId::Bucket
        )
    }

    /// Run the algorithm to completion over the channel.
    pub fn run(self, channel: &mut TraceChannel) -> Result<(), EngineError> {
        match self {
            AlgorithmId::Bubble => quadratic::bubble(channel),
            AlgorithmId::Selection => quadratic::selection(channel),
            AlgorithmId::Insertion => quadratic::insertion(channel),
            AlgorithmId::Merge => merge::merge_sort(channel),
            AlgorithmId::Quick => quick::quick_sort(channel),
            AlgorithmId::Heap => heap::heap_sort(channel),
            AlgorithmId::Shell => quadratic::shell(channel),
            AlgorithmId::Counting => distribution::counting_sort(channel),
            AlgorithmId::Radix => distribution::radix_sort(channel),
            AlgorithmId::Bucket => distribution::bucket_sort(channel),
        }
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for AlgorithmId {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AlgorithmId::ALL
            .into_iter()
            .find(|id| id.key() == s)
            .ok_or(EngineError::InvalidInput("unknown algorithm identifier"))
    }
}
