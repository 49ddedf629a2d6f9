#![forbid(unsafe_code)]

//! Display metadata for the documentation panel.
//!
//! Pure lookup; nothing here couples back into the engine.

use crate::algorithms::AlgorithmId;

/// Display facts about one algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmInfo {
    pub name: &'static str,
    pub time_complexity: &'static str,
    pub space_complexity: &'static str,
    /// Whether equal elements keep their relative order.
    pub stable: bool,
    /// Whether the sort needs only O(1) auxiliary space.
    pub in_place: bool,
    pub summary: &'static str,
}

/// Look up the display metadata for an algorithm.
pub fn describe(id: AlgorithmId) -> AlgorithmInfo {
    match id {
        AlgorithmId::Bubble => AlgorithmInfo {
            name: "Bubble Sort",
            time_complexity: "O(n²)",
            space_complexity: "O(1)",
            stable: true,
            in_place: true,
            summary: "Repeatedly swaps adjacent out-of-order elements until no pass swaps.",
        },
        AlgorithmId::Selection => AlgorithmInfo {
            name: "Selection Sort",
            time_complexity: "O(n²)",
            space_complexity: "O(1)",
            stable: false,
            in_place: true,
            summary: "Selects the minimum of the unsorted suffix and swaps it to the front.",
        },
        AlgorithmId::Insertion => AlgorithmInfo {
            name: "Insertion Sort",
            time_complexity: "O(n²)",
            space_complexity: "O(1)",
            stable: true,
            in_place: true,
            summary: "Sinks each element into the sorted prefix, stopping at an equal neighbor.",
        },
        AlgorithmId::Merge => AlgorithmInfo {
            name: "Merge Sort",
            time_complexity: "O(n log n)",
            space_complexity: "O(n)",
            stable: true,
            in_place: false,
            summary: "Recursively splits, then merges runs favoring the left on ties.",
        },
        AlgorithmId::Quick => AlgorithmInfo {
            name: "Quick Sort",
            time_complexity: "O(n log n)",
            space_complexity: "O(log n)",
            stable: false,
            in_place: true,
            summary: "Lomuto partition around the last element, recursing on both sides.",
        },
        AlgorithmId::Heap => AlgorithmInfo {
            name: "Heap Sort",
            time_complexity: "O(n log n)",
            space_complexity: "O(1)",
            stable: false,
            in_place: true,
            summary: "Builds a max-heap, then repeatedly extracts the root to the back.",
        },
        AlgorithmId::Shell => AlgorithmInfo {
            name: "Shell Sort",
            time_complexity: "O(n^1.5)",
            space_complexity: "O(1)",
            stable: false,
            in_place: true,
            summary: "Gapped insertion with a halving gap sequence down to one.",
        },
        AlgorithmId::Counting => AlgorithmInfo {
            name: "Counting Sort",
            time_complexity: "O(n + k)",
            space_complexity: "O(k)",
            stable: true,
            in_place: false,
            summary: "Tallies bounded values and rebuilds the sequence from cumulative counts.",
        },
        AlgorithmId::Radix => AlgorithmInfo {
            name: "Radix Sort",
            time_complexity: "O(d × n)",
            space_complexity: "O(n + k)",
            stable: true,
            in_place: false,
            summary: "Stable counting passes per base-10 digit, least significant first.",
        },
        AlgorithmId::Bucket => AlgorithmInfo {
            name: "Bucket Sort",
            time_complexity: "O(n + k)",
            space_complexity: "O(n + k)",
            stable: true,
            in_place: false,
            summary: "Scatters values into √n range buckets, sorts each, and concatenates.",
        },
    }
}
