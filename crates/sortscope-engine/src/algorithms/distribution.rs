//! Distribution sorts: counting, radix, bucket.
//!
//! All three derive a value range from the sequence and therefore reject
//! empty input with `InvalidInput` up front instead of letting the range
//! computation misbehave. Counting sort also caps the value span it will
//! allocate counters for. Tally and distribution scans go through
//! `observe`, auxiliary output builds through `stage`, and copy-back
//! phases through uncounted paced writes, so the animation and the
//! counters keep moving through every phase.

use crate::channel::TraceChannel;
use crate::errors::EngineError;

const EMPTY_INPUT: &str = "cannot derive a value range from an empty sequence";
const SPAN_TOO_LARGE: &str = "value span too large for a counting pass";

/// Upper bound on `max - min` for counting sort, which allocates one
/// counter per distinct possible value. Far above any configured value
/// range; guards direct engine callers against a multi-gigabyte count
/// array.
const MAX_COUNTING_SPAN: u32 = 1 << 24;

fn value_bounds(values: &[u32]) -> Option<(u32, u32)> {
    let first = *values.first()?;
    let mut min = first;
    let mut max = first;
    for &v in &values[1..] {
        min = min.min(v);
        max = max.max(v);
    }
    Some((min, max))
}

/// Counting sort. Count array sized `max - min + 1`; stable output via
/// reverse iteration over cumulative counts.
pub(super) fn counting_sort(ch: &mut TraceChannel) -> Result<(), EngineError> {
    let values = ch.snapshot();
    let (min, max) = value_bounds(&values).ok_or(EngineError::InvalidInput(EMPTY_INPUT))?;
    if max - min > MAX_COUNTING_SPAN {
        return Err(EngineError::InvalidInput(SPAN_TOO_LARGE));
    }
    let n = values.len();

    let mut count = vec![0usize; (max - min + 1) as usize];
    for (i, &v) in values.iter().enumerate() {
        count[(v - min) as usize] += 1;
        ch.observe(i)?;
    }

    for k in 1..count.len() {
        count[k] += count[k - 1];
    }

    let mut output = vec![0u32; n];
    for i in (0..n).rev() {
        let slot = (values[i] - min) as usize;
        count[slot] -= 1;
        output[count[slot]] = values[i];
        ch.stage(i)?;
    }

    for (i, &v) in output.iter().enumerate() {
        ch.write(i, v)?;
    }
    Ok(())
}

/// LSD radix sort, base 10: one stable counting pass per digit while
/// `max / exp > 0`. Values are non-negative by the data model.
pub(super) fn radix_sort(ch: &mut TraceChannel) -> Result<(), EngineError> {
    let values = ch.snapshot();
    let (_, max) = value_bounds(&values).ok_or(EngineError::InvalidInput(EMPTY_INPUT))?;

    let max = u64::from(max);
    let mut exp: u64 = 1;
    while max / exp > 0 {
        digit_pass(ch, exp)?;
        exp *= 10;
    }
    Ok(())
}

/// One stable counting pass keyed on `(value / exp) % 10`.
fn digit_pass(ch: &mut TraceChannel, exp: u64) -> Result<(), EngineError> {
    let values = ch.snapshot();
    let n = values.len();
    let digit = |v: u32| ((u64::from(v) / exp) % 10) as usize;

    let mut count = [0usize; 10];
    for (i, &v) in values.iter().enumerate() {
        count[digit(v)] += 1;
        ch.observe(i)?;
    }

    for d in 1..10 {
        count[d] += count[d - 1];
    }

    let mut output = vec![0u32; n];
    for i in (0..n).rev() {
        let d = digit(values[i]);
        count[d] -= 1;
        output[count[d]] = values[i];
        ch.stage(i)?;
    }

    for (i, &v) in output.iter().enumerate() {
        ch.write(i, v)?;
    }
    Ok(())
}

/// Bucket sort with `floor(sqrt(n))` buckets (at least one). Bucket index
/// is `(v - min) / (max - min + 1) * bucket_count`, clamped to the last
/// bucket; each bucket is sorted independently, then the buckets are
/// concatenated in order via counted placements.
pub(super) fn bucket_sort(ch: &mut TraceChannel) -> Result<(), EngineError> {
    let values = ch.snapshot();
    let (min, max) = value_bounds(&values).ok_or(EngineError::InvalidInput(EMPTY_INPUT))?;
    let n = values.len();

    let bucket_count = ((n as f64).sqrt().floor() as usize).max(1);
    let span = f64::from(max - min + 1);
    let mut buckets: Vec<Vec<u32>> = vec![Vec::new(); bucket_count];

    for (i, &v) in values.iter().enumerate() {
        let idx = (f64::from(v - min) / span * bucket_count as f64).floor() as usize;
        buckets[idx.min(bucket_count - 1)].push(v);
        ch.observe(i)?;
    }

    let mut k = 0;
    for bucket in &mut buckets {
        // Intra-bucket tie order is unspecified; values are plain integers
        // so an unstable sort is observationally equivalent.
        bucket.sort_unstable();
        for &v in bucket.iter() {
            ch.place(k, v)?;
            k += 1;
        }
    }
    Ok(())
}
