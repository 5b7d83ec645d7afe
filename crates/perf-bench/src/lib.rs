// ----------------------------
// STREAM-style bandwidth kernels
// ----------------------------

use std::hint::black_box;
use std::mem::size_of;
use std::time::{Duration, Instant};

use serde::Serialize;

pub const DEFAULT_LEN: usize = 10_000_000;
pub const DEFAULT_NTIMES: usize = 100;

/// The three working arrays, each an owned heap buffer sized at startup.
///
/// Initial contents follow STREAM: `a = 1`, `b = 2`, `c = 0`.
pub struct StreamArrays {
    pub a: Vec<f64>,
    pub b: Vec<f64>,
    pub c: Vec<f64>,
}

impl StreamArrays {
    pub fn new(len: usize) -> Self {
        StreamArrays {
            a: vec![1.0; len],
            b: vec![2.0; len],
            c: vec![0.0; len],
        }
    }

    /// `a[i] = b[i]`
    pub fn copy(&mut self) {
        self.a.copy_from_slice(&self.b);
    }

    /// `b[i] = 2.0 * a[i]`
    pub fn scale(&mut self) {
        for (b, &a) in self.b.iter_mut().zip(&self.a) {
            *b = 2.0 * a;
        }
    }

    /// `c[i] = a[i] + b[i]`
    pub fn add(&mut self) {
        for ((c, &a), &b) in self.c.iter_mut().zip(&self.a).zip(&self.b) {
            *c = a + b;
        }
    }

    /// `a[i] = b[i] + 3.0 * c[i]`
    pub fn triad(&mut self) {
        for ((a, &b), &c) in self.a.iter_mut().zip(&self.b).zip(&self.c) {
            *a = b + 3.0 * c;
        }
    }

    /// `Σ (a[i] + b[i] + c[i])`, summed in index order.
    pub fn checksum(&self) -> f64 {
        self.a
            .iter()
            .zip(&self.b)
            .zip(&self.c)
            .fold(0.0, |acc, ((&a, &b), &c)| acc + (a + b + c))
    }
}

/// One JSON line of results. Bandwidths are in GB/s (10^9 bytes per second).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StreamReport {
    #[serde(rename = "copy_GB_s")]
    pub copy_gb_s: f64,
    #[serde(rename = "scale_GB_s")]
    pub scale_gb_s: f64,
    #[serde(rename = "add_GB_s")]
    pub add_gb_s: f64,
    #[serde(rename = "triad_GB_s")]
    pub triad_gb_s: f64,
    pub checksum: f64,
}

impl StreamReport {
    /// Rounds bandwidths to two decimals and the checksum to one, like the
    /// classic STREAM output.
    pub fn rounded(self) -> Self {
        StreamReport {
            copy_gb_s: round_to(self.copy_gb_s, 2),
            scale_gb_s: round_to(self.scale_gb_s, 2),
            add_gb_s: round_to(self.add_gb_s, 2),
            triad_gb_s: round_to(self.triad_gb_s, 2),
            checksum: round_to(self.checksum, 1),
        }
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Bandwidth in GB/s for a kernel touching `arrays_touched` arrays of `len`
/// doubles, repeated `ntimes` within `elapsed`.
pub fn bandwidth_gb_s(arrays_touched: usize, len: usize, ntimes: usize, elapsed: Duration) -> f64 {
    let bytes = (arrays_touched * len * size_of::<f64>() * ntimes) as f64;
    let seconds = elapsed.as_secs_f64();
    if seconds == 0.0 {
        return f64::INFINITY;
    }
    bytes / seconds / 1e9
}

/// Times `ntimes` repetitions of `kernel`.
fn time_kernel<F>(arrays: &mut StreamArrays, ntimes: usize, mut kernel: F) -> Duration
where
    F: FnMut(&mut StreamArrays),
{
    let start_time = Instant::now();
    for _ in 0..ntimes {
        kernel(black_box(&mut *arrays));
    }
    start_time.elapsed()
}

/// Runs copy, scale, add and triad in that order over freshly initialized
/// arrays and reports bandwidths plus the final checksum.
pub fn run_stream(len: usize, ntimes: usize) -> StreamReport {
    let mut arrays = StreamArrays::new(len);

    let copy = time_kernel(&mut arrays, ntimes, StreamArrays::copy);
    let scale = time_kernel(&mut arrays, ntimes, StreamArrays::scale);
    let add = time_kernel(&mut arrays, ntimes, StreamArrays::add);
    let triad = time_kernel(&mut arrays, ntimes, StreamArrays::triad);

    // Reading the arrays back keeps the timed loops observable.
    let checksum = black_box(arrays.checksum());

    StreamReport {
        copy_gb_s: bandwidth_gb_s(2, len, ntimes, copy),
        scale_gb_s: bandwidth_gb_s(2, len, ntimes, scale),
        add_gb_s: bandwidth_gb_s(3, len, ntimes, add),
        triad_gb_s: bandwidth_gb_s(3, len, ntimes, triad),
        checksum,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kernels_follow_stream_recurrences() {
        let mut arrays = StreamArrays::new(4);

        arrays.copy();
        assert!(arrays.a.iter().all(|&x| x == 2.0));

        arrays.scale();
        assert!(arrays.b.iter().all(|&x| x == 4.0));

        arrays.add();
        assert!(arrays.c.iter().all(|&x| x == 6.0));

        arrays.triad();
        assert!(arrays.a.iter().all(|&x| x == 22.0));

        assert_eq!(arrays.checksum(), 4.0 * (22.0 + 4.0 + 6.0));
    }

    /// The checksum only depends on the number of repetitions, not on timing.
    #[test]
    fn checksum_after_one_pass() {
        let report = run_stream(1_000, 1);
        assert_eq!(report.checksum, 1_000.0 * 32.0);
        assert!(report.copy_gb_s > 0.0);
        assert!(report.triad_gb_s > 0.0);
    }

    #[test]
    fn bandwidth_counts_bytes_moved() {
        let gbps = bandwidth_gb_s(2, 1_000_000, 10, Duration::from_secs(1));
        assert!((gbps - 0.16).abs() < 1e-12);
    }

    #[test]
    fn report_serializes_with_stream_keys() {
        let report = StreamReport {
            copy_gb_s: 10.123,
            scale_gb_s: 9.5,
            add_gb_s: 11.0,
            triad_gb_s: 11.25,
            checksum: 32_000.04,
        }
        .rounded();

        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(
            json,
            r#"{"copy_GB_s":10.12,"scale_GB_s":9.5,"add_GB_s":11.0,"triad_GB_s":11.25,"checksum":32000.0}"#
        );
    }
}
