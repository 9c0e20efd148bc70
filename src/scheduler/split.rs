use std::ops::Range;

/// Splits `rows` into `workers` contiguous band sizes.
///
/// Every band gets `rows / workers` rows and the last `rows % workers` bands
/// get one more, so sizes differ by at most one. With more workers than rows
/// the leading bands are empty. Zero workers yield no bands.
pub fn split_workload(rows: usize, workers: usize) -> Vec<usize> {
    if workers == 0 {
        return Vec::new();
    }
    let (base, extra) = (rows / workers, rows % workers);
    (0..workers)
        .map(|i| base + (i >= workers - extra) as usize)
        .collect()
}

/// Turns band sizes into half-open row ranges laid out from row 0.
pub(crate) fn bands(sizes: &[usize]) -> Vec<Range<usize>> {
    sizes
        .iter()
        .scan(0, |begin, &size| {
            let band = *begin..*begin + size;
            *begin += size;
            Some(band)
        })
        .collect()
}
