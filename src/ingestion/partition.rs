/// Inclusive range of block heights, as given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockRange {
    pub start: u64,
    pub end: u64,
}

impl BlockRange {
    pub fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }
}

/// One contiguous sub-range assigned to a single worker. Partitions produced
/// for a range are ordered by `index`, do not overlap, and together cover the
/// range exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    pub index: usize,
    pub start: u64,
    pub end: u64,
}

/// Splits `range` into at most `num_workers` near-equal contiguous chunks,
/// the last possibly shorter. A range smaller than `num_workers` yields fewer
/// partitions; an inverted range yields none.
pub fn partition_range(range: BlockRange, num_workers: usize) -> Vec<Partition> {
    if num_workers == 0 || range.end < range.start {
        return Vec::new();
    }

    let total = range.end - range.start + 1;
    let chunk_size = total.div_ceil(num_workers as u64);

    let mut partitions = Vec::with_capacity(num_workers);
    for index in 0..num_workers {
        let start = range.start + index as u64 * chunk_size;
        if start > range.end {
            break;
        }
        let end = range.end.min(start + chunk_size - 1);
        partitions.push(Partition { index, start, end });
    }

    partitions
}
