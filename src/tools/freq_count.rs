use rayon::prelude::*;

/// Inputs longer than this are counted in parallel chunks.
const PARALLEL_THRESHOLD: usize = 64_000;
/// 16k is pretty much the sweet spot for chunk size.
const CHUNK_SIZE: usize = 16_000;

/// Occurrence count of every byte value present in some input.
///
/// Symbols that never occur are not part of the table. Iteration is always in
/// ascending symbol order, so trees built from equal tables are identical.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: Vec<u64>,
}

impl FrequencyTable {
    /// Count every symbol in data. Empty data gives an empty table.
    pub fn build(data: &[u8]) -> Self {
        Self {
            counts: freqs(data),
        }
    }

    /// Build a table from (symbol, count) pairs. Repeated symbols are summed and
    /// zero counts are dropped.
    pub fn from_counts<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (u8, u64)>,
    {
        let mut counts = vec![0_u64; 256];
        pairs
            .into_iter()
            .for_each(|(symbol, count)| counts[symbol as usize] += count);
        Self { counts }
    }

    /// Count for symbol, or None if it never occurred.
    pub fn get(&self, symbol: u8) -> Option<u64> {
        match self.counts[symbol as usize] {
            0 => None,
            count => Some(count),
        }
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Sum of all counts, i.e. the length of the counted input.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// (symbol, count) pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &count)| count > 0)
            .map(|(symbol, &count)| (symbol as u8, count))
    }
}

/// Returns a frequency count of the input data. Uses parallelism when data set is over 64k.
fn freqs(data: &[u8]) -> Vec<u64> {
    if data.len() > PARALLEL_THRESHOLD {
        data.par_chunks(CHUNK_SIZE)
            .fold(
                || vec![0_u64; 256],
                |mut freqs, chunk| {
                    chunk.iter().for_each(|&el| freqs[el as usize] += 1);
                    freqs
                },
            )
            .reduce(
                || vec![0_u64; 256],
                |s, f| s.iter().zip(&f).map(|(a, b)| a + b).collect::<Vec<u64>>(),
            )
    } else {
        let mut freqs = vec![0_u64; 256];
        data.iter().for_each(|&el| freqs[el as usize] += 1);
        freqs
    }
}
