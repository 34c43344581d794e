//! Utilities for parallelism

/// Smallest run of butterflies handed to one rayon task when a chunk is split.
#[cfg(feature = "parallel")]
const MIN_BLOCK: usize = 1 << 10;

/// Runs `oper` on every butterfly group of one stage.
///
/// `data` is cut into chunks of `chunk_size` samples and every chunk into `R` equal lanes.
/// Butterfly `k` of a chunk reads and writes element `k` of each lane. `oper` receives the lanes
/// of a run of butterflies together with the index of the first butterfly in that run.
///
/// The work is handed to the rayon pool if and only if `parallel` is set to `true` and the
/// `parallel` feature is enabled. Chunks are the unit of work while there are at least as many
/// of them as pool threads; otherwise the lanes of each chunk are cut into blocks and the blocks
/// run concurrently. Either way the call returns only after every butterfly has been processed,
/// so consecutive calls never overlap.
#[allow(unused_variables)] // when `parallel` feature is disabled, the variable is ignored
pub(crate) fn for_each_group<T, F, const R: usize>(
    data: &mut [T],
    chunk_size: usize,
    parallel: bool,
    oper: F,
) where
    T: Send,
    F: Fn([&mut [T]; R], usize) + Send + Sync,
{
    #[cfg(feature = "parallel")]
    {
        if parallel {
            use rayon::prelude::*;

            let lane_len = chunk_size / R;
            let chunks = data.len() / chunk_size;
            match block_len(chunks, lane_len, rayon::current_num_threads()) {
                Some(block) => data.chunks_exact_mut(chunk_size).for_each(|chunk| {
                    let mut blocks = split_lanes::<T, R>(chunk).map(|lane| lane.chunks_mut(block));
                    let groups: Vec<([&mut [T]; R], usize)> = (0..lane_len.div_ceil(block))
                        .map(|i| {
                            let lanes = std::array::from_fn(|r| {
                                blocks[r].next().unwrap_or_default()
                            });
                            (lanes, i * block)
                        })
                        .collect();
                    groups
                        .into_par_iter()
                        .for_each(|(lanes, start)| oper(lanes, start));
                }),
                None => data
                    .par_chunks_exact_mut(chunk_size)
                    .for_each(|chunk| oper(split_lanes(chunk), 0)),
            }
            return;
        }
    }

    data.chunks_exact_mut(chunk_size)
        .for_each(|chunk| oper(split_lanes(chunk), 0));
}

/// Butterflies per block when the chunks of a stage cannot keep `threads` busy, `None` when
/// whole chunks are enough work.
#[cfg(feature = "parallel")]
fn block_len(chunks: usize, lane_len: usize, threads: usize) -> Option<usize> {
    if chunks >= threads || lane_len < 2 * MIN_BLOCK {
        return None;
    }
    Some(lane_len.div_ceil(threads).max(MIN_BLOCK))
}

fn split_lanes<T, const R: usize>(chunk: &mut [T]) -> [&mut [T]; R] {
    let lane_len = chunk.len() / R;
    let mut rest = chunk;
    std::array::from_fn(|_| {
        let (lane, tail) = std::mem::take(&mut rest).split_at_mut(lane_len);
        rest = tail;
        lane
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tags every element with `lane·LANE_TAG + butterfly` and checks the layout.
    const LANE_TAG: usize = 1 << 20;

    fn tag_and_check<const R: usize>(len: usize, chunk_size: usize, parallel: bool) {
        let mut data = vec![usize::MAX; len];
        for_each_group::<_, _, R>(&mut data, chunk_size, parallel, |lanes, start| {
            for (r, lane) in lanes.into_iter().enumerate() {
                for (j, v) in lane.iter_mut().enumerate() {
                    *v = r * LANE_TAG + start + j;
                }
            }
        });

        let lane_len = chunk_size / R;
        for chunk in data.chunks_exact(chunk_size) {
            for (idx, &v) in chunk.iter().enumerate() {
                assert_eq!(v, (idx / lane_len) * LANE_TAG + idx % lane_len, "index {idx}");
            }
        }
    }

    #[test]
    fn visits_every_group() {
        for parallel in [false, true] {
            tag_and_check::<2>(64, 8, parallel);
            tag_and_check::<4>(64, 16, parallel);
            tag_and_check::<4>(64, 64, parallel);
        }
    }

    #[test]
    fn splits_lanes_evenly() {
        let mut chunk: Vec<u8> = (0..12).collect();
        let [a, b, c, d] = split_lanes::<_, 4>(&mut chunk);
        assert_eq!(a, &[0, 1, 2]);
        assert_eq!(b, &[3, 4, 5]);
        assert_eq!(c, &[6, 7, 8]);
        assert_eq!(d, &[9, 10, 11]);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn few_chunks_are_split_into_blocks() {
        assert_eq!(block_len(1, 1 << 16, 8), Some(1 << 13));
        assert_eq!(block_len(2, 1 << 12, 16), Some(MIN_BLOCK));
        // enough chunks for every thread
        assert_eq!(block_len(8, 1 << 16, 8), None);
        // too small to be worth splitting
        assert_eq!(block_len(1, MIN_BLOCK, 8), None);
        assert_eq!(block_len(1, 1 << 16, 1), None);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn large_chunks_keep_their_layout() {
        tag_and_check::<2>(1 << 15, 1 << 15, true);
        tag_and_check::<4>(1 << 16, 1 << 14, true);
    }
}
