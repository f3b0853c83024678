use rayon::prelude::*;

use crate::kernel::fc::{compute_fc_slice, fill_rows, FcArgs};
use crate::kernel::partition::per_core_size;

/// Fork `cores` symmetric workers over disjoint per-core output chunks and
/// join before returning. Chunk boundaries reproduce `core_span` exactly, so
/// every output index is written once by one worker and no synchronization
/// is needed beyond the join.
///
/// `cores` must already have passed `RunConfig::validate`. Panics if
/// `output.len()` differs from `args.channels_out`.
pub fn forward(args: &FcArgs, output: &mut [i32], cores: usize) {
    assert_eq!(output.len(), args.channels_out, "output length must equal channels_out");
    if args.channels_out == 0 {
        return;
    }
    let size = per_core_size(args.channels_out, cores);
    output.par_chunks_mut(size).enumerate().for_each(|(core_id, chunk)| {
        fill_rows(args, core_id * size, chunk);
    });
}

/// Same computation with the workers run one after another on the calling
/// thread; used to cross-check the forked path.
pub fn forward_sequential(args: &FcArgs, output: &mut [i32], cores: usize) {
    assert_eq!(output.len(), args.channels_out, "output length must equal channels_out");
    for core_id in 0..cores {
        compute_fc_slice(core_id, cores, args, output);
    }
}
