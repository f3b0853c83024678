use crate::kernel::dot;
use crate::kernel::partition::core_span;

/// Borrowed inputs of one dense-layer invocation, shared read-only by every
/// core. Weights are row-major: row `j` is `weights[j*channels_in..(j+1)*channels_in]`.
#[derive(Debug, Clone, Copy)]
pub struct FcArgs<'a> {
    pub input: &'a [u8],
    pub weights: &'a [i8],
    pub channels_in: usize,
    pub channels_out: usize,
}

impl<'a> FcArgs<'a> {
    /// Panics if the buffer lengths do not match the dimensions.
    pub fn new(input: &'a [u8], weights: &'a [i8], channels_in: usize, channels_out: usize) -> Self {
        assert_eq!(input.len(), channels_in, "input length must equal channels_in");
        assert_eq!(
            weights.len(),
            channels_in * channels_out,
            "weights length must equal channels_in * channels_out"
        );
        Self { input, weights, channels_in, channels_out }
    }

    #[inline]
    pub fn weight_row(&self, i: usize) -> &'a [i8] {
        &self.weights[i * self.channels_in..(i + 1) * self.channels_in]
    }
}

/// Compute the output features owned by `core_id` into the shared output
/// buffer. One dot product per owned feature; indices outside the core's
/// span are left untouched, so disjoint spans make concurrent invocations
/// race-free by construction.
///
/// Panics if `output` is shorter than `channels_out`.
pub fn compute_fc_slice(core_id: usize, cores: usize, args: &FcArgs, output: &mut [i32]) {
    let span = core_span(core_id, cores, args.channels_out);
    let base = span.start;
    fill_rows(args, base, &mut output[span]);
}

/// Row loop shared by the sequential and forked paths: fills output features
/// `[base, base + out.len())`.
pub(crate) fn fill_rows(args: &FcArgs, base: usize, out: &mut [i32]) {
    for (k, slot) in out.iter_mut().enumerate() {
        *slot = dot(args.input, args.weight_row(base + k));
    }
}
