use crate::kernel::dot_u8_i8;
use crate::kernel::fc::FcArgs;
use log::warn;

/// Full-layer recompute with the scalar engine on one core; the reference
/// every strategy and core count is checked against.
pub fn reference_forward(args: &FcArgs) -> Vec<i32> {
    let mut out = vec![0i32; args.channels_out];
    for i in 0..args.channels_out {
        out[i] = dot_u8_i8(args.input, args.weight_row(i));
    }
    out
}

/// Element-wise compare against a golden vector. Returns the mismatch count
/// and logs each mismatching index.
pub fn verify(out: &[i32], golden: &[i32]) -> usize {
    let mut errors = 0;
    for i in 0..golden.len() {
        if out[i] != golden[i] {
            warn!("mismatch at index {}: computed {} vs golden {}", i, out[i], golden[i]);
            errors += 1;
        }
    }
    errors
}
