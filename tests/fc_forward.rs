use qdense::kernel::fc::{compute_fc_slice, FcArgs};
use qdense::kernel::partition::core_span;

fn scenario_weights() -> Vec<i8> {
    [
        [1i8, 1, 1, 1, 1, 1, 1, 1],
        [2, 0, 0, 0, 0, 0, 0, 0],
        [-1, -1, -1, -1, -1, -1, -1, -1],
        [0, 0, 0, 0, 0, 0, 0, 1],
    ]
    .concat()
}

#[test]
fn two_core_scenario_produces_expected_output() {
    let input = vec![1u8; 8];
    let weights = scenario_weights();
    let args = FcArgs::new(&input, &weights, 8, 4);

    assert_eq!(core_span(0, 2, 4), 0..2);
    assert_eq!(core_span(1, 2, 4), 2..4);

    let mut output = vec![0i32; 4];
    compute_fc_slice(0, 2, &args, &mut output);
    compute_fc_slice(1, 2, &args, &mut output);
    assert_eq!(output, vec![8, 2, -8, 1]);
}

#[test]
fn core_writes_only_its_own_span() {
    let input = vec![1u8; 8];
    let weights = scenario_weights();
    let args = FcArgs::new(&input, &weights, 8, 4);

    let mut output = vec![i32::MIN; 4];
    compute_fc_slice(0, 2, &args, &mut output);
    assert_eq!(&output[..2], &[8, 2]);
    assert_eq!(&output[2..], &[i32::MIN, i32::MIN], "indices outside the span must stay untouched");
}

#[test]
fn recomputing_a_slice_is_idempotent() {
    let input = vec![1u8; 8];
    let weights = scenario_weights();
    let args = FcArgs::new(&input, &weights, 8, 4);

    let mut output = vec![0i32; 4];
    compute_fc_slice(0, 2, &args, &mut output);
    let first = output.clone();
    compute_fc_slice(0, 2, &args, &mut output);
    assert_eq!(output, first);
}
