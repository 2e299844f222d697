//! Statistical behaviour of |+⟩ and |−⟩ across measurement bases.

use proptest::prelude::*;
use qbasis_adapter_sim::{CountDistribution, SimError, exact_probabilities, run};
use qbasis_ir::{
    CircuitProgram, Outcome, build_minus_state, build_plus_state,
    prepare_for_x_basis_measurement, prepare_for_y_basis_measurement,
};

const SHOTS: i64 = 10_000;
const TOLERANCE: f64 = 0.02;

fn assert_balanced(counts: &CountDistribution) {
    let p0 = counts.probability(Outcome::Zero);
    let p1 = counts.probability(Outcome::One);
    assert!((p0 - 0.5).abs() <= TOLERANCE, "P(0) = {p0}");
    assert!((p1 - 0.5).abs() <= TOLERANCE, "P(1) = {p1}");
}

#[test]
fn plus_in_z_basis_is_balanced() {
    let counts = run(&build_plus_state(), SHOTS, Some(11)).unwrap();
    assert_balanced(&counts);
}

#[test]
fn minus_in_z_basis_is_balanced() {
    let counts = run(&build_minus_state(), SHOTS, Some(12)).unwrap();
    assert_balanced(&counts);
}

#[test]
fn plus_in_x_basis_always_zero() {
    let program = prepare_for_x_basis_measurement(build_plus_state());
    let counts = run(&program, SHOTS, Some(13)).unwrap();
    assert_eq!(counts.get("0"), SHOTS as u64);
    assert_eq!(counts.get("1"), 0);
}

#[test]
fn minus_in_x_basis_always_one() {
    let program = prepare_for_x_basis_measurement(build_minus_state());
    let counts = run(&program, SHOTS, Some(14)).unwrap();
    assert_eq!(counts.get("0"), 0);
    assert_eq!(counts.get("1"), SHOTS as u64);
}

#[test]
fn y_basis_is_unbiased_for_x_eigenstates() {
    for (seed, program) in [(15, build_plus_state()), (16, build_minus_state())] {
        let program = prepare_for_y_basis_measurement(program);
        let (p0, p1) = exact_probabilities(&program).unwrap();
        assert!((p0 - 0.5).abs() < 1e-12);
        assert!((p1 - 0.5).abs() < 1e-12);

        let counts = run(&program, SHOTS, Some(seed)).unwrap();
        assert_balanced(&counts);
    }
}

#[test]
fn same_seed_same_counts() {
    let program = prepare_for_y_basis_measurement(build_minus_state());
    let first = run(&program, 4096, Some(2024)).unwrap();
    let second = run(&program, 4096, Some(2024)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn non_positive_shots_rejected() {
    let program = build_plus_state();
    assert!(matches!(
        run(&program, 0, None),
        Err(SimError::InvalidShotCount(0))
    ));
    assert!(matches!(
        run(&program, -5, None),
        Err(SimError::InvalidShotCount(-5))
    ));
}

fn arb_program() -> impl Strategy<Value = CircuitProgram> {
    (any::<bool>(), 0_u8..3).prop_map(|(plus, basis)| {
        let base = if plus {
            build_plus_state()
        } else {
            build_minus_state()
        };
        match basis {
            0 => base,
            1 => prepare_for_x_basis_measurement(base),
            _ => prepare_for_y_basis_measurement(base),
        }
    })
}

proptest! {
    #[test]
    fn counts_sum_to_shots(program in arb_program(), shots in 1_i64..2_000, seed in any::<u64>()) {
        let counts = run(&program, shots, Some(seed)).unwrap();
        prop_assert_eq!(counts.get("0") + counts.get("1"), shots as u64);
        prop_assert_eq!(counts.total_shots(), shots as u64);
    }
}
