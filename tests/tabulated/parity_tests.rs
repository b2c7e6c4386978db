//! both storage strategies must agree on every observable result
use pretty_assertions::assert_eq;

use tabula::tabulated::config::TabulatedCfg;
use tabula::tabulated::{
    ArrayTabulatedFunction, ConstructionError, FunctionPoint, LinkedListTabulatedFunction,
    PointError, TabulatedFunction,
};

use crate::common::{TestResult, PARABOLA};

#[derive(Debug, Copy, Clone)]
enum Op {
    Add(f64, f64),
    Delete(usize),
    Set(usize, f64, f64),
    SetX(usize, f64),
    SetY(usize, f64),
}

fn apply<F: TabulatedFunction>(f: &mut F, op: Op) -> Result<(), PointError> {
    match op {
        Op::Add(x, y)     => f.add_point(FunctionPoint::new(x, y)),
        Op::Delete(i)     => f.delete_point(i),
        Op::Set(i, x, y)  => f.set_point(i, FunctionPoint::new(x, y)),
        Op::SetX(i, x)    => f.set_point_x(i, x),
        Op::SetY(i, y)    => f.set_point_y(i, y),
    }
}

const SCRIPT: [Op; 21] = [
    Op::Add(-2.5, 6.0),
    Op::SetX(2, -2.5 + 5e-11),
    Op::Add(-2.0 - 5e-11, 0.0),
    Op::Set(1, -3.0 + 5e-11, 0.0),
    Op::Set(1, -2.1, 6.2),
    Op::Delete(3),
    Op::Add(-2.1, 0.0),
    Op::Add(3.5, 12.25),
    Op::SetX(0, -3.3),
    Op::SetX(0, -2.0),
    Op::SetY(4, -1.0),
    Op::Delete(40),
    Op::Add(0.0, 0.0),
    Op::Add(0.25, 0.0625),
    Op::Set(0, 9.0, 9.0),
    Op::SetX(7, f64::NAN),
    Op::Delete(0),
    Op::Delete(0),
    Op::Add(-10.0, 100.0),
    Op::SetX(1, -9.0),
    Op::SetY(20, 1.0),
];

const WIDE_TOL_SCRIPT: [Op; 8] = [
    Op::Add(-2.97, 0.0),
    Op::Add(-2.9, 1.0),
    Op::SetX(1, -2.96),
    Op::SetX(1, -2.5),
    Op::Set(2, -2.46, 0.0),
    Op::SetX(3, -1.04),
    Op::Delete(1),
    Op::Add(-2.04, 3.0),
];

/// Runs `script` on both strategies built from the same data, comparing
/// results, samples and values at `probes` after every step.
fn run_script(cfg: TabulatedCfg, script: &[Op], probes: &[f64]) -> TestResult {
    let mut a = ArrayTabulatedFunction::from_values_with_cfg(-3.0, 3.0, &PARABOLA, cfg)?;
    let mut l = LinkedListTabulatedFunction::from_values_with_cfg(-3.0, 3.0, &PARABOLA, cfg)?;

    for (step, &op) in script.iter().enumerate() {
        let ra = apply(&mut a, op);
        let rl = apply(&mut l, op);
        assert_eq!(
            format!("{:?}", ra),
            format!("{:?}", rl),
            "step {} ({:?}) diverged",
            step, op
        );

        assert_eq!(a.points(), l.points(), "step {} ({:?})", step, op);
        let va: Vec<u64> = a.function_values(probes).iter().map(|v| v.to_bits()).collect();
        let vl: Vec<u64> = l.function_values(probes).iter().map(|v| v.to_bits()).collect();
        assert_eq!(va, vl, "step {} ({:?})", step, op);
    }
    Ok(())
}

#[test]
fn scripted_operations_agree() -> TestResult {
    // a coarse sweep plus points just either side of every integer sample
    let mut probes: Vec<f64> = (-45..=45).map(|i| i as f64 * 0.1).collect();
    for i in -3..=3 {
        probes.push(i as f64 - 2.5e-11);
        probes.push(i as f64 + 2.5e-11);
    }
    run_script(TabulatedCfg::default(), &SCRIPT, &probes)
}

#[test]
fn wide_tolerance_agrees() -> TestResult {
    let cfg = TabulatedCfg::new().set_x_tol(0.05)?;
    let probes: Vec<f64> = (-310..=310).map(|i| i as f64 * 0.01).collect();
    run_script(cfg, &WIDE_TOL_SCRIPT, &probes)
}

#[test]
fn construction_agrees_on_tolerance() -> TestResult {
    let cfg = TabulatedCfg::new().set_x_tol(0.5)?;
    let values: Vec<f64> = (0..=10).map(f64::from).collect();

    let ra = ArrayTabulatedFunction::from_values_with_cfg(0.0, 1.0, &values, cfg).map(|_| ());
    let rl = LinkedListTabulatedFunction::from_values_with_cfg(0.0, 1.0, &values, cfg).map(|_| ());
    assert_eq!(ra, rl);
    assert!(matches!(ra, Err(ConstructionError::SpacingBelowTolerance { .. })));
    Ok(())
}

#[test]
fn underflow_agrees() -> TestResult {
    let mut a = ArrayTabulatedFunction::new(0.0, 2.0, 2)?;
    let mut l = LinkedListTabulatedFunction::new(0.0, 2.0, 2)?;

    assert_eq!(a.delete_point(0), Err(PointError::Underflow { count: 2 }));
    assert_eq!(l.delete_point(0), Err(PointError::Underflow { count: 2 }));
    assert_eq!(a.points(), l.points());
    Ok(())
}
