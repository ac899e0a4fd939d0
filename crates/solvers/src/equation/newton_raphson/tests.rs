use approx::assert_relative_eq;

use super::{Action, Config, Criterion, Error, Event, Status, solve, solve_unobserved};

fn square_minus_two(x: f64) -> f64 {
    x * x - 2.0
}

fn square_minus_two_slope(x: f64) -> f64 {
    2.0 * x
}

/// f(x) = x³ - 2x + 2, which cycles between 0 and 1 under Newton iteration.
fn cycling(x: f64) -> f64 {
    x.powi(3) - 2.0 * x + 2.0
}

fn cycling_slope(x: f64) -> f64 {
    3.0 * x * x - 2.0
}

#[test]
fn finds_square_root_of_two() {
    let solution = solve_unobserved(
        square_minus_two,
        square_minus_two_slope,
        1.0,
        &Config::default(),
    )
    .expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.iters, 4);
    assert_relative_eq!(solution.x, 1.414_213_56, epsilon = 1e-8);
    assert_relative_eq!(solution.residual, square_minus_two(solution.x));
}

#[test]
fn converges_from_either_side() {
    let config = Config::new(50, 1e-10).expect("valid config");

    let above = solve_unobserved(square_minus_two, square_minus_two_slope, 10.0, &config)
        .expect("should converge from above");
    let below = solve_unobserved(square_minus_two, square_minus_two_slope, -0.5, &config)
        .expect("should converge to the negative root");

    assert_relative_eq!(above.x, 2.0_f64.sqrt(), epsilon = 1e-10);
    assert_relative_eq!(below.x, -(2.0_f64.sqrt()), epsilon = 1e-10);
}

#[test]
fn converged_step_is_within_tolerance() {
    let mut last_step = f64::INFINITY;
    let observer = |event: &Event| -> Option<Action> {
        last_step = event.step_size();
        None
    };

    let config = Config::default();
    solve(square_minus_two, square_minus_two_slope, 1.0, &config, observer)
        .expect("should converge");

    assert!(last_step <= config.tol());
}

#[test]
fn residual_criterion_stops_on_residual() {
    let config = Config::default().with_criterion(Criterion::Residual);

    let solution = solve_unobserved(square_minus_two, square_minus_two_slope, 1.0, &config)
        .expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.iters, 3);
    assert!(solution.residual.abs() <= config.tol());
}

#[test]
fn first_step_is_unconditional() {
    let solution = solve_unobserved(|x| x - 3.0, |_| 1.0, 3.0, &Config::default())
        .expect("already at the root");

    assert_eq!(solution.iters, 1);
    assert_relative_eq!(solution.x, 3.0);
}

#[test]
fn zero_max_iters_fails_when_more_steps_are_needed() {
    let config = Config::new(0, 1e-5).expect("valid config");

    let result = solve_unobserved(square_minus_two, square_minus_two_slope, 1.0, &config);

    assert!(matches!(
        result,
        Err(Error::ConvergenceFailure { max_iters: 0, .. })
    ));
}

#[test]
fn iteration_cap_is_exact() {
    // Four steps are needed from x0 = 1; the cap allows max_iters + 1 steps.
    let at_cap = Config::new(3, 1e-5).expect("valid config");
    let below_cap = Config::new(2, 1e-5).expect("valid config");

    assert!(solve_unobserved(square_minus_two, square_minus_two_slope, 1.0, &at_cap).is_ok());
    assert!(matches!(
        solve_unobserved(square_minus_two, square_minus_two_slope, 1.0, &below_cap),
        Err(Error::ConvergenceFailure { max_iters: 2, .. })
    ));
}

#[test]
fn cycling_iteration_fails_to_converge() {
    let result = solve_unobserved(cycling, cycling_slope, 0.0, &Config::default());

    let error = result.expect_err("should cycle between 0 and 1");
    assert!(error.is_convergence_failure());
}

#[test]
fn zero_derivative_is_an_arithmetic_error() {
    let result = solve_unobserved(|x| x * x + 1.0, |x| 2.0 * x, 0.0, &Config::default());

    let error = result.expect_err("derivative vanishes at the guess");
    assert_eq!(error, Error::ZeroDerivative { x: 0.0 });
    assert!(!error.is_convergence_failure());
}

#[test]
fn non_finite_values_are_reported() {
    let config = Config::default();

    assert!(matches!(
        solve_unobserved(square_minus_two, square_minus_two_slope, f64::NAN, &config),
        Err(Error::NonFiniteInitialGuess { .. })
    ));
    assert!(matches!(
        solve_unobserved(|x: f64| x.ln(), |x| 1.0 / x, -1.0, &config),
        Err(Error::NonFiniteResidual { .. })
    ));
    assert!(matches!(
        solve_unobserved(|x| x - 1.0, |_| f64::NAN, 0.0, &config),
        Err(Error::NonFiniteDerivative { .. })
    ));
    assert!(matches!(
        solve_unobserved(|_| f64::MAX, |_| f64::MIN_POSITIVE, 0.0, &config),
        Err(Error::NonFiniteStep { .. })
    ));
}

#[test]
fn observer_sees_every_step() {
    let mut iters = Vec::new();
    let observer = |event: &Event| -> Option<Action> {
        iters.push(event.iter);
        None
    };

    let solution = solve(
        square_minus_two,
        square_minus_two_slope,
        1.0,
        &Config::default(),
        observer,
    )
    .expect("should converge");

    assert_eq!(iters, vec![1, 2, 3, 4]);
    assert_eq!(solution.iters, 4);
}

#[test]
fn observer_can_stop_early() {
    let observer = |event: &Event| (event.iter == 2).then_some(Action::StopEarly);

    let solution = solve(
        square_minus_two,
        square_minus_two_slope,
        1.0,
        &Config::default(),
        observer,
    )
    .expect("should stop cleanly");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 2);
    assert_relative_eq!(solution.x, 17.0 / 12.0);
}

#[test]
fn observer_can_rescue_a_cycle() {
    let observer = |event: &Event| (event.iter >= 5).then_some(Action::StopEarly);

    let solution = solve(cycling, cycling_slope, 0.0, &Config::default(), observer)
        .expect("observer stops before the cap");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_relative_eq!(solution.x, 1.0);
}

/// Undefined at and below one, `x - 1` above.
fn undefined_at_one(x: f64) -> f64 {
    if x <= 1.0 { f64::NAN } else { x - 1.0 }
}

#[test]
fn converged_step_returns_estimate_without_its_residual() {
    let solution = solve_unobserved(undefined_at_one, |_| 1.0, 1.000_001, &Config::default())
        .expect("step of 1e-6 is within tolerance");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.iters, 1);
    assert_relative_eq!(solution.x, 1.0);
    assert!(solution.residual.is_nan());
}

#[test]
fn residual_criterion_rejects_undefined_residual() {
    let config = Config::default().with_criterion(Criterion::Residual);

    let result = solve_unobserved(undefined_at_one, |_| 1.0, 1.000_001, &config);

    assert!(matches!(
        result,
        Err(Error::NonFiniteResidual { x, .. }) if x == 1.0
    ));
}

#[test]
fn infinite_derivative_gives_zero_step() {
    let solution = solve_unobserved(|x| x - 2.0, |_| f64::INFINITY, 5.0, &Config::default())
        .expect("zero step converges");

    assert_eq!(solution.iters, 1);
    assert_relative_eq!(solution.x, 5.0);
}
