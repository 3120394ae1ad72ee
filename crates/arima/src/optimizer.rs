//! Local optimizers for least-squares estimation objectives.
//!
//! Estimation code only talks to the [`Optimizer`] trait, so solvers can be
//! swapped without touching the likelihood:
//!
//! | Solver | Method | Notes |
//! |--------|--------|-------|
//! | [`GaussNewton`] | damped Gauss-Newton (Levenberg-Marquardt) | default; finite-difference Jacobian |
//! | [`NelderMead`] | derivative-free simplex via `argmin` | slower, robust on flat surfaces |

use argmin::core::{CostFunction, Executor, State};
use argmin::solver::neldermead;
use ndarray::{Array1, Array2};
use tracing::{debug, trace};

use crate::error::ArimaError;
use crate::linalg;

/// A sum-of-squares objective `S(x) = Σ eₜ(x)²`.
pub trait Objective {
    /// Number of free parameters.
    fn dim(&self) -> usize;

    /// Residual vector at `params`, or `None` if `params` is inadmissible
    /// (for example a non-stationary AR polynomial) or evaluation is not finite.
    fn residuals(&self, params: &[f64]) -> Option<Vec<f64>>;

    /// Sum of squared residuals; `+inf` for inadmissible parameters.
    fn cost(&self, params: &[f64]) -> f64 {
        self.residuals(params)
            .map(|e| sum_sq(&e))
            .filter(|s| s.is_finite())
            .unwrap_or(f64::INFINITY)
    }
}

/// Result of a successful minimisation.
#[derive(Clone, Debug, PartialEq)]
pub struct Minimum {
    /// Parameters at the minimum.
    pub params: Vec<f64>,
    /// Objective value at `params`.
    pub cost: f64,
    /// Iterations used.
    pub iterations: u64,
}

/// A local minimiser for an [`Objective`].
///
/// Implementations must return [`ArimaError::NonConvergence`] when they run
/// out of iterations or cannot leave an inadmissible start, never a
/// partially converged point.
pub trait Optimizer: Send + Sync {
    /// Minimises `objective` starting from the admissible point `start`.
    fn minimize(&self, objective: &dyn Objective, start: &[f64]) -> Result<Minimum, ArimaError>;
}

pub(crate) fn sum_sq(e: &[f64]) -> f64 {
    e.iter().map(|v| v * v).sum()
}

/// Damped Gauss-Newton (Levenberg-Marquardt) with a forward-difference
/// Jacobian.
///
/// Steps whose trial point is inadmissible or does not reduce the cost are
/// rejected and the damping grows, which shrinks the step toward the
/// current admissible point. When no admissible descent step exists even
/// with maximal damping the current point is returned as the constrained
/// optimum.
///
/// Residuals come from [`Objective::residuals`], which returns `None`
/// outside the stationary and invertible region; every trial point is
/// checked against it before a step is accepted. argmin's Gauss-Newton
/// solver takes undamped full steps without such a check.
///
/// # Example
///
/// ```
/// use crimecast_arima::GaussNewton;
///
/// let solver = GaussNewton::new().with_max_iters(50).with_tolerance(1e-9);
/// assert_eq!(solver.max_iters(), 50);
/// ```
#[derive(Clone, Debug)]
pub struct GaussNewton {
    max_iters: u64,
    tolerance: f64,
}

impl GaussNewton {
    /// Initial damping factor.
    const LAMBDA_INIT: f64 = 1e-3;
    /// Damping beyond which no step is attempted.
    const LAMBDA_MAX: f64 = 1e12;

    /// Creates a solver with `max_iters = 200` and `tolerance = 1e-10`.
    pub fn new() -> Self {
        Self {
            max_iters: 200,
            tolerance: 1e-10,
        }
    }

    /// Sets the iteration budget.
    pub fn with_max_iters(mut self, max_iters: u64) -> Self {
        self.max_iters = max_iters;
        self
    }

    /// Sets the relative cost/step tolerance used as stopping rule.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Returns the iteration budget.
    pub fn max_iters(&self) -> u64 {
        self.max_iters
    }

    /// Returns the stopping tolerance.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }
}

impl Default for GaussNewton {
    fn default() -> Self {
        Self::new()
    }
}

/// Forward-difference Jacobian of the residual vector; falls back to a
/// backward difference when the forward point is inadmissible.
fn jacobian(objective: &dyn Objective, x: &[f64], e: &[f64]) -> Option<Array2<f64>> {
    let mut jac = Array2::zeros((e.len(), x.len()));
    for k in 0..x.len() {
        let h = 1e-7 * x[k].abs().max(1.0);
        let mut probe = x.to_vec();
        probe[k] = x[k] + h;
        let (shifted, step) = match objective.residuals(&probe) {
            Some(r) => (r, h),
            None => {
                probe[k] = x[k] - h;
                (objective.residuals(&probe)?, -h)
            }
        };
        for (t, (a, b)) in shifted.iter().zip(e.iter()).enumerate() {
            jac[[t, k]] = (a - b) / step;
        }
    }
    Some(jac)
}

impl Optimizer for GaussNewton {
    fn minimize(&self, objective: &dyn Objective, start: &[f64]) -> Result<Minimum, ArimaError> {
        let mut x = start.to_vec();
        let mut e = objective
            .residuals(&x)
            .ok_or_else(|| ArimaError::non_convergence("start point is inadmissible"))?;
        let mut cost = sum_sq(&e);
        if x.is_empty() {
            return Ok(Minimum {
                params: x,
                cost,
                iterations: 0,
            });
        }

        let mut lambda = Self::LAMBDA_INIT;
        for iter in 1..=self.max_iters {
            let jac = jacobian(objective, &x, &e)
                .ok_or_else(|| ArimaError::non_convergence("Jacobian is not finite"))?;
            let jtj = jac.t().dot(&jac);
            let grad = jac.t().dot(&Array1::from(e.clone()));

            if grad.iter().map(|g| g.abs()).fold(0.0, f64::max) <= self.tolerance * (1.0 + cost) {
                debug!(iter, cost, "Gauss-Newton converged: gradient vanished");
                return Ok(Minimum {
                    params: x,
                    cost,
                    iterations: iter,
                });
            }

            let accepted = loop {
                if lambda > Self::LAMBDA_MAX {
                    break None;
                }
                let mut damped = jtj.clone();
                for i in 0..x.len() {
                    damped[[i, i]] += lambda * jtj[[i, i]].max(1e-12);
                }
                let Some(delta) = linalg::solve_spd(&damped, &grad.mapv(|g| -g)) else {
                    lambda *= 10.0;
                    continue;
                };
                let trial: Vec<f64> = x.iter().zip(delta.iter()).map(|(a, b)| a + b).collect();
                match objective.residuals(&trial) {
                    Some(trial_e) if sum_sq(&trial_e) < cost => {
                        let step_norm = delta.iter().map(|d| d * d).sum::<f64>().sqrt();
                        break Some((trial, trial_e, step_norm));
                    }
                    _ => lambda *= 10.0,
                }
            };

            let Some((trial, trial_e, step_norm)) = accepted else {
                debug!(iter, cost, "Gauss-Newton converged: no admissible descent step");
                return Ok(Minimum {
                    params: x,
                    cost,
                    iterations: iter,
                });
            };

            let new_cost = sum_sq(&trial_e);
            let rel_drop = (cost - new_cost) / cost.max(f64::MIN_POSITIVE);
            let x_norm = trial.iter().map(|v| v * v).sum::<f64>().sqrt();
            trace!(iter, cost = new_cost, lambda, step_norm, "Gauss-Newton step");

            x = trial;
            e = trial_e;
            cost = new_cost;
            lambda = (lambda / 10.0).max(1e-12);

            if rel_drop <= self.tolerance || step_norm <= self.tolerance * (1.0 + x_norm) {
                debug!(iter, cost, "Gauss-Newton converged");
                return Ok(Minimum {
                    params: x,
                    cost,
                    iterations: iter,
                });
            }
        }

        Err(ArimaError::non_convergence(format!(
            "Gauss-Newton exhausted {} iterations",
            self.max_iters
        )))
    }
}

/// Nelder-Mead simplex search backed by `argmin`.
///
/// Inadmissible vertices receive cost `f64::MAX` so the simplex contracts
/// away from them.
#[derive(Clone, Debug)]
pub struct NelderMead {
    max_iters: u64,
    sd_tolerance: f64,
    initial_step: f64,
}

impl NelderMead {
    /// Creates a solver with `max_iters = 1000`, `sd_tolerance = 1e-10`
    /// and an initial simplex edge of `0.1`.
    pub fn new() -> Self {
        Self {
            max_iters: 1000,
            sd_tolerance: 1e-10,
            initial_step: 0.1,
        }
    }

    /// Sets the iteration budget.
    pub fn with_max_iters(mut self, max_iters: u64) -> Self {
        self.max_iters = max_iters;
        self
    }

    /// Sets the standard-deviation tolerance of simplex costs.
    pub fn with_sd_tolerance(mut self, sd_tolerance: f64) -> Self {
        self.sd_tolerance = sd_tolerance;
        self
    }

    /// Sets the edge length of the initial simplex.
    pub fn with_initial_step(mut self, initial_step: f64) -> Self {
        self.initial_step = initial_step;
        self
    }
}

impl Default for NelderMead {
    fn default() -> Self {
        Self::new()
    }
}

/// Adapter exposing an [`Objective`] to argmin.
struct ArgminCost<'a> {
    objective: &'a dyn Objective,
}

impl CostFunction for ArgminCost<'_> {
    type Param = Vec<f64>;
    type Output = f64;

    fn cost(&self, params: &Self::Param) -> Result<Self::Output, argmin::core::Error> {
        let c = self.objective.cost(params);
        Ok(if c.is_finite() { c } else { f64::MAX })
    }
}

impl Optimizer for NelderMead {
    fn minimize(&self, objective: &dyn Objective, start: &[f64]) -> Result<Minimum, ArimaError> {
        let start_cost = objective.cost(start);
        if !start_cost.is_finite() {
            return Err(ArimaError::non_convergence("start point is inadmissible"));
        }
        if start.is_empty() {
            return Ok(Minimum {
                params: Vec::new(),
                cost: start_cost,
                iterations: 0,
            });
        }

        // Start vertex plus one step along each axis, pointing toward zero
        // so the vertices stay near the admissible region.
        let mut simplex: Vec<Vec<f64>> = Vec::with_capacity(start.len() + 1);
        simplex.push(start.to_vec());
        for i in 0..start.len() {
            let mut vertex = start.to_vec();
            vertex[i] -= self.initial_step.copysign(start[i]);
            simplex.push(vertex);
        }

        let solver = neldermead::NelderMead::new(simplex)
            .with_sd_tolerance(self.sd_tolerance)
            .map_err(|e| ArimaError::non_convergence(format!("invalid simplex: {e}")))?;
        let result = Executor::new(ArgminCost { objective }, solver)
            .configure(|state| state.max_iters(self.max_iters))
            .run()
            .map_err(|e| ArimaError::non_convergence(format!("Nelder-Mead failed: {e}")))?;

        let state = result.state();
        let iterations = state.get_iter();
        if iterations >= self.max_iters {
            return Err(ArimaError::non_convergence(format!(
                "Nelder-Mead exhausted {} iterations",
                self.max_iters
            )));
        }
        let params = state
            .get_best_param()
            .cloned()
            .ok_or_else(|| ArimaError::non_convergence("Nelder-Mead produced no estimate"))?;
        let cost = objective.cost(&params);
        if !cost.is_finite() {
            return Err(ArimaError::non_convergence(
                "Nelder-Mead ended on an inadmissible point",
            ));
        }
        debug!(iterations, cost, "Nelder-Mead converged");

        Ok(Minimum {
            params,
            cost,
            iterations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Residuals of fitting `y = a + b x` to fixed points.
    struct Line {
        x: Vec<f64>,
        y: Vec<f64>,
    }

    impl Objective for Line {
        fn dim(&self) -> usize {
            2
        }

        fn residuals(&self, params: &[f64]) -> Option<Vec<f64>> {
            Some(
                self.x
                    .iter()
                    .zip(self.y.iter())
                    .map(|(x, y)| y - params[0] - params[1] * x)
                    .collect(),
            )
        }
    }

    /// Rosenbrock written as residuals, admissible only for `x < 0.9`.
    struct BoundedRosenbrock;

    impl Objective for BoundedRosenbrock {
        fn dim(&self) -> usize {
            2
        }

        fn residuals(&self, params: &[f64]) -> Option<Vec<f64>> {
            if params[0] >= 0.9 {
                return None;
            }
            Some(vec![
                1.0 - params[0],
                10.0 * (params[1] - params[0] * params[0]),
            ])
        }
    }

    fn line() -> Line {
        Line {
            x: vec![0.0, 1.0, 2.0, 3.0, 4.0],
            y: vec![1.1, 2.9, 5.2, 6.8, 9.1],
        }
    }

    #[test]
    fn default_objective_cost_is_sum_of_squares() {
        let obj = line();
        let e = obj.residuals(&[1.0, 2.0]).unwrap();
        assert_relative_eq!(obj.cost(&[1.0, 2.0]), sum_sq(&e), epsilon = 1e-12);
    }

    #[test]
    fn gauss_newton_solves_linear_least_squares() {
        let min = GaussNewton::new().minimize(&line(), &[0.0, 0.0]).unwrap();
        // OLS solution: b = 1.99, a = 1.04
        assert_relative_eq!(min.params[1], 1.99, epsilon = 1e-5);
        assert_relative_eq!(min.params[0], 1.04, epsilon = 1e-5);
    }

    #[test]
    fn gauss_newton_stays_admissible() {
        let min = GaussNewton::new()
            .minimize(&BoundedRosenbrock, &[-1.0, 1.0])
            .unwrap();
        assert!(min.params[0] < 0.9);
        assert!(min.cost.is_finite());
        assert!(min.cost < BoundedRosenbrock.cost(&[-1.0, 1.0]));
    }

    #[test]
    fn gauss_newton_rejects_inadmissible_start() {
        let err = GaussNewton::new()
            .minimize(&BoundedRosenbrock, &[1.0, 1.0])
            .unwrap_err();
        assert!(matches!(err, ArimaError::NonConvergence { .. }));
    }

    #[test]
    fn gauss_newton_reports_exhausted_budget() {
        let err = GaussNewton::new()
            .with_max_iters(1)
            .with_tolerance(0.0)
            .minimize(&BoundedRosenbrock, &[-1.0, 1.0])
            .unwrap_err();
        assert!(matches!(err, ArimaError::NonConvergence { .. }));
    }

    #[test]
    fn nelder_mead_solves_linear_least_squares() {
        let min = NelderMead::new().minimize(&line(), &[0.5, 0.5]).unwrap();
        assert_relative_eq!(min.params[1], 1.99, epsilon = 1e-3);
        assert_relative_eq!(min.params[0], 1.04, epsilon = 1e-3);
    }

    #[test]
    fn nelder_mead_rejects_inadmissible_start() {
        let err = NelderMead::new()
            .minimize(&BoundedRosenbrock, &[2.0, 0.0])
            .unwrap_err();
        assert!(matches!(err, ArimaError::NonConvergence { .. }));
    }

    #[test]
    fn empty_parameter_vector_is_trivially_minimal() {
        struct Fixed;
        impl Objective for Fixed {
            fn dim(&self) -> usize {
                0
            }
            fn residuals(&self, _params: &[f64]) -> Option<Vec<f64>> {
                Some(vec![1.0, -2.0])
            }
        }
        let gn = GaussNewton::new().minimize(&Fixed, &[]).unwrap();
        let nm = NelderMead::new().minimize(&Fixed, &[]).unwrap();
        assert_eq!(gn.cost, 5.0);
        assert_eq!(nm.cost, 5.0);
        assert_eq!(gn.iterations, 0);
    }

    #[test]
    fn optimizers_are_object_safe() {
        let solvers: Vec<Box<dyn Optimizer>> =
            vec![Box::new(GaussNewton::new()), Box::new(NelderMead::new())];
        for solver in &solvers {
            let min = solver.minimize(&line(), &[0.5, 0.5]).unwrap();
            assert!(min.cost < line().cost(&[0.5, 0.5]));
        }
    }
}
