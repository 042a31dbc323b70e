//! pareto-dist - Pareto Type I distribution
//!
//! Closed-form statistical functions for the Pareto Type I distribution,
//! parameterized by a scale θ > 0 (minimum value) and a shape α > 0 (tail
//! index): density, cumulative probability, quantile, and the analytic
//! moments.
//!
//! Every operation is a stateless, deterministic scalar evaluation. The
//! crate is deliberately permissive: construction and the point functions
//! never validate their inputs, and invalid parameter combinations
//! propagate through floating-point arithmetic as NaN or infinity. The
//! advisory [`check_parameters`] and [`check_support`] functions are
//! available to callers that want strict semantics. The one hard error
//! surface is the divergent-moment regime: [`Distribution::mean`],
//! [`Distribution::var`], [`Distribution::skewness`], and
//! [`Distribution::kurtosis`] return [`StatsError::UndefinedMoment`] where
//! the corresponding moment has no finite value, so it cannot be silently
//! consumed as a number.
//!
//! # Example
//!
//! ```
//! use pareto_dist::{Pareto, ContinuousDistribution, Distribution};
//!
//! let p = Pareto::new(2.0, 3.0); // scale=2, shape=3
//!
//! assert!((p.mean().unwrap() - 3.0).abs() < 1e-12);
//! assert!((p.cdf(p.median()) - 0.5).abs() < 1e-12);
//!
//! // Heavy tail: the variance diverges for shape ≤ 2
//! assert!(Pareto::new(2.0, 1.5).var().is_err());
//! ```

mod distribution;
mod error;
mod pareto;

pub use distribution::{ContinuousDistribution, Distribution};
pub use error::{StatsError, StatsResult};
pub use pareto::{check_parameters, check_support, Pareto};
