//! Pareto distribution (Type I).

use crate::distribution::{ContinuousDistribution, Distribution};
use crate::error::{StatsError, StatsResult};

/// Returns true iff `scale` (θ) and `shape` (α) are valid Pareto parameters,
/// i.e. both strictly positive.
///
/// This is an advisory check: no evaluation on [`Pareto`] calls it
/// internally. Callers that want strict semantics validate up front;
/// otherwise invalid parameters propagate through the arithmetic as NaN or
/// infinity.
pub fn check_parameters(scale: f64, shape: f64) -> bool {
    scale > 0.0 && shape > 0.0
}

/// Returns true iff `x` is a plausible support point, i.e. `x >= 0`.
///
/// Note this checks non-negativity, not `x >= scale`, even though the
/// mathematical support is `x >= θ`. The check is θ-independent on purpose:
/// points in `0 <= x < θ` are inside the conventional domain of the
/// evaluation functions (they map to density 0 / CDF 0) and are not
/// rejected here.
pub fn check_support(x: f64) -> bool {
    x >= 0.0
}

/// Pareto distribution (Type I).
///
/// A power-law distribution with PDF:
///
/// f(x; θ, α) = α·θ^α / x^(α+1)  for x ≥ θ
///
/// where:
/// - θ > 0 is the scale parameter (minimum value, lower support bound)
/// - α > 0 is the shape parameter (tail index)
///
/// Used to model heavy-tailed phenomena: wealth distribution (the 80-20
/// rule), city population sizes, file sizes, web traffic.
///
/// Construction does not validate the parameters; use
/// [`check_parameters`] if strict semantics are needed. Evaluations with
/// invalid parameters yield NaN or infinity rather than erroring. The one
/// exception is the divergent-moment regime: [`mean`](Distribution::mean)
/// and friends return a typed error there.
///
/// # Example
///
/// ```
/// use pareto_dist::{Pareto, ContinuousDistribution, Distribution};
///
/// let p = Pareto::new(1.0, 2.0); // scale=1, shape=2
/// assert!((p.pdf(2.0) - 0.25).abs() < 1e-12);
/// assert!((p.mean().unwrap() - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Pareto {
    /// Scale parameter (minimum value, θ > 0)
    scale: f64,
    /// Shape parameter (tail index, α > 0)
    shape: f64,
}

impl Pareto {
    /// Create a Pareto distribution with the given scale (θ) and shape (α).
    ///
    /// Parameters are taken as-is; see [`check_parameters`] for the
    /// advisory validity check.
    pub fn new(scale: f64, shape: f64) -> Self {
        Self { scale, shape }
    }

    /// Create a standard Pareto distribution (scale = 1).
    pub fn standard(shape: f64) -> Self {
        Self::new(1.0, shape)
    }

    /// Get the scale parameter θ.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Get the shape parameter α.
    pub fn shape(&self) -> f64 {
        self.shape
    }

    fn undefined(&self, moment: &'static str, requires: &'static str) -> StatsError {
        StatsError::UndefinedMoment {
            moment,
            shape: self.shape,
            requires,
        }
    }
}

impl Distribution for Pareto {
    /// Mean α·θ/(α−1); undefined for α ≤ 1.
    fn mean(&self) -> StatsResult<f64> {
        if self.shape <= 1.0 {
            return Err(self.undefined("mean", "shape > 1"));
        }
        Ok(self.shape * self.scale / (self.shape - 1.0))
    }

    /// Variance θ²·α/((α−1)²·(α−2)); undefined for α ≤ 2.
    fn var(&self) -> StatsResult<f64> {
        if self.shape <= 2.0 {
            return Err(self.undefined("variance", "shape > 2"));
        }
        let alpha = self.shape;
        let theta = self.scale;
        Ok((theta * theta * alpha) / ((alpha - 1.0).powi(2) * (alpha - 2.0)))
    }

    /// Median θ·2^(1/α). Always defined.
    fn median(&self) -> f64 {
        self.scale * 2.0_f64.powf(1.0 / self.shape)
    }

    /// Mode θ: the density is maximized at the lower support bound.
    fn mode(&self) -> f64 {
        self.scale
    }

    fn entropy(&self) -> f64 {
        (self.scale / self.shape).ln() + 1.0 + 1.0 / self.shape
    }

    /// Skewness; undefined for α ≤ 3.
    fn skewness(&self) -> StatsResult<f64> {
        if self.shape <= 3.0 {
            return Err(self.undefined("skewness", "shape > 3"));
        }
        let alpha = self.shape;
        Ok(2.0 * (1.0 + alpha) / (alpha - 3.0) * ((alpha - 2.0) / alpha).sqrt())
    }

    /// Excess kurtosis; undefined for α ≤ 4.
    fn kurtosis(&self) -> StatsResult<f64> {
        if self.shape <= 4.0 {
            return Err(self.undefined("kurtosis", "shape > 4"));
        }
        let alpha = self.shape;
        Ok(6.0 * (alpha.powi(3) + alpha.powi(2) - 6.0 * alpha - 2.0)
            / (alpha * (alpha - 3.0) * (alpha - 4.0)))
    }
}

impl ContinuousDistribution for Pareto {
    fn pdf(&self, x: f64) -> f64 {
        if x < self.scale {
            return 0.0;
        }
        self.shape * self.scale.powf(self.shape) / x.powf(self.shape + 1.0)
    }

    fn log_pdf(&self, x: f64) -> f64 {
        if x < self.scale {
            return f64::NEG_INFINITY;
        }
        self.shape.ln() + self.shape * self.scale.ln() - (self.shape + 1.0) * x.ln()
    }

    fn cdf(&self, x: f64) -> f64 {
        if x < self.scale {
            return 0.0;
        }
        1.0 - (self.scale / x).powf(self.shape)
    }

    fn sf(&self, x: f64) -> f64 {
        if x < self.scale {
            return 1.0;
        }
        (self.scale / x).powf(self.shape)
    }

    /// Quantile θ·(1−p)^(−1/α).
    ///
    /// p = 0 yields θ, p = 1 yields +∞, and p outside [0, 1] follows
    /// `powf` semantics (NaN for a negative base with fractional
    /// exponent).
    fn ppf(&self, p: f64) -> f64 {
        self.scale * (1.0 - p).powf(-1.0 / self.shape)
    }

    /// Inverse survival θ·p^(−1/α), with the same permissiveness as
    /// [`ppf`](ContinuousDistribution::ppf).
    fn isf(&self, p: f64) -> f64 {
        self.scale * p.powf(-1.0 / self.shape)
    }
}
