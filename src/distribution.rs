//! Distribution traits.
//!
//! Point functions (`pdf`, `cdf`, quantiles) are total: they accept any
//! `f64` input and let invalid combinations propagate through
//! floating-point arithmetic as NaN or infinity. Moments that diverge for
//! part of the parameter space return [`StatsResult`] instead, so an
//! undefined moment cannot be consumed as a number by mistake.

use crate::error::StatsResult;

/// Summary statistics of a probability distribution.
pub trait Distribution {
    /// Mean of the distribution, if defined.
    fn mean(&self) -> StatsResult<f64>;

    /// Variance of the distribution, if defined.
    fn var(&self) -> StatsResult<f64>;

    /// Standard deviation, if defined.
    fn std(&self) -> StatsResult<f64> {
        Ok(self.var()?.sqrt())
    }

    /// Median of the distribution.
    fn median(&self) -> f64;

    /// Mode of the distribution.
    fn mode(&self) -> f64;

    /// Differential entropy in nats.
    fn entropy(&self) -> f64;

    /// Skewness, if defined.
    fn skewness(&self) -> StatsResult<f64>;

    /// Excess kurtosis, if defined.
    fn kurtosis(&self) -> StatsResult<f64>;
}

/// Point functions of a continuous distribution.
pub trait ContinuousDistribution: Distribution {
    /// Probability density function at `x`.
    fn pdf(&self, x: f64) -> f64;

    /// Natural log of the PDF at `x`.
    fn log_pdf(&self, x: f64) -> f64;

    /// Cumulative distribution function at `x`.
    fn cdf(&self, x: f64) -> f64;

    /// Survival function `1 - cdf(x)`.
    fn sf(&self, x: f64) -> f64;

    /// Percent point function (quantile, inverse CDF) at probability `p`.
    ///
    /// `p` is not range-checked; out-of-range values follow real-power
    /// semantics and may produce NaN or infinity.
    fn ppf(&self, p: f64) -> f64;

    /// Inverse survival function at probability `p`.
    ///
    /// Same permissiveness as [`ppf`](Self::ppf).
    fn isf(&self, p: f64) -> f64;
}
