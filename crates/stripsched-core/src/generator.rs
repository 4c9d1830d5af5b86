//! Random instance generation. Not part of the core algorithm -- an
//! external collaborator the driver/compare harness calls to produce
//! instances to feed the solver -- with dimensions drawn uniformly or from
//! a binomial/geometric distribution and clamped into the requested range.

use crate::types::{Instance, Item, SolverError};
use rand::Rng;
use rand_distr::{Binomial, Distribution, Geometric};

/// An inclusive `[low, high]` range for a job dimension.
pub type DimRange = (u32, u32);

pub struct Generator;

impl Generator {
    /// Each dimension drawn uniformly from its inclusive range, mirroring
    /// `gen_uniform_jobs`'s `random.randrange` calls.
    pub fn uniform(
        rng: &mut impl Rng,
        n: u32,
        strip_width: u32,
        width_range: DimRange,
        height_range: DimRange,
        rotation: bool,
    ) -> Result<Instance, SolverError> {
        validate_range(width_range)?;
        validate_range(height_range)?;
        let items: Vec<Item> = (0..n)
            .map(|_| {
                Item::new(
                    rng.random_range(width_range.0..=width_range.1),
                    rng.random_range(height_range.0..=height_range.1),
                )
            })
            .collect();
        Instance::new(strip_width, items, rotation)
    }

    /// Each dimension drawn from `Binomial(trials, p)` and offset/clamped
    /// into the requested range.
    pub fn binomial(
        rng: &mut impl Rng,
        n: u32,
        strip_width: u32,
        width_range: DimRange,
        height_range: DimRange,
        trials: u64,
        p: f64,
        rotation: bool,
    ) -> Result<Instance, SolverError> {
        validate_range(width_range)?;
        validate_range(height_range)?;
        let dist = Binomial::new(trials, p)
            .map_err(|_| SolverError::InvalidInstance("invalid binomial parameters".to_string()))?;
        let items: Vec<Item> = (0..n)
            .map(|_| {
                Item::new(
                    clamp_into_range(dist.sample(rng), width_range),
                    clamp_into_range(dist.sample(rng), height_range),
                )
            })
            .collect();
        Instance::new(strip_width, items, rotation)
    }

    /// Each dimension drawn from `Geometric(p)` and offset/clamped into the
    /// requested range.
    pub fn geometric(
        rng: &mut impl Rng,
        n: u32,
        strip_width: u32,
        width_range: DimRange,
        height_range: DimRange,
        p: f64,
        rotation: bool,
    ) -> Result<Instance, SolverError> {
        validate_range(width_range)?;
        validate_range(height_range)?;
        let dist = Geometric::new(p)
            .map_err(|_| SolverError::InvalidInstance("invalid geometric parameter".to_string()))?;
        let items: Vec<Item> = (0..n)
            .map(|_| {
                Item::new(
                    clamp_into_range(dist.sample(rng), width_range),
                    clamp_into_range(dist.sample(rng), height_range),
                )
            })
            .collect();
        Instance::new(strip_width, items, rotation)
    }
}

/// Rejects a `(low, high)` range with `low > high`, which would otherwise
/// underflow `clamp_into_range`'s span computation or panic inside
/// `rng.random_range`.
fn validate_range(range: DimRange) -> Result<(), SolverError> {
    let (low, high) = range;
    if low > high {
        return Err(SolverError::InvalidInstance(format!(
            "range low {low} is greater than high {high}"
        )));
    }
    Ok(())
}

/// Offsets an unbounded non-negative sample into `[low, high]` by clamping
/// it to the range's span and adding `low`. Assumes `low <= high`, checked
/// by `validate_range` before any caller reaches this.
fn clamp_into_range(sample: u64, range: DimRange) -> u32 {
    let (low, high) = range;
    let span = (high - low) as u64;
    low + sample.min(span) as u32
}
