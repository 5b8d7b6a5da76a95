// crates/sbml-pkg/src/packages/distrib/mod.rs

//! Distributions: parametric probability distributions.

mod distribution;
pub mod errors;

pub use distribution::{
    Distribution, NORMAL_DISTRIBUTION_SCHEMA, NormalDistribution, POISSON_DISTRIBUTION_SCHEMA,
    PoissonDistribution, UNIFORM_DISTRIBUTION_SCHEMA, UniformDistribution,
};
