pub mod evaluator;
pub mod generator;
pub mod overlap;
pub mod potential;
pub mod sampler;
pub mod store;
pub mod traits;

pub use evaluator::{EnergyEvaluator, EnergyReport};
pub use generator::{Generated, Generator};
pub use overlap::OverlapFilter;
pub use potential::PotentialModel;
pub use sampler::UniformBoxSampler;
pub use store::ParticleStore;
