pub mod estimator;
pub mod mc_engine;
pub mod sampler;
