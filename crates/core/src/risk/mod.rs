pub mod benchmark_weights;
pub mod benchmarks;
pub mod questionnaire;
pub mod retirement;
pub mod scoring;
pub mod tilt;
