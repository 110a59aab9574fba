pub mod allocation;
pub mod comparison;
pub mod contract;
pub mod portfolio;
pub mod profile;
