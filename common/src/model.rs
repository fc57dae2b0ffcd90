pub mod breakdown;
pub mod factors;
pub mod inputs;
