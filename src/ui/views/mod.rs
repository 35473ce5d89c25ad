pub mod quiz;
pub mod welcome;
