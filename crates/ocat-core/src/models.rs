pub mod assessment;
pub mod risk;
