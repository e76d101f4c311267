pub mod controls;
pub mod dashboard;
pub mod pie;
pub mod scatter;
