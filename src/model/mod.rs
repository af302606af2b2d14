pub mod attendance;
pub mod challenge;
pub mod employee;
