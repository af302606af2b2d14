pub mod attendance;
pub mod dashboard;
pub mod identity;
pub mod pages;
