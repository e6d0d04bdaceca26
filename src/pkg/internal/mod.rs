pub mod adaptors;
pub mod auth;
pub mod salary;
