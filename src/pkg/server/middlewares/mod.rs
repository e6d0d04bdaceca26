pub mod authn;
pub mod gate;
