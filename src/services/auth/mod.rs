pub mod basic;
pub mod factory;

pub use basic::{BasicAuthVerifier, Credentials};
pub use factory::build_basic_auth_verifier;
