// UI Module
// Text front end over the RSA core

pub mod shell;

pub use shell::{encrypt_once, report, run};
