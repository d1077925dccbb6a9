// crates/cli/src/lib.rs
pub mod app;
pub mod args;
pub mod logging;
pub mod parsers;
pub mod presentation;
pub mod value_enum;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
