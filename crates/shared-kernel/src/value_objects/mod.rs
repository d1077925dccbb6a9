// crates/shared-kernel/src/value_objects/mod.rs
pub mod numeric;
pub mod operand;

pub use numeric::parse_numeric;
pub use operand::Operand;
