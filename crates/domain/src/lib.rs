pub mod enforce;
pub mod value_objects;

pub use enforce::{Enforced, RangeEnforcer, enforce_range, invoke, range_enforcer};
pub use value_objects::ClampRange;
