//! 领域枚举

mod movement_type;

pub use movement_type::*;
