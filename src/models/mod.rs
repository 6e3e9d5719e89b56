pub mod disease;
pub mod enums;
pub mod patient;

pub use disease::*;
pub use patient::*;
