mod disease;
mod patient;
mod symptom;

pub use disease::*;
pub use patient::*;
pub use symptom::*;
