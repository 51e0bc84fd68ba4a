pub mod bar;
pub mod indicator;
pub mod level;
pub mod signal;

pub use bar::*;
pub use indicator::*;
pub use level::*;
pub use signal::*;
