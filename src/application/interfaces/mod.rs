/// App lookups
pub mod app;
/// Organization lookups
pub mod organization;
/// Space lookups
pub mod space;

pub use app::*;
pub use organization::*;
pub use space::*;
