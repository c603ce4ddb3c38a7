mod enums;
mod flight;
mod home_base;
mod mission;
mod point;
mod target;
mod units;

pub use enums::*;
pub use flight::*;
pub use home_base::*;
pub use mission::*;
pub use point::*;
pub use target::*;
pub use units::*;
