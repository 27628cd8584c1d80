pub mod alert;
pub mod crop;
pub mod farm;
pub mod schedule;
pub mod session;
pub mod weather;

pub use alert::*;
pub use crop::*;
pub use farm::*;
pub use schedule::*;
pub use session::*;
pub use weather::*;
