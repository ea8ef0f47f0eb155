pub mod calculator;
pub mod export;
pub mod index;
pub mod loader;
pub mod logic;
pub mod session;

pub use index::{DayIndex, InvalidRecordPolicy};
pub use logic::Core;
pub use session::Session;
