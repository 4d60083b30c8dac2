pub mod duration;
pub mod report;
pub mod state;
pub mod target;
