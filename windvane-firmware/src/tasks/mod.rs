//! Embassy async tasks

pub mod speed;

pub use speed::{speed_task, SpeedHandler};
