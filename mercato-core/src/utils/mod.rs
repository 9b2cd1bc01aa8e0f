pub mod time;

pub use time::now_timestamp;
