pub mod day;
pub mod tracker;
