pub mod chart;
pub mod colors;
pub mod input;
pub mod logging;
pub mod print;
