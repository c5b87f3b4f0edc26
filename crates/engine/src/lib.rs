pub mod aggregator;
pub mod display;
pub mod expansion;
pub mod latest;
pub mod page;
