pub mod dataset;
pub mod export;
pub mod report;
pub mod teams;
pub mod yearly;
