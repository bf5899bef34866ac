pub mod aggregate;
pub mod conf;
pub mod log;
pub mod logging;
pub mod normalize;
pub mod report;
pub mod run;
