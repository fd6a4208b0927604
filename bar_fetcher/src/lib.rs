pub mod cli;
pub mod errors;
pub mod logging;
pub mod models;
pub mod normalize;
pub mod providers;
pub mod requests;
pub mod tz;

pub use requests::historical::fetch_day_bars;
