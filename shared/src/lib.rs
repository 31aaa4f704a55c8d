// Input models shared by every fmtkit helper family.
pub mod models;
pub mod utils;

pub use models::{DateInput, Numeric, PasswordOptions, TimeUnit};
