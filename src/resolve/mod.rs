pub mod config;
pub mod waiter;

pub use config::PollConfig;
pub use waiter::resolve;
