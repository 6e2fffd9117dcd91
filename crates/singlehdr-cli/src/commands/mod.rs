pub mod build;
pub mod check;
pub mod common;
pub mod config;
pub mod order;

pub use build::Build;
pub use check::Check;
pub use config::Config;
pub use order::Order;
