//! CLI command implementations.

mod generate;
mod payload;
mod show;

pub use generate::generate;
pub use payload::print_payload;
pub use show::show;
