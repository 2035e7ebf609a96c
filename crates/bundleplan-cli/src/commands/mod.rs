//! Command implementations.
//!
//! Each command lives in its own module and exposes an `execute` function
//! taking the parsed arguments.

pub mod check;
pub mod init;
pub mod resolve;
pub mod schema;
pub(crate) mod utils;

pub use check::execute as check_execute;
pub use init::execute as init_execute;
pub use resolve::execute as resolve_execute;
pub use schema::execute as schema_execute;
