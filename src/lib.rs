pub mod common;
pub mod utils;

#[cfg(feature = "client")]
pub mod client;
#[cfg(feature = "server")]
pub mod server;
