pub mod init;
pub mod serve;

pub use init::{run_init, InitArgs};
pub use serve::{run_serve, ServeArgs};
