//! Command implementations for locsync-cli

pub mod init;
pub mod remote;
pub mod stages;
pub mod verify;

pub use init::run_init;
pub use remote::{run_drop_keysets, run_list};
pub use stages::{Stage, plan, run_stages};
pub use verify::run_verify;
