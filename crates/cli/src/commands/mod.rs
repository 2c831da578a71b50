pub mod update;
pub mod watch;
