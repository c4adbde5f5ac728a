pub mod composer;
pub mod config;
pub mod history;
pub mod line;
pub mod session;
