pub mod deploy;
pub mod preview;
