pub mod classifier;
pub mod intake;
pub mod session;
