pub mod csrf;
pub mod provider;
pub mod session;
