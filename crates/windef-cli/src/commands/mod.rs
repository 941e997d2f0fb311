pub mod dump;
pub mod list;
pub mod loader;
pub mod resolve;
pub mod sig;
