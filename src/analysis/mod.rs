//! Pure shaping and scanning helpers sitting between the Helius gateway
//! and the web handlers. Nothing in here performs I/O.

pub mod holders;
pub mod scanner;
pub mod token_info;
