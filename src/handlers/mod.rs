//! HTTP handlers. Each one validates, acquires a connection, runs one statement, and shapes the reply;
//! the connection goes back to the pool when the handler returns.

pub mod advisory;
pub mod auth;
pub mod prices;
pub mod reference;
pub use advisory::*;
pub use auth::*;
pub use prices::*;
pub use reference::*;
