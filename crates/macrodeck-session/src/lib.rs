//! Macrodeck Session - credentials, port allocation, and role authentication
//! for a hosted session.

pub mod auth;
pub mod config;
pub mod credentials;
pub mod port;
pub mod random;

pub use config::{SessionConfig, SessionSettings};
pub use credentials::CredentialPair;
pub use port::{find_open_port, find_open_port_async, PortRange};
pub use random::SharedRng;
