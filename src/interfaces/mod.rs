//! Interface adapters (HTTP).

pub mod http;
