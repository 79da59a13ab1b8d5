//! Error types for the deployer and harness.

use std::fmt;

/// Deployer error type.
#[derive(Debug)]
pub enum Error {
    /// Configuration error.
    Config(String),
    /// Blueprint could not be read or is not a wasm module.
    Wasm(String),
    /// Network or RPC communication error.
    Network(String),
    /// The creation transaction failed or the constructor rejected it.
    Deploy(String),
    /// A contract call or view failed.
    Call(String),
}

impl Error {
    pub(crate) fn network(err: impl fmt::Display) -> Self {
        Error::Network(err.to_string())
    }

    pub(crate) fn call(method: &str, err: impl fmt::Debug) -> Self {
        Error::Call(format!("{method}: {err:?}"))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(msg) => write!(f, "config error: {msg}"),
            Error::Wasm(msg) => write!(f, "wasm error: {msg}"),
            Error::Network(msg) => write!(f, "network error: {msg}"),
            Error::Deploy(msg) => write!(f, "deploy error: {msg}"),
            Error::Call(msg) => write!(f, "call error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}
