use std::{env, net::SocketAddr};

use crate::error::ServerError;

const DEFAULT_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, Clone)]
pub struct Settings {
    pub bind_address: SocketAddr,
}

impl Settings {
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_addr(env::var("GREETING_ADDR").ok().as_deref())
    }

    fn from_addr(addr: Option<&str>) -> Result<Self, ServerError> {
        let raw = addr.unwrap_or(DEFAULT_ADDR);
        let bind_address = raw.parse().map_err(|_| ServerError::InvalidAddress(raw.to_string()))?;
        Ok(Self { bind_address })
    }
}
