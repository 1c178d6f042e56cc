use crate::token::{Credentials, DEFAULT_TTL_SECS};
use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Token service settings. Every flag can also come from the environment
/// (or a `.env` file loaded before parsing).
#[derive(Debug, Clone, Parser)]
#[command(name = "roomcall-server", about = "Mints video room access tokens")]
pub struct ServerConfig {
    /// Account identifier the tokens are issued under.
    #[arg(long, env = "TWILIO_ACCOUNT_SID", hide_env_values = true)]
    pub account_sid: String,

    /// API key SID, used as the token issuer.
    #[arg(long, env = "TWILIO_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// API key secret, used as the HMAC signing key.
    #[arg(long, env = "TWILIO_API_SECRET", hide_env_values = true)]
    pub api_secret: String,

    #[arg(long, env = "ROOMCALL_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    #[arg(long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Token lifetime in seconds.
    #[arg(long, env = "ROOMCALL_TOKEN_TTL", default_value_t = DEFAULT_TTL_SECS)]
    pub token_ttl: u64,
}

impl ServerConfig {
    pub fn credentials(&self) -> Credentials {
        Credentials {
            account_sid: self.account_sid.clone(),
            api_key: self.api_key.clone(),
            api_secret: self.api_secret.clone(),
        }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
