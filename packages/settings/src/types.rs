// ABOUTME: Type definitions for wallet authentication settings
// ABOUTME: Typed value enums and the persisted settings record

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the configuration blob holding the settings record.
pub const SETTINGS_CONFIG_NAME: &str = "wallet_auth.settings";

#[derive(Debug, Error)]
#[error("Unknown value: {0}. Must be one of: {1}")]
pub struct UnknownValue(pub String, pub String);

/// Blockchain network used for wallet authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Sepolia,
    Polygon,
    Bsc,
    Arbitrum,
    Optimism,
}

impl Network {
    pub const ALL: [Network; 6] = [
        Network::Mainnet,
        Network::Sepolia,
        Network::Polygon,
        Network::Bsc,
        Network::Arbitrum,
        Network::Optimism,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Sepolia => "sepolia",
            Network::Polygon => "polygon",
            Network::Bsc => "bsc",
            Network::Arbitrum => "arbitrum",
            Network::Optimism => "optimism",
        }
    }
}

impl FromStr for Network {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Network::ALL
            .iter()
            .find(|n| n.as_str() == s)
            .copied()
            .ok_or_else(|| UnknownValue(s.to_string(), join_values(&Network::ALL.map(|n| n.as_str()))))
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How end users may authenticate once their wallet is connected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMethod {
    Email,
    Social,
}

impl AuthMethod {
    pub const ALL: [AuthMethod; 2] = [AuthMethod::Email, AuthMethod::Social];

    pub fn as_str(&self) -> &'static str {
        match self {
            AuthMethod::Email => "email",
            AuthMethod::Social => "social",
        }
    }
}

impl FromStr for AuthMethod {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AuthMethod::ALL
            .iter()
            .find(|m| m.as_str() == s)
            .copied()
            .ok_or_else(|| {
                UnknownValue(s.to_string(), join_values(&AuthMethod::ALL.map(|m| m.as_str())))
            })
    }
}

impl fmt::Display for AuthMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Social login providers that may be offered alongside wallet auth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialProvider {
    Google,
    Twitter,
    Discord,
    Bluesky,
}

impl SocialProvider {
    pub const ALL: [SocialProvider; 4] = [
        SocialProvider::Google,
        SocialProvider::Twitter,
        SocialProvider::Discord,
        SocialProvider::Bluesky,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SocialProvider::Google => "google",
            SocialProvider::Twitter => "twitter",
            SocialProvider::Discord => "discord",
            SocialProvider::Bluesky => "bluesky",
        }
    }
}

impl FromStr for SocialProvider {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SocialProvider::ALL
            .iter()
            .find(|p| p.as_str() == s)
            .copied()
            .ok_or_else(|| {
                UnknownValue(
                    s.to_string(),
                    join_values(&SocialProvider::ALL.map(|p| p.as_str())),
                )
            })
    }
}

impl fmt::Display for SocialProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn join_values(values: &[&str]) -> String {
    values.join(", ")
}

/// The validated settings record as persisted under
/// [`SETTINGS_CONFIG_NAME`]. Field names are the storage wire names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletAuthSettings {
    pub network: Network,
    pub enable_auto_connect: bool,
    /// Seconds an authentication challenge stays valid. Always within
    /// [60, 3600].
    pub nonce_lifetime: i64,
    /// Subset of [`AuthMethod::ALL`], in declaration order, no duplicates.
    pub authentication_methods: Vec<AuthMethod>,
    /// Subset of [`SocialProvider::ALL`], in declaration order.
    pub allowed_socials: Vec<SocialProvider>,
    /// Internal path to redirect to after successful authentication.
    /// Non-empty after trimming.
    pub redirect_on_success: String,
}

impl Default for WalletAuthSettings {
    fn default() -> Self {
        Self {
            network: Network::Mainnet,
            enable_auto_connect: true,
            nonce_lifetime: 300,
            authentication_methods: AuthMethod::ALL.to_vec(),
            allowed_socials: SocialProvider::ALL.to_vec(),
            redirect_on_success: "/user".to_string(),
        }
    }
}
