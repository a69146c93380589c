//! Platform regions and their continental routing clusters.

use serde::{Deserialize, Serialize};

use crate::error::RiotError;

/// League platform region codes.
///
/// Summoner and league lookups are served from the platform host; account
/// lookups route through the continental cluster instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Na1,
    Br1,
    La1,
    La2,
    Euw1,
    Eun1,
    Tr1,
    Ru,
    Kr,
    Jp1,
    Oc1,
}

/// Continental routing cluster for the account-v1 API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutingCluster {
    Americas,
    Europe,
    Asia,
    Sea,
}

impl Region {
    /// Platform code as it appears in API hostnames.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Na1 => "na1",
            Self::Br1 => "br1",
            Self::La1 => "la1",
            Self::La2 => "la2",
            Self::Euw1 => "euw1",
            Self::Eun1 => "eun1",
            Self::Tr1 => "tr1",
            Self::Ru => "ru",
            Self::Kr => "kr",
            Self::Jp1 => "jp1",
            Self::Oc1 => "oc1",
        }
    }

    /// Continental cluster serving account-v1 lookups for this platform.
    #[must_use]
    pub fn routing_cluster(self) -> RoutingCluster {
        match self {
            Self::Na1 | Self::Br1 | Self::La1 | Self::La2 => RoutingCluster::Americas,
            Self::Euw1 | Self::Eun1 | Self::Tr1 | Self::Ru => RoutingCluster::Europe,
            Self::Kr | Self::Jp1 => RoutingCluster::Asia,
            Self::Oc1 => RoutingCluster::Sea,
        }
    }
}

impl RoutingCluster {
    /// Cluster code as it appears in API hostnames.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Americas => "americas",
            Self::Europe => "europe",
            Self::Asia => "asia",
            Self::Sea => "sea",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for RoutingCluster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Region {
    type Err = RiotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "na1" => Ok(Self::Na1),
            "br1" => Ok(Self::Br1),
            "la1" => Ok(Self::La1),
            "la2" => Ok(Self::La2),
            "euw1" => Ok(Self::Euw1),
            "eun1" => Ok(Self::Eun1),
            "tr1" => Ok(Self::Tr1),
            "ru" => Ok(Self::Ru),
            "kr" => Ok(Self::Kr),
            "jp1" => Ok(Self::Jp1),
            "oc1" => Ok(Self::Oc1),
            other => Err(RiotError::ParseError {
                detail: format!("unknown region: {other}"),
            }),
        }
    }
}
