//! # passport-riot
//!
//! Riot Games API client for the monad.passport linking workflow.
//!
//! Covers the three endpoints the workflow needs:
//!
//! - **account-v1** — identity by Riot ID, served from a continental
//!   routing cluster ([`RoutingCluster`]);
//! - **summoner-v4** — platform-scoped summoner record (carries the
//!   current profile icon used for challenge verification);
//! - **league-v4** — ranked entries, reduced to the solo-queue placement.
//!
//! All operations return [`Result<T, RiotError>`](RiotError). Requests
//! carry the API key in the `X-Riot-Token` header and run with bounded
//! connect/request timeouts; nothing is retried automatically.
//!
//! The [`RiotApi`] trait is the seam consumed by `passport-core`, so
//! services can be tested without network access.

mod client;
mod error;
mod http;
mod region;
mod traits;
mod types;

pub use client::RiotClient;
pub use error::{Result, RiotError};
pub use region::{Region, RoutingCluster};
pub use traits::RiotApi;
pub use types::{LeagueEntry, Rank, RankLookup, ResolvedAccount, RiotAccount, Summoner};
