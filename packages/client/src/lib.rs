//! Typed client for the Eth2 beacon node HTTP API.
//!
//! Callers walk a tree of resource nodes from [`BeaconNodeClient::beacon`],
//! naming states, blocks and validators with typed identifiers, and finish
//! with an operation. Only the operations an endpoint supports are callable:
//! they come from the capability traits [`Identified`], [`Listable`] and
//! [`Submittable`], so bring those into scope (or `use
//! beacon_node_client::prelude::*`).
//!
//! ```no_run
//! use beacon_node_client::prelude::*;
//! use beacon_node_api::ValidatorStatus;
//!
//! let client = BeaconNodeClient::from_env()?;
//! let head = client.beacon().states().with_id(NamedStateId::Head);
//!
//! let pending = head
//!     .validators()
//!     .find_by_status([ValidatorStatus::PendingInitialized])?
//!     .data;
//! println!("{} pending validators", pending.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Each operation performs exactly one blocking request. Non-2xx responses
//! become [`ClientError::Client`] or [`ClientError::Server`] carrying the
//! node's [`ErrorMessage`](beacon_node_api::ErrorMessage); nothing is retried.

pub mod client;
pub mod config;
pub mod decode;
pub mod dispatch;
pub mod error;
pub mod http;
pub mod identifier;
pub mod node;
pub mod query;
pub mod resources;
pub mod translate;
pub mod transport;

#[cfg(test)]
pub(crate) mod test_utils;

pub use client::BeaconNodeClient;
pub use config::ClientConfig;
pub use error::{ClientError, DecodeError};
pub use http::HttpTransport;
pub use identifier::{
    BlockId, Identifier, IdentifierError, NamedBlockId, NamedStateId, StateId, ValidatorId,
};
pub use node::{Collection, Identified, Listable, Node, Pool, Resource, Single, Submittable};
pub use query::{NoFilter, QueryFilter, QueryParams};
pub use resources::{AttestationFilter, HeaderFilter, ValidatorFilter};
pub use transport::{HttpRequest, HttpResponse, Method, Transport, TransportError};

/// Everything needed to navigate the tree and call operations.
pub mod prelude {
    pub use crate::{
        BeaconNodeClient, BlockId, ClientConfig, ClientError, Identified, Listable,
        NamedBlockId, NamedStateId, Resource, StateId, Submittable, ValidatorId,
    };
}
