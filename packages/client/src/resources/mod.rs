//! The `/eth/v1/beacon` resource tree.
//!
//! ```text
//! beacon
//! ├── genesis
//! ├── states/{state_id}
//! │   ├── root
//! │   ├── fork
//! │   ├── finality_checkpoints
//! │   └── validators[/{validator_id}]
//! ├── headers[/{block_id}]
//! ├── blocks[/{block_id}]
//! │   ├── root
//! │   └── attestations
//! └── pool
//!     ├── attestations
//!     ├── attester_slashings
//!     ├── proposer_slashings
//!     └── voluntary_exits
//! ```

pub mod beacon;
pub mod blocks;
pub mod headers;
pub mod pool;
pub mod states;

pub use beacon::BeaconResource;
pub use blocks::{BlockResource, BlocksResource};
pub use headers::{HeaderFilter, HeadersResource};
pub use pool::{AttestationFilter, PoolResource};
pub use states::{StateResource, StatesResource, ValidatorFilter, ValidatorsResource};
