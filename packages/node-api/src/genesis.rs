//! Genesis details: `GET /eth/v1/beacon/genesis`.

use serde::{Deserialize, Serialize};

/// Details of the chain's genesis.
///
/// # Example
///
/// ```json
/// {
///   "genesis_time": "1606824023",
///   "genesis_validators_root": "0x4b363db94e286120d76eb905340fdd4e54bfe9f06bf33ff6cf5ad27f511bfe95",
///   "genesis_fork_version": "0x00000000"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenesisInfo {
    /// Unix time in seconds at which the chain began.
    pub genesis_time: String,
    pub genesis_validators_root: String,
    pub genesis_fork_version: String,
}
