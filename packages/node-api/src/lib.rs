//! Request and response records for the Eth2 beacon node HTTP API.
//!
//! This crate encodes the wire contract of the `/eth/v1/beacon` endpoint
//! group as plain Rust records. Every record derives `Serialize` and
//! `Deserialize`, carries its numeric chain fields (slots, epochs, indices,
//! balances) as decimal strings exactly as they travel on the wire, and
//! ignores unknown fields so that newer servers do not break older clients.
//!
//! # Endpoints covered
//!
//! | Method | Path | Type |
//! |--------|------|------|
//! | GET | `/eth/v1/beacon/genesis` | → [`GenesisInfo`] |
//! | GET | `/eth/v1/beacon/states/{state_id}/root` | → [`Root`] |
//! | GET | `/eth/v1/beacon/states/{state_id}/fork` | → [`Fork`] |
//! | GET | `/eth/v1/beacon/states/{state_id}/finality_checkpoints` | → [`FinalityCheckpoints`] |
//! | GET | `/eth/v1/beacon/states/{state_id}/validators` | → `Vec<`[`StateValidator`]`>` |
//! | GET | `/eth/v1/beacon/states/{state_id}/validators/{validator_id}` | → [`StateValidator`] |
//! | GET | `/eth/v1/beacon/headers` | → `Vec<`[`BlockHeader`]`>` |
//! | GET | `/eth/v1/beacon/headers/{block_id}` | → [`BlockHeader`] |
//! | POST | `/eth/v1/beacon/blocks` | [`SignedBeaconBlock`] → `200` |
//! | GET | `/eth/v1/beacon/blocks/{block_id}` | → [`SignedBeaconBlock`] |
//! | GET | `/eth/v1/beacon/blocks/{block_id}/root` | → [`Root`] |
//! | GET | `/eth/v1/beacon/blocks/{block_id}/attestations` | → `Vec<`[`Attestation`]`>` |
//! | GET/POST | `/eth/v1/beacon/pool/attestations` | [`Attestation`] |
//! | GET/POST | `/eth/v1/beacon/pool/attester_slashings` | [`AttesterSlashing`] |
//! | GET/POST | `/eth/v1/beacon/pool/proposer_slashings` | [`ProposerSlashing`] |
//! | GET/POST | `/eth/v1/beacon/pool/voluntary_exits` | [`SignedVoluntaryExit`] |
//!
//! Successful GET bodies are wrapped in an [`Envelope`]; failures carry an
//! [`ErrorMessage`].

pub mod block;
pub mod envelope;
pub mod error;
pub mod genesis;
pub mod operations;
pub mod state;

pub use block::{
    BeaconBlock, BeaconBlockBody, BeaconBlockHeader, BlockHeader, Deposit, DepositData, Eth1Data,
    SignedBeaconBlock, SignedBeaconBlockHeader,
};
pub use envelope::Envelope;
pub use error::ErrorMessage;
pub use genesis::GenesisInfo;
pub use operations::{
    Attestation, AttestationData, AttesterSlashing, IndexedAttestation, ProposerSlashing,
    SignedVoluntaryExit, VoluntaryExit,
};
pub use state::{
    Checkpoint, FinalityCheckpoints, Fork, Root, StateValidator, Validator, ValidatorStatus,
};
