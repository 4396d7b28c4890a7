//! Operation records held in the node's pool: `/eth/v1/beacon/pool/...`.
//!
//! Each of these is both the request body of the pool's `POST` and an item
//! of the pool's `GET` listing.

use serde::{Deserialize, Serialize};

use crate::block::SignedBeaconBlockHeader;
use crate::state::Checkpoint;

/// The vote an attestation carries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttestationData {
    pub slot: String,
    /// Committee index.
    pub index: String,
    /// LMD GHOST vote.
    pub beacon_block_root: String,
    /// FFG vote source.
    pub source: Checkpoint,
    /// FFG vote target.
    pub target: Checkpoint,
}

/// An aggregated attestation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Attestation {
    /// Attester aggregation bits as an SSZ bitlist in hex.
    pub aggregation_bits: String,
    pub signature: String,
    pub data: AttestationData,
}

/// An attestation with its attesters listed by index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IndexedAttestation {
    pub attesting_indices: Vec<String>,
    pub data: AttestationData,
    pub signature: String,
}

/// Evidence of two conflicting attestations by the same validators.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttesterSlashing {
    pub attestation_1: IndexedAttestation,
    pub attestation_2: IndexedAttestation,
}

/// Evidence of two conflicting block headers signed by the same proposer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProposerSlashing {
    pub signed_header_1: SignedBeaconBlockHeader,
    pub signed_header_2: SignedBeaconBlockHeader,
}

/// A validator's request to leave the active set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VoluntaryExit {
    /// Minimum epoch at which the exit can be processed.
    pub epoch: String,
    pub validator_index: String,
}

/// A [`VoluntaryExit`] signed by the exiting validator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignedVoluntaryExit {
    pub message: VoluntaryExit,
    pub signature: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slashing_uses_numbered_wire_names() {
        let data = AttestationData {
            slot: "0".into(),
            index: "0".into(),
            beacon_block_root: "0x0".into(),
            source: Checkpoint { epoch: "0".into(), root: "0x0".into() },
            target: Checkpoint { epoch: "0".into(), root: "0x0".into() },
        };
        let indexed = IndexedAttestation {
            attesting_indices: vec!["1".into()],
            data,
            signature: "0x0".into(),
        };
        let slashing = AttesterSlashing {
            attestation_1: indexed.clone(),
            attestation_2: indexed,
        };
        let json = serde_json::to_value(&slashing).unwrap();
        assert!(json.get("attestation_1").is_some());
        assert!(json.get("attestation_2").is_some());
        assert_eq!(json["attestation_1"]["attesting_indices"][0], "1");
    }

    #[test]
    fn voluntary_exit_from_wire() {
        let json = r#"{"message": {"epoch": "1", "validator_index": "7"}, "signature": "0xaa"}"#;
        let exit: SignedVoluntaryExit = serde_json::from_str(json).unwrap();
        assert_eq!(exit.message.validator_index, "7");
        assert_eq!(exit.signature, "0xaa");
    }
}
