//! Block and header records: `/eth/v1/beacon/blocks` and `/eth/v1/beacon/headers`.

use serde::{Deserialize, Serialize};

use crate::operations::{Attestation, AttesterSlashing, ProposerSlashing, SignedVoluntaryExit};

/// The header of a beacon block: the block with its body replaced by the
/// body's hash tree root.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BeaconBlockHeader {
    pub slot: String,
    pub proposer_index: String,
    pub parent_root: String,
    pub state_root: String,
    pub body_root: String,
}

/// A [`BeaconBlockHeader`] with the proposer's signature.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignedBeaconBlockHeader {
    pub message: BeaconBlockHeader,
    pub signature: String,
}

/// An entry returned by the `headers` endpoints.
///
/// # Example
///
/// ```json
/// {
///   "root": "0xcf8e0d4e9587369b2301d0790347320302cc0943d5a1884560367e8208d920f2",
///   "canonical": true,
///   "header": { "message": { "slot": "1", ... }, "signature": "0x1b66..." }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlockHeader {
    pub root: String,
    /// Whether the block is part of the canonical chain.
    #[serde(default)]
    pub canonical: bool,
    pub header: SignedBeaconBlockHeader,
}

/// Eth1 chain data voted on by block proposers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Eth1Data {
    pub deposit_root: String,
    pub deposit_count: String,
    pub block_hash: String,
}

/// The data a depositor submits to the deposit contract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DepositData {
    pub pubkey: String,
    pub withdrawal_credentials: String,
    /// Deposit amount in gwei.
    pub amount: String,
    pub signature: String,
}

/// A deposit included in a block, with its Merkle branch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deposit {
    pub proof: Vec<String>,
    pub data: DepositData,
}

/// The body of a beacon block.
///
/// All fields are optional so that blocks from later forks (which add
/// fields) and partially populated test bodies both decode.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BeaconBlockBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub randao_reveal: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eth1_data: Option<Eth1Data>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graffiti: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proposer_slashings: Option<Vec<ProposerSlashing>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attester_slashings: Option<Vec<AttesterSlashing>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attestations: Option<Vec<Attestation>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deposits: Option<Vec<Deposit>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voluntary_exits: Option<Vec<SignedVoluntaryExit>>,
}

/// An unsigned beacon block.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BeaconBlock {
    pub slot: String,
    pub proposer_index: String,
    pub parent_root: String,
    pub state_root: String,
    pub body: BeaconBlockBody,
}

/// A [`BeaconBlock`] with the proposer's signature. This is both the body of
/// `POST /eth/v1/beacon/blocks` and the payload of
/// `GET /eth/v1/beacon/blocks/{block_id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignedBeaconBlock {
    pub message: BeaconBlock,
    pub signature: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_serialises_to_empty_object() {
        let json = serde_json::to_string(&BeaconBlockBody::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn signed_block_from_wire() {
        let json = r#"{
            "message": {
                "slot": "1",
                "proposer_index": "1",
                "parent_root": "0xa1",
                "state_root": "0xb2",
                "body": {
                    "randao_reveal": "0x00",
                    "eth1_data": { "deposit_root": "0x0", "deposit_count": "1", "block_hash": "0x0" },
                    "graffiti": "0x00",
                    "attestations": [],
                    "sync_aggregate": { "sync_committee_bits": "0x01" }
                }
            },
            "signature": "0x1b66"
        }"#;
        let block: SignedBeaconBlock = serde_json::from_str(json).unwrap();
        assert_eq!(block.message.slot, "1");
        assert_eq!(block.message.body.eth1_data.unwrap().deposit_count, "1");
        assert_eq!(block.message.body.attestations, Some(vec![]));
        assert!(block.message.body.deposits.is_none());
    }

    #[test]
    fn header_canonical_defaults_false() {
        let json = r#"{
            "root": "0x01",
            "header": {
                "message": {
                    "slot": "0", "proposer_index": "0",
                    "parent_root": "0x0", "state_root": "0x0", "body_root": "0x0"
                },
                "signature": "0x0"
            }
        }"#;
        let header: BlockHeader = serde_json::from_str(json).unwrap();
        assert!(!header.canonical);
        assert_eq!(header.header.message.slot, "0");
    }
}
