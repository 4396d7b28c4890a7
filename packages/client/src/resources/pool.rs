//! `/pool/*`: operations waiting to be included in a block.

use beacon_node_api::{
    Attestation, AttesterSlashing, Envelope, ProposerSlashing, SignedVoluntaryExit,
};

use crate::error::ClientError;
use crate::node::sealed::Bound;
use crate::node::{Listable, Node, Pool, Resource};
use crate::query::{QueryFilter, QueryParams};

/// Filter for `GET /pool/attestations`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttestationFilter {
    pub slot: Option<String>,
    pub committee_index: Option<String>,
}

impl QueryFilter for AttestationFilter {
    fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .optional("slot", self.slot.as_deref())
            .optional("committee_index", self.committee_index.as_deref())
    }
}

impl Pool<Attestation, AttestationFilter> {
    /// `GET /pool/attestations?slot=..`
    pub fn find_by_slot(
        &self,
        slot: impl Into<String>,
    ) -> Result<Envelope<Vec<Attestation>>, ClientError> {
        self.find(&AttestationFilter {
            slot: Some(slot.into()),
            committee_index: None,
        })
    }

    /// `GET /pool/attestations?committee_index=..`
    pub fn find_by_committee_index(
        &self,
        committee_index: impl Into<String>,
    ) -> Result<Envelope<Vec<Attestation>>, ClientError> {
        self.find(&AttestationFilter {
            slot: None,
            committee_index: Some(committee_index.into()),
        })
    }
}

/// `/eth/v1/beacon/pool`
#[derive(Debug, Clone)]
pub struct PoolResource {
    node: Node,
}

impl PoolResource {
    pub(crate) fn new(node: Node) -> Self {
        Self { node }
    }

    pub fn attestations(&self) -> Pool<Attestation, AttestationFilter> {
        Pool::new(self.node.child("attestations"))
    }

    pub fn attester_slashings(&self) -> Pool<AttesterSlashing> {
        Pool::new(self.node.child("attester_slashings"))
    }

    pub fn proposer_slashings(&self) -> Pool<ProposerSlashing> {
        Pool::new(self.node.child("proposer_slashings"))
    }

    pub fn voluntary_exits(&self) -> Pool<SignedVoluntaryExit> {
        Pool::new(self.node.child("voluntary_exits"))
    }
}

impl Bound for PoolResource {
    fn node(&self) -> &Node {
        &self.node
    }
}

impl Resource for PoolResource {}
