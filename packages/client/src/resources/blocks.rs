//! `/blocks[/{block_id}]`

use beacon_node_api::{Attestation, Envelope, Root, SignedBeaconBlock};

use crate::error::ClientError;
use crate::identifier::BlockId;
use crate::node::sealed::Bound;
use crate::node::{Collection, Identified, Node, Resource, Single, Submittable};

/// `/eth/v1/beacon/blocks`
#[derive(Debug, Clone)]
pub struct BlocksResource {
    node: Node,
}

impl BlocksResource {
    pub(crate) fn new(node: Node) -> Self {
        Self { node }
    }

    /// The block at `id`: `head`, `genesis`, `finalized`, a slot, or a root.
    pub fn with_id(&self, id: impl Into<BlockId>) -> BlockResource {
        BlockResource {
            node: self.node.navigate(&id.into()),
        }
    }

    /// `GET /blocks/{block_id}`
    pub fn find_by_id(
        &self,
        id: impl Into<BlockId>,
    ) -> Result<Envelope<SignedBeaconBlock>, ClientError> {
        self.with_id(id).get()
    }

    /// `POST /blocks`. The node broadcasts the block once it passes gossip
    /// validation.
    pub fn publish(&self, block: &SignedBeaconBlock) -> Result<(), ClientError> {
        self.submit(block)
    }
}

impl Bound for BlocksResource {
    fn node(&self) -> &Node {
        &self.node
    }
}

impl Resource for BlocksResource {}

impl Submittable for BlocksResource {
    type Body = SignedBeaconBlock;
}

/// `/eth/v1/beacon/blocks/{block_id}`
#[derive(Debug, Clone)]
pub struct BlockResource {
    node: Node,
}

impl BlockResource {
    /// `GET /root`
    pub fn root(&self) -> Single<Root> {
        Single::new(self.node.child("root"))
    }

    /// `GET /attestations`: the attestations included in the block.
    pub fn attestations(&self) -> Collection<Attestation> {
        Collection::new(self.node.child("attestations"))
    }
}

impl Bound for BlockResource {
    fn node(&self) -> &Node {
        &self.node
    }
}

impl Resource for BlockResource {}

impl Identified for BlockResource {
    type Output = SignedBeaconBlock;
}
