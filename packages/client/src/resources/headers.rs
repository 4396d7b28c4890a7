//! `/headers[/{block_id}]`

use beacon_node_api::{BlockHeader, Envelope};

use crate::error::ClientError;
use crate::identifier::BlockId;
use crate::node::sealed::Bound;
use crate::node::{Identified, Listable, Node, Resource, Single};
use crate::query::{QueryFilter, QueryParams};

/// Filter for `GET /headers`. With neither field set the node returns the
/// canonical head header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderFilter {
    pub slot: Option<String>,
    pub parent_root: Option<String>,
}

impl QueryFilter for HeaderFilter {
    fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .optional("slot", self.slot.as_deref())
            .optional("parent_root", self.parent_root.as_deref())
    }
}

/// `/eth/v1/beacon/headers`
#[derive(Debug, Clone)]
pub struct HeadersResource {
    node: Node,
}

impl HeadersResource {
    pub(crate) fn new(node: Node) -> Self {
        Self { node }
    }

    /// The header of the block at `id`.
    pub fn with_id(&self, id: impl Into<BlockId>) -> Single<BlockHeader> {
        Single::new(self.node.navigate(&id.into()))
    }

    /// `GET /headers/{block_id}`
    pub fn find_by_block_id(
        &self,
        id: impl Into<BlockId>,
    ) -> Result<Envelope<BlockHeader>, ClientError> {
        self.with_id(id).get()
    }

    /// `GET /headers?slot=..`
    pub fn find_by_slot(
        &self,
        slot: impl Into<String>,
    ) -> Result<Envelope<Vec<BlockHeader>>, ClientError> {
        self.find(&HeaderFilter {
            slot: Some(slot.into()),
            parent_root: None,
        })
    }

    /// `GET /headers?parent_root=..`
    pub fn find_by_parent_root(
        &self,
        parent_root: impl Into<String>,
    ) -> Result<Envelope<Vec<BlockHeader>>, ClientError> {
        self.find(&HeaderFilter {
            slot: None,
            parent_root: Some(parent_root.into()),
        })
    }
}

impl Bound for HeadersResource {
    fn node(&self) -> &Node {
        &self.node
    }
}

impl Resource for HeadersResource {}

impl Listable for HeadersResource {
    type Item = BlockHeader;
    type Filter = HeaderFilter;
}
