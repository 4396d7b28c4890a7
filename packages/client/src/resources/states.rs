//! `/states/{state_id}` and its validators.

use std::collections::BTreeSet;

use beacon_node_api::{Envelope, FinalityCheckpoints, Fork, Root, StateValidator, ValidatorStatus};

use crate::error::ClientError;
use crate::identifier::{StateId, ValidatorId};
use crate::node::sealed::Bound;
use crate::node::{Identified, Listable, Node, Resource, Single};
use crate::query::{QueryFilter, QueryParams};

/// `/eth/v1/beacon/states`
#[derive(Debug, Clone)]
pub struct StatesResource {
    node: Node,
}

impl StatesResource {
    pub(crate) fn new(node: Node) -> Self {
        Self { node }
    }

    /// The state at `id`: `head`, `genesis`, `finalized`, `justified`, a
    /// slot, or a state root.
    pub fn with_id(&self, id: impl Into<StateId>) -> StateResource {
        StateResource {
            node: self.node.navigate(&id.into()),
        }
    }
}

impl Bound for StatesResource {
    fn node(&self) -> &Node {
        &self.node
    }
}

impl Resource for StatesResource {}

/// `/eth/v1/beacon/states/{state_id}`
#[derive(Debug, Clone)]
pub struct StateResource {
    node: Node,
}

impl StateResource {
    /// `GET /root`
    pub fn root(&self) -> Single<Root> {
        Single::new(self.node.child("root"))
    }

    /// `GET /fork`
    pub fn fork(&self) -> Single<Fork> {
        Single::new(self.node.child("fork"))
    }

    /// `GET /finality_checkpoints`
    pub fn finality_checkpoints(&self) -> Single<FinalityCheckpoints> {
        Single::new(self.node.child("finality_checkpoints"))
    }

    pub fn validators(&self) -> ValidatorsResource {
        ValidatorsResource {
            node: self.node.child("validators"),
        }
    }
}

impl Bound for StateResource {
    fn node(&self) -> &Node {
        &self.node
    }
}

impl Resource for StateResource {}

/// Filter for `GET /validators`.
///
/// Ids are sent in the order they were added. Statuses are kept in a
/// `BTreeSet`, so they always encode in declaration order of
/// [`ValidatorStatus`] no matter how they were supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatorFilter {
    pub ids: Vec<ValidatorId>,
    pub statuses: BTreeSet<ValidatorStatus>,
}

impl ValidatorFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<ValidatorId>) -> Self {
        self.ids.push(id.into());
        self
    }

    pub fn status(mut self, status: ValidatorStatus) -> Self {
        self.statuses.insert(status);
        self
    }
}

impl QueryFilter for ValidatorFilter {
    fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .repeated("id", &self.ids)
            .repeated("status", &self.statuses)
    }
}

/// `/eth/v1/beacon/states/{state_id}/validators`
#[derive(Debug, Clone)]
pub struct ValidatorsResource {
    node: Node,
}

impl ValidatorsResource {
    /// The validator at `id`: an index or a hex public key.
    pub fn with_id(&self, id: impl Into<ValidatorId>) -> Single<StateValidator> {
        Single::new(self.node.navigate(&id.into()))
    }

    /// `GET /validators/{validator_id}`
    pub fn find_by_id(
        &self,
        id: impl Into<ValidatorId>,
    ) -> Result<Envelope<StateValidator>, ClientError> {
        self.with_id(id).get()
    }

    /// `GET /validators?id=..&id=..`
    pub fn find_by_ids<I>(&self, ids: I) -> Result<Envelope<Vec<StateValidator>>, ClientError>
    where
        I: IntoIterator,
        I::Item: Into<ValidatorId>,
    {
        let filter = ValidatorFilter {
            ids: ids.into_iter().map(Into::into).collect(),
            ..ValidatorFilter::default()
        };
        self.find(&filter)
    }

    /// `GET /validators?status=..&status=..`
    pub fn find_by_status<I>(
        &self,
        statuses: I,
    ) -> Result<Envelope<Vec<StateValidator>>, ClientError>
    where
        I: IntoIterator<Item = ValidatorStatus>,
    {
        let filter = ValidatorFilter {
            statuses: statuses.into_iter().collect(),
            ..ValidatorFilter::default()
        };
        self.find(&filter)
    }
}

impl Bound for ValidatorsResource {
    fn node(&self) -> &Node {
        &self.node
    }
}

impl Resource for ValidatorsResource {}

impl Listable for ValidatorsResource {
    type Item = StateValidator;
    type Filter = ValidatorFilter;
}
