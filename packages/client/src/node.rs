//! Resource nodes and the capability traits.
//!
//! A [`Node`] is an immutable handle on one API path plus the shared
//! dispatcher. Navigation builds new nodes; nothing is sent until an
//! operation is invoked. Which operations exist at a path is fixed by the
//! capability traits the endpoint type implements:
//!
//! - [`Identified`]: `GET` one record.
//! - [`Listable`]: `GET` a filtered sequence.
//! - [`Submittable`]: `POST` one record.
//!
//! Most endpoints are one of three generic shapes: [`Single`], [`Collection`]
//! and [`Pool`]. Endpoints with children or extra finders get their own types
//! in [`crate::resources`].

use std::fmt;
use std::marker::PhantomData;

use beacon_node_api::Envelope;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::decode::decode;
use crate::dispatch::Dispatcher;
use crate::error::ClientError;
use crate::identifier::{Identifier, NamedId};
use crate::query::{NoFilter, QueryFilter, QueryParams};
use crate::translate::translate;
use crate::transport::Method;

/// A composed, not-yet-invoked API path.
#[derive(Debug, Clone)]
pub struct Node {
    segments: Vec<String>,
    dispatcher: Dispatcher,
}

impl Node {
    /// The node at `/` for `dispatcher`.
    pub(crate) fn root(dispatcher: Dispatcher) -> Self {
        Self {
            segments: Vec::new(),
            dispatcher,
        }
    }

    /// Append a fixed segment.
    ///
    /// # Panics
    /// If `name` is empty or contains `/`. Segments are compile-time
    /// constants, so this is a programming error.
    pub(crate) fn child(&self, name: &'static str) -> Node {
        assert!(
            !name.is_empty() && !name.contains('/'),
            "invalid static path segment {name:?}"
        );
        let mut segments = self.segments.clone();
        segments.push(name.to_string());
        Node {
            segments,
            dispatcher: self.dispatcher.clone(),
        }
    }

    /// Append the rendered segment of `id`.
    pub(crate) fn navigate<N: NamedId>(&self, id: &Identifier<N>) -> Node {
        let mut segments = self.segments.clone();
        segments.push(id.segment().into_owned());
        Node {
            segments,
            dispatcher: self.dispatcher.clone(),
        }
    }

    /// The absolute, percent-encoded path, e.g. `/eth/v1/beacon/genesis`.
    pub fn path(&self) -> String {
        let mut path = String::new();
        for segment in &self.segments {
            path.push('/');
            path.push_str(segment);
        }
        if path.is_empty() {
            path.push('/');
        }
        path
    }

    /// `GET` this path and decode the envelope.
    pub(crate) fn get<T: DeserializeOwned>(
        &self,
        query: &QueryParams,
    ) -> Result<Envelope<T>, ClientError> {
        let response = self
            .dispatcher
            .dispatch::<()>(Method::Get, &self.path(), query, None)?;
        if !response.is_success() {
            return Err(translate(&response));
        }
        Ok(decode(&response)?)
    }

    /// `POST` `body` as JSON to this path. Any 2xx is success; its body is
    /// ignored.
    pub(crate) fn post<B: Serialize + ?Sized>(&self, body: &B) -> Result<(), ClientError> {
        let response = self
            .dispatcher
            .dispatch(Method::Post, &self.path(), &QueryParams::new(), Some(body))?;
        if !response.is_success() {
            return Err(translate(&response));
        }
        Ok(())
    }
}

pub(crate) mod sealed {
    use super::Node;

    /// Binds a resource type to its node. Only implementable in this crate.
    pub trait Bound {
        fn node(&self) -> &Node;
    }
}

/// Anything bound to a [`Node`].
///
/// Sealed: the node and its raw `GET`/`POST` are not reachable from outside
/// the crate, so an endpoint only offers the operations its capability traits
/// grant. A `GET`-only endpoint cannot be submitted to:
///
/// ```compile_fail
/// use beacon_node_client::prelude::*;
///
/// let client = BeaconNodeClient::new(&ClientConfig::new("http://localhost:5052")).unwrap();
/// client.beacon().genesis().submit(&());
/// ```
///
/// nor reached through its node:
///
/// ```compile_fail
/// use beacon_node_client::prelude::*;
///
/// let client = BeaconNodeClient::new(&ClientConfig::new("http://localhost:5052")).unwrap();
/// client.beacon().genesis().node().post(&());
/// ```
///
/// and no foreign type can become a resource:
///
/// ```compile_fail
/// use beacon_node_client::Resource;
///
/// struct Anywhere;
/// impl Resource for Anywhere {}
/// ```
///
/// Only the path is public:
///
/// ```
/// use beacon_node_client::prelude::*;
///
/// let client = BeaconNodeClient::new(&ClientConfig::new("http://localhost:5052")).unwrap();
/// assert_eq!(client.beacon().genesis().path(), "/eth/v1/beacon/genesis");
/// ```
pub trait Resource: sealed::Bound {
    /// The path this resource addresses.
    fn path(&self) -> String {
        self.node().path()
    }
}

/// `GET` one record.
pub trait Identified: Resource {
    type Output: DeserializeOwned;

    fn get(&self) -> Result<Envelope<Self::Output>, ClientError> {
        self.node().get(&QueryParams::new())
    }
}

/// `GET` a filtered sequence of records.
pub trait Listable: Resource {
    type Item: DeserializeOwned;
    type Filter: QueryFilter + Default;

    /// Every record matching `filter`. An empty filter sends no query string.
    fn find(&self, filter: &Self::Filter) -> Result<Envelope<Vec<Self::Item>>, ClientError> {
        self.node().get(&filter.to_query())
    }

    /// Every record, unfiltered.
    fn find_all(&self) -> Result<Envelope<Vec<Self::Item>>, ClientError> {
        self.find(&Self::Filter::default())
    }
}

/// `POST` one record.
pub trait Submittable: Resource {
    type Body: Serialize;

    fn submit(&self, body: &Self::Body) -> Result<(), ClientError> {
        self.node().post(body)
    }
}

/// An endpoint that only supports `GET` of one `T`.
pub struct Single<T> {
    node: Node,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Single<T> {
    pub(crate) fn new(node: Node) -> Self {
        Self {
            node,
            _marker: PhantomData,
        }
    }
}

impl<T> Clone for Single<T> {
    fn clone(&self) -> Self {
        Self::new(self.node.clone())
    }
}

impl<T> fmt::Debug for Single<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Single").field("path", &self.node.path()).finish()
    }
}

impl<T> sealed::Bound for Single<T> {
    fn node(&self) -> &Node {
        &self.node
    }
}

impl<T> Resource for Single<T> {}

impl<T: DeserializeOwned> Identified for Single<T> {
    type Output = T;
}

/// An endpoint that only supports filtered `GET` of a sequence of `T`.
pub struct Collection<T, F = NoFilter> {
    node: Node,
    _marker: PhantomData<fn() -> (T, F)>,
}

impl<T, F> Collection<T, F> {
    pub(crate) fn new(node: Node) -> Self {
        Self {
            node,
            _marker: PhantomData,
        }
    }
}

impl<T, F> Clone for Collection<T, F> {
    fn clone(&self) -> Self {
        Self::new(self.node.clone())
    }
}

impl<T, F> fmt::Debug for Collection<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collection").field("path", &self.node.path()).finish()
    }
}

impl<T, F> sealed::Bound for Collection<T, F> {
    fn node(&self) -> &Node {
        &self.node
    }
}

impl<T, F> Resource for Collection<T, F> {}

impl<T: DeserializeOwned, F: QueryFilter + Default> Listable for Collection<T, F> {
    type Item = T;
    type Filter = F;
}

/// An operation pool: list with filter `F`, submit one `T`.
pub struct Pool<T, F = NoFilter> {
    node: Node,
    _marker: PhantomData<fn() -> (T, F)>,
}

impl<T, F> Pool<T, F> {
    pub(crate) fn new(node: Node) -> Self {
        Self {
            node,
            _marker: PhantomData,
        }
    }
}

impl<T, F> Clone for Pool<T, F> {
    fn clone(&self) -> Self {
        Self::new(self.node.clone())
    }
}

impl<T, F> fmt::Debug for Pool<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pool").field("path", &self.node.path()).finish()
    }
}

impl<T, F> sealed::Bound for Pool<T, F> {
    fn node(&self) -> &Node {
        &self.node
    }
}

impl<T, F> Resource for Pool<T, F> {}

impl<T: DeserializeOwned, F: QueryFilter + Default> Listable for Pool<T, F> {
    type Item = T;
    type Filter = F;
}

impl<T: Serialize + DeserializeOwned, F: QueryFilter + Default> Submittable for Pool<T, F> {
    type Body = T;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identifier::{BlockId, NamedBlockId};
    use crate::test_utils::StubTransport;
    use beacon_node_api::Root;

    fn root_node(stub: std::sync::Arc<StubTransport>) -> Node {
        Node::root(Dispatcher::new(stub))
    }

    #[test]
    fn navigation_does_not_mutate_parent() {
        let root = root_node(StubTransport::json(200, "{}"));
        let beacon = root.child("eth").child("v1").child("beacon");
        let blocks = beacon.child("blocks");
        let head = blocks.navigate(&BlockId::from(NamedBlockId::Head));

        assert_eq!(root.path(), "/");
        assert_eq!(beacon.path(), "/eth/v1/beacon");
        assert_eq!(blocks.path(), "/eth/v1/beacon/blocks");
        assert_eq!(head.path(), "/eth/v1/beacon/blocks/head");
    }

    #[test]
    fn literal_segments_are_escaped() {
        let root = root_node(StubTransport::json(200, "{}"));
        let node = root.child("blocks").navigate(&BlockId::literal("a/b").unwrap());
        assert_eq!(node.path(), "/blocks/a%2Fb");
    }

    #[test]
    #[should_panic(expected = "invalid static path segment")]
    fn slash_in_static_segment_panics() {
        root_node(StubTransport::json(200, "{}")).child("a/b");
    }

    #[test]
    #[should_panic(expected = "invalid static path segment")]
    fn empty_static_segment_panics() {
        root_node(StubTransport::json(200, "{}")).child("");
    }

    #[test]
    fn single_get_decodes_data() {
        let stub = StubTransport::json(200, r#"{"data": {"root": "0x01"}}"#);
        let single: Single<Root> = Single::new(root_node(stub.clone()).child("root"));
        let env = single.get().unwrap();
        assert_eq!(env.data.root, "0x01");
        assert_eq!(stub.last_request().path_and_query(), "/root");
    }

    #[test]
    fn get_routes_failures_to_translator() {
        let stub = StubTransport::json(404, r#"{"code": 404, "message": "Block not found"}"#);
        let single: Single<Root> = Single::new(root_node(stub).child("root"));
        let err = single.get().unwrap_err();
        assert!(matches!(err, ClientError::Client(_)));
        assert!(err.is_not_found());
    }

    #[test]
    fn post_ignores_success_body() {
        let stub = StubTransport::raw(200, None, "");
        let pool: Pool<Root> = Pool::new(root_node(stub.clone()).child("pool"));
        pool.submit(&Root { root: "0x02".into() }).unwrap();

        let req = stub.last_request();
        assert_eq!(req.method, Method::Post);
        assert_eq!(req.body.unwrap().0, br#"{"root":"0x02"}"#);
    }

    #[test]
    fn post_failure_is_translated() {
        let stub = StubTransport::json(
            400,
            r#"{"status": 400, "message": "Invalid", "details": ["bad signature"]}"#,
        );
        let pool: Pool<Root> = Pool::new(root_node(stub).child("pool"));
        let err = pool.submit(&Root { root: "0x02".into() }).unwrap_err();
        assert_eq!(err.error_message().unwrap().details, vec!["bad signature"]);
    }

    #[test]
    fn find_all_sends_no_query() {
        let stub = StubTransport::json(200, r#"{"data": []}"#);
        let coll: Collection<Root> = Collection::new(root_node(stub.clone()).child("things"));
        assert!(coll.find_all().unwrap().data.is_empty());
        assert_eq!(stub.last_request().query, "");
    }

    #[test]
    fn nodes_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<Node>();
        assert_send_sync::<Single<Root>>();
        assert_send_sync::<Pool<Root>>();
    }
}
