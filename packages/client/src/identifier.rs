//! Typed path identifiers: `{state_id}`, `{block_id}`, `{validator_id}`.
//!
//! An [`Identifier`] is either one of a resource's named sentinels
//! (`head`, `genesis`, ...) or a literal value such as a slot number, a root,
//! a validator index, or a public key. Each resource type fixes its own set
//! of sentinels through the `N` parameter, so a block identifier can never be
//! `justified` and a validator identifier can never be named at all.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors raised while constructing an identifier.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdentifierError {
    #[error("identifier must not be empty")]
    Empty,
}

/// A closed set of named sentinels accepted by one resource type.
pub trait NamedId: Copy + fmt::Debug + Eq + 'static {
    /// Every sentinel, used to recognise them when parsing.
    const ALL: &'static [Self];

    /// The path segment this sentinel renders to.
    fn as_str(&self) -> &'static str;
}

/// Sentinels accepted wherever a `{block_id}` is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedBlockId {
    /// The canonical head in the node's view.
    Head,
    Genesis,
    Finalized,
}

impl NamedId for NamedBlockId {
    const ALL: &'static [Self] = &[Self::Head, Self::Genesis, Self::Finalized];

    fn as_str(&self) -> &'static str {
        match self {
            NamedBlockId::Head => "head",
            NamedBlockId::Genesis => "genesis",
            NamedBlockId::Finalized => "finalized",
        }
    }
}

/// Sentinels accepted wherever a `{state_id}` is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedStateId {
    /// The canonical head in the node's view.
    Head,
    Genesis,
    Finalized,
    Justified,
}

impl NamedId for NamedStateId {
    const ALL: &'static [Self] = &[Self::Head, Self::Genesis, Self::Finalized, Self::Justified];

    fn as_str(&self) -> &'static str {
        match self {
            NamedStateId::Head => "head",
            NamedStateId::Genesis => "genesis",
            NamedStateId::Finalized => "finalized",
            NamedStateId::Justified => "justified",
        }
    }
}

/// The empty sentinel set, for identifiers that only take literal values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralOnly {}

impl NamedId for LiteralOnly {
    const ALL: &'static [Self] = &[];

    fn as_str(&self) -> &'static str {
        match *self {}
    }
}

/// A non-empty literal identifier value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal(String);

impl Literal {
    /// Wrap `value`, rejecting the empty string.
    pub fn new(value: impl Into<String>) -> Result<Self, IdentifierError> {
        let value = value.into();
        if value.is_empty() {
            return Err(IdentifierError::Empty);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A value that renders to exactly one path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier<N> {
    /// One of the resource's sentinels.
    Named(N),
    /// A slot, root, index, or public key.
    Literal(Literal),
}

/// `{block_id}`: `head | genesis | finalized | <slot> | <root>`.
pub type BlockId = Identifier<NamedBlockId>;

/// `{state_id}`: `head | genesis | finalized | justified | <slot> | <root>`.
pub type StateId = Identifier<NamedStateId>;

/// `{validator_id}`: `<index> | <pubkey>`.
pub type ValidatorId = Identifier<LiteralOnly>;

impl<N: NamedId> Identifier<N> {
    /// A literal identifier. Fails if `value` is empty.
    pub fn literal(value: impl Into<String>) -> Result<Self, IdentifierError> {
        Literal::new(value).map(Identifier::Literal)
    }

    /// The unencoded value.
    pub fn as_str(&self) -> &str {
        match self {
            Identifier::Named(named) => named.as_str(),
            Identifier::Literal(literal) => literal.as_str(),
        }
    }

    /// The percent-encoded path segment. Reserved characters (including `/`)
    /// are escaped so the value always occupies exactly one segment.
    pub fn segment(&self) -> Cow<'_, str> {
        urlencoding::encode(self.as_str())
    }
}

impl<N: NamedId> From<N> for Identifier<N> {
    fn from(named: N) -> Self {
        Identifier::Named(named)
    }
}

/// Slots and validator indices.
impl<N: NamedId> From<u64> for Identifier<N> {
    fn from(value: u64) -> Self {
        Identifier::Literal(Literal(value.to_string()))
    }
}

/// Parses a sentinel by its name, anything else non-empty as a literal.
impl<N: NamedId> FromStr for Identifier<N> {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match N::ALL.iter().find(|named| named.as_str() == s) {
            Some(named) => Ok(Identifier::Named(*named)),
            None => Self::literal(s),
        }
    }
}

impl<N: NamedId> TryFrom<&str> for Identifier<N> {
    type Error = IdentifierError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl<N: NamedId> TryFrom<String> for Identifier<N> {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl<N: NamedId> fmt::Display for Identifier<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_head_renders_for_blocks_and_states() {
        assert_eq!(BlockId::from(NamedBlockId::Head).segment(), "head");
        assert_eq!(StateId::from(NamedStateId::Head).segment(), "head");
    }

    #[test]
    fn literal_zero_renders_verbatim() {
        assert_eq!(BlockId::literal("0").unwrap().segment(), "0");
        assert_eq!(ValidatorId::from(0u64).segment(), "0");
    }

    #[test]
    fn empty_literal_rejected() {
        assert_eq!(StateId::literal(""), Err(IdentifierError::Empty));
        assert_eq!("".parse::<BlockId>(), Err(IdentifierError::Empty));
    }

    #[test]
    fn parse_recognises_resource_specific_sentinels() {
        assert_eq!(
            "justified".parse::<StateId>(),
            Ok(Identifier::Named(NamedStateId::Justified))
        );
        // Blocks have no `justified` sentinel; it stays a literal.
        let block: BlockId = "justified".parse().unwrap();
        assert!(matches!(block, Identifier::Literal(_)));
    }

    #[test]
    fn validator_ids_are_always_literal() {
        let id: ValidatorId = "head".parse().unwrap();
        assert!(matches!(id, Identifier::Literal(_)));
        assert_eq!(id.as_str(), "head");
    }

    #[test]
    fn strings_convert_fallibly() {
        assert_eq!(ValidatorId::try_from("0").unwrap().as_str(), "0");
        assert_eq!(
            StateId::try_from(String::from("finalized")),
            Ok(Identifier::Named(NamedStateId::Finalized))
        );
        assert_eq!(BlockId::try_from(""), Err(IdentifierError::Empty));

        let ids: Vec<ValidatorId> = ["0", "1"]
            .into_iter()
            .map(ValidatorId::try_from)
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(ids, vec![ValidatorId::from(0u64), ValidatorId::from(1u64)]);
    }

    #[test]
    fn reserved_characters_stay_in_one_segment() {
        let id = StateId::literal("a/b c").unwrap();
        assert_eq!(id.segment(), "a%2Fb%20c");
        assert_eq!(id.to_string(), "a/b c");
    }

    #[test]
    fn roots_pass_through_unchanged() {
        let root = "0x4b363db94e286120d76eb905340fdd4e54bfe9f06bf33ff6cf5ad27f511bfe95";
        let id: BlockId = root.parse().unwrap();
        assert_eq!(id.segment(), root);
    }
}
