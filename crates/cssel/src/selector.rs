//! Compound selector construction.
//!
//! This module provides the core builder type:
//!
//! - [`SelectorBuilder`]: an immutable, chainable selector under construction
//! - [`PartKind`]: the six selector part kinds in precedence order
//! - [`Combinator`]: tokens joining two selectors (` `, `>`, `+`, `~`)
//!
//! Every mutator takes `&self` and returns a fresh builder, so any builder
//! value can be shared and branched freely:
//!
//! ```rust
//! use cssel::SelectorBuilder;
//!
//! let base = SelectorBuilder::new().element("input")?;
//! let focused = base.pseudo_class("focus")?;
//! let disabled = base.pseudo_class("disabled")?;
//!
//! assert_eq!(base.to_string(), "input");
//! assert_eq!(focused.to_string(), "input:focus");
//! assert_eq!(disabled.to_string(), "input:disabled");
//! # Ok::<(), cssel::SelectorError>(())
//! ```

use std::fmt;

use crate::error::SelectorError;

/// The six selector part kinds.
///
/// The derived `Ord` is the required precedence order for parts of one
/// compound selector: element, id, class, attribute, pseudo-class,
/// pseudo-element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum PartKind {
    Element,
    Id,
    Class,
    Attribute,
    PseudoClass,
    PseudoElement,
}

impl PartKind {
    /// Human-readable kind name, as used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            PartKind::Element => "element",
            PartKind::Id => "id",
            PartKind::Class => "class",
            PartKind::Attribute => "attribute",
            PartKind::PseudoClass => "pseudo-class",
            PartKind::PseudoElement => "pseudo-element",
        }
    }
}

impl fmt::Display for PartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A combinator token joining two selectors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Combinator {
    /// Descendant (space)
    Descendant,
    /// Child (`>`)
    Child,
    /// Adjacent sibling (`+`)
    AdjacentSibling,
    /// General sibling (`~`)
    GeneralSibling,
}

impl Combinator {
    /// The bare CSS token for this combinator.
    pub fn token(&self) -> &'static str {
        match self {
            Combinator::Descendant => " ",
            Combinator::Child => ">",
            Combinator::AdjacentSibling => "+",
            Combinator::GeneralSibling => "~",
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// An immutable compound selector under construction.
///
/// Each mutator validates the new part against the chain's current state and
/// returns a new builder; the receiver is never modified, including when the
/// call fails. Rendering happens through [`Display`](fmt::Display), with each
/// part carrying its own sigil (`#`, `.`, `[...]`, `:`, `::`).
///
/// Two invariants are enforced at mutation time:
///
/// 1. `element`, `id`, and `pseudo_element` may each be set at most once.
/// 2. Parts must be added in precedence order; once a part of some kind is
///    present, no lower-precedence kind may follow.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectorBuilder {
    combined: Option<String>,
    element: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<String>,
    pseudo_classes: Vec<String>,
    pseudo_element: Option<String>,
}

impl SelectorBuilder {
    /// Creates an empty builder.
    ///
    /// Mutators never touch their receiver, so a single empty builder can be
    /// reused as the entry point for any number of independent chains.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the element part, rendered bare (e.g. `div`).
    pub fn element(&self, name: &str) -> Result<Self, SelectorError> {
        if self.element.is_some() {
            return Err(SelectorError::DuplicatePart(PartKind::Element));
        }
        self.check_order(PartKind::Element)?;
        let mut next = self.clone();
        next.element = Some(name.to_string());
        Ok(next)
    }

    /// Sets the id part, rendered as `#name`.
    pub fn id(&self, name: &str) -> Result<Self, SelectorError> {
        if self.id.is_some() {
            return Err(SelectorError::DuplicatePart(PartKind::Id));
        }
        self.check_order(PartKind::Id)?;
        let mut next = self.clone();
        next.id = Some(name.to_string());
        Ok(next)
    }

    /// Appends a class part, rendered as `.name`. Classes may repeat and
    /// keep their call order in the output.
    pub fn class(&self, name: &str) -> Result<Self, SelectorError> {
        self.check_order(PartKind::Class)?;
        let mut next = self.clone();
        next.classes.push(name.to_string());
        Ok(next)
    }

    /// Appends an attribute part, rendered as `[expr]`. The expression is
    /// taken verbatim (e.g. `href$=".png"`); no grammar validation happens.
    pub fn attr(&self, expr: &str) -> Result<Self, SelectorError> {
        self.check_order(PartKind::Attribute)?;
        let mut next = self.clone();
        next.attributes.push(expr.to_string());
        Ok(next)
    }

    /// Appends a pseudo-class part, rendered as `:name`.
    pub fn pseudo_class(&self, name: &str) -> Result<Self, SelectorError> {
        self.check_order(PartKind::PseudoClass)?;
        let mut next = self.clone();
        next.pseudo_classes.push(name.to_string());
        Ok(next)
    }

    /// Sets the pseudo-element part, rendered as `::name`.
    pub fn pseudo_element(&self, name: &str) -> Result<Self, SelectorError> {
        if self.pseudo_element.is_some() {
            return Err(SelectorError::DuplicatePart(PartKind::PseudoElement));
        }
        self.check_order(PartKind::PseudoElement)?;
        let mut next = self.clone();
        next.pseudo_element = Some(name.to_string());
        Ok(next)
    }

    /// Joins this selector and `other` with a combinator, producing a fresh
    /// builder whose only content is `"{self} {token} {other}"`.
    ///
    /// The result carries no ordering state: both operands were validated
    /// while they were built, and the joined text becomes an opaque prefix.
    /// Parts may still be added to the result and render after that prefix.
    pub fn combine(&self, combinator: Combinator, other: &SelectorBuilder) -> SelectorBuilder {
        SelectorBuilder {
            combined: Some(format!("{self} {combinator} {other}")),
            ..SelectorBuilder::default()
        }
    }

    /// The highest-precedence kind already present on this chain.
    fn last_kind(&self) -> Option<PartKind> {
        if self.pseudo_element.is_some() {
            Some(PartKind::PseudoElement)
        } else if !self.pseudo_classes.is_empty() {
            Some(PartKind::PseudoClass)
        } else if !self.attributes.is_empty() {
            Some(PartKind::Attribute)
        } else if !self.classes.is_empty() {
            Some(PartKind::Class)
        } else if self.id.is_some() {
            Some(PartKind::Id)
        } else if self.element.is_some() {
            Some(PartKind::Element)
        } else {
            None
        }
    }

    /// Fails if a part of a kind strictly after `candidate` is already set.
    /// Equal kinds pass, so the append-only kinds may repeat.
    fn check_order(&self, candidate: PartKind) -> Result<(), SelectorError> {
        match self.last_kind() {
            Some(after) if after > candidate => Err(SelectorError::OutOfOrder {
                part: candidate,
                after,
            }),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for SelectorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(combined) = &self.combined {
            f.write_str(combined)?;
        }
        if let Some(element) = &self.element {
            f.write_str(element)?;
        }
        if let Some(id) = &self.id {
            write!(f, "#{id}")?;
        }
        for class in &self.classes {
            write!(f, ".{class}")?;
        }
        for attr in &self.attributes {
            write!(f, "[{attr}]")?;
        }
        for pseudo in &self.pseudo_classes {
            write!(f, ":{pseudo}")?;
        }
        if let Some(pseudo) = &self.pseudo_element {
            write!(f, "::{pseudo}")?;
        }
        Ok(())
    }
}
