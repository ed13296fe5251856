//! # cssel — CSS selector construction
//!
//! An immutable, chainable builder for CSS compound selectors. Parts are
//! accumulated one call at a time and rendered to a selector string; the
//! builder enforces part uniqueness and the required part ordering, and two
//! selectors can be joined by a combinator.
//!
//! ## Quick Start
//!
//! ```rust
//! use cssel::{Combinator, SelectorBuilder};
//!
//! let link = SelectorBuilder::new()
//!     .element("a")?
//!     .attr(r#"href$=".png""#)?
//!     .pseudo_class("focus")?;
//! assert_eq!(link.to_string(), r#"a[href$=".png"]:focus"#);
//!
//! let item = SelectorBuilder::new().element("li")?.class("active")?;
//! let nav = SelectorBuilder::new().id("nav")?;
//! assert_eq!(
//!     nav.combine(Combinator::Child, &item).to_string(),
//!     "#nav > li.active"
//! );
//! # Ok::<(), cssel::SelectorError>(())
//! ```
//!
//! ## Rules
//!
//! - **Ordering**: parts must be added in the order element, id, class,
//!   attribute, pseudo-class, pseudo-element. Adding a part after a
//!   higher-precedence one fails with [`SelectorError::OutOfOrder`].
//! - **Uniqueness**: `element`, `id`, and `pseudo_element` may each be set
//!   once per chain; a second call fails with
//!   [`SelectorError::DuplicatePart`]. Classes, attributes, and
//!   pseudo-classes may repeat and keep their call order.
//! - **Immutability**: every mutator returns a new builder; the receiver is
//!   never changed, even by a failing call.
//!
//! Only syntactic assembly is covered: part values are taken verbatim, with
//! no parsing or validation against the CSS grammar.
//!
//! ## Modules
//!
//! - [`selector`]: the builder, part kinds, and combinators
//! - [`error`]: construction error types
//! - [`geometry`]: a small rectangle value object
//! - [`json`]: JSON encode/decode helpers over `serde_json`

pub mod error;
pub mod geometry;
pub mod json;
pub mod selector;

pub use error::SelectorError;
pub use geometry::Rect;
pub use selector::{Combinator, PartKind, SelectorBuilder};
