//! Error types for selector construction.
//!
//! Both errors are raised eagerly at the offending call. Because every
//! mutator returns a fresh snapshot, a failed call leaves the receiver
//! untouched and still usable.

use thiserror::Error;

use crate::selector::PartKind;

/// Errors that can occur while building a selector.
///
/// # Examples
///
/// ```rust
/// use cssel::SelectorBuilder;
///
/// // An id part was already set, so adding the element part is too late.
/// let chain = SelectorBuilder::new().id("main").unwrap();
/// assert!(chain.element("div").is_err());
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// A one-shot part (`element`, `id`, or `pseudo_element`) was set a
    /// second time on the same chain.
    #[error("selector part `{0}` occurs more than once")]
    DuplicatePart(PartKind),

    /// A part was added after a higher-precedence part was already present.
    #[error(
        "`{part}` cannot follow `{after}`: selector parts must appear in the \
         order element, id, class, attribute, pseudo-class, pseudo-element"
    )]
    OutOfOrder {
        /// The kind the caller tried to add.
        part: PartKind,
        /// The higher-precedence kind already on the chain.
        after: PartKind,
    },
}
