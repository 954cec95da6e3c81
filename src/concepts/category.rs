//! Cursor category tags.
//!
//! A cursor names its category through [`CursorTraits::Category`]. The tags
//! form a refinement chain, and a cursor predicate that demands a category
//! accepts any tag refining it:
//!
//! ```text
//! RandomAccessTag ⇒ BidirectionalTag ⇒ ForwardTag ⇒ InputTag
//! OutputTag (stands alone)
//! ```
//!
//! [`CursorTraits::Category`]: crate::concepts::ops::CursorTraits::Category

use serde::{Deserialize, Serialize};
use std::fmt;

/// Runtime-inspectable mirror of the category tags.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum CategoryKind {
    Output,
    Input,
    Forward,
    Bidirectional,
    RandomAccess,
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CategoryKind::Output => "output",
            CategoryKind::Input => "input",
            CategoryKind::Forward => "forward",
            CategoryKind::Bidirectional => "bidirectional",
            CategoryKind::RandomAccess => "random-access",
        };
        f.write_str(name)
    }
}

/// Marker implemented by the five category tags and nothing else.
pub trait CursorCategory: Copy + Default + fmt::Debug + 'static {
    const KIND: CategoryKind;
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OutputTag;
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InputTag;
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ForwardTag;
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BidirectionalTag;
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RandomAccessTag;

impl CursorCategory for OutputTag {
    const KIND: CategoryKind = CategoryKind::Output;
}
impl CursorCategory for InputTag {
    const KIND: CategoryKind = CategoryKind::Input;
}
impl CursorCategory for ForwardTag {
    const KIND: CategoryKind = CategoryKind::Forward;
}
impl CursorCategory for BidirectionalTag {
    const KIND: CategoryKind = CategoryKind::Bidirectional;
}
impl CursorCategory for RandomAccessTag {
    const KIND: CategoryKind = CategoryKind::RandomAccess;
}

/// `Self` is `Base` or a tag refining it (reflexive and transitive).
pub trait Refines<Base: CursorCategory>: CursorCategory {}

macro_rules! refines {
    ($tag:ty => $($base:ty),+ $(,)?) => {
        $(impl Refines<$base> for $tag {})+
    };
}

refines!(OutputTag => OutputTag);
refines!(InputTag => InputTag);
refines!(ForwardTag => ForwardTag, InputTag);
refines!(BidirectionalTag => BidirectionalTag, ForwardTag, InputTag);
refines!(RandomAccessTag => RandomAccessTag, BidirectionalTag, ForwardTag, InputTag);
