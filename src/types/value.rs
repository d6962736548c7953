//! Decoded tag tree.

use std::fmt;

use super::TagId;

/// The type-specific value carried by a tag.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Sentinel only; never appears as the payload of a named tag.
    End,
    Byte(u8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<u8>),
    String(String),
    List(List),
    Compound(Vec<Tag>),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
}

impl Payload {
    /// Returns the type id matching this payload's shape.
    pub fn id(&self) -> TagId {
        match self {
            Self::End => TagId::End,
            Self::Byte(_) => TagId::Byte,
            Self::Short(_) => TagId::Short,
            Self::Int(_) => TagId::Int,
            Self::Long(_) => TagId::Long,
            Self::Float(_) => TagId::Float,
            Self::Double(_) => TagId::Double,
            Self::ByteArray(_) => TagId::ByteArray,
            Self::String(_) => TagId::String,
            Self::List(_) => TagId::List,
            Self::Compound(_) => TagId::Compound,
            Self::IntArray(_) => TagId::IntArray,
            Self::LongArray(_) => TagId::LongArray,
        }
    }

    pub fn as_byte(&self) -> Option<u8> {
        match self {
            Self::Byte(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_short(&self) -> Option<i16> {
        match self {
            Self::Short(s) => Some(*s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_long(&self) -> Option<i64> {
        match self {
            Self::Long(l) => Some(*l),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self {
            Self::Double(d) => Some(*d),
            _ => None,
        }
    }

    /// Returns the value as a string reference, if it is a `String` variant.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            Self::List(l) => Some(l),
            _ => None,
        }
    }

    /// Returns the children of a `Compound`, in wire order.
    pub fn as_compound(&self) -> Option<&[Tag]> {
        match self {
            Self::Compound(children) => Some(children),
            _ => None,
        }
    }
}

/// A homogeneous sequence of unnamed payloads sharing one element type.
#[derive(Debug, Clone, PartialEq)]
pub struct List {
    element: TagId,
    items: Vec<Payload>,
}

impl List {
    /// Builds a list, checking that every item matches `element`.
    ///
    /// Returns `None` if any item has a different type or is End. An End
    /// element type is therefore only accepted for an empty list.
    pub fn new(element: TagId, items: Vec<Payload>) -> Option<Self> {
        items
            .iter()
            .all(|item| item.id() == element && item.id() != TagId::End)
            .then_some(Self { element, items })
    }

    /// Builds a list from items the decoder already read as `element`.
    pub(crate) fn from_decoded(element: TagId, items: Vec<Payload>) -> Self {
        debug_assert!(items.iter().all(|item| item.id() == element && item.id() != TagId::End));
        Self { element, items }
    }

    /// The declared element type. Empty lists may declare any type, End included.
    pub fn element(&self) -> TagId {
        self.element
    }

    pub fn items(&self) -> &[Payload] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_items(self) -> Vec<Payload> {
        self.items
    }
}

/// One node of the tree: a name and a typed payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    name: String,
    payload: Payload,
}

impl Tag {
    /// Builds a named tag. Returns `None` for [`Payload::End`]; the sentinel
    /// only comes from [`Tag::end`].
    pub fn new(name: impl Into<String>, payload: Payload) -> Option<Self> {
        (payload != Payload::End).then(|| Self::from_decoded(name.into(), payload))
    }

    pub(crate) fn from_decoded(name: String, payload: Payload) -> Self {
        debug_assert!(payload != Payload::End);
        Self { name, payload }
    }

    /// The End sentinel: no name, no payload.
    pub fn end() -> Self {
        Self {
            name: String::new(),
            payload: Payload::End,
        }
    }

    pub fn id(&self) -> TagId {
        self.payload.id()
    }

    pub fn is_end(&self) -> bool {
        matches!(self.payload, Payload::End)
    }

    /// The tag's name; empty for End and for tags written with an empty name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    pub fn into_parts(self) -> (String, Payload) {
        (self.name, self.payload)
    }
}

fn write_seq<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    open: &str,
    items: &[T],
    close: &str,
) -> fmt::Result {
    f.write_str(open)?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    f.write_str(close)
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::End => write!(f, "end"),
            Self::Byte(b) => write!(f, "{b}b"),
            Self::Short(s) => write!(f, "{s}s"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Long(l) => write!(f, "{l}L"),
            Self::Float(v) => write!(f, "{v}f"),
            Self::Double(v) => write!(f, "{v}d"),
            Self::ByteArray(b) => write!(f, "<{} bytes>", b.len()),
            Self::String(s) => write!(f, "{s:?}"),
            Self::List(list) => write_seq(f, "[", list.items(), "]"),
            Self::Compound(children) => write_seq(f, "{", children, "}"),
            Self::IntArray(v) => write!(f, "<{} ints>", v.len()),
            Self::LongArray(v) => write!(f, "<{} longs>", v.len()),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_end() {
            return write!(f, "end");
        }
        write!(f, "{:?}: {}", self.name, self.payload)
    }
}
