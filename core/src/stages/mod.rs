//! stages: payload model and the cipher stage catalog.
//!
//! Every stage is a pure transform behind the `StageTransform` trait:
//! declared input kind(s), declared output kind, optional parameter axis.
//! Stage failures are per-tuple and silent; the search loop drops the
//! tuple without logging.

use std::fmt;

use bytes::Bytes;
use num_enum::TryFromPrimitive;

use crate::constants::stage_ids;

pub mod b64;
pub mod bifid;
pub mod caesar;
pub mod columnar;
pub mod double_columnar;
pub mod railfence;
pub mod registry;
pub mod reverse;
pub mod xor;

pub use bifid::BifidAlphabet;
pub use registry::{create_stage, create_stage_set};

// ------------------------------------------------------------------
// Stage identifiers
// ------------------------------------------------------------------

/// Stable stage identifiers for the registry.
#[repr(u16)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, TryFromPrimitive)]
pub enum StageId {
    Caesar         = stage_ids::CAESAR,
    Bifid          = stage_ids::BIFID,
    Columnar       = stage_ids::COLUMNAR,
    DoubleColumnar = stage_ids::DOUBLE_COLUMNAR,
    B64            = stage_ids::B64,
    Xor            = stage_ids::XOR,
    Railfence      = stage_ids::RAILFENCE,
    Reverse        = stage_ids::REVERSE,
}

impl StageId {
    /// All valid stages, in registry order.
    pub const ALL: [StageId; 8] = [
        StageId::Caesar,
        StageId::Bifid,
        StageId::Columnar,
        StageId::DoubleColumnar,
        StageId::B64,
        StageId::Xor,
        StageId::Railfence,
        StageId::Reverse,
    ];

    /// Pipeline-string name of the stage.
    pub fn name(&self) -> &'static str {
        match self {
            StageId::Caesar => "caesar",
            StageId::Bifid => "bifid",
            StageId::Columnar => "columnar",
            StageId::DoubleColumnar => "double_columnar",
            StageId::B64 => "b64",
            StageId::Xor => "xor",
            StageId::Railfence => "railfence",
            StageId::Reverse => "reverse",
        }
    }

    /// Resolve a pipeline-string name to a stage id.
    pub fn from_name(name: &str) -> Option<StageId> {
        StageId::ALL.iter().copied().find(|s| s.name() == name)
    }

    /// Resolve a raw registry id to a stage id.
    pub fn from_raw(raw: u16) -> Option<StageId> {
        StageId::try_from_primitive(raw).ok()
    }

    /// Whether the stage draws its parameter from the key dictionary.
    pub fn needs_keys(&self) -> bool {
        matches!(
            self,
            StageId::Bifid | StageId::Columnar | StageId::DoubleColumnar | StageId::Xor
        )
    }
}

impl fmt::Display for StageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ------------------------------------------------------------------
// Payload model
// ------------------------------------------------------------------

/// The kind tag carried by a flowing payload.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PayloadKind {
    Text,
    Bytes,
}

impl fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadKind::Text => f.write_str("text"),
            PayloadKind::Bytes => f.write_str("bytes"),
        }
    }
}

/// A tagged payload flowing through the pipeline. Stages never mutate
/// their input; they return a new payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Payload {
    Text(String),
    Bytes(Bytes),
}

impl Payload {
    pub fn kind(&self) -> PayloadKind {
        match self {
            Payload::Text(_) => PayloadKind::Text,
            Payload::Bytes(_) => PayloadKind::Bytes,
        }
    }

    /// Byte view of the payload; text is its UTF-8 encoding.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Payload::Text(s) => s.as_bytes(),
            Payload::Bytes(b) => b,
        }
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }
}

// ------------------------------------------------------------------
// Metadata
// ------------------------------------------------------------------

/// A single recorded parameter value.
#[derive(Clone, Debug, PartialEq)]
pub enum MetaValue {
    Int(i64),
    Str(String),
    StrPair(String, String),
}

impl fmt::Display for MetaValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetaValue::Int(v) => write!(f, "{}", v),
            MetaValue::Str(s) => write!(f, "\"{}\"", s),
            MetaValue::StrPair(a, b) => write!(f, "(\"{}\", \"{}\")", a, b),
        }
    }
}

/// Append-only ordered mapping from stage-parameter labels to values.
/// Reported verbatim per hit so the user can reproduce the decryption.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Metadata {
    entries: Vec<(&'static str, MetaValue)>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, label: &'static str, value: MetaValue) {
        self.entries.push((label, value));
    }

    pub fn get(&self, label: &str) -> Option<&MetaValue> {
        self.entries
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(&'static str, MetaValue)> {
        self.entries.iter()
    }
}

impl fmt::Display for Metadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (label, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", label, value)?;
        }
        f.write_str("}")
    }
}

// ------------------------------------------------------------------
// Errors
// ------------------------------------------------------------------

/// Per-tuple stage failure. Expected during exhaustive search; the caller
/// drops the tuple and must not log per occurrence.
#[derive(Debug)]
pub enum StageError {
    /// Payload kind does not match the stage's declared input kind.
    KindMismatch { stage: &'static str, have: PayloadKind },
    /// Stage-internal decode failure (e.g. invalid base64).
    DecodeFailed { stage: &'static str, msg: String },
    /// Key resolved to an empty byte string.
    EmptyKey { stage: &'static str },
}

impl fmt::Display for StageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use StageError::*;
        match self {
            KindMismatch { stage, have } => {
                write!(f, "stage {} cannot accept {} payload", stage, have)
            }
            DecodeFailed { stage, msg } => write!(f, "stage {} decode failed: {}", stage, msg),
            EmptyKey { stage } => write!(f, "stage {} given an empty key", stage),
        }
    }
}

impl std::error::Error for StageError {}

// ------------------------------------------------------------------
// Stage trait
// ------------------------------------------------------------------

/// Shared immutable configuration handed to stages at construction.
#[derive(Clone, Debug)]
pub struct StageContext {
    pub keys: std::sync::Arc<Vec<String>>,
    pub bifid_alphabet: BifidAlphabet,
}

/// One cipher transform with a declared typing discipline.
/// Require Send + Sync so stage sets can live inside worker threads.
pub trait StageTransform: Send + Sync {
    fn id(&self) -> StageId;

    /// Whether the stage accepts a payload of this kind.
    fn accepts(&self, kind: PayloadKind) -> bool;

    /// Cardinality of the stage's parameter axis, or None for fixed stages.
    fn axis_len(&self) -> Option<u64>;

    /// Apply the transform for one parameter value, recording the consumed
    /// parameter(s) into `meta` under the stage's canonical label.
    fn apply(&self, payload: &Payload, param: u64, meta: &mut Metadata)
        -> Result<Payload, StageError>;
}
