//! Raw record intake and canonicalization.
//!
//! Extracted graphs arrive in loose shapes: positional arrays, keyed
//! objects, fields that are themselves lists or objects. Everything is
//! reduced here to a [`Triple`] before any algorithm sees it; a record
//! that is not exactly subject/predicate/object is rejected rather than
//! guessed at.

use crate::error::{MalformedRecordKind, Result, TrigraphError};
use crate::types::{NodeId, Object, Triple};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One field of a raw record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawField {
    Atom(String),
    List(Vec<String>),
    /// Keyed collection. Values are taken in document order.
    Map(IndexMap<String, String>),
}

/// A record as it appears in input, before canonicalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawRecord {
    Sequence(Vec<RawField>),
    Mapping(IndexMap<String, RawField>),
}

const NAMED_FIELDS: [&str; 3] = ["subject", "predicate", "object"];

enum Field {
    Atom(NodeId),
    Collection(Vec<NodeId>),
}

impl From<RawField> for Field {
    fn from(raw: RawField) -> Self {
        match raw {
            RawField::Atom(s) => Field::Atom(NodeId(s)),
            RawField::List(items) => Field::Collection(items.into_iter().map(NodeId).collect()),
            RawField::Map(entries) => {
                Field::Collection(entries.into_values().map(NodeId).collect())
            }
        }
    }
}

fn atomic(field: Field, position: usize) -> Result<NodeId> {
    match field {
        Field::Atom(id) => Ok(id),
        Field::Collection(mut items) => match items.len() {
            0 => Err(TrigraphError::malformed(MalformedRecordKind::EmptyField { position })),
            1 => Ok(items.remove(0)),
            _ => Err(TrigraphError::malformed(MalformedRecordKind::NonAtomicField { position })),
        },
    }
}

fn fields_of(record: RawRecord) -> Result<[RawField; 3]> {
    match record {
        RawRecord::Sequence(fields) => {
            let found = fields.len();
            <[RawField; 3]>::try_from(fields).map_err(|_| TrigraphError::wrong_arity(found))
        }
        RawRecord::Mapping(mut entries) => {
            let found = entries.len();
            if NAMED_FIELDS.iter().all(|k| entries.contains_key(*k)) {
                if found != 3 {
                    return Err(TrigraphError::wrong_arity(found));
                }
                let mut take = |key: &str| {
                    entries
                        .shift_remove(key)
                        .ok_or_else(|| TrigraphError::wrong_arity(0))
                };
                return Ok([take("subject")?, take("predicate")?, take("object")?]);
            }
            let values: Vec<RawField> = entries.into_values().collect();
            <[RawField; 3]>::try_from(values).map_err(|_| TrigraphError::wrong_arity(found))
        }
    }
}

/// Reduce a raw record to its canonical (subject, predicate, object) form.
///
/// Subject and predicate must be single identifiers (a one-element
/// collection is unwrapped). A collection in object position becomes
/// [`Object::Many`].
pub fn canonicalize(record: RawRecord) -> Result<Triple> {
    let [subject, predicate, object] = fields_of(record)?;
    let subject = atomic(subject.into(), 0)?;
    let predicate = atomic(predicate.into(), 1)?;
    let object = match Field::from(object) {
        Field::Atom(id) => Object::Single(id),
        Field::Collection(items) => Object::Many(items),
    };
    Ok(Triple {
        subject,
        predicate,
        object,
    })
}

/// Canonicalize a list of records, failing on the first malformed one.
///
/// The error carries the zero-based index of the offending record.
pub fn canonicalize_all(records: impl IntoIterator<Item = RawRecord>) -> Result<Vec<Triple>> {
    records
        .into_iter()
        .enumerate()
        .map(|(i, record)| canonicalize(record).map_err(|e| e.at_index(i)))
        .collect()
}
