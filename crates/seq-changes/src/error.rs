use thiserror::Error;

/// Which half of a raw edit script an op was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Removals,
    Insertions,
}

impl std::fmt::Display for Bucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Bucket::Removals => f.write_str("removals"),
            Bucket::Insertions => f.write_str("insertions"),
        }
    }
}

/// A raw edit script that breaks the upstream diff contract.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DifferenceError {
    #[error("op at offset {offset} has the wrong kind for the {bucket} bucket")]
    MisplacedOp { bucket: Bucket, offset: usize },
    #[error("{bucket} offsets not strictly ascending at {offset}")]
    UnorderedOffsets { bucket: Bucket, offset: usize },
    #[error("{bucket} op at offset {offset} repeats an identity already in the bucket")]
    DuplicateIdentity { bucket: Bucket, offset: usize },
    #[error("{bucket} op at offset {offset} is paired with {paired}, which does not pair back")]
    UnmatchedPairing {
        bucket: Bucket,
        offset: usize,
        paired: usize,
    },
}

/// A change list that cannot be replayed against the given sequence.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplyError {
    #[error("offset {offset} out of bounds for length {len}")]
    OffsetOutOfBounds { offset: usize, len: usize },
    #[error("element at offset {offset} does not match the change")]
    ElementMismatch { offset: usize },
    #[error("offset {offset} is touched by more than one change")]
    DuplicateOffset { offset: usize },
}
