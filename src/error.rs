/// The errors reported by the broadcasting operations.
///
/// A mismatch between operand shapes is never an error here; reconciling
/// mismatched shapes is the point of the crate. What cannot be reconciled is
/// a list with no elements at all: cyclic repetition has nothing to repeat
/// from. Every operation is a pure function of its inputs, so a failed call
/// fails the same way every time; there is nothing to retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A list with zero elements was found somewhere in an operand, or a
    /// zero-width level was asked to supply elements.
    #[error("cannot broadcast an empty sequence")]
    EmptySequence,

    /// A shape provides fewer nesting levels than the value it was applied
    /// to requires.
    #[error("shape provides {given} levels but {needed} are required")]
    ShapeTooShallow {
        /// The levels the value requires.
        needed: usize,
        /// The levels the shape provides.
        given: usize,
    },

    /// Re-normalization was asked to shrink a level; it can only grow.
    #[error("cannot shrink level {level} from width {from} to {to}")]
    ShapeNotGrowable {
        /// The offending level, outermost first.
        level: usize,
        /// The current width at that level.
        from: usize,
        /// The requested width at that level.
        to: usize,
    },
}

/// A specialized `Result` for broadcasting operations.
pub type Result<T> = std::result::Result<T, Error>;
