//! Implicit broadcasting over jagged, arbitrarily nested sequences.
//!
//! [`Seq<T>`] represents a value that is either a scalar or an ordered list
//! of further `Seq<T>`s. Unlike the rows of a rectangular array, the elements
//! of a `Seq` owe each other nothing: they may nest to different depths and
//! hold different numbers of elements. This crate reconciles such operands
//! with the "Normalize, Transpose, Distribute" scheme of rule-based array
//! languages:
//!
//! - [`Seq::shape()`] and [`joint_shape()`] infer the common [`Shape`] of a
//!   group of operands, the widest list found at each nesting level.
//! - [`normalize()`] flattens one operand against a `Shape` into a dense,
//!   row-major [`Normalized`] buffer. Short lists are recycled cyclically
//!   (`[a, b, c]` stretched to width 5 becomes `[a, b, c, a, b]`) and
//!   scalars are cloned across whole missing dimensions; nothing is ever an
//!   error merely for being the wrong size. This is deliberately laxer than
//!   the "equal-or-one" broadcasting rule of rectangular array libraries.
//! - [`Normalized::renormalize()`] grows an already-flattened value to a
//!   larger shape without revisiting its source sequence.
//! - [`transpose_distribute()`] and [`transpose_distribute_all()`] combine
//!   normalized operands elementwise through a caller-supplied operator.
//!
//! ```
//! use seqcast::{seq, transpose_distribute};
//! // Operands of different widths and depths still combine.
//! let sum = transpose_distribute(&seq![6, 7], &seq![8, [3, 4], 1], |l, r| l + r).unwrap();
//! assert_eq!(sum.shape().dims(), [3, 2]);
//! assert_eq!(sum.data(), [14, 14, 10, 11, 7, 7]);
//! ```
//!
//! Every operation is a pure function of its inputs: trees are never mutated,
//! nothing persists between calls, and the only failure a well-shaped input
//! can produce is a list with zero elements ([`Error::EmptySequence`]),
//! which cyclic repetition cannot recycle.

mod seq;
pub use seq::{Seq};

mod shape;
pub use shape::{Shape, joint_shape, SCALAR};

mod error;
pub use error::{Error, Result};

mod normalize;
pub use normalize::{Normalized, normalize};

mod renormalize;

mod distribute;
pub use distribute::{transpose_distribute, transpose_distribute_all};
