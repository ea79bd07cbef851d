use std::fmt;

/// An arbitrarily nested, jagged sequence of `T`s.
///
/// A `Seq` is either a bare scalar or an ordered list of sub-sequences. The
/// sub-sequences need not agree with each other in depth or in width:
/// `[2, 3, [4, 5]]` mixes scalars with a nested pair at the same level.
/// Reconciling such disagreements is the business of [`normalize()`] and
/// [`transpose_distribute()`]; `Seq` itself is only the input representation,
/// and is never mutated by any operation of this crate.
///
/// The [`seq!`] macro builds list literals:
///
/// ```
/// use seqcast::{seq, Seq};
/// let s: Seq<i32> = seq![2, 3, [4, 5]];
/// assert_eq!(s.order(), 2);
/// assert_eq!(s.to_string(), "[2, 3, [4, 5]]");
/// ```
///
/// [`normalize()`]: super::normalize()
/// [`transpose_distribute()`]: super::transpose_distribute()
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Seq<T> {
    /// A single scalar value.
    Leaf(T),
    /// An ordered list of sub-sequences.
    Node(Vec<Seq<T>>),
}

impl<T> Seq<T> {
    /// Returns the nesting depth of this sequence.
    ///
    /// A scalar has order `0`, a flat list order `1`, and a list is one
    /// deeper than its deepest element.
    ///
    /// ```
    /// use seqcast::{seq, Seq};
    /// assert_eq!(Seq::Leaf(7).order(), 0);
    /// assert_eq!(seq![1, 2, 3].order(), 1);
    /// assert_eq!(seq![1, [2, [3]]].order(), 3);
    /// ```
    pub fn order(&self) -> usize {
        match self {
            Seq::Leaf(_) => 0,
            Seq::Node(children) => {
                1 + children.iter().map(Seq::order).max().unwrap_or(0)
            },
        }
    }

    /// Returns `true` if this is a bare scalar.
    pub fn is_leaf(&self) -> bool { matches!(self, Seq::Leaf(_)) }
}

impl<T> From<Vec<Seq<T>>> for Seq<T> {
    fn from(children: Vec<Seq<T>>) -> Self { Seq::Node(children) }
}

impl<T: fmt::Display> fmt::Display for Seq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seq::Leaf(value) => write!(f, "{}", value),
            Seq::Node(children) => {
                write!(f, "[")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "{}", child)?;
                }
                write!(f, "]")
            },
        }
    }
}

// ----------------------------------------------------------------------------

/// Builds a [`Seq`] list literal.
///
/// Square brackets nest; every other element is taken as a scalar expression.
/// The macro always builds a [`Seq::Node`]; a bare scalar is just
/// `Seq::Leaf(v)`.
///
/// ```
/// use seqcast::{seq, Seq};
/// assert_eq!(seq![1, 2], Seq::Node(vec![Seq::Leaf(1), Seq::Leaf(2)]));
/// assert_eq!(seq![1, [2, -3]].to_string(), "[1, [2, -3]]");
/// ```
#[macro_export]
macro_rules! seq {
    ($($tt:tt)*) => { $crate::__seq_elems!([] $($tt)*) };
}

/// Accumulates the elements of a [`seq!`] invocation one at a time, so that a
/// bracketed sub-list can be told apart from a scalar expression.
#[doc(hidden)]
#[macro_export]
macro_rules! __seq_elems {
    ([$($out:expr,)*]) => {
        $crate::Seq::Node(vec![$($out),*])
    };
    ([$($out:expr,)*] [$($nested:tt)*] $(, $($rest:tt)*)?) => {
        $crate::__seq_elems!([$($out,)* $crate::seq![$($nested)*],] $($($rest)*)?)
    };
    ([$($out:expr,)*] $scalar:expr $(, $($rest:tt)*)?) => {
        $crate::__seq_elems!([$($out,)* $crate::Seq::Leaf($scalar),] $($($rest)*)?)
    };
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order() {
        assert_eq!(seq![2, 3, [4, 5]].order(), 2);
        assert_eq!(Seq::Leaf(73).order(), 0);
        assert_eq!(seq![2, 3, [2, 3, [7, 8]], [4, 5]].order(), 3);
    }

    #[test]
    fn from_children() {
        let s: Seq<i32> = vec![Seq::Leaf(4), Seq::Leaf(5)].into();
        assert_eq!(s, seq![4, 5]);
    }

    #[test]
    fn macro_literals() {
        assert_eq!(seq![-1, 3, 2], Seq::Node(vec![
            Seq::Leaf(-1), Seq::Leaf(3), Seq::Leaf(2),
        ]));
        assert_eq!(seq![1, [2], 3,], Seq::Node(vec![
            Seq::Leaf(1), Seq::Node(vec![Seq::Leaf(2)]), Seq::Leaf(3),
        ]));
        let empty: Seq<i32> = seq![];
        assert_eq!(empty, Seq::Node(Vec::new()));
    }

    #[test]
    fn display() {
        assert_eq!(Seq::Leaf(73).to_string(), "73");
        assert_eq!(seq![2, 3, [4, 5]].to_string(), "[2, 3, [4, 5]]");
        assert_eq!(seq![[1], [[2, 8, 4]]].to_string(), "[[1], [[2, 8, 4]]]");
    }
}
