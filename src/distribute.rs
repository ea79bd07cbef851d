use super::{joint_shape, normalize, Error, Normalized, Result, Seq, Shape};

/// Combines two jagged sequences elementwise through `op`.
///
/// The operands are first normalized to their joint shape (the levelwise
/// maximum of their own shapes, see [`joint_shape()`]), then zipped through
/// `op`. Neither operand needs to match the other in depth or in width, and
/// `op` is always applied as `op(lhs, rhs)` in operand order; commutativity
/// is not assumed.
///
/// ```
/// use seqcast::{seq, transpose_distribute};
/// let sum = transpose_distribute(&seq![2, 3, 4], &seq![3, 2, 6], |l, r| l + r).unwrap();
/// assert_eq!(sum.data(), [5, 5, 10]);
///
/// // A scalar distributes over every element of the other operand.
/// use seqcast::Seq;
/// let scaled = transpose_distribute(&seq![[2, 3], [4, 6, 7]], &Seq::Leaf(10), |l, r| l * r).unwrap();
/// assert_eq!(scaled.data(), [20, 30, 20, 40, 60, 70]);
/// assert_eq!(scaled.shape().dims(), [2, 3]);
/// ```
///
/// # Errors
///
/// [`Error::EmptySequence`] if either operand contains a list with zero
/// elements.
pub fn transpose_distribute<T, U, F>(lhs: &Seq<T>, rhs: &Seq<T>, mut op: F) -> Result<Normalized<U>>
where
    T: Clone,
    F: FnMut(T, T) -> U,
{
    let shape = combined_shape([lhs, rhs]);
    tracing::trace!(shape = ?shape.dims(), "transpose_distribute");
    let (lhs, _) = normalize(lhs, &shape)?.into_parts();
    let (rhs, _) = normalize(rhs, &shape)?.into_parts();
    let data = lhs.into_iter().zip(rhs).map(|(l, r)| op(l, r)).collect();
    Ok(Normalized::new(data, shape))
}

/// Folds `op` over any number of operands, leftmost first.
///
/// All operands are normalized to one joint shape before any combination
/// happens, so the result is the same however the group is jagged.
///
/// ```
/// use seqcast::{seq, transpose_distribute_all, Seq};
/// let ops = [seq![[2, 7, 8], [4, 8]], Seq::Leaf(6), seq![[5], [3, 6, 9], [2, 2]]];
/// let sum = transpose_distribute_all(&ops, |l, r| l + r).unwrap();
/// assert_eq!(sum.data(), [13, 18, 19, 13, 20, 19, 10, 15, 16]);
/// ```
///
/// # Errors
///
/// [`Error::EmptySequence`] if `seqs` itself is empty, or if any operand
/// contains a list with zero elements.
pub fn transpose_distribute_all<T, F>(seqs: &[Seq<T>], mut op: F) -> Result<Normalized<T>>
where
    T: Clone,
    F: FnMut(T, T) -> T,
{
    let Some((first, rest)) = seqs.split_first() else {
        return Err(Error::EmptySequence);
    };
    let shape = combined_shape(seqs);
    tracing::trace!(shape = ?shape.dims(), operands = seqs.len(), "transpose_distribute_all");
    let (mut acc, _) = normalize(first, &shape)?.into_parts();
    for seq in rest {
        let (next, _) = normalize(seq, &shape)?.into_parts();
        acc = acc.into_iter().zip(next).map(|(a, n)| op(a, n)).collect();
    }
    Ok(Normalized::new(acc, shape))
}

/// The joint shape of a group of operands, as combination needs it.
///
/// A group made up entirely of scalars merges to the all-sentinel shape;
/// combine such a group as a single element, not as an empty buffer.
fn combined_shape<'a, T: 'a>(seqs: impl IntoIterator<Item = &'a Seq<T>>) -> Shape {
    let shape = joint_shape(seqs);
    if shape.is_unconstrained() { Shape::empty() } else { shape }
}

// ----------------------------------------------------------------------------
