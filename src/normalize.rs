use super::{Error, Result, Seq, Shape};

/// A [`Seq`] flattened against a [`Shape`]: dense, row-major data.
///
/// The buffer always holds exactly [`Shape::volume()`] elements, in the order
/// a depth-first, left-to-right walk of the broadcast sequence visits them.
/// `Normalized` values are produced by [`normalize()`] and
/// [`transpose_distribute()`], and can be grown to a larger shape without
/// their source sequence by [`renormalize()`].
///
/// [`renormalize()`]: Normalized::renormalize()
/// [`transpose_distribute()`]: super::transpose_distribute()
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized<T> {
    pub(crate) data: Vec<T>,
    pub(crate) shape: Shape,
}

impl<T> Normalized<T> {
    /// Wraps an already-flat buffer.
    ///
    /// # Panics
    ///
    /// Panics if `data.len()` is not `shape.volume()`.
    pub fn new(data: Vec<T>, shape: Shape) -> Self {
        assert_eq!(data.len(), shape.volume(), "buffer length must equal the shape volume");
        Normalized {data, shape}
    }

    /// The flat, row-major elements.
    pub fn data(&self) -> &[T] { &self.data }

    /// The shape the elements are laid out in.
    pub fn shape(&self) -> &Shape { &self.shape }

    /// Returns the raw buffer and its shape.
    pub fn into_parts(self) -> (Vec<T>, Shape) { (self.data, self.shape) }
}

impl<T> std::convert::AsRef<[T]> for Normalized<T> {
    fn as_ref(&self) -> &[T] { &self.data }
}

// ----------------------------------------------------------------------------

/// Flattens `seq` into a dense buffer of shape `shape`.
///
/// Wherever `seq` is narrower than `shape`, its elements are recycled in
/// their original order: a list `[a, b, c]` stretched to width 5 becomes
/// `[a, b, c, a, b]`. Wherever `seq` is shallower than `shape`, a scalar
/// stands for a whole sub-array and is cloned across every remaining level
/// at once.
///
/// ```
/// use seqcast::{seq, normalize, Seq, Shape};
/// let tiled = normalize(&seq![1, 2, 3], &Shape::new(vec![5])).unwrap();
/// assert_eq!(tiled.data(), [1, 2, 3, 1, 2]);
///
/// let grid = normalize(&Seq::Leaf(9), &Shape::new(vec![2, 3])).unwrap();
/// assert_eq!(grid.data(), [9, 9, 9, 9, 9, 9]);
/// ```
///
/// # Errors
///
/// - [`Error::EmptySequence`] if any list in `seq`, at any level, has zero
///   elements.
/// - [`Error::ShapeTooShallow`] if a list persists below the deepest level
///   of `shape` with anything but a single scalar for its position's one
///   remaining slot.
pub fn normalize<T: Clone>(seq: &Seq<T>, shape: &Shape) -> Result<Normalized<T>> {
    tracing::trace!(shape = ?shape.dims(), "normalize");
    let mut data = Vec::with_capacity(shape.volume());
    copy_elements(seq, shape.dims(), 1, &mut data)?;
    Ok(Normalized::new(data, shape.clone()))
}

/// Writes the broadcast of `seq` at 1-indexed nesting level `depth` to the
/// end of `out`.
///
/// All cursor state is the buffer length itself; cyclic repetition selects
/// children by index arithmetic on the original list, so nothing is mutated
/// and no iterator outlives a call.
fn copy_elements<T: Clone>(
    seq: &Seq<T>,
    dims: &[usize],
    depth: usize,
    out: &mut Vec<T>,
) -> Result<()> {
    match seq {
        // A scalar below its expected depth broadcasts across all remaining
        // levels at once, not one level at a time.
        Seq::Leaf(value) => {
            let copies: usize = dims[depth - 1..].iter().product();
            out.extend(std::iter::repeat_with(|| value.clone()).take(copies));
        },
        Seq::Node(children) if children.is_empty() => {
            return Err(Error::EmptySequence);
        },
        // Descended past the deepest level: each position this deep owns a
        // single slot, so the list must bottom out in exactly one scalar.
        Seq::Node(children) if depth > dims.len() => {
            match children.as_slice() {
                [Seq::Leaf(value)] => out.push(value.clone()),
                [child @ Seq::Node(_)] => {
                    return Err(Error::ShapeTooShallow {
                        needed: depth + child.order(),
                        given: dims.len(),
                    });
                },
                _ => {
                    return Err(Error::ShapeTooShallow {
                        needed: depth,
                        given: dims.len(),
                    });
                },
            }
        },
        Seq::Node(children) => {
            // Stretch to the level's width by wrapping around the original
            // elements: a, b, c, a, b, ...
            let width = dims[depth - 1];
            for i in 0..width {
                copy_elements(&children[i % children.len()], dims, depth + 1, out)?;
            }
        },
    }
    Ok(())
}

// ----------------------------------------------------------------------------
