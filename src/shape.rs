use super::Seq;

/// The width a bare scalar contributes to a [`Shape`]: no constraint at all.
///
/// A scalar operand must stretch to whatever width the other operands demand,
/// so its entry is the identity under the `max` used by [`Shape::merge()`];
/// any real width out-weighs it.
pub const SCALAR: usize = 0;

// ----------------------------------------------------------------------------

/// The per-level widths that make a group of operands broadcast-compatible.
///
/// Entry `0` is the outermost nesting level. A `Shape` is usually obtained
/// from [`Seq::shape()`] or [`joint_shape()`], but any vector of widths is
/// accepted: [`normalize()`] is defined for shapes both wider and deeper than
/// the sequence they are applied to.
///
/// [`normalize()`]: super::normalize()
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape(Vec<usize>);

impl Shape {
    /// Constructs a `Shape` from outermost-first widths.
    pub fn new(dims: impl Into<Vec<usize>>) -> Self { Shape(dims.into()) }

    /// The shape of a bare scalar: one level, unconstrained.
    pub fn scalar() -> Self { Shape(vec![SCALAR]) }

    /// The shape with no levels at all, whose [`volume()`] is `1`.
    ///
    /// [`volume()`]: Shape::volume()
    pub fn empty() -> Self { Shape(Vec::new()) }

    /// The widths, outermost first.
    pub fn dims(&self) -> &[usize] { &self.0 }

    /// The number of nesting levels.
    pub fn levels(&self) -> usize { self.0.len() }

    /// The number of elements in a dense array of this shape.
    ///
    /// The empty product is `1`: a shape with no levels holds exactly one
    /// element.
    pub fn volume(&self) -> usize { self.0.iter().product() }

    /// Returns `true` if no level carries a real width, i.e. every operand
    /// that contributed to this shape was a bare scalar.
    pub fn is_unconstrained(&self) -> bool {
        self.0.iter().all(|&width| width == SCALAR)
    }

    /// Merges two shapes into the smallest shape both can be normalized to:
    /// the levelwise maximum, over the longer of the two level counts.
    ///
    /// This is commutative and associative, and [`SCALAR`] is its identity,
    /// so any number of operand shapes can be merged in any order.
    ///
    /// ```
    /// use seqcast::Shape;
    /// let a = Shape::new(vec![3]);
    /// let b = Shape::new(vec![2, 2]);
    /// assert_eq!(a.merge(&b), Shape::new(vec![3, 2]));
    /// assert_eq!(b.merge(&a), Shape::new(vec![3, 2]));
    /// assert_eq!(a.merge(&Shape::scalar()), a);
    /// ```
    pub fn merge(&self, other: &Shape) -> Shape {
        let levels = self.0.len().max(other.0.len());
        Shape((0..levels).map(|level| {
            let ours = self.0.get(level).copied().unwrap_or(SCALAR);
            let theirs = other.0.get(level).copied().unwrap_or(SCALAR);
            ours.max(theirs)
        }).collect())
    }
}

impl From<Vec<usize>> for Shape {
    fn from(dims: Vec<usize>) -> Self { Shape(dims) }
}

// ----------------------------------------------------------------------------

impl<T> Seq<T> {
    /// Computes the shape of this sequence considered alone: at every nesting
    /// level, the widest list found there.
    ///
    /// A bare scalar has the one-level sentinel shape, [`Shape::scalar()`].
    ///
    /// ```
    /// use seqcast::{seq, Seq, Shape};
    /// assert_eq!(seq![2, 3, [4, 5]].shape(), Shape::new(vec![3, 2]));
    /// assert_eq!(Seq::Leaf(73).shape(), Shape::scalar());
    /// ```
    pub fn shape(&self) -> Shape {
        let mut dims = vec![SCALAR];
        record_widths(self, 0, &mut dims);
        Shape(dims)
    }
}

fn record_widths<T>(seq: &Seq<T>, level: usize, dims: &mut Vec<usize>) {
    if let Seq::Node(children) = seq {
        if level == dims.len() { dims.push(SCALAR); }
        dims[level] = dims[level].max(children.len());
        for child in children { record_widths(child, level + 1, dims); }
    }
}

/// Merges the shapes of any number of operands into the common shape they
/// must all be normalized to.
///
/// Each operand's shape is inferred independently and the results are folded
/// with [`Shape::merge()`]. No operands at all yields [`Shape::empty()`].
///
/// ```
/// use seqcast::{seq, joint_shape, Shape};
/// let a = seq![2, 3, 4];
/// let b = seq![3, [2, 4]];
/// let c = seq![7];
/// assert_eq!(joint_shape([&a, &b, &c]), Shape::new(vec![3, 2]));
/// ```
pub fn joint_shape<'a, T: 'a>(seqs: impl IntoIterator<Item = &'a Seq<T>>) -> Shape {
    seqs.into_iter()
        .map(Seq::shape)
        .fold(Shape::empty(), |joint, shape| joint.merge(&shape))
}

// ----------------------------------------------------------------------------
