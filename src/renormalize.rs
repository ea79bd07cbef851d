use super::{Error, Normalized, Result, Shape};

impl<T: Clone> Normalized<T> {
    /// Grows this value to `target` without revisiting its source sequence.
    ///
    /// Each level widens by recycling what the buffer already holds, so the
    /// result is the same as normalizing the (no longer available) source
    /// against `target` would have been, had the source been exactly as wide
    /// as this value's shape. A level the target leaves unchanged costs
    /// nothing; with an unchanged `target` the value is returned as-is.
    ///
    /// If `target` has more levels than the current shape, the missing
    /// leading levels behave as implicit singletons: the whole value is
    /// repeated, like any width-1 axis.
    ///
    /// ```
    /// use seqcast::{seq, normalize, Shape};
    /// let n = normalize(&seq![3, 4], &Shape::new(vec![2])).unwrap();
    /// let n = n.renormalize(&Shape::new(vec![5])).unwrap();
    /// assert_eq!(n.data(), [3, 4, 3, 4, 3]);
    /// ```
    ///
    /// # Errors
    ///
    /// - [`Error::ShapeTooShallow`] if `target` has fewer levels than the
    ///   current shape.
    /// - [`Error::ShapeNotGrowable`] if `target` shrinks any level; this
    ///   operation never discards data.
    /// - [`Error::EmptySequence`] if growth must recycle a zero-width level.
    pub fn renormalize(self, target: &Shape) -> Result<Normalized<T>> {
        tracing::trace!(from = ?self.shape.dims(), to = ?target.dims(), "renormalize");
        let levels = target.levels();
        if levels < self.shape.levels() {
            return Err(Error::ShapeTooShallow {
                needed: self.shape.levels(),
                given: levels,
            });
        }

        // A missing leading level behaves as an implicit singleton.
        let mut dims = vec![1; levels - self.shape.levels()];
        dims.extend_from_slice(self.shape.dims());
        let goal = target.dims();
        let mut data = self.data;

        // Innermost level first: the block boundaries at each level are only
        // correct once every level inside it has reached its final width.
        for level in (0..levels).rev() {
            if dims[level] > goal[level] {
                return Err(Error::ShapeNotGrowable {
                    level,
                    from: dims[level],
                    to: goal[level],
                });
            }
            if dims[level] == goal[level] { continue; }

            let old_section: usize = dims[level..].iter().product();
            let new_section: usize = goal[level..].iter().product();
            if old_section == 0 {
                // A sentinel (zero-width) level holds nothing to recycle.
                return Err(Error::EmptySequence);
            }

            // Widen each block left to right; growing one block shifts the
            // position of all the blocks after it.
            let blocks = data.len() / old_section;
            let mut begin = 0;
            for _ in 0..blocks {
                repeat_range(&mut data, begin, begin + old_section, new_section);
                begin += new_section;
            }
            dims[level] = goal[level];
        }
        Ok(Normalized::new(data, target.clone()))
    }
}

/// Widens the window `begin..end` of `buffer` to `width` elements by cycling
/// through the window's own contents in order, inserting the generated tail
/// at the window's end and shifting everything after it.
///
/// A window already at least `width` wide is left alone.
fn repeat_range<T: Clone>(buffer: &mut Vec<T>, begin: usize, end: usize, width: usize) {
    let have = end - begin;
    if width <= have { return; }
    let tail: Vec<T> = (0..width - have)
        .map(|i| buffer[begin + i % have].clone())
        .collect();
    buffer.splice(end..end, tail);
}

// ----------------------------------------------------------------------------
