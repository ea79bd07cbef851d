//! Property-based tests for the broadcasting operations.
//!
//! These generate random jagged trees and verify:
//! 1. The normalizer's buffer-length invariant.
//! 2. Equivalence of the two order-delta strategies (a scalar cloned across
//!    all remaining levels at once, versus recursed one level at a time).
//! 3. Re-normalization agrees with normalization wherever both are defined.

use proptest::prelude::*;

use seqcast::{joint_shape, normalize, transpose_distribute, Seq, Shape};

/// A random jagged tree, rooted at a non-empty list.
///
/// Lists are never empty: an empty list is an error by design, and is
/// covered by the unit tests.
fn arb_seq() -> impl Strategy<Value = Seq<i32>> {
    let leaf = any::<i8>().prop_map(|v| Seq::Leaf(v as i32));
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop::collection::vec(inner, 1..4).prop_map(Seq::Node)
    })
    .prop_map(|seq| match seq {
        // Force a list at the root so the inferred shape has a real width.
        leaf @ Seq::Leaf(_) => Seq::Node(vec![leaf]),
        node => node,
    })
}

/// Reference normalizer that broadcasts a scalar one level at a time instead
/// of cloning it across all remaining levels at once.
fn stepwise_normalize(seq: &Seq<i32>, dims: &[usize], out: &mut Vec<i32>) {
    match (seq, dims) {
        (Seq::Leaf(value), []) => out.push(*value),
        (Seq::Leaf(_), [width, rest @ ..]) => {
            for _ in 0..*width {
                stepwise_normalize(seq, rest, out);
            }
        },
        (Seq::Node(children), [width, rest @ ..]) => {
            for i in 0..*width {
                stepwise_normalize(&children[i % children.len()], rest, out);
            }
        },
        (Seq::Node(_), []) => unreachable!("an inferred shape covers every level"),
    }
}

proptest! {
    #[test]
    fn buffer_length_is_the_shape_volume(a in arb_seq(), b in arb_seq()) {
        let shape = joint_shape([&a, &b]);
        for operand in [&a, &b] {
            let n = normalize(operand, &shape).unwrap();
            prop_assert_eq!(n.data().len(), shape.volume());
            prop_assert_eq!(n.shape(), &shape);
        }
    }

    #[test]
    fn scalar_broadcast_fills_the_volume(
        value in any::<i32>(),
        dims in prop::collection::vec(1usize..5, 0..4),
    ) {
        let shape = Shape::new(dims);
        let n = normalize(&Seq::Leaf(value), &shape).unwrap();
        prop_assert_eq!(n.data(), vec![value; shape.volume()]);
    }

    #[test]
    fn flat_lists_tile_cyclically(
        values in prop::collection::vec(any::<i32>(), 1..6),
        extra in 0usize..10,
    ) {
        let seq = Seq::Node(values.iter().copied().map(Seq::Leaf).collect());
        let width = values.len() + extra;
        let n = normalize(&seq, &Shape::new(vec![width])).unwrap();
        for (i, element) in n.data().iter().enumerate() {
            prop_assert_eq!(*element, values[i % values.len()]);
        }
    }

    #[test]
    fn order_delta_strategies_agree(a in arb_seq(), b in arb_seq()) {
        let shape = joint_shape([&a, &b]);
        for operand in [&a, &b] {
            let direct = normalize(operand, &shape).unwrap();
            let mut stepwise = Vec::new();
            stepwise_normalize(operand, shape.dims(), &mut stepwise);
            prop_assert_eq!(direct.data(), stepwise);
        }
    }

    #[test]
    fn renormalize_to_own_shape_is_identity(a in arb_seq()) {
        let n = normalize(&a, &a.shape()).unwrap();
        let again = n.clone().renormalize(n.shape()).unwrap();
        prop_assert_eq!(again, n);
    }

    #[test]
    fn outer_growth_agrees_with_normalization(a in arb_seq(), extra in 1usize..4) {
        // Growing the outermost level of an already-normalized value gives
        // the same buffer as normalizing the source against the wider shape.
        let shape = a.shape();
        let mut dims = shape.dims().to_vec();
        dims[0] += extra;
        let wider = Shape::new(dims);

        let grown = normalize(&a, &shape).unwrap().renormalize(&wider).unwrap();
        let direct = normalize(&a, &wider).unwrap();
        prop_assert_eq!(grown, direct);
    }

    #[test]
    fn leading_growth_agrees_with_wrapping(a in arb_seq(), repeats in 1usize..4) {
        // Adding a leading level of width `r` to an already-normalized value
        // is the same as normalizing `[a]` stretched to `r` copies.
        let shape = a.shape();
        let mut dims = vec![repeats];
        dims.extend_from_slice(shape.dims());
        let deeper = Shape::new(dims);

        let grown = normalize(&a, &shape).unwrap().renormalize(&deeper).unwrap();
        let direct = normalize(&Seq::Node(vec![a.clone()]), &deeper).unwrap();
        prop_assert_eq!(grown, direct);
    }

    #[test]
    fn commutative_operator_commutes(a in arb_seq(), b in arb_seq()) {
        let forward = transpose_distribute(&a, &b, |l, r| l.wrapping_add(r)).unwrap();
        let backward = transpose_distribute(&b, &a, |l, r| l.wrapping_add(r)).unwrap();
        prop_assert_eq!(forward, backward);
    }
}
