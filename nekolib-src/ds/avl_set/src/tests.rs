use std::collections::BTreeSet;

use maplit::btreeset;
use rand::{seq::SliceRandom, Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::AvlSet;

fn rng() -> ChaCha20Rng { ChaCha20Rng::from_seed([0; 32]) }

fn height<T>(set: &AvlSet<T>) -> usize { set.arena.height(set.root) }

fn by_cursor<T: Copy>(set: &AvlSet<T>) -> Vec<T> {
    let mut res = vec![];
    let mut it = set.begin();
    while it != set.end() {
        res.push(*it);
        it.move_next();
    }
    res
}

#[test]
fn sanity_check() {
    let mut set = AvlSet::new();
    for x in [5, 3, 8, 1, 4, 7, 9] {
        assert!(set.insert(x));
    }
    set.assert_invariants();
    assert_eq!(by_cursor(&set), [1, 3, 4, 5, 7, 8, 9]);
    assert_eq!(set.len(), 7);
    assert_eq!(set.find(&6), set.end());
    assert_eq!(set.lower_bound(&6).get(), Some(&7));

    assert!(set.erase(&5));
    set.assert_invariants();
    assert_eq!(by_cursor(&set), [1, 3, 4, 7, 8, 9]);
    assert_eq!(set.len(), 6);
}

#[test]
fn empty() {
    let mut set = AvlSet::<i32>::new();
    assert!(set.is_empty());
    assert_eq!(set.len(), 0);
    assert!(!set.erase(&1));
    assert_eq!(set.find(&1), set.end());
    assert_eq!(set.lower_bound(&1), set.end());
    assert_eq!(set.first(), None);
    assert_eq!(set.last(), None);
    assert_eq!(set.nth(0), None);
    assert_eq!(set.rank(&1), 0);
    assert_eq!(set.iter().next(), None);
    set.assert_invariants();

    assert!(set.insert(1));
    assert!(!set.is_empty());
    assert_eq!(set.arena[set.root.unwrap()].parent, None);
    assert!(set.erase(&1));
    assert!(set.is_empty());
    assert_eq!(set.begin(), set.end());
}

#[test]
fn duplicates_collapse() {
    let set: AvlSet<_> = [3, 1, 3, 2, 1, 3].into();
    assert_eq!(set.len(), 3);
    let actual: BTreeSet<_> = set.iter().copied().collect();
    assert_eq!(actual, btreeset! {1, 2, 3});

    let set: AvlSet<_> = vec![2, 2, 2].into_iter().collect();
    assert_eq!(format!("{set:?}"), "{2}");
}

#[test]
fn idempotent_insert() {
    let mut set: AvlSet<_> = (0..50).map(|x| x * 7 % 50).collect();
    let before = by_cursor(&set);
    for x in 0..50 {
        assert!(!set.insert(x));
        assert_eq!(set.len(), 50);
    }
    assert_eq!(by_cursor(&set), before);
    set.assert_invariants();
}

#[test]
fn round_trip() {
    let mut rng = rng();
    let mut keys: Vec<_> = (0..200).map(|x| 2 * x).collect();
    keys.shuffle(&mut rng);
    let mut set: AvlSet<_> = keys.into_iter().collect();

    for x in (-1..400).step_by(2) {
        let before = by_cursor(&set);
        assert!(set.insert(x));
        assert!(set.erase(&x));
        set.assert_invariants();
        assert_eq!(set.len(), 200);
        assert_eq!(by_cursor(&set), before);
    }
}

#[test]
fn erase_every_shape() {
    // erase each key from a fresh tree, hitting leaves, one-child nodes and
    // two-child nodes at every depth
    let n = 40;
    for x in 0..n {
        let mut set: AvlSet<_> = (0..n).collect();
        assert!(set.erase(&x));
        set.assert_invariants();
        let expected: Vec<_> = (0..n).filter(|&y| y != x).collect();
        assert_eq!(by_cursor(&set), expected);
        assert!(!set.contains(&x));
    }
}

#[test]
fn erase_replaces_by_successor() {
    //       4
    //     /   \
    //    2     6
    //   / \   / \
    //  1   3 5   7
    let mut set: AvlSet<_> = [4, 2, 6, 1, 3, 5, 7].into();
    set.erase(&4);
    let root = set.root.unwrap();
    assert_eq!(set.arena[root].key, 5);
    assert_eq!(set.arena[root].parent, None);
    set.assert_invariants();
}

#[test]
fn balanced_on_sorted_input() {
    let n = 10_000;
    let asc: AvlSet<_> = (0..n).collect();
    asc.assert_invariants();
    assert_eq!(asc.len(), n);
    assert!(height(&asc) <= 15);

    let desc: AvlSet<_> = (0..n).rev().collect();
    desc.assert_invariants();
    assert!(height(&desc) <= 15);

    let zigzag: AvlSet<_> =
        (0..n / 2).flat_map(|i| [i, n - 1 - i]).collect();
    zigzag.assert_invariants();
    assert!(height(&zigzag) <= 19);
}

#[test]
fn balanced_on_random_input() {
    let mut rng = rng();
    let n = 10_000;
    let mut set = AvlSet::new();
    for _ in 0..n {
        set.insert(rng.gen_range(0..1_000_000_u32));
    }
    set.assert_invariants();
    // AVL trees with n nodes are less than 1.45 log2(n + 2) high
    assert!(height(&set) <= 19);

    let keys: Vec<_> = set.iter().copied().collect();
    for x in keys.into_iter().step_by(2) {
        set.erase(&x);
    }
    set.assert_invariants();
    assert!(height(&set) <= 18);
}

#[test]
fn random_ops() {
    let mut rng = rng();
    let mut actual = AvlSet::new();
    let mut expected = BTreeSet::new();

    for _ in 0..3000 {
        let x = rng.gen_range(0..100);
        if rng.gen_bool(0.6) {
            assert_eq!(actual.insert(x), expected.insert(x));
        } else {
            assert_eq!(actual.erase(&x), expected.remove(&x));
        }
        actual.assert_invariants();
        assert_eq!(actual.len(), expected.len());

        let y = rng.gen_range(-1..=101);
        assert_eq!(actual.contains(&y), expected.contains(&y));
        assert_eq!(actual.find(&y).get(), expected.get(&y));
        assert_eq!(actual.lower_bound(&y).get(), expected.range(y..).next());
        assert_eq!(actual.rank(&y), expected.range(..y).count());
    }
    assert!(actual.iter().eq(expected.iter()));
    assert!(actual.iter().rev().eq(expected.iter().rev()));
    assert_eq!(actual.first(), expected.first());
    assert_eq!(actual.last(), expected.last());
    for (i, x) in expected.iter().enumerate() {
        assert_eq!(actual.nth(i), Some(x));
        assert_eq!(actual.find(x).index(), i);
    }
    assert_eq!(actual.nth(expected.len()), None);
}

#[test]
fn cursor_symmetry() {
    let mut rng = rng();
    let mut keys: Vec<_> = (0..300).map(|x| x * 3).collect();
    keys.shuffle(&mut rng);
    let set: AvlSet<_> = keys.into_iter().collect();

    let mut it = set.begin();
    while it != set.end() {
        let next = it.succ();
        assert_eq!(next.pred(), it);
        it = next;
    }
    assert_eq!(set.end().pred().get(), set.last());
    assert_eq!(set.end().pred().succ(), set.end());

    let mut rev = vec![];
    let mut it = set.end();
    while it != set.begin() {
        it.move_prev();
        rev.push(*it);
    }
    assert!(rev.iter().eq(set.iter().rev()));
}

#[test]
fn deep_copy() {
    let mut src: AvlSet<_> = (0..100).collect();
    let mut copy = src.clone();
    copy.assert_invariants();
    assert_eq!(copy, src);

    src.erase(&10);
    src.insert(1000);
    assert!(copy.contains(&10));
    assert!(!copy.contains(&1000));

    copy.erase(&20);
    assert!(src.contains(&20));
    assert_eq!(src.len(), 100);
    assert_eq!(copy.len(), 99);

    let mut dst: AvlSet<_> = [-1, -2, -3].into();
    dst.clone_from(&src);
    dst.assert_invariants();
    assert_eq!(dst, src);
    src.clear();
    assert!(src.is_empty());
    assert_eq!(dst.len(), 100);
    assert!(!dst.contains(&-1));
}

#[test]
fn reuse_after_clear() {
    let mut set: AvlSet<_> = (0..10).collect();
    set.clear();
    assert_eq!(set.len(), 0);
    set.extend(&[3, 1, 2]);
    set.assert_invariants();
    assert_eq!(by_cursor(&set), [1, 2, 3]);
}

#[test]
fn non_copy_elements() {
    let mut set = AvlSet::new();
    for s in ["pear", "apple", "fig", "apple"] {
        set.insert(s.to_owned());
    }
    assert_eq!(set.len(), 3);
    assert_eq!(set.lower_bound(&"b".to_owned()).get().unwrap(), "fig");
    assert!(set.erase(&"fig".to_owned()));
    assert_eq!(format!("{set:?}"), r#"{"apple", "pear"}"#);
}
