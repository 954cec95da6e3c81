//! Tier selection observed through operation counts.

use cursor_tiers::prelude::*;

fn values(n: i32) -> Vec<i32> {
    (0..n).collect()
}

fn stepped<I: Increment + Clone>(start: &I, n: usize) -> I {
    let mut c = start.clone();
    for _ in 0..n {
        c.pre_inc();
    }
    c
}

#[test]
fn forward_list_uses_only_increments() {
    let list: ForwardList<i32> = values(10).into_iter().collect();
    let mut c = Counted::new(list.begin());
    advance(&mut c, 5);
    assert_eq!(*c.get(), 5);
    assert_eq!(
        c.counts(),
        OpCounts {
            increments: 5,
            decrements: 0,
            offsets: 0
        }
    );
}

#[test]
fn list_steps_in_both_directions() {
    let list: List<i32> = values(10).into_iter().collect();
    let mut c = Counted::new(list.begin());
    advance(&mut c, 5);
    assert_eq!(c.counts().increments, 5);
    c.reset();
    advance(&mut c, -3);
    assert_eq!(*c.get(), 2);
    assert_eq!(
        c.counts(),
        OpCounts {
            increments: 0,
            decrements: 3,
            offsets: 0
        }
    );
}

#[test]
fn slice_jumps_with_one_offset() {
    let v = values(10);
    let mut c = Counted::new(SliceCursor::new(&v));
    advance(&mut c, 5);
    assert_eq!(*c.get(), 5);
    assert_eq!(
        c.counts(),
        OpCounts {
            increments: 0,
            decrements: 0,
            offsets: 1
        }
    );
}

#[test]
fn tiers_are_resolved_per_cursor_type() {
    assert_eq!(tier_of::<ForwardListCursor<'static, i32>>(), Tier::Input);
    assert_eq!(tier_of::<ListCursor<'static, i32>>(), Tier::Bidirectional);
    assert_eq!(tier_of::<SliceCursor<'static, i32>>(), Tier::RandomAccess);
}

#[test]
fn zero_offset_touches_nothing() {
    let v = values(3);
    let flist: ForwardList<i32> = values(3).into_iter().collect();
    let list: List<i32> = values(3).into_iter().collect();

    let mut a = Counted::new(flist.begin());
    let mut b = Counted::new(list.begin());
    let mut c = Counted::new(SliceCursor::new(&v));
    advance(&mut a, 0);
    advance(&mut b, 0);
    advance(&mut c, 0);

    assert_eq!(a.counts(), OpCounts::default());
    assert_eq!(b.counts(), OpCounts::default());
    assert_eq!(c.counts(), OpCounts::default());
    assert_eq!(*a.get(), 0);
    assert_eq!(*b.get(), 0);
    assert_eq!(*c.get(), 0);
}

#[test]
fn advance_matches_repeated_pre_increment() {
    let v = values(1001);
    let flist: ForwardList<i32> = v.iter().copied().collect();
    let list: List<i32> = v.iter().copied().collect();

    for n in [0usize, 1, 5, 1000] {
        let offset = n as isize;

        let mut a = flist.begin();
        advance(&mut a, offset);
        assert_eq!(a, stepped(&flist.begin(), n));

        let mut b = list.begin();
        advance(&mut b, offset);
        assert_eq!(b, stepped(&list.begin(), n));

        let mut c = SliceCursor::new(&v);
        advance(&mut c, offset);
        assert_eq!(c, stepped(&SliceCursor::new(&v), n));
    }
}

#[test]
fn end_to_end_scenario() {
    // Singly linked: +3 from position 0 with three increments.
    let flist: ForwardList<i32> = values(8).into_iter().collect();
    let mut a = Counted::new(flist.begin());
    advance(&mut a, 3);
    assert_eq!(*a.get(), 3);
    assert_eq!(a.counts().increments, 3);
    assert_eq!(a.counts().decrements, 0);

    // Doubly linked: -2 relative to the starting position with two decrements.
    let list: List<i32> = values(8).into_iter().collect();
    let mut start = list.begin();
    advance(&mut start, 4);
    let mut b = Counted::new(start);
    advance(&mut b, -2);
    assert_eq!(*b.get() - *start.get(), -2);
    assert_eq!(b.counts().decrements, 2);
    assert_eq!(b.counts().increments, 0);

    // Contiguous: +7 with a single offset addition.
    let v = values(8);
    let mut c = Counted::new(SliceCursor::new(&v));
    advance(&mut c, 7);
    assert_eq!(c.inner().position(), 7);
    assert_eq!(c.counts().offsets, 1);
}

#[test]
fn distance_per_tier() {
    let v = values(20);
    let flist: ForwardList<i32> = v.iter().copied().collect();
    let list: List<i32> = v.iter().copied().collect();

    assert_eq!(distance(&flist.begin(), &flist.end()), 20);
    assert_eq!(distance(&list.begin(), &list.end()), 20);

    let first = Counted::new(SliceCursor::new(&v));
    let last = next(first.clone(), 20);
    first.reset();
    assert_eq!(distance(&first, &last), 20);
    assert_eq!(first.counts(), OpCounts::default());
}

#[test]
fn next_and_prev_leave_the_argument_alone() {
    let list: List<char> = "abcdef".chars().collect();
    let begin = list.begin();
    let d = next(begin, 3);
    assert_eq!(*d.get(), 'd');
    assert_eq!(*prev(d, 2).get(), 'b');
    assert_eq!(*begin.get(), 'a');
    assert_eq!(*prev(list.end(), 1).get(), 'f');
}
