//! Building a query must not pull or call back; only draining does.

use std::cell::Cell;
use std::rc::Rc;

use lazyseq::{Cursor, Result, Sequence, Source};

/// Source over `0..len` that counts every pull across all its cursors.
#[derive(Clone)]
struct Counted {
    len: u32,
    pulls: Rc<Cell<usize>>,
}

struct CountedCursor {
    next: u32,
    len: u32,
    pulls: Rc<Cell<usize>>,
}

impl Source for Counted {
    type Item = u32;
    type Cursor = CountedCursor;

    fn cursor(&self) -> CountedCursor {
        CountedCursor {
            next: 0,
            len: self.len,
            pulls: self.pulls.clone(),
        }
    }
}

impl Cursor for CountedCursor {
    type Item = u32;

    fn pull(&mut self) -> Result<Option<u32>> {
        self.pulls.set(self.pulls.get() + 1);
        if self.next == self.len {
            return Ok(None);
        }
        self.next += 1;
        Ok(Some(self.next - 1))
    }

    fn release(&mut self) {}
}

fn counted(len: u32) -> (Sequence<Counted>, Rc<Cell<usize>>) {
    let pulls = Rc::new(Cell::new(0));
    let source = Counted {
        len,
        pulls: pulls.clone(),
    };
    (Sequence::from_source(source), pulls)
}

#[test]
fn test_building_a_query_calls_nothing() {
    let calls = Rc::new(Cell::new(0));
    let (seq, pulls) = counted(10);

    let tick = |calls: &Rc<Cell<usize>>| calls.set(calls.get() + 1);
    let (c1, c2, c3, c4, c5, c6) = (
        calls.clone(),
        calls.clone(),
        calls.clone(),
        calls.clone(),
        calls.clone(),
        calls.clone(),
    );
    let query = seq
        .filter(move |_| {
            tick(&c1);
            true
        })
        .select(move |x| {
            tick(&c2);
            x
        })
        .skip_while(move |_| {
            tick(&c3);
            false
        })
        .take_while(move |_| {
            tick(&c4);
            true
        })
        .select_many(move |x| {
            tick(&c5);
            vec![x]
        })
        .distinct_by(move |a, b| {
            tick(&c6);
            a == b
        })
        .skip(1)
        .take(5);

    assert_eq!(calls.get(), 0);
    assert_eq!(pulls.get(), 0);

    assert_eq!(query.to_vec().unwrap(), vec![1, 2, 3, 4, 5]);
    assert!(calls.get() > 0);
}

#[test]
fn test_join_and_concat_do_not_pull_at_call_time() {
    let (outer, outer_pulls) = counted(3);
    let (inner, inner_pulls) = counted(3);
    let (tail, tail_pulls) = counted(2);
    let calls = Rc::new(Cell::new(0));
    let tick = |calls: &Rc<Cell<usize>>| calls.set(calls.get() + 1);
    let (c1, c2, c3, c4, c5) = (
        calls.clone(),
        calls.clone(),
        calls.clone(),
        calls.clone(),
        calls.clone(),
    );

    let query = outer
        .join(
            inner,
            move |x| {
                tick(&c1);
                *x
            },
            move |y| {
                tick(&c2);
                *y
            },
            move |x, _| {
                tick(&c3);
                x
            },
        )
        .unwrap()
        .select_many_with(
            move |x| {
                tick(&c4);
                vec![x]
            },
            move |x| {
                tick(&c5);
                x
            },
        )
        .concat(tail)
        .unwrap();
    assert_eq!(calls.get(), 0);
    assert_eq!(outer_pulls.get() + inner_pulls.get() + tail_pulls.get(), 0);

    assert_eq!(query.to_vec().unwrap(), vec![0, 1, 2, 0, 1]);
    assert!(inner_pulls.get() > 0);
    // Per outer item: one outer key, one result, one collection, one
    // projection, plus one inner key per scanned candidate (1 + 2 + 3).
    assert_eq!(calls.get(), 3 * 4 + 6);
}

#[test]
fn test_take_never_pulls_past_count() {
    let (seq, pulls) = counted(100);
    assert_eq!(seq.take(3).to_vec().unwrap(), vec![0, 1, 2]);
    assert_eq!(pulls.get(), 3);
}

#[test]
fn test_short_circuiting_terminals_stop_pulling() {
    let (seq, pulls) = counted(100);
    assert!(seq.any_by(|x| *x == 4).unwrap());
    assert_eq!(pulls.get(), 5);

    let (seq, pulls) = counted(100);
    assert_eq!(seq.first_by(|x| *x > 1).unwrap(), 2);
    assert_eq!(pulls.get(), 3);

    let (seq, pulls) = counted(100);
    assert!(!seq.all(|x| *x < 3).unwrap());
    assert_eq!(pulls.get(), 4);

    let (seq, pulls) = counted(100);
    assert!(seq.contains(&0).unwrap());
    assert_eq!(pulls.get(), 1);
}

#[test]
fn test_single_fails_on_second_match_without_finishing() {
    let (seq, pulls) = counted(100);
    assert!(seq.single_by(|x| x % 2 == 1).is_err());
    // Matches at 1 and 3; the second match stops the traversal.
    assert_eq!(pulls.get(), 4);
}

#[test]
fn test_count_traverses_everything() {
    let (seq, pulls) = counted(7);
    assert_eq!(seq.count_by(|x| *x > 100).unwrap(), 0);
    // Seven items plus the pull that reported done.
    assert_eq!(pulls.get(), 8);
}

#[test]
fn test_every_cursor_restarts_operator_state() {
    let (seq, _) = counted(6);
    let query = seq.skip(2).take(2);
    assert_eq!(query.to_vec().unwrap(), vec![2, 3]);
    assert_eq!(query.to_vec().unwrap(), vec![2, 3]);
}

#[test]
fn test_one_shot_source_does_not_rewind() {
    let seq = Sequence::once(vec![1, 2, 3, 4]);
    assert_eq!(seq.clone().take(2).to_vec().unwrap(), vec![1, 2]);
    assert_eq!(seq.to_vec().unwrap(), vec![3, 4]);
}
