//! Early release must reach the bottom of the operator chain.

use std::cell::Cell;
use std::rc::Rc;

use lazyseq::{Cursor, Result, Sequence, Source};

/// Records how many cursors were opened and how many were released early.
#[derive(Default)]
struct Probe {
    opened: Cell<usize>,
    released: Cell<usize>,
}

#[derive(Clone)]
struct Probed {
    items: Vec<i32>,
    probe: Rc<Probe>,
}

struct ProbedCursor {
    items: std::vec::IntoIter<i32>,
    probe: Rc<Probe>,
}

impl Source for Probed {
    type Item = i32;
    type Cursor = ProbedCursor;

    fn cursor(&self) -> ProbedCursor {
        self.probe.opened.set(self.probe.opened.get() + 1);
        ProbedCursor {
            items: self.items.clone().into_iter(),
            probe: self.probe.clone(),
        }
    }
}

impl Cursor for ProbedCursor {
    type Item = i32;

    fn pull(&mut self) -> Result<Option<i32>> {
        Ok(self.items.next())
    }

    fn release(&mut self) {
        self.probe.released.set(self.probe.released.get() + 1);
    }
}

fn probed(items: &[i32]) -> (Sequence<Probed>, Rc<Probe>) {
    let probe = Rc::new(Probe::default());
    let source = Probed {
        items: items.to_vec(),
        probe: probe.clone(),
    };
    (Sequence::from_source(source), probe)
}

#[test]
fn test_take_releases_through_every_layer() {
    let (seq, probe) = probed(&[1, 2, 3, 4, 5, 6]);
    let out = seq
        .filter(|x| *x > 0)
        .select(|x| x * 10)
        .distinct()
        .skip(1)
        .take(2)
        .to_vec()
        .unwrap();
    assert_eq!(out, vec![20, 30]);
    assert_eq!(probe.released.get(), 1);
}

#[test]
fn test_natural_exhaustion_does_not_release() {
    let (seq, probe) = probed(&[1, 2, 3]);
    assert_eq!(seq.clone().select(|x| x + 1).count().unwrap(), 3);
    assert_eq!(seq.take(10).to_vec().unwrap(), vec![1, 2, 3]);
    assert_eq!(probe.released.get(), 0);
}

#[test]
fn test_short_circuit_terminals_release() {
    let (seq, probe) = probed(&[1, 2, 3, 4]);
    assert_eq!(seq.first().unwrap(), 1);
    assert!(seq.any_by(|x| *x == 2).unwrap());
    assert!(!seq.all(|x| *x < 3).unwrap());
    assert!(seq.contains(&3).unwrap());
    assert!(seq.single().is_err());
    assert_eq!(probe.released.get(), 5);

    // The cursor has not reported done yet, so a match on the last item
    // still releases.
    assert!(seq.contains(&4).unwrap());
    assert_eq!(probe.released.get(), 6);
}

#[test]
fn test_breaking_a_for_loop_releases() {
    let (seq, probe) = probed(&[1, 2, 3, 4]);
    let query = seq.skip_while(|x| *x < 2).take_while(|x| *x < 100);
    for item in &query {
        if item.unwrap() == 3 {
            break;
        }
    }
    assert_eq!(probe.released.get(), 1);
}

#[test]
fn test_take_while_releases_on_first_failure() {
    let (seq, probe) = probed(&[1, 2, 9, 1]);
    assert_eq!(seq.take_while(|x| *x < 5).to_vec().unwrap(), vec![1, 2]);
    assert_eq!(probe.released.get(), 1);
}

#[test]
fn test_flatten_releases_inner_and_outer() {
    let (outer, outer_probe) = probed(&[1, 2]);
    let (inner, inner_probe) = probed(&[7, 8, 9]);
    let first = outer
        .select_many(move |_| inner.clone())
        .first()
        .unwrap();
    assert_eq!(first, 7);
    assert_eq!(outer_probe.released.get(), 1);
    assert_eq!(inner_probe.released.get(), 1);
}

#[test]
fn test_concat_releases_both_halves() {
    let (head, head_probe) = probed(&[1, 2]);
    let (tail, tail_probe) = probed(&[3, 4]);
    let first = head.concat(tail).unwrap().first().unwrap();
    assert_eq!(first, 1);
    assert_eq!(head_probe.released.get(), 1);
    assert_eq!(tail_probe.released.get(), 1);
}

#[test]
fn test_join_opens_fresh_inner_cursor_per_outer_item() {
    let (outer, _) = probed(&[3, 1, 5]);
    let (inner, inner_probe) = probed(&[1, 2, 3, 4]);
    let joined = outer
        .join(inner, |x| *x, |y| *y, |x, y| x + y)
        .unwrap()
        .to_vec()
        .unwrap();
    assert_eq!(joined, vec![6, 2]);
    assert_eq!(inner_probe.opened.get(), 3);
    // 3 and 1 match before the inner end; 5 scans to exhaustion.
    assert_eq!(inner_probe.released.get(), 2);
}
