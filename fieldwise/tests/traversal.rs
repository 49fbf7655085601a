use std::fmt::{Debug, Write};

use fieldwise::{prelude::*, visit};

#[derive(Record, Debug, Clone, PartialEq)]
struct Reading {
    sensor: &'static str,
    celsius: f32,
    samples: u32,
}

/// Records each slot's index and debug form.
#[derive(Default)]
struct Log(Vec<(usize, String)>);

impl<T: Debug> Visit<T> for Log {
    fn visit(&mut self, index: usize, slot: &T) {
        self.0.push((index, format!("{:?}", slot)));
    }
}

/// Doubles numeric slots and leaves others alone.
struct Double;

impl VisitMut<&'static str> for Double {
    fn visit_mut(&mut self, _: usize, _: &mut &'static str) {}
}

impl VisitMut<f32> for Double {
    fn visit_mut(&mut self, _: usize, slot: &mut f32) {
        *slot *= 2.0;
    }
}

impl VisitMut<u32> for Double {
    fn visit_mut(&mut self, _: usize, slot: &mut u32) {
        *slot *= 2;
    }
}

impl<'a> VisitMut<&'a mut f32> for Double {
    fn visit_mut(&mut self, index: usize, slot: &mut &'a mut f32) {
        <Self as VisitMut<f32>>::visit_mut(self, index, slot)
    }
}

impl<'a> VisitMut<&'a mut u32> for Double {
    fn visit_mut(&mut self, index: usize, slot: &mut &'a mut u32) {
        <Self as VisitMut<u32>>::visit_mut(self, index, slot)
    }
}

impl<'a> VisitMut<&'a mut &'static str> for Double {
    fn visit_mut(&mut self, _: usize, _: &mut &'a mut &'static str) {}
}

/// Describes pairs of slots as `left -> right`.
#[derive(Default)]
struct Diff(String);

impl<A: Debug, B: Debug> VisitZip<A, B> for Diff {
    fn visit_zip(&mut self, index: usize, left: &A, right: &B) {
        let _ = write!(self.0, "[{}] {:?} -> {:?}; ", index, left, right);
    }
}

/// Copies each left slot into the right one.
struct Assign;

impl<T: Clone> VisitZipMut<T, T> for Assign {
    fn visit_zip_mut(&mut self, _: usize, left: &T, right: &mut T) {
        right.clone_from(left);
    }
}

fn reading() -> Reading {
    Reading {
        sensor: "north",
        celsius: 21.5,
        samples: 3,
    }
}

#[test]
fn for_each_visits_in_index_order() {
    let mut log = Log::default();
    visit::for_each(&reading().to_tuple(), &mut log);
    assert_eq!(
        log.0,
        [
            (0, "\"north\"".to_owned()),
            (1, "21.5".to_owned()),
            (2, "3".to_owned()),
        ]
    );
}

#[test]
fn for_each_over_the_empty_tuple_visits_nothing() {
    let mut log = Log::default();
    flat_tuple!().for_each(&mut log);
    assert!(log.0.is_empty());
}

#[test]
fn for_each_mut_over_values() {
    let mut tuple = reading().to_tuple();
    visit::for_each_mut(&mut tuple, &mut Double);
    assert_eq!(tuple.into_inner(), ("north", 43.0, 6));
}

#[test]
fn for_each_mut_over_aliases_writes_the_record() {
    let mut r = reading();
    convert(&mut r, Reference).for_each_mut(&mut Double);
    assert_eq!(r.celsius, 43.0);
    assert_eq!(r.samples, 6);
}

#[test]
fn zip_for_each_pairs_slots() {
    let before = reading();
    let mut after = reading();
    after.samples = 4;

    let mut diff = Diff::default();
    visit::zip_for_each(&before.as_tuple(), &after.as_tuple(), &mut diff);
    assert_eq!(
        diff.0,
        "[0] \"north\" -> \"north\"; [1] 21.5 -> 21.5; [2] 3 -> 4; "
    );
}

#[test]
fn zip_for_each_mut_assigns_slotwise() {
    let source = flat_tuple!(1u8, String::from("one"));
    let mut dest = flat_tuple!(0u8, String::new());
    visit::zip_for_each_mut(&source, &mut dest, &mut Assign);
    assert_eq!(dest, source);
}
