use std::collections::VecDeque;

use fieldwise::{prelude::*, LayoutError};

#[derive(Record, Compare, Debug, Clone, Default, PartialEq)]
struct Particle {
    mass: f64,
    charge: i8,
    name: String,
}

#[derive(Record, Debug, Default)]
struct Particles {
    masses: Vec<f64>,
    charges: Vec<i8>,
    names: Vec<String>,
}

#[derive(Record, Debug, Default)]
struct Queued {
    masses: VecDeque<f64>,
    charges: VecDeque<i8>,
    names: VecDeque<String>,
}

#[derive(Record, Debug)]
struct Fixed {
    masses: [f64; 2],
    charges: [i8; 2],
    names: Box<[String]>,
}

fn particles() -> Vec<Particle> {
    vec![
        Particle {
            mass: 0.511,
            charge: -1,
            name: "electron".into(),
        },
        Particle {
            mass: 938.272,
            charge: 1,
            name: "proton".into(),
        },
    ]
}

#[test]
fn struct_of_arrays_fills_presized_columns() {
    let mut soa = Particles {
        masses: vec![0.0; 3],
        charges: vec![0; 3],
        names: vec![String::new(); 3],
    };
    struct_of_arrays(&particles(), &mut soa).unwrap();
    assert_eq!(soa.masses, [0.511, 938.272, 0.0]);
    assert_eq!(soa.charges, [-1, 1, 0]);
    assert_eq!(soa.names, ["electron", "proton", ""]);
}

#[test]
fn struct_of_arrays_rejects_short_columns() {
    let mut soa = Particles {
        masses: vec![0.0; 2],
        charges: vec![0; 1],
        names: vec![String::new(); 2],
    };
    assert_eq!(
        struct_of_arrays(&particles(), &mut soa),
        Err(LayoutError::ColumnTooShort {
            column: 1,
            expected: 2,
            found: 1,
        })
    );
    // Nothing was written.
    assert_eq!(soa.masses, [0.0, 0.0]);
}

#[test]
fn struct_of_arrays_with_resize_sizes_every_column() {
    let mut soa = Particles {
        masses: vec![1.0; 5],
        ..Particles::default()
    };
    struct_of_arrays_with_resize(&particles(), &mut soa);
    assert_eq!(soa.masses.len(), 2);
    assert_eq!(soa.charges.len(), 2);
    assert_eq!(soa.names, ["electron", "proton"]);
}

#[test]
fn deque_columns_resize_too() {
    let mut soa = Queued::default();
    struct_of_arrays_with_resize(&particles(), &mut soa);
    assert_eq!(soa.charges, [-1, 1]);
}

#[test]
fn fixed_columns_round_trip() {
    let mut soa = Fixed {
        masses: [0.0; 2],
        charges: [0; 2],
        names: vec![String::new(); 2].into_boxed_slice(),
    };
    struct_of_arrays(&particles(), &mut soa).unwrap();

    let mut aos = vec![Particle::default(); 2];
    array_of_structs(&soa, &mut aos).unwrap();
    assert_eq!(aos, particles());
}

#[test]
fn array_of_structs_inverts_struct_of_arrays() {
    let source = particles();
    let mut soa = Particles::default();
    struct_of_arrays_with_resize(&source, &mut soa);

    let mut dest = vec![Particle::default(); source.len()];
    array_of_structs(&soa, &mut dest).unwrap();
    assert_eq!(dest, source);
    assert!(dest.iter().zip(&source).all(|(a, b)| compare(a, b)));
}

#[test]
fn array_of_structs_rejects_short_columns() {
    let soa = Particles {
        masses: vec![1.0],
        charges: vec![1],
        names: vec!["one".into()],
    };
    let mut dest = vec![Particle::default(); 2];
    assert_eq!(
        array_of_structs(&soa, &mut dest),
        Err(LayoutError::ColumnTooShort {
            column: 0,
            expected: 2,
            found: 1,
        })
    );
    assert_eq!(dest, vec![Particle::default(); 2]);
}

#[test]
fn tuple_of_arrays_preserves_order() {
    let toa = tuple_of_arrays(&particles());
    let (masses, charges, names) = toa.into_inner();
    assert_eq!(masses, [0.511, 938.272]);
    assert_eq!(charges, [-1, 1]);
    assert_eq!(names, ["electron", "proton"]);
}

#[test]
fn empty_sources_produce_empty_columns() {
    let toa = tuple_of_arrays::<Particle>(&[]);
    assert!(toa.get::<0>().is_empty());
    assert!(toa.get::<2>().is_empty());

    let mut soa = Particles::default();
    struct_of_arrays(&[] as &[Particle], &mut soa).unwrap();
    assert!(soa.names.is_empty());
}
