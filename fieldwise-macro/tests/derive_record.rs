use fieldwise::{Compare, Fields, Record};
use static_assertions::{assert_impl_all, assert_type_eq_all};

#[derive(Record)]
struct Unit;

#[derive(Record)]
struct EmptyBraces {}

#[derive(Record)]
struct EmptyParens();

#[derive(Record)]
struct Single {
    only: String,
}

#[derive(Record, Compare, Debug, Clone, PartialEq)]
struct Ordered {
    z: u8,
    a: i64,
    m: Option<char>,
}

#[derive(Record, Compare, Debug, Clone, PartialEq)]
struct Positional(u8, String, [f32; 3]);

#[derive(Record, Compare, Debug, Clone, PartialEq)]
struct Generic<T, U: Clone>
where
    T: Default,
{
    first: T,
    second: Vec<U>,
}

#[derive(Record)]
struct Borrowed<'a> {
    text: &'a str,
    count: &'a mut usize,
}

#[derive(Record, Compare, Debug, Clone, PartialEq, Default)]
struct Node {
    value: i32,
    children: Vec<Node>,
}

assert_type_eq_all!(<Unit as Record>::Fields, ());
assert_type_eq_all!(<EmptyBraces as Record>::Fields, ());
assert_type_eq_all!(<EmptyParens as Record>::Fields, ());
assert_type_eq_all!(<Single as Record>::Fields, (String,));
assert_type_eq_all!(<Ordered as Record>::Fields, (u8, i64, Option<char>));
assert_type_eq_all!(<Positional as Record>::Fields, (u8, String, [f32; 3]));
assert_type_eq_all!(<Generic<u8, bool> as Record>::Fields, (u8, Vec<bool>));
assert_type_eq_all!(
    <<Ordered as Record>::Fields as Fields>::Refs<'static>,
    (&'static u8, &'static i64, &'static Option<char>)
);

assert_impl_all!(Generic<i32, String>: Record, Compare);
assert_impl_all!(Node: Record, Compare);

#[test]
fn arity_is_counted_from_the_declaration() {
    assert_eq!(Unit::ARITY, 0);
    assert_eq!(EmptyBraces::ARITY, 0);
    assert_eq!(EmptyParens::ARITY, 0);
    assert_eq!(Single::ARITY, 1);
    assert_eq!(Ordered::ARITY, 3);
    assert_eq!(Positional::ARITY, 3);
    assert_eq!(<Generic<u8, u8>>::ARITY, 2);
    assert_eq!(Borrowed::ARITY, 2);
}

#[test]
fn fields_follow_declaration_order() {
    let ordered = Ordered {
        z: 1,
        a: 2,
        m: Some('3'),
    };
    assert_eq!(ordered.fields(), (&1, &2, &Some('3')));
    assert_eq!(ordered.clone().into_fields(), (1, 2, Some('3')));
    assert_eq!(Ordered::from_fields((1, 2, Some('3'))), ordered);
}

#[test]
fn unit_records_round_trip() {
    let () = Unit.into_fields();
    let Unit = Unit::from_fields(());
    let EmptyBraces {} = EmptyBraces::from_fields(());
    let () = EmptyParens().fields();
}

#[test]
fn tuple_structs_alias_positionally() {
    let mut p = Positional(1, "one".into(), [1.0; 3]);
    {
        let (n, s, a) = p.fields_mut();
        *n += 1;
        s.push('!');
        a[2] = 0.0;
    }
    assert_eq!(p, Positional(2, "one!".into(), [1.0, 1.0, 0.0]));
}

#[test]
fn borrowed_fields_alias_through() {
    let mut count = 0;
    let mut borrowed = Borrowed {
        text: "text",
        count: &mut count,
    };
    {
        let (text, count) = borrowed.fields_mut();
        *text = "other";
        **count += 1;
    }
    assert_eq!(borrowed.text, "other");
    assert_eq!(count, 1);
}

#[test]
fn generic_records_compare() {
    let a = Generic {
        first: 1u8,
        second: vec!["x".to_owned()],
    };
    let mut b = a.clone();
    assert!(a.compare(&b));
    b.second.push("y".to_owned());
    assert!(!a.compare(&b));
}

#[test]
fn self_recursive_records_compare() {
    let leaf = Node {
        value: 1,
        children: vec![],
    };
    let tree = Node {
        value: 0,
        children: vec![leaf.clone(), leaf],
    };
    let mut other = tree.clone();
    assert!(tree.compare(&other));
    other.children[1].value = 2;
    assert!(!tree.compare(&other));
}
