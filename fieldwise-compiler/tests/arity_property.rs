use {
    fieldwise_compiler::{RecordShape, MAX_ARITY},
    quickcheck::{QuickCheck, TestResult},
};

const FIELD_TYPES: &[&str] = &["u8", "f64", "String", "Vec<i32>", "Option<bool>", "[u16; 4]"];

fn declaration(fields: usize, named: bool) -> String {
    let types = (0..fields).map(|i| FIELD_TYPES[i % FIELD_TYPES.len()]);
    match (fields, named) {
        (0, true) => "struct R {}".to_owned(),
        (0, false) => "struct R;".to_owned(),
        (_, true) => {
            let body = types
                .enumerate()
                .map(|(i, ty)| format!("f{}: {}", i, ty))
                .collect::<Vec<_>>()
                .join(", ");
            format!("struct R {{ {} }}", body)
        }
        (_, false) => format!("struct R({});", types.collect::<Vec<_>>().join(", ")),
    }
}

fn counted_arity_property(fields: u8, named: bool) -> TestResult {
    let fields = fields as usize;
    let input = syn::parse_str(&declaration(fields, named)).unwrap();
    match RecordShape::from_derive_input(input) {
        Ok(shape) if fields <= MAX_ARITY => {
            let expected = format!("const ARITY : usize = {} ;", fields);
            TestResult::from_bool(
                shape.arity() == fields && shape.to_record_impl().to_string().contains(&expected),
            )
        }
        Err(error) if fields > MAX_ARITY => {
            TestResult::from_bool(error.to_string().starts_with("unsupported record shape"))
        }
        Ok(_) => TestResult::error(format!("{} fields were accepted", fields)),
        Err(error) => TestResult::error(format!("{} fields were rejected: {}", fields, error)),
    }
}

#[test]
fn counted_arity() {
    QuickCheck::new()
        .tests(200)
        .quickcheck(counted_arity_property as fn(u8, bool) -> TestResult)
}
