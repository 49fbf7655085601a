use std::fmt::{self, Display, Formatter};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::{env, error::Error};

fn main() -> Result<(), Box<dyn Error>> {
    // We auto-generate tests for records of many shapes, up to the widest supported arity. This
    // makes it much less likely that a gap in the decomposition table goes un-caught.
    println!("cargo:rerun-if-changed=build.rs");

    let max_arity = if env::var_os("CARGO_FEATURE_WIDE").is_some() {
        64
    } else {
        32
    };

    let out_dir = env::var("OUT_DIR")?;
    let dest_path = Path::new(&out_dir).join("valid_records.rs");
    let mut f = File::create(&dest_path)?;

    // File header
    writeln!(f, "use fieldwise::prelude::*;")?;
    writeln!(f, "use static_assertions::assert_impl_all;")?;
    writeln!(f)?;

    for shape in Shape::enumerate(max_arity) {
        writeln!(f, "{}", shape)?;
    }
    Ok(())
}

/// The field types cycled through by generated records: each is `Clone`, `Default`, `PartialEq`
/// and `Compare`.
const FIELD_TYPES: &[&str] = &[
    "u8",
    "i16",
    "u32",
    "f64",
    "bool",
    "char",
    "String",
    "Vec<u8>",
    "Option<i64>",
    "[u16; 2]",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Layout {
    Named,
    Unnamed,
    Unit,
}

#[derive(Clone, Debug)]
struct Shape {
    layout: Layout,
    arity: usize,
}

impl Shape {
    fn enumerate(max_arity: usize) -> impl Iterator<Item = Shape> {
        let mut arities = vec![1, 2, 3, 4, 5, 8, 12, 13, 16, max_arity - 1, max_arity];
        arities.retain(|&n| n <= max_arity);
        arities.dedup();
        let sized = arities.into_iter().flat_map(|arity| {
            [Layout::Named, Layout::Unnamed]
                .into_iter()
                .map(move |layout| Shape { layout, arity })
        });
        [
            Shape {
                layout: Layout::Unit,
                arity: 0,
            },
            Shape {
                layout: Layout::Named,
                arity: 0,
            },
        ]
        .into_iter()
        .chain(sized)
    }

    fn name(&self) -> String {
        match self.layout {
            Layout::Named => format!("Named{}", self.arity),
            Layout::Unnamed => format!("Unnamed{}", self.arity),
            Layout::Unit => "Unit".to_owned(),
        }
    }

    fn field_type(i: usize) -> &'static str {
        FIELD_TYPES[i % FIELD_TYPES.len()]
    }
}

impl Display for Shape {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let name = self.name();
        let test = name.to_lowercase();

        writeln!(f, "#[derive(Record, Compare, Debug, Clone, PartialEq, Default)]")?;
        match self.layout {
            Layout::Named => {
                write!(f, "struct {} {{", name)?;
                for i in 0..self.arity {
                    write!(f, " f{}: {},", i, Shape::field_type(i))?;
                }
                writeln!(f, " }}")?;
            }
            Layout::Unnamed => {
                write!(f, "struct {}(", name)?;
                for i in 0..self.arity {
                    write!(f, "{}, ", Shape::field_type(i))?;
                }
                writeln!(f, ");")?;
            }
            Layout::Unit => writeln!(f, "struct {};", name)?,
        }
        writeln!(f)?;
        writeln!(f, "assert_impl_all!({}: Record, Compare);", name)?;
        writeln!(f)?;

        writeln!(f, "#[test]")?;
        writeln!(f, "fn {}_round_trips() {{", test)?;
        writeln!(f, "    assert_eq!(fields_count::<{}>(), {});", name, self.arity)?;
        writeln!(f, "    let record = {}::default();", name)?;
        writeln!(f, "    let rebuilt: {} = from_tuple(convert(&record, Value));", name)?;
        writeln!(f, "    assert!(compare(&record, &rebuilt));")?;
        writeln!(f, "    assert_eq!(rebuilt, record);")?;
        writeln!(f, "}}")?;
        Ok(())
    }
}
