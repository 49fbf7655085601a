//! Formatted printing of flat tuples as `{ v0, v1, ..., vn-1 };`.

use std::fmt::{self, Display};

use crate::{
    visit::{ForEach, Visit},
    FlatTuple,
};

/// A visitor writing each slot's [`Display`] form to a sink, separated by `", "`.
///
/// Once a write fails, the remaining slots are skipped and the error is kept.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct Printer<'f> {
    #[derivative(Debug = "ignore")]
    sink: &'f mut dyn fmt::Write,
    result: fmt::Result,
}

impl<'f> Printer<'f> {
    /// A printer writing to `sink`.
    pub fn new(sink: &'f mut dyn fmt::Write) -> Self {
        Printer {
            sink,
            result: Ok(()),
        }
    }

    /// The outcome of every write so far.
    pub fn finish(self) -> fmt::Result {
        self.result
    }
}

impl<'f, T: Display> Visit<T> for Printer<'f> {
    fn visit(&mut self, index: usize, slot: &T) {
        if self.result.is_ok() {
            self.result = if index == 0 {
                write!(self.sink, "{}", slot)
            } else {
                write!(self.sink, ", {}", slot)
            };
        }
    }
}

/// Write `tuple` to `sink` as `{ v0, v1, ..., vn-1 };`.
///
/// ```
/// use fieldwise::{print, FlatTuple};
///
/// let mut out = String::new();
/// print(&mut out, &FlatTuple::new((1, "two", 3.5))).unwrap();
/// assert_eq!(out, "{ 1, two, 3.5 };");
/// ```
pub fn print<W, T>(sink: &mut W, tuple: &FlatTuple<T>) -> fmt::Result
where
    W: fmt::Write,
    T: for<'f> ForEach<Printer<'f>>,
{
    sink.write_str("{ ")?;
    let mut printer = Printer::new(sink);
    tuple.for_each(&mut printer);
    printer.finish()?;
    sink.write_str(" };")
}

impl<T> Display for FlatTuple<T>
where
    T: for<'f> ForEach<Printer<'f>>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        print(f, self)
    }
}
