use std::fmt::{self, Display, Formatter};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::{env, error::Error};

/// The element types used in generated tests. They are all distinct so that any reordering of
/// elements is caught.
const ELEMENTS: &[&str] = &["u8", "u16", "u32", "u64"];

fn main() -> Result<(), Box<dyn Error>> {
    // We auto-generate unit tests for every way of grouping a short sequence of element types into
    // plain and container tokens. Each grouping must aggregate to the same flat container.
    println!("cargo:rerun-if-changed=build.rs");

    let out_dir = env::var("OUT_DIR")?;
    let dest_path = Path::new(&out_dir).join("groupings.rs");
    let mut f = File::create(&dest_path)?;

    let families = [
        (None, "test_family_groupings", Shape::Test),
        (Some("tuple"), "tuple_groupings", Shape::Tuple),
        (Some("variant"), "variant_groupings", Shape::Variant),
    ];

    for (feature, name, shape) in families.iter() {
        writeln!(f, "#[test]")?;
        if let Some(feature) = feature {
            writeln!(f, "#[cfg(feature = {:?})]", feature)?;
        }
        writeln!(f, "fn {}() {{", name)?;
        for len in 1..=ELEMENTS.len() {
            let expected = Container {
                shape: *shape,
                elements: &ELEMENTS[..len],
            };
            for grouping in Grouping::enumerate(len) {
                writeln!(
                    f,
                    "    assert_type_eq_all!(Aggregated<{}, ({})>, {});",
                    shape.family(),
                    grouping.render(*shape),
                    expected,
                )?;
            }
        }
        writeln!(f, "}}")?;
        writeln!(f)?;
    }

    Ok(())
}

#[derive(Clone, Copy, Debug)]
enum Shape {
    Test,
    Tuple,
    Variant,
}

impl Shape {
    fn family(self) -> &'static str {
        match self {
            Shape::Test => "TestFamily",
            Shape::Tuple => "Tuples",
            Shape::Variant => "Variants",
        }
    }
}

/// A literal instance of some family, holding the given element types.
struct Container<'a> {
    shape: Shape,
    elements: &'a [&'a str],
}

impl Display for Container<'_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self.shape {
            Shape::Test => write!(f, "Test<{}>", Tupled(self.elements))?,
            Shape::Tuple => write!(f, "{}", Tupled(self.elements))?,
            Shape::Variant => {
                for element in self.elements {
                    write!(f, "Union<{}, ", element)?;
                }
                write!(f, "Void")?;
                for _ in self.elements {
                    write!(f, ">")?;
                }
            }
        }
        Ok(())
    }
}

/// Elements written out as a tuple, with a trailing comma for a single element.
struct Tupled<'a>(&'a [&'a str]);

impl Display for Tupled<'_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "(")?;
        for (i, element) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", element)?;
        }
        if self.0.len() == 1 {
            write!(f, ",")?;
        }
        write!(f, ")")
    }
}

/// One token in a grouping: either a single plain element, or a container holding a run of
/// consecutive elements.
#[derive(Clone, Debug)]
enum Part {
    Plain(usize),
    Container(usize, usize),
}

/// A way of splitting the first `len` elements into consecutive tokens.
#[derive(Clone, Debug)]
struct Grouping {
    parts: Vec<Part>,
}

impl Grouping {
    /// Enumerate every grouping of `len` elements: every composition of `len` into runs, where a
    /// run of length one may be either plain or a container.
    fn enumerate(len: usize) -> impl Iterator<Item = Grouping> {
        let mut groupings = Vec::new();
        Grouping::extend(0, len, Vec::new(), &mut groupings);
        groupings.into_iter()
    }

    fn extend(start: usize, len: usize, prefix: Vec<Part>, out: &mut Vec<Grouping>) {
        if start == len {
            out.push(Grouping { parts: prefix });
            return;
        }
        for end in start + 1..=len {
            if end == start + 1 {
                let mut plain = prefix.clone();
                plain.push(Part::Plain(start));
                Grouping::extend(end, len, plain, out);
            }
            let mut container = prefix.clone();
            container.push(Part::Container(start, end));
            Grouping::extend(end, len, container, out);
        }
    }

    fn render(&self, shape: Shape) -> String {
        let mut tokens = String::new();
        for part in &self.parts {
            match *part {
                Part::Plain(i) => tokens.push_str(&format!("Just<{}>", ELEMENTS[i])),
                Part::Container(start, end) => tokens.push_str(
                    &Container {
                        shape,
                        elements: &ELEMENTS[start..end],
                    }
                    .to_string(),
                ),
            }
            tokens.push_str(", ");
        }
        tokens
    }
}
