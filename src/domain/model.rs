use std::fmt;
use std::io::{self, Write};

use crate::foo::path::to::folder::{a as fa, b as fb};
use crate::foo::path::to::package::nested::files::{c as pkg_c, d as pkg_d};
use crate::foo::path::to::package::{a as pkg_a, b as pkg_b};

/// Signature every callable in the plan shares.
pub type CallableFn = fn(&mut dyn Write) -> io::Result<()>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Packages,
    Folders,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Packages => f.write_str("packages"),
            Section::Folders => f.write_str("folders"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Callable {
    pub name: &'static str,
    pub module_path: &'static str,
    pub func: CallableFn,
}

impl Callable {
    pub const fn new(name: &'static str, module_path: &'static str, func: CallableFn) -> Self {
        Self {
            name,
            module_path,
            func,
        }
    }

    pub fn call(&self, out: &mut dyn Write) -> io::Result<()> {
        (self.func)(out)
    }

    pub fn qualified_name(&self) -> String {
        format!("{}::{}", self.module_path, self.name)
    }
}

/// Ordered callables run by the entry point, split by the blank line between
/// the two sections.
#[derive(Debug, Clone)]
pub struct Plan {
    pub packages: Vec<Callable>,
    pub folders: Vec<Callable>,
}

impl Plan {
    pub fn new(packages: Vec<Callable>, folders: Vec<Callable>) -> Self {
        Self { packages, folders }
    }

    /// Callables in execution order, tagged with their section.
    pub fn steps(&self) -> impl Iterator<Item = (Section, &Callable)> {
        self.packages
            .iter()
            .map(|c| (Section::Packages, c))
            .chain(self.folders.iter().map(|c| (Section::Folders, c)))
    }

    pub fn len(&self) -> usize {
        self.packages.len() + self.folders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Plan {
    fn default() -> Self {
        Self::new(
            vec![
                Callable::new("pkg_a", "foo::path::to::package::a", pkg_a::pkg_a),
                Callable::new("pkg_b", "foo::path::to::package::b", pkg_b::pkg_b),
                Callable::new(
                    "pkg_c",
                    "foo::path::to::package::nested::files::c",
                    pkg_c::pkg_c,
                ),
                Callable::new(
                    "pkg_d",
                    "foo::path::to::package::nested::files::d",
                    pkg_d::pkg_d,
                ),
            ],
            vec![
                Callable::new("folder_a", "foo::path::to::folder::a", fa::folder_a),
                Callable::new("folder_b", "foo::path::to::folder::b", fb::folder_b),
            ],
        )
    }
}
