use std::io::{self, Write};

pub fn pkg_a(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "pkg_a")
}
