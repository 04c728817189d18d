use std::io::{self, Write};

pub fn pkg_b(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "pkg_b")
}
