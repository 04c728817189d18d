use std::io::{self, Write};

pub fn pkg_c(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "pkg_c")
}
