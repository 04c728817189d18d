use std::io::{self, Write};

pub fn pkg_d(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "pkg_d")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pkg_d_writes_its_name() {
        let mut out = Vec::new();
        pkg_d(&mut out).unwrap();
        assert_eq!(out, b"pkg_d\n");
    }
}
