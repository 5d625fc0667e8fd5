use std::io::{self, Write};

/// Write adapter that counts every byte the inner sink accepts.
#[derive(Debug)]
pub struct CountingWriter<W> {
    inner: W,
    written: u64,
}

impl<W: Write> CountingWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, written: 0 }
    }

    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_formatted_writes() {
        let mut w = CountingWriter::new(Vec::new());
        writeln!(w, "<line number=\"{}\"/>", 12).unwrap();
        w.write_all("ü".as_bytes()).unwrap();

        assert_eq!(w.written(), w.get_ref().len() as u64);
        assert_eq!(w.written(), 20 + 2);
        assert_eq!(w.into_inner().len(), 22);
    }

    #[test]
    fn partial_writes_count_what_was_accepted() {
        let mut buf = [0u8; 4];
        let mut w = CountingWriter::new(&mut buf[..]);
        assert_eq!(w.write(b"abcdef").unwrap(), 4);
        assert_eq!(w.written(), 4);
        assert!(w.write_all(b"x").is_err());
        assert_eq!(w.written(), 4);
    }
}
