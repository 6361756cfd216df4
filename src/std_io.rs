use std::io::{IoSlice, Write};

use crate::DynVec;

/// Write is implemented for `DynVec<u8>` by appending to the vector.
/// The vector will grow as needed.
impl Write for DynVec<u8> {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.extend_from_slice(buf);
        Ok(buf.len())
    }

    #[inline]
    fn write_all(&mut self, buf: &[u8]) -> std::io::Result<()> {
        self.extend_from_slice(buf);
        Ok(())
    }

    #[inline(always)]
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }

    #[inline]
    fn write_vectored(&mut self, bufs: &[IoSlice<'_>]) -> std::io::Result<usize> {
        let num = bufs.iter().map(|b| b.len()).sum::<usize>();
        self.reserve(self.len() + num);
        for buf in bufs {
            self.extend_from_slice(buf);
        }
        Ok(num)
    }
}
