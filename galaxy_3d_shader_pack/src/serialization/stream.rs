//! Primitive encoding for the shader pack stream
//!
//! All integers are big-endian. Byte strings are a `u32` length followed by
//! the raw bytes.

use std::io::{Read, Write};

use crate::error::{Error, Result};

pub trait WriteStreamExt: Write {
    fn write_u8(&mut self, v: u8) -> Result<()> {
        self.write_all(&[v])?;
        Ok(())
    }

    fn write_bool(&mut self, v: bool) -> Result<()> {
        self.write_u8(v as u8)
    }

    fn write_i32(&mut self, v: i32) -> Result<()> {
        self.write_all(&v.to_be_bytes())?;
        Ok(())
    }

    fn write_u32(&mut self, v: u32) -> Result<()> {
        self.write_all(&v.to_be_bytes())?;
        Ok(())
    }

    /// Element count of a following sequence
    fn write_count(&mut self, count: usize) -> Result<()> {
        let count: i32 = count
            .try_into()
            .map_err(|_| Error::Corrupt(format!("count {} does not fit in i32", count)))?;
        self.write_i32(count)
    }

    fn write_len_prefixed_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        let len: u32 = bytes
            .len()
            .try_into()
            .map_err(|_| Error::Corrupt(format!("length {} does not fit in u32", bytes.len())))?;
        self.write_u32(len)?;
        self.write_all(bytes)?;
        Ok(())
    }

    fn write_string(&mut self, s: &str) -> Result<()> {
        self.write_len_prefixed_bytes(s.as_bytes())
    }
}

impl<T: Write + ?Sized> WriteStreamExt for T {}

pub trait ReadStreamExt: Read {
    fn read_u8(&mut self) -> Result<u8> {
        let mut buf = [0u8; 1];
        self.read_exact(&mut buf)?;
        Ok(buf[0])
    }

    fn read_bool(&mut self) -> Result<bool> {
        match self.read_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(Error::Corrupt(format!("invalid bool byte {}", other))),
        }
    }

    fn read_i32(&mut self) -> Result<i32> {
        let mut buf = [0u8; 4];
        self.read_exact(&mut buf)?;
        Ok(i32::from_be_bytes(buf))
    }

    fn read_u32(&mut self) -> Result<u32> {
        let mut buf = [0u8; 4];
        self.read_exact(&mut buf)?;
        Ok(u32::from_be_bytes(buf))
    }

    /// Element count written by `write_count`; negative counts are corrupt
    fn read_count(&mut self) -> Result<usize> {
        let count = self.read_i32()?;
        usize::try_from(count).map_err(|_| Error::Corrupt(format!("negative count {}", count)))
    }

    /// Reads a length-prefixed byte string.
    ///
    /// The buffer grows with the data actually read, so a corrupt length
    /// cannot trigger a huge up-front allocation.
    fn read_len_prefixed_bytes(&mut self) -> Result<Vec<u8>> {
        let len = self.read_u32()? as usize;
        let mut buf = Vec::new();
        (&mut *self).take(len as u64).read_to_end(&mut buf)?;
        if buf.len() != len {
            return Err(Error::UnexpectedEof);
        }
        Ok(buf)
    }

    fn read_string(&mut self) -> Result<String> {
        let bytes = self.read_len_prefixed_bytes()?;
        String::from_utf8(bytes).map_err(|e| Error::Corrupt(format!("invalid UTF-8 name: {}", e)))
    }
}

impl<T: Read + ?Sized> ReadStreamExt for T {}

#[cfg(test)]
#[path = "stream_tests.rs"]
mod tests;
