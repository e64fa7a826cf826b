//! Byte sources with awkward delivery patterns for reader tests.

use std::io::{self, Read};

/// Delivers at most `step` bytes per `read` call.
pub(crate) struct Trickle<'a> {
    data: &'a [u8],
    step: usize,
}

impl<'a> Trickle<'a> {
    pub(crate) fn new(data: &'a [u8], step: usize) -> Self {
        Trickle {
            data,
            step: step.max(1),
        }
    }
}

impl Read for Trickle<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.step.min(buf.len()).min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

/// Delivers `data`, then fails every subsequent read with `kind`.
pub(crate) struct FailAfter<'a> {
    data: &'a [u8],
    kind: io::ErrorKind,
    failures: usize,
}

impl<'a> FailAfter<'a> {
    pub(crate) fn new(data: &'a [u8], kind: io::ErrorKind) -> Self {
        FailAfter {
            data,
            kind,
            failures: 0,
        }
    }

    /// Number of failed reads observed so far.
    pub(crate) fn failures(&self) -> usize {
        self.failures
    }
}

impl Read for FailAfter<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.data.is_empty() {
            self.failures += 1;
            return Err(io::Error::new(self.kind, "simulated failure"));
        }
        let n = buf.len().min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

/// Interrupts every other read before delivering one byte.
pub(crate) struct Interrupting<'a> {
    data: &'a [u8],
    interrupt_next: bool,
}

impl<'a> Interrupting<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Interrupting {
            data,
            interrupt_next: true,
        }
    }
}

impl Read for Interrupting<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.interrupt_next {
            self.interrupt_next = false;
            return Err(io::Error::from(io::ErrorKind::Interrupted));
        }
        self.interrupt_next = true;
        let n = buf.len().min(self.data.len()).min(1);
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}
