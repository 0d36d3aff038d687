//! Line buffer for the serial link.

/// Maximum line length; bytes past this are dropped.
pub const LINE_SIZE: usize = 128;

/// Line input buffer
pub struct LineBuffer {
    buf: [u8; LINE_SIZE],
    len: usize,
}

impl LineBuffer {
    /// Create empty buffer
    pub const fn new() -> Self {
        Self {
            buf: [0u8; LINE_SIZE],
            len: 0,
        }
    }

    /// Push a byte; ignored when the buffer is full.
    pub fn push(&mut self, c: u8) {
        if self.len < LINE_SIZE {
            self.buf[self.len] = c;
            self.len += 1;
        }
    }

    /// Clear buffer
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Get buffer as string slice
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.buf[..self.len]).unwrap_or("")
    }

    /// Get buffer length
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}
