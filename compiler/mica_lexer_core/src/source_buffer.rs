//! Sentinel-terminated source buffer for zero-bounds-check scanning.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content,
//! allowing the scanner to detect EOF without explicit bounds checking.
//! The total buffer size is rounded up to the next 64-byte boundary for
//! cache-line alignment, which also provides safe padding for `peek()`
//! operations near the end of the buffer.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Sentinel-terminated source buffer for zero-bounds-check scanning.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
///
/// The sentinel byte at `source_len` is always `0x00`. All subsequent bytes
/// (cache-line padding) are also `0x00`, ensuring safe reads for `peek()`
/// near the end of the buffer.
///
/// Interior null bytes in the source are preserved as content; the cursor
/// distinguishes them from the sentinel by position (see
/// [`Cursor::is_eof()`]).
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned buffer: `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
}

impl SourceBuffer {
    /// Create a new sentinel-terminated buffer from source code.
    ///
    /// Copies the source bytes into a cache-line-aligned buffer with a
    /// `0x00` sentinel byte appended.
    ///
    /// # File Size
    ///
    /// Source files larger than `u32::MAX` bytes (~4 GiB) are accepted but
    /// the `source_len` field saturates at `u32::MAX`. The cooked layer
    /// (`mica_lexer`) rejects oversized files upstream.
    pub fn new(source: &str) -> Self {
        let source_bytes = source.as_bytes();
        let source_len = source_bytes.len();

        // Round up to next 64-byte boundary (minimum: source + 1 sentinel byte).
        let padded_len = (source_len + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        // Allocate zero-filled buffer, then copy source bytes.
        // The sentinel (buf[source_len]) and padding are already 0x00.
        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(source_bytes);

        // Prefetch first cache lines for scanner warmup.
        prefetch_buffer(&buf);

        // Saturate source_len to u32::MAX for files > 4 GiB.
        let source_len_u32 = u32::try_from(source_len).unwrap_or(u32::MAX);

        Self {
            buf,
            source_len: source_len_u32,
        }
    }

    /// Returns the source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Returns the full buffer including sentinel and cache-line padding.
    ///
    /// The byte at index [`len()`](Self::len) is the sentinel (`0x00`).
    /// Subsequent bytes are zero-filled padding up to the next 64-byte boundary.
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the source content in bytes (excludes sentinel and padding).
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}

/// Size assertion: `SourceBuffer` should be ~32 bytes on 64-bit platforms.
/// Vec<u8> = 24, u32 = 4, + 4 padding = 32.
const _: () = assert!(std::mem::size_of::<SourceBuffer>() <= 32);

/// Hint the CPU to prefetch the first 4 cache lines (256 bytes) of the buffer.
///
/// Warms up L1 cache for the scanner's initial reads. On platforms without
/// prefetch support, this is a no-op.
#[allow(unsafe_code)]
fn prefetch_buffer(buf: &[u8]) {
    #[cfg(target_arch = "x86_64")]
    {
        // SAFETY: `_mm_prefetch` is a hint instruction. The CPU silently ignores
        // prefetch requests for invalid or unmapped addresses. All addresses here
        // point within the allocated Vec buffer.
        unsafe {
            use std::arch::x86_64::_mm_prefetch;
            let p = buf.as_ptr().cast::<i8>();
            _mm_prefetch::<3>(p); // _MM_HINT_T0: prefetch into all cache levels
            if buf.len() >= 64 {
                _mm_prefetch::<3>(p.add(64));
            }
            if buf.len() >= 128 {
                _mm_prefetch::<3>(p.add(128));
            }
            if buf.len() >= 192 {
                _mm_prefetch::<3>(p.add(192));
            }
        }
    }

    #[cfg(not(target_arch = "x86_64"))]
    let _ = buf;
}

#[cfg(test)]
mod tests;
