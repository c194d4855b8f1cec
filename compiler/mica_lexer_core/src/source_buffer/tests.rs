use super::*;

// === Construction ===

#[test]
fn empty_source() {
    let buf = SourceBuffer::new("");
    assert_eq!(buf.len(), 0);
    assert!(buf.is_empty());
    assert!(buf.as_bytes().is_empty());
    // Sentinel present at index 0
    assert_eq!(buf.as_sentinel_bytes()[0], 0);
}

#[test]
fn ascii_source() {
    let buf = SourceBuffer::new("hello");
    assert_eq!(buf.len(), 5);
    assert!(!buf.is_empty());
    assert_eq!(buf.as_bytes(), b"hello");
    // Sentinel after source bytes
    assert_eq!(buf.as_sentinel_bytes()[5], 0);
}

#[test]
fn utf8_multibyte_source() {
    let source = "hello \u{1F600} world"; // emoji (4 bytes)
    let buf = SourceBuffer::new(source);
    assert_eq!(buf.len() as usize, source.len());
    assert_eq!(buf.as_bytes(), source.as_bytes());
}

#[test]
fn interior_null_preserved_as_content() {
    let source = "a\0b";
    let buf = SourceBuffer::new(source);
    assert_eq!(buf.len(), 3);
    assert_eq!(buf.as_bytes(), b"a\0b");
    // The sentinel sits after the content, not at the interior null
    assert_eq!(buf.as_sentinel_bytes()[3], 0);
}

// === Cache-Line Alignment ===

#[test]
fn buffer_aligned_to_cache_line() {
    // Buffer size should be a multiple of 64
    for len in [0, 1, 10, 63, 64, 65, 127, 128, 1000] {
        let source: String = "x".repeat(len);
        let buf = SourceBuffer::new(&source);
        assert_eq!(
            buf.as_sentinel_bytes().len() % CACHE_LINE,
            0,
            "buffer length {} is not cache-line aligned for source length {}",
            buf.as_sentinel_bytes().len(),
            len
        );
    }
}

#[test]
fn sentinel_and_padding_are_zero() {
    let buf = SourceBuffer::new("abc");
    let sentinel_bytes = buf.as_sentinel_bytes();
    // Everything after source content should be zero
    for &b in &sentinel_bytes[3..] {
        assert_eq!(b, 0, "non-zero byte in sentinel/padding region");
    }
}

// === Large Source ===

#[test]
fn large_source() {
    let source: String = "x".repeat(100_000);
    let buf = SourceBuffer::new(&source);
    assert_eq!(buf.len(), 100_000);
    assert_eq!(buf.as_bytes().len(), 100_000);
    // Sentinel is correct
    assert_eq!(buf.as_sentinel_bytes()[100_000], 0);
    // Buffer is cache-line aligned
    assert_eq!(buf.as_sentinel_bytes().len() % CACHE_LINE, 0);
}

// === Cursor Creation ===

#[test]
fn cursor_starts_at_zero() {
    let buf = SourceBuffer::new("hello");
    let cursor = buf.cursor();
    assert_eq!(cursor.pos(), 0);
    assert_eq!(cursor.current(), b'h');
}

#[test]
fn cursor_on_empty_source_is_eof() {
    let buf = SourceBuffer::new("");
    let cursor = buf.cursor();
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), 0);
}
