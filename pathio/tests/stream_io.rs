//! Integration tests for stream I/O over real files.
//!
//! This test suite verifies that:
//! - FileSource streams read real file content through the shared read
//!   policies (bounded read, line read, drain)
//! - Multibyte UTF-8 content survives unit-at-a-time reading
//! - Write coercion output read back from a sink matches the documented
//!   literals
//! - Stream lifecycle (close, drop) behaves the same over file-backed
//!   and in-memory backends

use std::fs::File;
use std::io::Write;
use std::sync::Arc;

use tempfile::tempdir;

use pathio::{
    AbstractPath, Content, FileSource, InputStream, LocalFileSystem, OutputStream, StringSink,
    StringSource,
};

fn file_stream(content: &str) -> (tempfile::TempDir, InputStream<FileSource>) {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("stream.txt");
    let mut file = File::create(&file_path).unwrap();
    file.write_all(content.as_bytes()).unwrap();

    let fs = LocalFileSystem::new();
    let path = AbstractPath::new(
        file_path.to_str().unwrap(),
        Arc::new(LocalFileSystem::new()),
    )
    .unwrap();
    let stream = FileSource::open(&path, &fs).unwrap();
    (dir, stream)
}

// =============================================================================
// File-Backed Reading
// =============================================================================

#[test]
fn test_read_lines_from_file() {
    let (_dir, mut stream) = file_stream("alpha\nbeta\ngamma\n");

    assert_eq!(stream.read_line(None).unwrap(), "alpha");
    assert_eq!(stream.read_line(None).unwrap(), "beta");
    assert_eq!(stream.read_line(None).unwrap(), "gamma");
    assert!(stream.read_line(None).unwrap_err().is_end_of_stream());
}

#[test]
fn test_bounded_read_from_file() {
    let (_dir, mut stream) = file_stream("abcdefgh");

    assert_eq!(stream.read(3).unwrap(), "abc");
    // More requested than remains: partial success.
    assert_eq!(stream.read(100).unwrap(), "defgh");
    assert!(stream.read(1).unwrap_err().is_end_of_stream());
}

#[test]
fn test_drain_file() {
    let (_dir, mut stream) = file_stream("one\ntwo");

    assert_eq!(stream.read_all().unwrap(), "one\ntwo");
    assert_eq!(stream.read_all().unwrap(), "");
}

#[test]
fn test_multibyte_units_from_file() {
    let (_dir, mut stream) = file_stream("naïve 🦀 café");

    assert_eq!(stream.read(5).unwrap(), "naïve");
    assert_eq!(stream.read_all().unwrap(), " 🦀 café");
}

#[test]
fn test_file_stream_close_then_read_fails() {
    let (_dir, mut stream) = file_stream("abc");

    stream.close().unwrap();
    assert!(stream.read(1).unwrap_err().is_closed());
}

// =============================================================================
// Coercion Readback
// =============================================================================

#[test]
fn test_coercion_literals_read_back() {
    let mut out = OutputStream::new(StringSink::new());
    out.write("label=").unwrap();
    out.writeln(true).unwrap();
    out.writeln(Content::Null).unwrap();
    out.writeln(vec![10, 20, 30]).unwrap();
    out.writeln(2.5).unwrap();

    // Feed the collected output back through the read side.
    let mut input = InputStream::new(StringSource::new(out.sink().as_str()));
    assert_eq!(input.read_line(None).unwrap(), "label=TRUE");
    assert_eq!(input.read_line(None).unwrap(), "NULL");
    assert_eq!(input.read_line(None).unwrap(), "Array(3)");
    assert_eq!(input.read_line(None).unwrap(), "2.5");
}

#[test]
fn test_seeded_sink_appends_after_existing_content() {
    // A sink seeded with earlier output accepts further writes at the
    // end, so a partially built buffer can be handed to a new stream.
    let mut out = OutputStream::new(StringSink::with_content("header\n"));
    out.writeln("body").unwrap();

    let mut input = InputStream::new(StringSource::new(out.sink().as_str()));
    assert_eq!(input.read_line(None).unwrap(), "header");
    assert_eq!(input.read_line(None).unwrap(), "body");
}

#[test]
fn test_opaque_content_never_reaches_sink() {
    let mut out = OutputStream::new(StringSink::new());
    out.write("kept").unwrap();
    assert!(out.write(Content::opaque("socket")).is_err());
    assert_eq!(out.sink().as_str(), "kept");
}
