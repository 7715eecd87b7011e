//! Serial Transport Tests
//!
//! Tests line accumulation, lossy decoding, non-blocking polling and
//! failure isolation at the serial boundary.

mod common;

use common::MockPort;
use embedded_io::ErrorKind;
use radio_link::config::LINE_BUFFER_SIZE;
use radio_link::serial::{decode_lossy, LineBuffer, SerialTransport, TransportError};

fn feed_all(buf: &mut LineBuffer, bytes: &[u8]) -> Vec<String> {
    bytes
        .iter()
        .filter_map(|&b| buf.push(b))
        .map(|line| line.as_str().to_owned())
        .collect()
}

// ============================================================================
// Lossy Decode Tests
// ============================================================================

#[test]
fn decode_plain_ascii() {
    assert_eq!(decode_lossy(b"PTT_ON").as_str(), "PTT_ON");
}

#[test]
fn decode_drops_invalid_bytes() {
    assert_eq!(decode_lossy(b"PI\xffNG").as_str(), "PING");
    assert_eq!(decode_lossy(b"\xfe\xffCH05").as_str(), "CH05");
}

#[test]
fn decode_drops_truncated_sequence() {
    assert_eq!(decode_lossy(b"PONG\xe2\x82").as_str(), "PONG");
}

#[test]
fn decode_keeps_valid_multibyte() {
    assert_eq!(decode_lossy("d\u{e9}marrage".as_bytes()).as_str(), "d\u{e9}marrage");
}

#[test]
fn decode_empty() {
    assert!(decode_lossy(b"").is_empty());
}

// ============================================================================
// Line Buffer Tests
// ============================================================================

#[test]
fn line_buffer_new_is_empty() {
    let buf = LineBuffer::new();
    assert!(buf.is_empty());
    assert_eq!(buf.len(), 0);
    assert!(!buf.is_overflowed());
}

#[test]
fn line_buffer_strips_terminator() {
    let mut buf = LineBuffer::default();
    assert_eq!(feed_all(&mut buf, b"PING\n"), vec!["PING"]);
    assert!(buf.is_empty());
}

#[test]
fn line_buffer_keeps_carriage_return() {
    // Whitespace trimming is the parser's job
    let mut buf = LineBuffer::new();
    assert_eq!(feed_all(&mut buf, b"PING\r\n"), vec!["PING\r"]);
}

#[test]
fn line_buffer_partial_line_retained() {
    let mut buf = LineBuffer::new();
    assert!(feed_all(&mut buf, b"CH1").is_empty());
    assert_eq!(buf.len(), 3);
    assert_eq!(feed_all(&mut buf, b"6\n"), vec!["CH16"]);
}

#[test]
fn line_buffer_empty_line() {
    let mut buf = LineBuffer::new();
    assert_eq!(feed_all(&mut buf, b"\n"), vec![""]);
}

#[test]
fn line_buffer_multiple_lines() {
    let mut buf = LineBuffer::new();
    assert_eq!(
        feed_all(&mut buf, b"PING\nPTT_ON\n\nCH02\n"),
        vec!["PING", "PTT_ON", "", "CH02"]
    );
}

#[test]
fn line_buffer_accepts_exact_capacity() {
    let mut buf = LineBuffer::new();
    let mut bytes = vec![b'A'; LINE_BUFFER_SIZE];
    bytes.push(b'\n');

    let lines = feed_all(&mut buf, &bytes);

    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].len(), LINE_BUFFER_SIZE);
}

#[test]
fn line_buffer_truncates_overlong_line() {
    let mut buf = LineBuffer::new();
    let mut bytes = vec![b'A'; LINE_BUFFER_SIZE + 1];

    assert!(feed_all(&mut buf, &bytes).is_empty());
    assert!(buf.is_overflowed());

    bytes.clear();
    bytes.extend_from_slice(b"TAIL\n");
    let line = bytes.iter().find_map(|&b| buf.push(b)).unwrap();
    assert!(line.is_truncated());
    assert_eq!(line.as_str(), "A".repeat(LINE_BUFFER_SIZE));
    assert!(!buf.is_overflowed());

    let next = b"PING\n".iter().find_map(|&b| buf.push(b)).unwrap();
    assert!(!next.is_truncated());
    assert_eq!(next.as_str(), "PING");
}

#[test]
fn line_buffer_ignores_dropped_whitespace() {
    let mut buf = LineBuffer::new();
    let mut bytes = b"PTT_ON".to_vec();
    bytes.resize(LINE_BUFFER_SIZE + 20, b' ');
    bytes.extend_from_slice(b"\r\n");

    let line = bytes.iter().find_map(|&b| buf.push(b)).unwrap();

    assert!(!line.is_truncated());
    assert_eq!(line.as_str().trim(), "PTT_ON");
}

#[test]
fn line_buffer_clear() {
    let mut buf = LineBuffer::new();
    feed_all(&mut buf, b"PTT_");
    buf.clear();
    assert_eq!(feed_all(&mut buf, b"PING\n"), vec!["PING"]);
}

// ============================================================================
// Poll Tests
// ============================================================================

#[test]
fn poll_without_input_returns_none() {
    let mut transport = SerialTransport::new(MockPort::new());
    assert!(transport.poll().is_none());
}

#[test]
fn poll_returns_one_line() {
    let mut port = MockPort::new();
    port.feed_line("PING");
    let mut transport = SerialTransport::new(port);

    assert_eq!(transport.poll().unwrap().as_str(), "PING");
    assert!(transport.poll().is_none());
}

#[test]
fn poll_returns_lines_one_at_a_time() {
    let mut port = MockPort::new();
    port.feed(b"PING\nCH05\n");
    let mut transport = SerialTransport::new(port);

    assert_eq!(transport.poll().unwrap().as_str(), "PING");
    // Second line stays in the port until the next poll
    assert_eq!(transport.port().rx.len(), 5);
    assert_eq!(transport.poll().unwrap().as_str(), "CH05");
    assert!(transport.poll().is_none());
}

#[test]
fn poll_partial_line_waits_for_terminator() {
    let mut transport = SerialTransport::new(MockPort::new());

    transport.port_mut().feed(b"PTT_");
    assert!(transport.poll().is_none());
    assert_eq!(transport.pending().len(), 4);

    transport.port_mut().feed(b"OFF\n");
    assert_eq!(transport.poll().unwrap().as_str(), "PTT_OFF");
    assert!(transport.pending().is_empty());
}

#[test]
fn poll_empty_line() {
    let mut port = MockPort::new();
    port.feed(b"\n");
    let mut transport = SerialTransport::new(port);

    assert_eq!(transport.poll().unwrap().as_str(), "");
}

#[test]
fn poll_decodes_lossily() {
    let mut port = MockPort::new();
    port.feed(b"P\xc3IN\xffG\n");
    let mut transport = SerialTransport::new(port);

    assert_eq!(transport.poll().unwrap().as_str(), "PING");
}

#[test]
fn poll_marks_overlong_line_truncated() {
    let mut port = MockPort::new();
    port.feed(&[b'X'; LINE_BUFFER_SIZE * 2]);
    port.feed(b"\nPING\n");
    let mut transport = SerialTransport::new(port);

    let long = transport.poll().unwrap();
    assert!(long.is_truncated());
    assert_eq!(long.as_str().len(), LINE_BUFFER_SIZE);

    let ping = transport.poll().unwrap();
    assert!(!ping.is_truncated());
    assert_eq!(ping.as_str(), "PING");
}

#[test]
fn poll_ready_error_is_no_line() {
    let mut port = MockPort::new();
    port.feed_line("PING");
    port.ready_errors = 1;
    let mut transport = SerialTransport::new(port);

    assert!(transport.poll().is_none());
    assert_eq!(transport.poll().unwrap().as_str(), "PING");
}

#[test]
fn poll_read_error_is_no_line() {
    let mut port = MockPort::new();
    port.feed_line("CH03");
    port.read_errors = 1;
    let mut transport = SerialTransport::new(port);

    assert!(transport.poll().is_none());
    assert_eq!(transport.poll().unwrap().as_str(), "CH03");
}

#[test]
fn poll_read_error_keeps_partial_line() {
    let mut transport = SerialTransport::new(MockPort::new());

    transport.port_mut().feed(b"PI");
    assert!(transport.poll().is_none());

    transport.port_mut().feed(b"NG\n");
    transport.port_mut().read_errors = 1;
    assert!(transport.poll().is_none());
    assert_eq!(transport.poll().unwrap().as_str(), "PING");
}

// ============================================================================
// Send Tests
// ============================================================================

#[test]
fn send_appends_terminator() {
    let mut transport = SerialTransport::new(MockPort::new());

    transport.send("PONG").unwrap();

    assert_eq!(transport.port().tx, b"PONG\n");
}

#[test]
fn send_multiple() {
    let mut transport = SerialTransport::new(MockPort::new());

    transport.send("PTT_ACK").unwrap();
    transport.send("CH16_OK").unwrap();

    assert_eq!(transport.port().sent_lines(), vec!["PTT_ACK", "CH16_OK"]);
}

#[test]
fn send_failure_is_reported() {
    let mut port = MockPort::new();
    port.write_errors = 1;
    let mut transport = SerialTransport::new(port);

    assert_eq!(
        transport.send("PONG"),
        Err(TransportError::Write(ErrorKind::BrokenPipe))
    );
    assert!(transport.port().tx.is_empty());

    // Link recovers on the next send
    transport.send("PONG").unwrap();
    assert_eq!(transport.port().sent_lines(), vec!["PONG"]);
}

#[test]
fn transport_error_display() {
    assert_eq!(
        TransportError::Read(ErrorKind::Other).to_string(),
        "serial read failed: Other"
    );
    assert_eq!(
        TransportError::Write(ErrorKind::BrokenPipe).to_string(),
        "serial write failed: BrokenPipe"
    );
}

#[test]
fn into_inner_returns_port() {
    let mut transport = SerialTransport::new(MockPort::new());
    transport.send("PONG").unwrap();
    let port = transport.into_inner();
    assert_eq!(port.tx, b"PONG\n");
}
