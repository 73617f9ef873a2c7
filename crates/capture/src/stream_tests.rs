// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use proptest::prelude::*;
use std::io::{Read, Seek, SeekFrom, Write};

// These tests divert descriptors of files the test owns, never the
// process streams, so they are safe to run in parallel.

#[test]
fn divert_captures_writes_to_the_target_descriptor() {
    let mut target = tempfile::tempfile().unwrap();
    let guard = CaptureStream::divert(&target).unwrap();

    target.write_all(b"diverted\n").unwrap();

    assert_eq!(guard.contents().unwrap(), b"diverted\n");
}

#[test]
fn contents_grows_with_each_write() {
    let mut target = tempfile::tempfile().unwrap();
    let guard = CaptureStream::divert(&target).unwrap();

    target.write_all(b"one").unwrap();
    assert_eq!(guard.contents().unwrap(), b"one");

    target.write_all(b"two").unwrap();
    assert_eq!(guard.contents().unwrap(), b"onetwo");
}

#[test]
fn drop_restores_the_original_destination() {
    let mut target = tempfile::tempfile().unwrap();
    let guard = CaptureStream::divert(&target).unwrap();
    target.write_all(b"captured").unwrap();
    let captured = guard.contents().unwrap();
    drop(guard);

    target.write_all(b"restored").unwrap();

    assert_eq!(captured, b"captured");

    // Only the post-restore write landed in the real file.
    let mut real = String::new();
    target.seek(SeekFrom::Start(0)).unwrap();
    target.read_to_string(&mut real).unwrap();
    assert_eq!(real, "restored");
}

#[test]
fn contents_utf8_decodes_captured_text() {
    let mut target = tempfile::tempfile().unwrap();
    let guard = CaptureStream::divert(&target).unwrap();

    target.write_all("héllo\n".as_bytes()).unwrap();

    assert_eq!(guard.contents_utf8().unwrap(), "héllo\n");
}

#[test]
fn contents_utf8_rejects_invalid_bytes() {
    let mut target = tempfile::tempfile().unwrap();
    let guard = CaptureStream::divert(&target).unwrap();

    target.write_all(&[0xff, 0xfe]).unwrap();

    assert!(matches!(
        guard.contents_utf8(),
        Err(CaptureError::NonUtf8(_))
    ));
}

#[test]
fn empty_capture_reads_back_empty() {
    let target = tempfile::tempfile().unwrap();
    let guard = CaptureStream::divert(&target).unwrap();

    assert_eq!(guard.contents().unwrap(), b"");
}

proptest! {
    #[test]
    fn contents_round_trips_arbitrary_bytes(
        payload in proptest::collection::vec(any::<u8>(), 0..512),
    ) {
        let mut target = tempfile::tempfile().unwrap();
        let guard = CaptureStream::divert(&target).unwrap();

        target.write_all(&payload).unwrap();

        prop_assert_eq!(guard.contents().unwrap(), payload);
    }
}
