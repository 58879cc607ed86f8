use std::io;

use pretty_assertions::assert_eq;

use crate::{CharSource, JsonReader, JsonTextReader, JsonToken, ReadError, StrSource};

/// Fails the first `faults` refills, then reads normally.
struct FaultySource<'a> {
    inner: StrSource<'a>,
    faults: usize,
}

impl<'a> FaultySource<'a> {
    fn new(text: &'a str, faults: usize) -> Self {
        Self {
            inner: StrSource::new(text),
            faults,
        }
    }
}

impl CharSource for FaultySource<'_> {
    fn read_chars(&mut self, out: &mut [char]) -> io::Result<usize> {
        if self.faults > 0 {
            self.faults -= 1;
            return Err(io::Error::new(io::ErrorKind::Interrupted, "injected fault"));
        }
        self.inner.read_chars(out)
    }
}

#[test]
fn source_faults_propagate_unwrapped() {
    let mut reader = JsonTextReader::new(FaultySource::new("1", 1));
    match reader.read() {
        Err(ReadError::Source(e)) => assert_eq!(e.kind(), io::ErrorKind::Interrupted),
        other => panic!("expected a source fault, got {other:?}"),
    }
}

#[test]
fn reads_resume_after_source_recovers() {
    let text = r#"{"first":1,"second":2}"#;
    let mut reader = JsonTextReader::new(FaultySource::new(text, 2));

    assert!(reader.read().unwrap_err().as_parse().is_none());
    assert!(reader.read().unwrap_err().as_parse().is_none());

    let mut tokens = Vec::new();
    while reader.read().unwrap() {
        tokens.push(reader.token_type());
    }
    assert_eq!(
        tokens,
        vec![
            JsonToken::StartObject,
            JsonToken::PropertyName,
            JsonToken::Integer,
            JsonToken::PropertyName,
            JsonToken::Integer,
            JsonToken::EndObject,
        ]
    );
}

#[test]
fn fault_mid_document_loses_nothing() {
    // The buffer is 1024 characters; force multiple refills with a long
    // document and inject the fault after the first succeeds.
    let body: String = (0..600).map(|i| format!("{i},")).collect();
    let text = format!("[{body}999]");

    struct MidFault<'a> {
        inner: StrSource<'a>,
        calls: usize,
    }
    impl CharSource for MidFault<'_> {
        fn read_chars(&mut self, out: &mut [char]) -> io::Result<usize> {
            self.calls += 1;
            if self.calls == 2 {
                return Err(io::Error::other("mid-stream fault"));
            }
            self.inner.read_chars(out)
        }
    }

    let mut reader = JsonTextReader::new(MidFault {
        inner: StrSource::new(&text),
        calls: 0,
    });
    let mut values = Vec::new();
    let mut faults = 0;
    loop {
        match reader.read() {
            Ok(true) => {
                if let Some(n) = reader.value().as_i64() {
                    values.push(n);
                }
            }
            Ok(false) => break,
            Err(ReadError::Source(_)) => faults += 1,
            Err(e) => panic!("unexpected parse fault: {e}"),
        }
    }
    assert_eq!(faults, 1);
    let mut expected: Vec<i64> = (0..600).collect();
    expected.push(999);
    assert_eq!(values, expected);
}
