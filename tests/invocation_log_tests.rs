use functions_service::invocation_log::{InvocationLog, InvocationRecord, TracingLog};
use std::{
    io,
    sync::{Arc, Mutex},
};
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct CapturedOutput {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CapturedOutput {
    fn lines(&self) -> Vec<String> {
        let bytes = self.buffer.lock().unwrap().clone();
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl io::Write for CapturedOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedOutput {
    type Writer = CapturedOutput;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn write_captured(record: &InvocationRecord) -> Vec<String> {
    let output = CapturedOutput::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(output.clone())
        .with_ansi(false)
        .without_time()
        .finish();

    tracing::subscriber::with_default(subscriber, || TracingLog.write(record));

    output.lines()
}

#[test]
fn test_hello_world_record_carries_method_and_path() {
    let lines = write_captured(&InvocationRecord::HelloWorldInvoked {
        method: "GET".to_string(),
        path: "/".to_string(),
    });

    assert_eq!(lines.len(), 1);
    let line = &lines[0];
    assert!(line.contains("INFO"), "{line}");
    assert!(line.contains("functions:"), "{line}");
    assert!(line.contains("helloWorld invoked"), "{line}");
    assert!(line.contains("method=GET"), "{line}");
    assert!(line.contains("path=/"), "{line}");
}

#[test]
fn test_anonymous_ping_record_has_no_uid() {
    let lines = write_captured(&InvocationRecord::PingCalled {
        uid: None,
        name: "friend".to_string(),
    });

    assert_eq!(lines.len(), 1);
    let line = &lines[0];
    assert!(line.contains("ping called"), "{line}");
    assert!(line.contains("uid=None"), "{line}");
    assert!(line.contains("name=friend"), "{line}");
}

#[test]
fn test_signed_in_ping_record_is_distinct_from_anonymous() {
    let lines = write_captured(&InvocationRecord::PingCalled {
        uid: Some("null".to_string()),
        name: "Bob".to_string(),
    });

    assert_eq!(lines.len(), 1);
    let line = &lines[0];
    assert!(line.contains("ping called"), "{line}");
    assert!(line.contains(r#"uid=Some("null")"#), "{line}");
    assert!(!line.contains("uid=None"), "{line}");
    assert!(line.contains("name=Bob"), "{line}");
}
