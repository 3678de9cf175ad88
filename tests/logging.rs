//! Structured log output of form events under a `tracing_subscriber::fmt` subscriber.
#![cfg(feature = "tracing")]

use std::io;
use std::sync::{Arc, Mutex};

use contact_form::{ContactForm, FieldId};

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        let bytes = self.0.lock().map(|buf| buf.clone()).unwrap_or_default();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Ok(mut inner) = self.0.lock() {
            inner.extend_from_slice(buf);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn with_captured_logs(f: impl FnOnce()) -> String {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    logs.contents()
}

#[test]
fn test_rejected_then_accepted_submission_logs() {
    let output = with_captured_logs(|| {
        let mut form = ContactForm::new();
        form.type_text(FieldId::Email, "hello");
        assert!(!form.submit().is_accepted());

        form.change(FieldId::FirstName, "Kennedy");
        form.change(FieldId::LastName, "Bryant");
        form.change(FieldId::Email, "test@email.com");
        assert!(form.submit().is_accepted());
    });

    let rejected = output.find("submission rejected");
    let accepted = output.find("submission accepted");
    assert!(rejected.is_some(), "{output}");
    assert!(accepted.is_some(), "{output}");
    assert!(rejected < accepted);
    assert!(output.contains("errors=3"), "{output}");
}

#[test]
fn test_each_keystroke_logs_a_field_change() {
    let output = with_captured_logs(|| {
        let mut form = ContactForm::new();
        form.type_text(FieldId::FirstName, "boo");
    });

    assert_eq!(output.matches("field changed").count(), 3, "{output}");
    assert!(output.contains("field=\"firstName\""), "{output}");
    assert!(output.contains("DEBUG"), "{output}");
}
