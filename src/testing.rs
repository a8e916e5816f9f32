//! Test support: collect the `tracing` events emitted by loggers.

use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Record {
    pub logger: String,
    pub message: String,
    pub severity: i64,
    pub level: tracing::Level,
}

#[derive(Default)]
struct RecordVisitor {
    logger: String,
    message: String,
    severity: i64,
}

impl Visit for RecordVisitor {
    fn record_i64(&mut self, field: &Field, value: i64) {
        if field.name() == "severity" {
            self.severity = value;
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "logger" {
            self.logger = value.to_string();
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        match field.name() {
            "message" => self.message = format!("{value:?}"),
            "logger" => self.logger = format!("{value:?}"),
            _ => {}
        }
    }
}

struct CaptureLayer {
    records: Arc<Mutex<Vec<Record>>>,
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if event.metadata().target() != "pi_log" {
            return;
        }
        let mut visitor = RecordVisitor::default();
        event.record(&mut visitor);
        self.records.lock().unwrap().push(Record {
            logger: visitor.logger,
            message: visitor.message,
            severity: visitor.severity,
            level: *event.metadata().level(),
        });
    }
}

/// Run `f` with a thread-local subscriber and return the records it produced.
pub(crate) fn capture<F: FnOnce()>(f: F) -> Vec<Record> {
    let records = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::registry().with(CaptureLayer {
        records: records.clone(),
    });
    tracing::subscriber::with_default(subscriber, f);
    records.lock().unwrap().clone()
}
