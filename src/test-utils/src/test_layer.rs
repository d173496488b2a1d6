// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{Event, Level, Subscriber, field};
use tracing_subscriber::{Layer, layer::Context, prelude::*};

/// Represents a captured tracing event with its fields.
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    /// The level of the event.
    pub level: Level,
    /// The target of the event, typically the module path.
    pub target: String,
    /// A map of field names to their string representations.
    ///
    /// The event message, if any, is stored under `message`.
    pub fields: HashMap<String, String>,
}

/// Extracts field key-value pairs from events.
struct TestVisitor<'a>(&'a mut HashMap<String, String>);

impl field::Visit for TestVisitor<'_> {
    fn record_str(&mut self, field: &field::Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &field::Field, value: &dyn std::fmt::Debug) {
        self.0
            .insert(field.name().to_string(), format!("{:?}", value));
    }

    fn record_i64(&mut self, field: &field::Field, value: i64) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_u64(&mut self, field: &field::Field, value: u64) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_bool(&mut self, field: &field::Field, value: bool) {
        self.0.insert(field.name().to_string(), value.to_string());
    }
}

/// A tracing layer for capturing and inspecting events within tests.
///
/// The layer is installed as the default subscriber for the current thread
/// only, so tests running in parallel do not see each other's events. Every
/// level is captured, regardless of the `log-tests` feature.
///
/// # Example
///
/// ```rust
/// use google_cloud_test_utils::test_layer::TestLayer;
///
/// let (value, events) = TestLayer::capture(|| {
///     tracing::debug!(answer = 42, "computing");
///     42
/// });
/// assert_eq!(value, 42);
/// assert_eq!(events.len(), 1);
/// assert_eq!(events[0].level, tracing::Level::DEBUG);
/// assert_eq!(events[0].fields.get("answer").map(String::as_str), Some("42"));
/// ```
#[derive(Clone, Default)]
pub struct TestLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl TestLayer {
    /// Runs `f` and returns its result along with all the events it emitted.
    pub fn capture<F, R>(f: F) -> (R, Vec<CapturedEvent>)
    where
        F: FnOnce() -> R,
    {
        let layer = TestLayer::default();
        let events = layer.events.clone();
        let subscriber = tracing_subscriber::registry().with(layer);
        let result = tracing::subscriber::with_default(subscriber, f);
        let captured = std::mem::take(&mut *events.lock().expect("event log is not poisoned"));
        (result, captured)
    }
}

impl<S: Subscriber> Layer<S> for TestLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = HashMap::new();
        event.record(&mut TestVisitor(&mut fields));
        let metadata = event.metadata();
        let captured = CapturedEvent {
            level: *metadata.level(),
            target: metadata.target().to_string(),
            fields,
        };
        self.events
            .lock()
            .expect("event log is not poisoned")
            .push(captured);
    }
}
