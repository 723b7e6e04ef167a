//! Hook-dispatching sink decorator
//!
//! `HookSink` wraps any other [`Sink`]. For every entry it runs the hook
//! registered for that exact level, then hands the untouched entry to the
//! wrapped sink. Scoped copies share one hook table.

use super::{
    context::Context,
    error::Result,
    events::Events,
    level::Level,
    record::{Entry, Record},
    sink::Sink,
    value::Attr,
};
use std::sync::Arc;

pub struct HookSink {
    inner: Arc<dyn Sink>,
    events: Arc<Events>,
}

impl HookSink {
    pub fn new(inner: Arc<dyn Sink>, events: Events) -> Self {
        Self {
            inner,
            events: Arc::new(events),
        }
    }

    pub fn events(&self) -> &Arc<Events> {
        &self.events
    }
}

impl Sink for HookSink {
    fn enabled(&self, ctx: &Context, level: Level) -> bool {
        self.inner.enabled(ctx, level)
    }

    fn handle(&self, ctx: &Context, entry: &Entry) -> Result<()> {
        if let Some(hook) = self.events.get(entry.level) {
            hook(ctx, &Record::from(entry));
        }

        // The hook never suppresses normal output.
        self.inner.handle(ctx, entry)
    }

    fn with_attrs(&self, attrs: Vec<Attr>) -> Arc<dyn Sink> {
        Arc::new(HookSink {
            inner: self.inner.with_attrs(attrs),
            events: Arc::clone(&self.events),
        })
    }

    fn with_group(&self, name: &str) -> Arc<dyn Sink> {
        Arc::new(HookSink {
            inner: self.inner.with_group(name),
            events: Arc::clone(&self.events),
        })
    }

    fn name(&self) -> &str {
        "hooks"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FieldValue;
    use parking_lot::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Sink that records what reaches it.
    #[derive(Default)]
    struct Recording {
        entries: Mutex<Vec<Entry>>,
        hooks_seen_before: Arc<AtomicUsize>,
        hook_calls: Arc<AtomicUsize>,
    }

    impl Sink for Recording {
        fn enabled(&self, _ctx: &Context, level: Level) -> bool {
            level >= Level::Info
        }

        fn handle(&self, _ctx: &Context, entry: &Entry) -> Result<()> {
            self.hooks_seen_before
                .store(self.hook_calls.load(Ordering::SeqCst), Ordering::SeqCst);
            self.entries.lock().push(entry.clone());
            Ok(())
        }

        fn with_attrs(&self, _attrs: Vec<Attr>) -> Arc<dyn Sink> {
            Arc::new(Recording::default())
        }

        fn with_group(&self, _name: &str) -> Arc<dyn Sink> {
            Arc::new(Recording::default())
        }

        fn name(&self) -> &str {
            "recording"
        }
    }

    fn entry(level: Level) -> Entry {
        let mut entry = Entry::new(chrono::Utc::now(), level, "msg", None);
        entry.add(Attr::new("k", "v"));
        entry
    }

    #[test]
    fn test_hook_runs_before_inner_sink() {
        let hook_calls = Arc::new(AtomicUsize::new(0));
        let inner = Arc::new(Recording {
            hook_calls: Arc::clone(&hook_calls),
            ..Recording::default()
        });

        let counter = Arc::clone(&hook_calls);
        let sink = HookSink::new(
            inner.clone(),
            Events::new().on_error(move |_, record| {
                assert_eq!(record.attribute("k"), Some(&FieldValue::from("v")));
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        );

        sink.handle(&Context::background(), &entry(Level::Error)).unwrap();

        assert_eq!(hook_calls.load(Ordering::SeqCst), 1);
        assert_eq!(inner.hooks_seen_before.load(Ordering::SeqCst), 1);
        assert_eq!(inner.entries.lock().len(), 1);
    }

    #[test]
    fn test_exact_level_dispatch() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let inner = Arc::new(Recording::default());
        let sink = HookSink::new(
            inner.clone(),
            Events::new().on_error(move |_, _| {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        );

        sink.handle(&Context::background(), &entry(Level::Warn)).unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(inner.entries.lock().len(), 1);
    }

    #[test]
    fn test_enabled_delegates() {
        let sink = HookSink::new(Arc::new(Recording::default()), Events::new());
        let ctx = Context::background();
        assert!(!sink.enabled(&ctx, Level::Debug));
        assert!(sink.enabled(&ctx, Level::Info));
    }

    #[test]
    fn test_scoped_sinks_share_hook_table() {
        let sink = HookSink::new(
            Arc::new(Recording::default()),
            Events::new().on_info(|_, _| {}),
        );
        let table = Arc::clone(sink.events());

        let scoped = sink.with_attrs(vec![Attr::new("a", 1)]);
        let grouped = sink.with_group("g");

        // Two scoped copies plus `sink` plus `table`.
        assert_eq!(Arc::strong_count(&table), 4);
        drop(scoped);
        drop(grouped);
        assert_eq!(Arc::strong_count(&table), 2);
    }
}
