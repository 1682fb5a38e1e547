// events/bus/event_bus.rs
//
// Synchronous typed bus carrying dataset, map, navigation and detail
// events between services. Handlers run in subscription order on the
// emitting thread, and every emission is recorded in the event log.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::events::types::DomainEvent;

/// Type-erased event handler function
/// Takes a reference to Any (downcasted to concrete event type inside)
type EventHandler = Box<dyn Fn(&dyn Any) + Send + Sync>;

/// The Event Bus
///
/// Services publish intents and facts here (a region was selected, the
/// dataset finished loading) without holding references to whoever
/// reacts to them.
///
/// Key characteristics:
/// - Synchronous execution (no async, no threads)
/// - Handlers execute in subscription order
/// - Type-safe through generics
/// - Observable through logging
pub struct EventBus {
    /// Map from event TypeId to list of handlers
    handlers: Arc<RwLock<HashMap<TypeId, Vec<EventHandler>>>>,

    /// Event emission log (for debugging)
    event_log: Arc<RwLock<Vec<EventLogEntry>>>,
}

/// A logged event for debugging and tracing
#[derive(Debug, Clone)]
pub struct EventLogEntry {
    pub event_type: String,
    pub event_id: String,
    pub occurred_at: String,
    pub handler_count: usize,
}

impl EventBus {
    /// Create a new event bus
    pub fn new() -> Self {
        Self {
            handlers: Arc::new(RwLock::new(HashMap::new())),
            event_log: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Subscribe to a specific event type
    ///
    /// Handlers are executed in the order they are subscribed.
    /// Subscribing from inside a handler is not supported.
    ///
    /// Example:
    /// ```ignore
    /// bus.subscribe::<RegionSelected, _>(|event| {
    ///     log::info!("Region selected: {}", event.region_code);
    /// });
    /// ```
    pub fn subscribe<E, F>(&self, handler: F)
    where
        E: DomainEvent + 'static,
        F: Fn(&E) + Send + Sync + 'static,
    {
        let type_id = TypeId::of::<E>();

        let wrapped: EventHandler = Box::new(move |event_any: &dyn Any| {
            if let Some(event) = event_any.downcast_ref::<E>() {
                handler(event);
            } else {
                log::error!(
                    "Failed to downcast event in handler for {}",
                    std::any::type_name::<E>()
                );
            }
        });

        let mut handlers = self.handlers.write().unwrap_or_else(PoisonError::into_inner);
        handlers.entry(type_id).or_default().push(wrapped);
    }

    /// Emit an event
    ///
    /// This will:
    /// 1. Log the event
    /// 2. Execute all handlers for this event type (in subscription order)
    /// 3. Return immediately (synchronous)
    ///
    /// If a handler panics, the panic is caught and logged, but other handlers
    /// still execute.
    pub fn emit<E>(&self, event: E)
    where
        E: DomainEvent + 'static,
    {
        let type_id = TypeId::of::<E>();

        let handlers = self.handlers.read().unwrap_or_else(PoisonError::into_inner);
        let event_handlers = handlers.get(&type_id);

        let log_entry = EventLogEntry {
            event_type: event.event_type().to_string(),
            event_id: event.event_id().to_string(),
            occurred_at: event.occurred_at().to_rfc3339(),
            handler_count: event_handlers.map(|h| h.len()).unwrap_or(0),
        };

        log::debug!(
            "[EVENT] {} (id: {}) | {} handlers",
            log_entry.event_type,
            log_entry.event_id,
            log_entry.handler_count
        );

        self.event_log
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(log_entry);

        if let Some(handlers) = event_handlers {
            for (idx, handler) in handlers.iter().enumerate() {
                // One failing handler must not stop the rest
                let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                    handler(&event as &dyn Any);
                }));

                if let Err(e) = result {
                    log::error!(
                        "Handler {} for {} panicked: {:?}",
                        idx,
                        event.event_type(),
                        e
                    );
                }
            }
        }
    }

    /// Get the event log (for debugging)
    pub fn get_event_log(&self) -> Vec<EventLogEntry> {
        self.event_log
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RegionCode;
    use crate::events::types::*;
    use crate::views::Section;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_subscribe_and_emit() {
        let bus = EventBus::new();
        let counter = Arc::new(AtomicUsize::new(0));
        let counter_clone = Arc::clone(&counter);

        bus.subscribe::<RegionSelected, _>(move |event| {
            assert_eq!(event.region_code.as_str(), "US-ND");
            counter_clone.fetch_add(1, Ordering::SeqCst);
        });

        bus.emit(RegionSelected::new(RegionCode::from("US-ND")));

        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_multiple_handlers_execute_in_order() {
        let bus = EventBus::new();
        let sequence = Arc::new(RwLock::new(Vec::new()));

        for n in 1..=3 {
            let seq = Arc::clone(&sequence);
            bus.subscribe::<DatasetLoaded, _>(move |_| {
                seq.write().unwrap().push(n);
            });
        }

        bus.emit(DatasetLoaded::new(12, "data/films.json".to_string()));

        let result = sequence.read().unwrap();
        assert_eq!(*result, vec![1, 2, 3]);
    }

    #[test]
    fn test_event_log_records_emissions() {
        let bus = EventBus::new();
        bus.subscribe::<MapDisposed, _>(|_| {});
        bus.subscribe::<MapDisposed, _>(|_| {});

        bus.emit(SectionChanged::new(Section::Map, Section::About));
        bus.emit(MapDisposed::new(1));

        let log = bus.get_event_log();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].event_type, "SectionChanged");
        assert_eq!(log[1].event_type, "MapDisposed");
        assert_eq!(log[0].handler_count, 0);
        assert_eq!(log[1].handler_count, 2);
    }

    #[test]
    fn test_handler_panic_doesnt_break_bus() {
        let bus = EventBus::new();
        let counter = Arc::new(AtomicUsize::new(0));

        bus.subscribe::<RegionSelected, _>(|_| {
            panic!("Intentional panic");
        });

        let counter_clone = Arc::clone(&counter);
        bus.subscribe::<RegionSelected, _>(move |_| {
            counter_clone.fetch_add(1, Ordering::SeqCst);
        });

        bus.emit(RegionSelected::new(RegionCode::from("US-TX")));

        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_handlers_may_emit_further_events() {
        let bus = Arc::new(EventBus::new());
        let shown = Arc::new(AtomicUsize::new(0));

        let inner_bus = Arc::clone(&bus);
        bus.subscribe::<RegionSelected, _>(move |event| {
            inner_bus.emit(DetailsShown::new(event.region_code.clone()));
        });

        let shown_clone = Arc::clone(&shown);
        bus.subscribe::<DetailsShown, _>(move |_| {
            shown_clone.fetch_add(1, Ordering::SeqCst);
        });

        bus.emit(RegionSelected::new(RegionCode::from("US-TX")));

        assert_eq!(shown.load(Ordering::SeqCst), 1);
    }
}
