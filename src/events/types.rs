// events/types.rs
//
// All events in the system.
// Each event represents an immutable fact that has already occurred,
// or an intent raised by the UI (a region was selected).
//
// CRITICAL RULES:
// - Events are immutable
// - Events carry only the data needed to react
// - No business logic in event types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::RegionCode;
use crate::views::Section;

/// Trait that all events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

macro_rules! domain_event {
    ($name:ident) => {
        impl DomainEvent for $name {
            fn event_id(&self) -> Uuid {
                self.event_id
            }
            fn occurred_at(&self) -> DateTime<Utc> {
                self.occurred_at
            }
            fn event_type(&self) -> &'static str {
                stringify!($name)
            }
        }
    };
}

// ============================================================================
// DATASET EVENTS
// ============================================================================

/// Emitted once the catalog has been populated
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetLoaded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub film_count: usize,
    pub source: String,
}

impl DatasetLoaded {
    pub fn new(film_count: usize, source: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            film_count,
            source,
        }
    }
}

domain_event!(DatasetLoaded);

/// Emitted when the dataset could not be fetched or parsed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetLoadFailed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub source: String,
    pub reason: String,
}

impl DatasetLoadFailed {
    pub fn new(source: String, reason: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            source,
            reason,
        }
    }
}

domain_event!(DatasetLoadFailed);

// ============================================================================
// INTERACTION EVENTS
// ============================================================================

/// A list button or a map region asked for a region's details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionSelected {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub region_code: RegionCode,
}

impl RegionSelected {
    pub fn new(region_code: RegionCode) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            region_code,
        }
    }
}

domain_event!(RegionSelected);

/// The detail surface now shows a region's film
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailsShown {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub region_code: RegionCode,
}

impl DetailsShown {
    pub fn new(region_code: RegionCode) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            region_code,
        }
    }
}

domain_event!(DetailsShown);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionChanged {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub from: Section,
    pub to: Section,
}

impl SectionChanged {
    pub fn new(from: Section, to: Section) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            from,
            to,
        }
    }
}

domain_event!(SectionChanged);

// ============================================================================
// MAP LIFECYCLE EVENTS
// ============================================================================

/// A fresh map widget instance was mounted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapInitialised {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub generation: u64,
    pub active_regions: usize,
}

impl MapInitialised {
    pub fn new(generation: u64, active_regions: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            generation,
            active_regions,
        }
    }
}

domain_event!(MapInitialised);

/// The map widget instance was torn down
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapDisposed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub generation: u64,
}

impl MapDisposed {
    pub fn new(generation: u64) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            generation,
        }
    }
}

domain_event!(MapDisposed);
