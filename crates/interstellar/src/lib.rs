//! Interstellar visitors and the event engine
//!
//! Unlike everything else in a generated system, interstellar objects are
//! transient: the event engine rolls for them on a fixed check interval,
//! seeds them on unbound hyperbolic trajectories at a configured spawn
//! distance, tracks their perihelion passage, and removes them once they
//! leave the despawn radius.

pub mod catalog;
pub mod events;
pub mod generation;
pub mod object;

pub use catalog::{InterstellarClass, RogueSubtype};
pub use events::{
    EventEngine, EventRecord, EventRecordKind, Notification, NotificationPriority,
    NOTIFICATION_CAPACITY,
};
pub use generation::generate_visitor;
pub use object::{InterstellarKind, InterstellarObject, Trajectory, VisitorPosition};

#[cfg(test)]
mod events_test;
#[cfg(test)]
mod generation_test;
