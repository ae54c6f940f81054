//! Event engine
//!
//! Rolls for new visitors on a fixed check interval, enforces the activity
//! caps, watches every active trajectory for perihelion passage, and retires
//! objects once they cross the despawn radius. Notifications live in a
//! bounded ring so the feed can never grow without limit.

use std::collections::VecDeque;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use seedrand::SeededRandom;
use stellar::Star;

use crate::catalog::{
    InterstellarClass, BASE_PROBABILITY, CHECK_INTERVAL, DESPAWN_DISTANCE, MAX_ACTIVE_OBJECTS,
    MAX_PASSING_SYSTEMS,
};
use crate::generation::generate_visitor;
use crate::object::{InterstellarKind, InterstellarObject};

/// Ring capacity of the notification feed.
pub const NOTIFICATION_CAPACITY: usize = 20;

/// True-anomaly window around zero that counts as perihelion passage.
const PERIHELION_WINDOW: f64 = 0.1;

/// Passing systems linger further out before despawning.
const SYSTEM_DESPAWN_FACTOR: f64 = 1.5;

/// Notification priority consumed by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NotificationPriority {
    High,
    Normal,
    Low,
}

/// One entry in the notification feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub priority: NotificationPriority,
    pub time: f64,
    pub read: bool,
    pub object_id: u64,
}

/// Lifecycle record kept in the event log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventRecordKind {
    Spawn,
    Despawn,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub kind: EventRecordKind,
    pub object_id: u64,
    pub name: String,
    pub time: f64,
}

/// Spawns, tracks, and retires interstellar visitors.
#[derive(Debug, Default)]
pub struct EventEngine {
    objects: Vec<InterstellarObject>,
    passing_systems: Vec<InterstellarObject>,
    last_check: f64,
    next_object_id: u64,
    next_notification_id: u64,
    notifications: VecDeque<Notification>,
    event_log: Vec<EventRecord>,
}

impl EventEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Periodic check: roll for a spawn, then re-evaluate every active
    /// object's position for perihelion passage and despawn.
    ///
    /// Checks run every `CHECK_INTERVAL / time_scale` time units; the spawn
    /// probability scales with `sqrt(time_scale)` so faster simulations see
    /// proportionally more visitors.
    pub fn check(&mut self, rng: &mut SeededRandom, star: &Star, time: f64, time_scale: f64) {
        if time - self.last_check < CHECK_INTERVAL / time_scale {
            return;
        }
        self.last_check = time;

        let adjusted_probability = BASE_PROBABILITY * time_scale.sqrt();
        if rng.next() < adjusted_probability {
            self.spawn(rng, star, time);
        }

        self.update(time, time_scale);
    }

    /// Attempts to spawn a new visitor, honoring the activity caps.
    fn spawn(&mut self, rng: &mut SeededRandom, star: &Star, time: f64) {
        if self.objects.len() >= MAX_ACTIVE_OBJECTS
            && self.passing_systems.len() >= MAX_PASSING_SYSTEMS
        {
            return;
        }

        let mut class = InterstellarClass::select(rng);

        // A saturated passing-system slot demotes the pick to a comet
        if class == InterstellarClass::PassingSystem
            && self.passing_systems.len() >= MAX_PASSING_SYSTEMS
        {
            class = InterstellarClass::Comet;
        }

        let id = self.next_object_id;
        self.next_object_id += 1;

        let object = generate_visitor(rng, star, class, id, time);
        info!("spawned {} ({})", object.name, object.type_name());

        let priority = match object.class() {
            InterstellarClass::BlackHole | InterstellarClass::PassingSystem => {
                NotificationPriority::High
            }
            _ => NotificationPriority::Normal,
        };
        self.push_notification(
            object.id,
            format!("{} detected: {}", object.type_name(), object.name),
            priority,
            time,
        );
        self.event_log.push(EventRecord {
            kind: EventRecordKind::Spawn,
            object_id: object.id,
            name: object.name.clone(),
            time,
        });

        if class == InterstellarClass::PassingSystem {
            self.passing_systems.push(object);
        } else {
            self.objects.push(object);
        }
    }

    /// Re-evaluates every active object: perihelion flags and despawns.
    fn update(&mut self, time: f64, time_scale: f64) {
        let mut departed: Vec<(u64, String)> = Vec::new();
        let mut perihelion: Vec<(u64, String)> = Vec::new();

        self.objects.retain_mut(|object| {
            let pos = object.position_at(time);

            if pos.distance.to_au() > DESPAWN_DISTANCE {
                if !object.despawned {
                    object.despawned = true;
                    departed.push((object.id, object.name.clone()));
                }
                return false;
            }

            if !object.reached_perihelion && pos.true_anomaly.abs() < PERIHELION_WINDOW {
                object.reached_perihelion = true;
                perihelion.push((object.id, object.name.clone()));
            }

            true
        });

        self.passing_systems.retain_mut(|system| {
            let pos = system.position_at(time);

            if pos.distance.to_au() > DESPAWN_DISTANCE * SYSTEM_DESPAWN_FACTOR {
                if !system.despawned {
                    system.despawned = true;
                    departed.push((system.id, system.name.clone()));
                }
                return false;
            }

            if let InterstellarKind::PassingSystem { planets, .. } = &mut system.kind {
                for planet in planets {
                    planet.angle += planet.orbit_speed * time_scale;
                }
            }

            true
        });

        for (object_id, name) in perihelion {
            debug!("{name} at closest approach");
            self.push_notification(
                object_id,
                format!("{name} at closest approach"),
                NotificationPriority::Normal,
                time,
            );
        }

        for (object_id, name) in departed {
            debug!("{name} has left the system");
            self.push_notification(
                object_id,
                format!("{name} has left the system"),
                NotificationPriority::Low,
                time,
            );
            self.event_log.push(EventRecord {
                kind: EventRecordKind::Despawn,
                object_id,
                name,
                time,
            });
        }
    }

    fn push_notification(
        &mut self,
        object_id: u64,
        message: String,
        priority: NotificationPriority,
        time: f64,
    ) {
        let id = self.next_notification_id;
        self.next_notification_id += 1;

        self.notifications.push_back(Notification {
            id,
            message,
            priority,
            time,
            read: false,
            object_id,
        });
        while self.notifications.len() > NOTIFICATION_CAPACITY {
            self.notifications.pop_front();
        }
    }

    /// Active ordinary visitors, oldest first.
    pub fn active_objects(&self) -> &[InterstellarObject] {
        &self.objects
    }

    /// Active passing systems.
    pub fn passing_systems(&self) -> &[InterstellarObject] {
        &self.passing_systems
    }

    /// The notification feed, oldest first.
    pub fn notifications(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter()
    }

    /// Notifications not yet marked read.
    pub fn unread_notifications(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter().filter(|n| !n.read)
    }

    pub fn mark_notification_read(&mut self, id: u64) {
        if let Some(notification) = self.notifications.iter_mut().find(|n| n.id == id) {
            notification.read = true;
        }
    }

    pub fn mark_all_notifications_read(&mut self) {
        for notification in &mut self.notifications {
            notification.read = true;
        }
    }

    /// Spawn/despawn history for this session.
    pub fn event_log(&self) -> &[EventRecord] {
        &self.event_log
    }

    /// Drops every active object and clears the feeds, for regeneration.
    pub fn clear(&mut self) {
        self.objects.clear();
        self.passing_systems.clear();
        self.event_log.clear();
        self.notifications.clear();
        self.last_check = 0.0;
    }
}
