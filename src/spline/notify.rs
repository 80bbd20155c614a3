//! Explicit change notification for spline point data.
//!
//! Setters on point data take a [`SplineChangeNotifier`] and invoke it after the
//! assignment, so the owning spline learns that its derived geometry is stale.

use super::events::SplineChangedEvent;
use bevy::prelude::*;

/// Observer, der über Änderungen an den Punktdaten eines Splines informiert wird.
pub trait SplineChangeNotifier {
    fn notify_of_spline_change(&mut self);
}

impl<F: FnMut()> SplineChangeNotifier for F {
    fn notify_of_spline_change(&mut self) {
        self()
    }
}

/// Sends one [`SplineChangedEvent`] for `spline` per notification.
///
/// Intended for systems that edit point data and already hold an
/// `EventWriter<SplineChangedEvent>`.
pub struct SplineChangeSender<'a, 'w> {
    writer: &'a mut EventWriter<'w, SplineChangedEvent>,
    spline: Entity,
}

impl<'a, 'w> SplineChangeSender<'a, 'w> {
    pub fn new(writer: &'a mut EventWriter<'w, SplineChangedEvent>, spline: Entity) -> Self {
        Self { writer, spline }
    }
}

impl SplineChangeNotifier for SplineChangeSender<'_, '_> {
    fn notify_of_spline_change(&mut self) {
        debug!("Spline {:?} marked as changed", self.spline);
        self.writer.send(SplineChangedEvent {
            spline: self.spline,
        });
    }
}

// Für Punktdaten ohne Besitzer (z.B. beim Deserialisieren)
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNotifier;

impl SplineChangeNotifier for NoopNotifier {
    fn notify_of_spline_change(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_notifier_is_invoked() {
        let mut calls = 0;
        {
            let mut notifier = || calls += 1;
            notifier.notify_of_spline_change();
            notifier.notify_of_spline_change();
        }
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_sender_emits_event_for_spline() {
        let mut world = World::new();
        world.init_resource::<Events<SplineChangedEvent>>();
        let spline = world.spawn_empty().id();

        let mut state = bevy::ecs::system::SystemState::<EventWriter<SplineChangedEvent>>::new(
            &mut world,
        );
        {
            let mut writer = state.get_mut(&mut world);
            let mut sender = SplineChangeSender::new(&mut writer, spline);
            sender.notify_of_spline_change();
        }
        state.apply(&mut world);

        let events = world.resource::<Events<SplineChangedEvent>>();
        let mut reader = events.get_reader();
        let received: Vec<_> = reader.read(events).copied().collect();
        assert_eq!(received, vec![SplineChangedEvent { spline }]);
    }
}
