//! Sessions: one playthrough's worth of progress, owned in one place.
//!
//! A session threads its progress through [`router::transition`] and
//! logs every scene change under its own id. Nothing is shared between
//! sessions and nothing outlives one.

use jiff::Timestamp;
use tracing::{Span, info, info_span};
use uuid::Uuid;

use crate::model::{Event, Progress};
use crate::router;
use crate::story::Registry;

pub struct Session<'r> {
    pub id: Uuid,
    pub started_at: Timestamp,
    registry: &'r Registry,
    progress: Progress,
    span: Span,
}

impl<'r> Session<'r> {
    /// Starts a fresh session on the title scene.
    pub fn new(registry: &'r Registry) -> Self {
        let id = Uuid::new_v4();
        let span = info_span!("session", %id);
        span.in_scope(|| info!("session started"));
        Self {
            id,
            started_at: Timestamp::now(),
            registry,
            progress: Progress::default(),
            span,
        }
    }

    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    /// Feeds one event through the router.
    ///
    /// Returns `false` once the player has exited; the progress is then
    /// left as it was.
    pub fn dispatch(&mut self, event: &Event) -> bool {
        let _guard = self.span.enter();
        let before = self.progress;

        let Some(next) = router::transition(self.registry, before, event).progress() else {
            info!("player exited");
            return false;
        };

        if next.scene.name() != before.scene.name() || next.stage != before.stage {
            info!(
                %event,
                from = before.scene.name(),
                to = next.scene.name(),
                stage = next.stage,
                tension = next.tracker.tension.level(),
                "scene changed"
            );
        }
        self.progress = next;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::Scene;

    #[test]
    fn new_session_starts_on_title() {
        let session = Session::new(Registry::builtin().unwrap());
        assert_eq!(*session.progress(), Progress::default());
    }

    #[test]
    fn dispatch_threads_progress() {
        let mut session = Session::new(Registry::builtin().unwrap());
        assert!(session.dispatch(&Event::Start));
        assert!(session.dispatch(&Event::Advance));
        assert_eq!(session.progress().scene, Scene::CHOOSING);
    }

    #[test]
    fn exit_stops_the_session() {
        let mut session = Session::new(Registry::builtin().unwrap());
        assert!(!session.dispatch(&Event::Exit));
        assert_eq!(session.progress().scene, Scene::Title);
    }

    #[test]
    fn sessions_are_independent() {
        let mut a = Session::new(Registry::builtin().unwrap());
        let b = Session::new(Registry::builtin().unwrap());
        a.dispatch(&Event::Start);

        assert_ne!(a.id, b.id);
        assert_eq!(b.progress().scene, Scene::Title);
    }
}
