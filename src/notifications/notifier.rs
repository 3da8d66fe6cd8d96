// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `Notifier` attaches toasts to the notification container and drives
//! each of them through `Visible → Fading → Removed` with two chained timers.
//! It never blocks: [`Notifier::tick`] runs whatever became due since the
//! last call and should be invoked periodically, or whenever
//! [`Notifier::next_deadline`] is reached.

use super::document::{Document, Element, ElementId};
use super::notification::{NotificationRequest, Phase};
use super::scheduler::{Clock, TimerQueue};
use crate::config::defaults::{
    DEFAULT_CONTAINER_ID, DEFAULT_FADE_DELAY_MS, DEFAULT_KIND, DEFAULT_TIMEOUT_MS, FADED_OPACITY,
};
use crate::error::{Error, Result};
use std::time::Duration;

/// Deferred steps of a toast's lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Fade(ElementId),
    Remove(ElementId),
}

/// Settings shared by every toast a notifier creates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifierSettings {
    /// Identifier of the container toasts are appended to.
    pub container_id: String,
    /// Kind used by [`Notifier::notify`].
    pub default_kind: String,
    /// Timeout used by [`Notifier::notify`].
    pub default_timeout: Duration,
    /// Delay between the fade and the removal.
    pub fade_delay: Duration,
}

impl Default for NotifierSettings {
    fn default() -> Self {
        Self {
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            default_kind: DEFAULT_KIND.to_string(),
            default_timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            fade_delay: Duration::from_millis(DEFAULT_FADE_DELAY_MS),
        }
    }
}

/// Creates toasts and runs their fade/remove timers.
#[derive(Debug)]
pub struct Notifier<C: Clock> {
    clock: C,
    settings: NotifierSettings,
    timers: TimerQueue<Step>,
}

impl<C: Clock> Notifier<C> {
    pub fn new(clock: C, settings: NotifierSettings) -> Self {
        Self {
            clock,
            settings,
            timers: TimerQueue::new(),
        }
    }

    /// Creates a notifier with the default settings.
    pub fn with_clock(clock: C) -> Self {
        Self::new(clock, NotifierSettings::default())
    }

    #[must_use]
    pub fn settings(&self) -> &NotifierSettings {
        &self.settings
    }

    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Current time on the notifier's clock.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.clock.elapsed()
    }

    /// Builds a request carrying this notifier's default kind and timeout.
    pub fn request(&self, message: impl Into<String>) -> NotificationRequest {
        NotificationRequest::new(message)
            .with_kind(self.settings.default_kind.clone())
            .with_timeout(self.settings.default_timeout)
    }

    /// Shows `message` with the default kind and timeout.
    pub fn notify(&mut self, document: &mut Document, message: impl Into<String>) -> Result<ElementId> {
        let request = self.request(message);
        self.notify_with(document, request)
    }

    /// Appends a toast for `request` to the container and schedules its fade.
    ///
    /// Fails with [`Error::MissingContainer`] before touching anything if the
    /// container is absent. The returned id only identifies the element;
    /// a scheduled toast cannot be cancelled.
    pub fn notify_with(
        &mut self,
        document: &mut Document,
        request: NotificationRequest,
    ) -> Result<ElementId> {
        let container = document
            .container_mut(&self.settings.container_id)
            .ok_or_else(|| Error::MissingContainer(self.settings.container_id.clone()))?;

        let element = Element::new(request.class_name(), request.message());
        let id = container.append(element);

        let now = self.clock.elapsed();
        let fade_at = now.saturating_add(request.timeout());
        self.timers.schedule_at(fade_at, Step::Fade(id));

        tracing::debug!(
            ?id,
            kind = request.kind(),
            timeout_ms = request.timeout().as_millis() as u64,
            "toast visible"
        );
        Ok(id)
    }

    /// Runs every step due at the current time, earliest first.
    ///
    /// A fade schedules its removal `fade_delay` after the tick that ran it, so
    /// a late tick never shortens the faded period. Returns the number of steps
    /// run.
    pub fn tick(&mut self, document: &mut Document) -> usize {
        let now = self.clock.elapsed();
        let mut ran = 0;
        while let Some((_deadline, step)) = self.timers.pop_due(now) {
            self.run_step(document, now, step);
            ran += 1;
        }
        ran
    }

    fn run_step(&mut self, document: &mut Document, now: Duration, step: Step) {
        let container_id = self.settings.container_id.as_str();
        let Some(container) = document.container_mut(container_id) else {
            tracing::debug!(?step, container_id, "container gone, dropping step");
            return;
        };

        match step {
            Step::Fade(id) => {
                if container.set_opacity(id, FADED_OPACITY) {
                    let remove_at = now.saturating_add(self.settings.fade_delay);
                    self.timers.schedule_at(remove_at, Step::Remove(id));
                    tracing::debug!(?id, "toast fading");
                } else {
                    tracing::debug!(?id, "toast detached before fade");
                }
            }
            Step::Remove(id) => {
                if container.remove(id) {
                    tracing::debug!(?id, "toast removed");
                } else {
                    tracing::debug!(?id, "toast detached before removal");
                }
            }
        }
    }

    /// Lifecycle phase of a toast, derived from the document.
    #[must_use]
    pub fn phase(&self, document: &Document, id: ElementId) -> Phase {
        let element = document
            .container(&self.settings.container_id)
            .and_then(|container| container.get(id));
        match element {
            None => Phase::Removed,
            Some(element) if element.opacity().is_some() => Phase::Fading,
            Some(_) => Phase::Visible,
        }
    }

    /// Number of steps still scheduled.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    /// Deadline of the next step, on the notifier's clock.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    /// Returns whether no step is scheduled.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.timers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::scheduler::ManualClock;

    fn setup() -> (ManualClock, Notifier<ManualClock>, Document) {
        let clock = ManualClock::new();
        let notifier = Notifier::with_clock(clock.clone());
        let document = Document::with_container(DEFAULT_CONTAINER_ID);
        (clock, notifier, document)
    }

    fn children(document: &Document) -> usize {
        document
            .container(DEFAULT_CONTAINER_ID)
            .map_or(0, |c| c.len())
    }

    #[test]
    fn notify_appends_before_any_timer_fires() {
        let (_clock, mut notifier, mut document) = setup();
        let id = notifier.notify(&mut document, "Saved").unwrap();

        assert_eq!(children(&document), 1);
        assert_eq!(notifier.phase(&document, id), Phase::Visible);
        assert_eq!(notifier.pending(), 1);
    }

    #[test]
    fn notify_with_missing_container_fails_without_scheduling() {
        let clock = ManualClock::new();
        let mut notifier = Notifier::with_clock(clock);
        let mut document = Document::new();

        let err = notifier.notify(&mut document, "lost").unwrap_err();
        assert_eq!(err, Error::MissingContainer(DEFAULT_CONTAINER_ID.to_string()));
        assert!(notifier.is_idle());
    }

    #[test]
    fn element_stays_attached_while_fading() {
        let (clock, mut notifier, mut document) = setup();
        let id = notifier.notify(&mut document, "Saved").unwrap();

        clock.advance_ms(2999);
        assert_eq!(notifier.tick(&mut document), 0);
        assert_eq!(notifier.phase(&document, id), Phase::Visible);

        clock.advance_ms(1);
        assert_eq!(notifier.tick(&mut document), 1);
        assert_eq!(notifier.phase(&document, id), Phase::Fading);
        let element = document
            .container(DEFAULT_CONTAINER_ID)
            .and_then(|c| c.get(id))
            .unwrap();
        assert_eq!(element.opacity(), Some(0.0));
        assert_eq!(notifier.next_deadline(), Some(Duration::from_millis(3300)));
    }

    #[test]
    fn removal_follows_fade_by_fade_delay() {
        let (clock, mut notifier, mut document) = setup();
        let id = notifier.notify(&mut document, "Saved").unwrap();

        clock.advance_ms(3000);
        notifier.tick(&mut document);
        clock.advance_ms(299);
        notifier.tick(&mut document);
        assert_eq!(notifier.phase(&document, id), Phase::Fading);

        clock.advance_ms(1);
        notifier.tick(&mut document);
        assert_eq!(notifier.phase(&document, id), Phase::Removed);
        assert_eq!(children(&document), 0);
        assert!(notifier.is_idle());
    }

    #[test]
    fn late_fade_keeps_the_full_fade_delay() {
        let (clock, mut notifier, mut document) = setup();
        let id = notifier.notify(&mut document, "Saved").unwrap();

        clock.advance_ms(3200);
        assert_eq!(notifier.tick(&mut document), 1);
        assert_eq!(notifier.phase(&document, id), Phase::Fading);
        assert_eq!(notifier.next_deadline(), Some(Duration::from_millis(3500)));

        clock.advance_ms(299);
        notifier.tick(&mut document);
        assert_eq!(notifier.phase(&document, id), Phase::Fading);

        clock.advance_ms(1);
        notifier.tick(&mut document);
        assert_eq!(notifier.phase(&document, id), Phase::Removed);
    }

    #[test]
    fn single_late_tick_only_fades() {
        let (clock, mut notifier, mut document) = setup();
        let id = notifier.notify(&mut document, "Saved").unwrap();

        clock.advance_ms(3300);
        assert_eq!(notifier.tick(&mut document), 1);
        assert_eq!(notifier.phase(&document, id), Phase::Fading);
    }

    #[test]
    fn zero_timeout_fades_on_next_tick() {
        let (clock, mut notifier, mut document) = setup();
        let request = notifier.request("now").with_timeout_ms(0);
        let id = notifier.notify_with(&mut document, request).unwrap();

        assert_eq!(notifier.phase(&document, id), Phase::Visible);
        notifier.tick(&mut document);
        assert_eq!(notifier.phase(&document, id), Phase::Fading);

        clock.advance_ms(300);
        notifier.tick(&mut document);
        assert_eq!(notifier.phase(&document, id), Phase::Removed);
    }

    #[test]
    fn container_removed_while_pending_is_a_silent_no_op() {
        let (clock, mut notifier, mut document) = setup();
        notifier.notify(&mut document, "Saved").unwrap();
        document.remove_container(DEFAULT_CONTAINER_ID);

        clock.advance_ms(5000);
        assert_eq!(notifier.tick(&mut document), 1);
        assert!(notifier.is_idle());
    }

    #[test]
    fn element_removed_out_of_band_skips_removal_timer() {
        let (clock, mut notifier, mut document) = setup();
        let id = notifier.notify(&mut document, "Saved").unwrap();
        if let Some(container) = document.container_mut(DEFAULT_CONTAINER_ID) {
            assert!(container.remove(id));
        }

        clock.advance_ms(3000);
        notifier.tick(&mut document);
        assert!(notifier.is_idle());
    }

    #[test]
    fn custom_settings_drive_container_and_delays() {
        let clock = ManualClock::new();
        let settings = NotifierSettings {
            container_id: "toasts".to_string(),
            default_kind: "success".to_string(),
            default_timeout: Duration::from_millis(100),
            fade_delay: Duration::from_millis(50),
        };
        let mut notifier = Notifier::new(clock.clone(), settings);
        let mut document = Document::with_container("toasts");

        let id = notifier.notify(&mut document, "done").unwrap();
        let class = document
            .container("toasts")
            .and_then(|c| c.get(id))
            .map(|e| e.class_name().to_string());
        assert_eq!(class.as_deref(), Some("notify success"));

        clock.advance_ms(100);
        notifier.tick(&mut document);
        clock.advance_ms(50);
        notifier.tick(&mut document);
        assert_eq!(notifier.phase(&document, id), Phase::Removed);
    }
}
