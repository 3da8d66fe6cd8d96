// SPDX-License-Identifier: MPL-2.0
//! Async driver for notifiers running on tokio time.

use crate::notifications::{Document, Notifier, TokioClock};

/// Sleeps until each pending deadline and ticks, until no step is left.
///
/// Returns the number of steps run. New toasts cannot be added while this
/// runs since it holds the document mutably.
pub async fn drive_until_idle(notifier: &mut Notifier<TokioClock>, document: &mut Document) -> usize {
    let mut ran = notifier.tick(document);
    while let Some(deadline) = notifier.next_deadline() {
        let wake_at = notifier.clock().instant_at(deadline);
        tokio::time::sleep_until(wake_at).await;
        ran += notifier.tick(document);
    }
    tracing::debug!(ran, "notifier idle");
    ran
}
