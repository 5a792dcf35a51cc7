use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures::{Stream, StreamExt};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{sleep, Instant};
use tracing::{debug, warn};

pub enum AppEvent {
    Input(Event),
    /// Terminal resized to (columns, rows). Bursts may be coalesced.
    Resize(u16, u16),
    RecipientsUpdate(Vec<String>),
}

/// Owns the task that reads terminal input (key, mouse and resize events).
///
/// Created once when the UI starts; dropping it stops the task, so the
/// listener never outlives the UI that registered it.
pub struct InputListener {
    task: JoinHandle<()>,
}

impl InputListener {
    pub fn spawn(tx: mpsc::Sender<AppEvent>, resize_debounce: Duration) -> Self {
        Self::spawn_with(EventStream::new(), tx, resize_debounce)
    }

    pub fn spawn_with<S>(stream: S, tx: mpsc::Sender<AppEvent>, resize_debounce: Duration) -> Self
    where
        S: Stream<Item = std::io::Result<Event>> + Unpin + Send + 'static,
    {
        let task = tokio::spawn(pump(stream, tx, resize_debounce));
        Self { task }
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for InputListener {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Forward terminal events to the app. With a non-zero debounce only the last
/// resize of a burst is sent, once no further resize arrived for `debounce`.
/// A pending resize is flushed before the pump exits.
async fn pump<S>(mut stream: S, tx: mpsc::Sender<AppEvent>, debounce: Duration)
where
    S: Stream<Item = std::io::Result<Event>> + Unpin,
{
    let mut pending: Option<(u16, u16)> = None;
    let timer = sleep(Duration::ZERO);
    tokio::pin!(timer);

    loop {
        tokio::select! {
            next = stream.next() => {
                let event = match next {
                    Some(Ok(event)) => event,
                    Some(Err(err)) => {
                        warn!(error = %err, "terminal event stream failed");
                        break;
                    }
                    None => break,
                };

                let outgoing = match event {
                    Event::Resize(w, h) if !debounce.is_zero() => {
                        pending = Some((w, h));
                        timer.as_mut().reset(Instant::now() + debounce);
                        continue;
                    }
                    Event::Resize(w, h) => AppEvent::Resize(w, h),
                    other => AppEvent::Input(other),
                };
                if tx.send(outgoing).await.is_err() {
                    return;
                }
            }
            () = &mut timer, if pending.is_some() => {
                if let Some((w, h)) = pending.take() {
                    debug!(w, h, "debounced resize");
                    if tx.send(AppEvent::Resize(w, h)).await.is_err() {
                        return;
                    }
                }
            }
        }
    }

    if let Some((w, h)) = pending {
        let _ = tx.send(AppEvent::Resize(w, h)).await;
    }
}
