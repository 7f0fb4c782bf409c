use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Trailing-edge debouncer that owns its timer.
///
/// Each [`Debouncer::trigger`] aborts the pending timer and arms a new one;
/// only the value of the last trigger inside the quiet window is delivered.
/// Dropping the debouncer aborts any pending delivery.
pub struct Debouncer<T> {
    delay: Duration,
    output: mpsc::Sender<T>,
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new(delay: Duration, output: mpsc::Sender<T>) -> Self {
        Self {
            delay,
            output,
            pending: None,
        }
    }

    pub fn trigger(&mut self, value: T) {
        self.cancel();
        let delay = self.delay;
        let output = self.output.clone();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = output.send(value).await;
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(300);

    #[tokio::test(start_paused = true)]
    async fn test_burst_delivers_last_value_once() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut debouncer = Debouncer::new(WINDOW, tx);

        for text in ["e", "en", "enr", "enrol"] {
            debouncer.trigger(text.to_string());
            tokio::time::sleep(Duration::from_millis(100)).await;
        }

        tokio::time::sleep(WINDOW).await;
        assert_eq!(rx.recv().await.as_deref(), Some("enrol"));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_nothing_before_window_elapses() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut debouncer = Debouncer::new(WINDOW, tx);

        debouncer.trigger(1);
        tokio::time::sleep(Duration::from_millis(299)).await;
        assert!(rx.try_recv().is_err());
        assert!(debouncer.is_pending());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(rx.recv().await, Some(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_suppresses_delivery() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut debouncer = Debouncer::new(WINDOW, tx);

        debouncer.trigger(7);
        debouncer.cancel();
        assert!(!debouncer.is_pending());

        tokio::time::sleep(WINDOW * 2).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts_timer() {
        let (tx, mut rx) = mpsc::channel(8);
        {
            let mut debouncer = Debouncer::new(WINDOW, tx);
            debouncer.trigger("late");
        }
        tokio::time::sleep(WINDOW * 2).await;
        assert!(rx.recv().await.is_none());
    }
}
