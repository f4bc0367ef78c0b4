use std::{
    future::Future,
    sync::{
        atomic::{
            AtomicU64,
            Ordering,
        },
        Arc,
    },
    time::Duration,
};

/// Quiescence window used for search-as-you-type.
pub const DEFAULT_QUIESCENCE: Duration = Duration::from_millis(300);

/// Identifies one call into a [`Debouncer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// Debounce primitive: every call supersedes all earlier ones, and a call
/// only settles once the window elapses without a newer call.
#[derive(Clone, Debug)]
pub struct Debouncer {
    window: Duration,
    generation: Arc<AtomicU64>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_QUIESCENCE)
    }
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Supersedes every outstanding call.
    pub fn begin(&self) -> Ticket {
        Ticket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }

    /// Waits out the window using `sleep`; yields the ticket if no other
    /// call began in the meantime.
    pub async fn settle_with<F, Fut>(&self, sleep: F) -> Option<Ticket>
    where
        F: FnOnce(Duration) -> Fut,
        Fut: Future<Output = ()>,
    {
        let ticket = self.begin();
        sleep(self.window).await;
        self.is_current(ticket).then_some(ticket)
    }

    pub async fn settle(&self) -> Option<Ticket> {
        self.settle_with(sleep).await
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(duration: Duration) {
    async_std::task::sleep(duration).await
}

#[cfg(target_arch = "wasm32")]
async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_std::task;

    #[async_std::test]
    async fn test_single_call_settles() {
        let debouncer = Debouncer::new(Duration::from_millis(5));
        let ticket = debouncer.settle().await;
        assert!(ticket.is_some());
        assert!(debouncer.is_current(ticket.unwrap()));
    }

    #[async_std::test]
    async fn test_only_last_call_settles() {
        let debouncer = Debouncer::new(Duration::from_millis(80));
        let (first, second, third) = futures::join!(
            debouncer.settle(),
            async {
                task::sleep(Duration::from_millis(10)).await;
                debouncer.settle().await
            },
            async {
                task::sleep(Duration::from_millis(20)).await;
                debouncer.settle().await
            }
        );
        assert_eq!(first, None);
        assert_eq!(second, None);
        assert!(third.is_some());
    }

    #[async_std::test]
    async fn test_injected_sleep() {
        let debouncer = Debouncer::default();
        assert_eq!(debouncer.window(), DEFAULT_QUIESCENCE);
        // the injected sleep returns immediately, yet a call made during it
        // still supersedes the pending one
        let result = debouncer.settle_with(|window| {
            assert_eq!(window, DEFAULT_QUIESCENCE);
            debouncer.begin();
            async {}
        }).await;
        assert_eq!(result, None);
        let result = debouncer.settle_with(|_| async {}).await;
        assert!(result.is_some());
    }
}
