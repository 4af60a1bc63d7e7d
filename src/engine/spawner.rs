use futures::future::{AbortHandle, abortable};
use poll_promise::Promise;
use std::future::Future;

/// A spawned backend call. Polled from the UI thread; can be aborted at any time,
/// after which it resolves to `None` and its result is never seen.
pub struct TaskHandle<T: Send + 'static> {
    name: &'static str,
    promise: Promise<Option<T>>,
    abort: AbortHandle,
}

impl<T: Send + 'static> TaskHandle<T> {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn cancel(&self) {
        self.abort.abort();
    }

    /// Takes the output if the task is done; hands the handle back otherwise.
    /// `Ok(None)` means the task was aborted.
    pub fn try_take(self) -> Result<Option<T>, Self> {
        let Self {
            name,
            promise,
            abort,
        } = self;
        promise.try_take().map_err(|promise| Self {
            name,
            promise,
            abort,
        })
    }

    /// Test helper: block the calling thread until the task resolves.
    #[cfg(all(test, not(target_arch = "wasm32")))]
    pub fn block_until_ready(self) -> Option<T> {
        self.promise.block_and_take()
    }
}

/// Where backend futures run.
/// Native: a tokio runtime owned by the binary. Web: the browser's event loop.
#[derive(Clone)]
pub struct TaskSpawner {
    #[cfg(not(target_arch = "wasm32"))]
    handle: tokio::runtime::Handle,
}

impl TaskSpawner {
    #[cfg(not(target_arch = "wasm32"))]
    pub fn new(handle: tokio::runtime::Handle) -> Self {
        Self { handle }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn new() -> Self {
        Self {}
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn spawn<T, F>(&self, name: &'static str, future: F) -> TaskHandle<T>
    where
        T: Send + 'static,
        F: Future<Output = T> + Send + 'static,
    {
        let (promise, abort, task) = Self::wrap(name, future);
        self.handle.spawn(task);
        TaskHandle {
            name,
            promise,
            abort,
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn spawn<T, F>(&self, name: &'static str, future: F) -> TaskHandle<T>
    where
        T: Send + 'static,
        F: Future<Output = T> + 'static,
    {
        let (promise, abort, task) = Self::wrap(name, future);
        wasm_bindgen_futures::spawn_local(task);
        TaskHandle {
            name,
            promise,
            abort,
        }
    }

    fn wrap<T, F>(
        name: &'static str,
        future: F,
    ) -> (Promise<Option<T>>, AbortHandle, impl Future<Output = ()>)
    where
        T: Send + 'static,
        F: Future<Output = T>,
    {
        let (sender, promise) = Promise::new();
        let (future, abort) = abortable(future);
        let task = async move {
            let outcome = future.await.ok();
            if outcome.is_none() {
                log::debug!("Task '{}' aborted before completion", name);
            }
            // A dropped promise just means nobody is listening anymore
            sender.send(outcome);
        };
        (promise, abort, task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn completed_task_yields_its_output() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let spawner = TaskSpawner::new(rt.handle().clone());

        let task = spawner.spawn("answer", async { 42 });
        assert_eq!(task.block_until_ready(), Some(42));
    }

    #[test]
    fn cancelled_task_resolves_to_none() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let spawner = TaskSpawner::new(rt.handle().clone());

        let task = spawner.spawn("slow", async {
            tokio::time::sleep(Duration::from_secs(30)).await;
            "too late"
        });
        task.cancel();
        assert_eq!(task.block_until_ready(), None);
    }

    #[test]
    fn try_take_returns_handle_while_running() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let spawner = TaskSpawner::new(rt.handle().clone());

        let task = spawner.spawn("slow", async {
            tokio::time::sleep(Duration::from_secs(30)).await;
        });
        let task = match task.try_take() {
            Ok(_) => panic!("task should still be running"),
            Err(task) => task,
        };
        assert_eq!(task.name(), "slow");
        task.cancel();
        assert_eq!(task.block_until_ready(), None);
    }
}
