use std::time::Duration;

use tracing::{error, info};

use crate::client::CompletionProvider;
use crate::clipboard::ClipboardReader;
use crate::error::ClipboardError;

/// Default polling interval, measured from the end of the previous iteration.
pub const POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Poll loop driver. Remembers only the single last clipboard value, so a
/// value is deduplicated against its immediate predecessor and nothing else.
pub struct Watcher<C, P> {
    clipboard: C,
    provider: P,
    last_text: String
}

impl<C, P> Watcher<C, P>
where
    C: ClipboardReader,
    P: CompletionProvider,
{

    pub fn new(clipboard: C, provider: P) -> Self {
        Watcher {
            clipboard,
            provider,
            last_text: String::new()
        }
    }

    /// One poll iteration. A clipboard error propagates to the caller and
    /// ends the loop; a completion error is logged and the loop moves on.
    pub async fn tick(&mut self) -> Result<(), ClipboardError> {

        let text = self.clipboard.read_text()?;

        if text == self.last_text {
            return Ok(());
        }

        println!("New clipboard text detected: {text}");

        match self.provider.complete(&text).await {
            Ok(answer) => println!("Answer: {answer}"),
            Err(e) => error!(error = %e, "completion failed, skipping this clipboard value")
        }

        // advance even after a failure so the same input is not retried
        self.last_text = text;

        Ok(())

    }

    pub async fn run(&mut self, interval: Duration) -> Result<(), ClipboardError> {

        info!(?interval, "clipboard watcher started");

        loop {
            self.tick().await?;
            tokio::time::sleep(interval).await;
        }

    }

}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::error::CompletionError;
    use async_trait::async_trait;
    use reqwest::StatusCode;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    struct ScriptedClipboard {
        reads: VecDeque<Result<String, ClipboardError>>
    }

    impl ScriptedClipboard {
        fn with_texts(texts: &[&str]) -> Self {
            ScriptedClipboard {
                reads: texts.iter().map(|t| Ok(t.to_string())).collect()
            }
        }
    }

    impl ClipboardReader for ScriptedClipboard {
        fn read_text(&mut self) -> Result<String, ClipboardError> {
            self.reads.pop_front().expect("clipboard script exhausted")
        }
    }

    struct RecordingProvider {
        calls: Arc<Mutex<Vec<String>>>,
        fail_on: Option<String>
    }

    impl RecordingProvider {
        fn new() -> (Self, Arc<Mutex<Vec<String>>>) {
            let calls = Arc::new(Mutex::new(Vec::new()));
            let provider = RecordingProvider { calls: Arc::clone(&calls), fail_on: None };
            (provider, calls)
        }

        fn failing_on(prompt: &str) -> (Self, Arc<Mutex<Vec<String>>>) {
            let (mut provider, calls) = Self::new();
            provider.fail_on = Some(prompt.to_string());
            (provider, calls)
        }
    }

    #[async_trait]
    impl CompletionProvider for RecordingProvider {
        async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
            self.calls.lock().unwrap().push(prompt.to_string());
            if self.fail_on.as_deref() == Some(prompt) {
                return Err(CompletionError::Api {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    body: "boom".to_string()
                });
            }
            Ok(format!("answer for {prompt}"))
        }
    }

    #[tokio::test]
    async fn test_completion_fires_only_on_changed_value() {

        // A, A, B, A: the repeated A is suppressed, the A after B is not
        let clipboard = ScriptedClipboard::with_texts(&["A", "A", "B", "A"]);
        let (provider, calls) = RecordingProvider::new();
        let mut watcher = Watcher::new(clipboard, provider);

        for _ in 0..4 {
            watcher.tick().await.expect("tick should not fail");
        }

        assert_eq!(*calls.lock().unwrap(), vec!["A", "B", "A"]);

    }

    #[tokio::test]
    async fn test_initial_empty_clipboard_triggers_nothing() {

        let clipboard = ScriptedClipboard::with_texts(&["", "A"]);
        let (provider, calls) = RecordingProvider::new();
        let mut watcher = Watcher::new(clipboard, provider);

        watcher.tick().await.expect("tick should not fail");
        assert!(calls.lock().unwrap().is_empty());

        watcher.tick().await.expect("tick should not fail");
        assert_eq!(*calls.lock().unwrap(), vec!["A"]);

    }

    #[tokio::test]
    async fn test_failed_completion_still_advances_last_text() {

        let clipboard = ScriptedClipboard::with_texts(&["X", "X"]);
        let (provider, calls) = RecordingProvider::failing_on("X");
        let mut watcher = Watcher::new(clipboard, provider);

        // the failure is non-fatal
        watcher.tick().await.expect("completion failure must not kill the loop");
        // the repeat is suppressed even though the first call failed
        watcher.tick().await.expect("tick should not fail");

        assert_eq!(*calls.lock().unwrap(), vec!["X"]);

    }

    #[tokio::test]
    async fn test_clipboard_error_propagates() {

        let mut reads: VecDeque<Result<String, ClipboardError>> = VecDeque::new();
        reads.push_back(Err(ClipboardError(arboard::Error::ContentNotAvailable)));
        let clipboard = ScriptedClipboard { reads };

        let (provider, calls) = RecordingProvider::new();
        let mut watcher = Watcher::new(clipboard, provider);

        watcher.tick().await.expect_err("clipboard failure must propagate");
        assert!(calls.lock().unwrap().is_empty());

    }

}
