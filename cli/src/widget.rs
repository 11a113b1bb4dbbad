use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, error};

use askbox_core::client::QueryClient;
use askbox_core::errors::AskResult;
use askbox_core::types::QueryResponse;

/// Outcome of folding one reply into the widget state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyOutcome {
    /// The displayed response was replaced with the reply text.
    Updated,
    /// The request failed; the displayed response is unchanged.
    Failed,
}

/// State of the chat widget: the text currently in the input box and the
/// last response received from the backend.
///
/// Submitting never blocks further input. Every submit dispatches an
/// independent request, and replies are folded back in arrival order, so
/// when requests overlap the reply that resolves last determines the
/// displayed response regardless of submit order.
pub struct ChatWidget<C> {
    client: Arc<C>,
    input_text: String,
    last_response: String,
    in_flight: usize,
    replies_tx: mpsc::UnboundedSender<AskResult<QueryResponse>>,
    replies_rx: mpsc::UnboundedReceiver<AskResult<QueryResponse>>,
}

impl<C: QueryClient + 'static> ChatWidget<C> {
    pub fn new(client: Arc<C>) -> Self {
        let (replies_tx, replies_rx) = mpsc::unbounded_channel();
        Self {
            client,
            input_text: String::new(),
            last_response: String::new(),
            in_flight: 0,
            replies_tx,
            replies_rx,
        }
    }

    /// Replaces the input text, as a text box would on each keystroke.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input_text = text.into();
    }

    /// Current contents of the input box.
    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    /// Contents of the display region: the most recent successful response,
    /// or the empty string before the first one arrives.
    pub fn last_response(&self) -> &str {
        &self.last_response
    }

    /// Number of requests dispatched but not yet folded back.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Dispatches the current input as an independent request, leaving the
    /// input box untouched. There is no cancellation, so submitting again
    /// while a request is pending simply races the two requests.
    pub fn submit(&mut self) {
        let query = self.input_text.clone();
        let client = Arc::clone(&self.client);
        let replies = self.replies_tx.clone();
        self.in_flight += 1;
        debug!("Dispatching query: {}", query);

        tokio::spawn(async move {
            let result = client.submit(Some(query)).await;
            // The widget may already be gone when the reply lands.
            let _ = replies.send(result);
        });
    }

    /// Waits for the next reply and folds it into the widget state. Returns
    /// `None` right away when nothing is in flight.
    ///
    /// A successful reply replaces the displayed response; a failed one is
    /// logged and leaves the display unchanged.
    pub async fn next_reply(&mut self) -> Option<ReplyOutcome> {
        if self.in_flight == 0 {
            return None;
        }
        let result = self.replies_rx.recv().await?;
        self.in_flight -= 1;

        match result {
            Ok(reply) => {
                self.last_response = reply.response;
                Some(ReplyOutcome::Updated)
            }
            Err(e) => {
                error!("Query failed: {}", e);
                Some(ReplyOutcome::Failed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use askbox_core::errors::AskError;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use tokio::sync::oneshot;

    /// Mock client whose replies are released by the test. Each expected
    /// query gets its own gate, so the test controls arrival order exactly.
    struct GatedClient {
        gates: Mutex<HashMap<String, oneshot::Receiver<AskResult<QueryResponse>>>>,
        seen: Mutex<Vec<Option<String>>>,
    }

    impl GatedClient {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                gates: Mutex::new(HashMap::new()),
                seen: Mutex::new(Vec::new()),
            })
        }

        fn gate(&self, query: &str) -> oneshot::Sender<AskResult<QueryResponse>> {
            let (tx, rx) = oneshot::channel();
            self.gates.lock().unwrap().insert(query.to_string(), rx);
            tx
        }
    }

    #[async_trait]
    impl QueryClient for GatedClient {
        async fn submit(&self, query: Option<String>) -> AskResult<QueryResponse> {
            self.seen.lock().unwrap().push(query.clone());
            let gate = self
                .gates
                .lock()
                .unwrap()
                .remove(query.as_deref().unwrap_or_default())
                .expect("no gate registered for query");
            gate.await.expect("gate dropped without a reply")
        }
    }

    fn ok(text: &str) -> AskResult<QueryResponse> {
        Ok(QueryResponse {
            response: text.to_string(),
        })
    }

    #[tokio::test]
    async fn starts_empty_and_keeps_input_verbatim() {
        let mut widget = ChatWidget::new(GatedClient::new());
        assert_eq!(widget.last_response(), "");
        widget.set_input("  what is rust?  ");
        assert_eq!(widget.input_text(), "  what is rust?  ");
    }

    #[tokio::test]
    async fn successful_reply_updates_the_display() {
        let client = GatedClient::new();
        let gate = client.gate("hello");
        let mut widget = ChatWidget::new(Arc::clone(&client));

        widget.set_input("hello");
        widget.submit();
        gate.send(ok("world")).unwrap();

        assert_eq!(widget.next_reply().await, Some(ReplyOutcome::Updated));
        assert_eq!(widget.last_response(), "world");
        // Submitting does not clear the input box.
        assert_eq!(widget.input_text(), "hello");
        assert_eq!(
            client.seen.lock().unwrap().as_slice(),
            &[Some("hello".to_string())]
        );
    }

    #[tokio::test]
    async fn failed_reply_leaves_the_display_unchanged() {
        let client = GatedClient::new();
        let first = client.gate("first");
        let second = client.gate("second");
        let mut widget = ChatWidget::new(client);

        widget.set_input("first");
        widget.submit();
        first.send(ok("stored")).unwrap();
        assert_eq!(widget.next_reply().await, Some(ReplyOutcome::Updated));

        widget.set_input("second");
        widget.submit();
        second
            .send(Err(AskError::ConfigError("backend unreachable".to_string())))
            .unwrap();
        assert_eq!(widget.next_reply().await, Some(ReplyOutcome::Failed));
        assert_eq!(widget.last_response(), "stored");
    }

    #[tokio::test]
    async fn overlapping_replies_apply_in_arrival_order() {
        let client = GatedClient::new();
        let first = client.gate("first");
        let second = client.gate("second");
        let mut widget = ChatWidget::new(Arc::clone(&client));

        widget.set_input("first");
        widget.submit();
        widget.set_input("second");
        widget.submit();
        assert_eq!(widget.in_flight(), 2);

        // The second request resolves before the first one.
        second.send(ok("from-second")).unwrap();
        assert_eq!(widget.next_reply().await, Some(ReplyOutcome::Updated));
        assert_eq!(widget.last_response(), "from-second");

        // The first request resolves last and wins the display.
        first.send(ok("from-first")).unwrap();
        assert_eq!(widget.next_reply().await, Some(ReplyOutcome::Updated));
        assert_eq!(widget.last_response(), "from-first");
        assert_eq!(widget.in_flight(), 0);
    }

    #[tokio::test]
    async fn empty_input_is_submitted_as_is() {
        let client = GatedClient::new();
        let gate = client.gate("");
        let mut widget = ChatWidget::new(Arc::clone(&client));

        widget.submit();
        gate.send(ok("blank reply")).unwrap();

        assert_eq!(widget.next_reply().await, Some(ReplyOutcome::Updated));
        assert_eq!(
            client.seen.lock().unwrap().as_slice(),
            &[Some(String::new())]
        );
    }

    #[tokio::test]
    async fn next_reply_is_none_when_nothing_is_in_flight() {
        let mut widget = ChatWidget::new(GatedClient::new());
        assert_eq!(widget.next_reply().await, None);
    }
}
