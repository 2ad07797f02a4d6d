//! Interaction controller for the order lookup page
//!
//! Owns the UI state and is the only thing that publishes to the result
//! panel. It is independent of Leptos: the page injects a [`ResultSink`]
//! and an [`OrderLookup`] client, tests inject fakes.

use super::model::{LookupOutcome, OrderLookup};
use crate::domain::a001_order::display::{render, OrderDisplay};
use contracts::domain::a001_order::OrderRecord;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Identifier used by the "Load sample order" action
pub const SAMPLE_ORDER_UID: &str = "b563feb7b2b84b6test";

pub const MSG_EMPTY_ID: &str = "Please enter an Order ID";
pub const MSG_NOT_FOUND: &str = "Order not found";
pub const MSG_SERVER_ERROR: &str = "Server error";

#[derive(Debug, Clone, PartialEq)]
pub enum UiState {
    Idle,
    Loading,
    Displaying(OrderRecord),
    Failed(String),
}

/// What the result panel shows; the published render of [`UiState`]
#[derive(Debug, Clone, PartialEq)]
pub enum ResultPanel {
    Hidden,
    Loading,
    Error(String),
    Order(OrderDisplay),
}

impl ResultPanel {
    fn of(state: &UiState) -> Self {
        match state {
            UiState::Idle => ResultPanel::Hidden,
            UiState::Loading => ResultPanel::Loading,
            UiState::Displaying(order) => ResultPanel::Order(render(order)),
            UiState::Failed(message) => ResultPanel::Error(message.clone()),
        }
    }
}

/// Output surface of the controller
pub trait ResultSink {
    fn publish(&self, panel: ResultPanel);
    /// Replace the identifier input value
    fn set_input(&self, value: &str);
    fn scroll_into_view(&self);
}

struct Inner<L, S> {
    lookup: L,
    sink: S,
    state: RefCell<UiState>,
    /// Advanced by every submission; a result is applied only while its
    /// generation is current.
    generation: Cell<u64>,
}

pub struct OrderLookupController<L, S> {
    inner: Rc<Inner<L, S>>,
}

impl<L, S> Clone for OrderLookupController<L, S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<L: OrderLookup, S: ResultSink> OrderLookupController<L, S> {
    pub fn new(lookup: L, sink: S) -> Self {
        Self {
            inner: Rc::new(Inner {
                lookup,
                sink,
                state: RefCell::new(UiState::Idle),
                generation: Cell::new(0),
            }),
        }
    }

    pub fn state(&self) -> UiState {
        self.inner.state.borrow().clone()
    }

    pub fn sink(&self) -> &S {
        &self.inner.sink
    }

    fn transition(&self, next: UiState) {
        let panel = ResultPanel::of(&next);
        let displaying = matches!(next, UiState::Displaying(_));
        log::debug!("order lookup state -> {:?}", StateName(&next));
        *self.inner.state.borrow_mut() = next;

        self.inner.sink.publish(panel);
        if displaying {
            self.inner.sink.scroll_into_view();
        }
    }

    fn next_generation(&self) -> u64 {
        let generation = self.inner.generation.get() + 1;
        self.inner.generation.set(generation);
        generation
    }

    /// Form submission. Blank input fails without a lookup.
    pub async fn submit(&self, raw_order_uid: &str) {
        let generation = self.next_generation();
        let order_uid = raw_order_uid.trim();
        if order_uid.is_empty() {
            self.transition(UiState::Failed(MSG_EMPTY_ID.to_string()));
            return;
        }

        self.transition(UiState::Loading);
        let outcome = self.inner.lookup.lookup(order_uid).await;

        if generation != self.inner.generation.get() {
            log::debug!("Dropping stale lookup result for {}", order_uid);
            return;
        }

        match outcome {
            LookupOutcome::Found(order) => self.transition(UiState::Displaying(order)),
            LookupOutcome::NotFound => {
                log::info!("Order {} not found", order_uid);
                self.transition(UiState::Failed(MSG_NOT_FOUND.to_string()));
            }
            LookupOutcome::ServiceError(e) => {
                log::warn!("Lookup of order {} failed: {}", order_uid, e);
                self.transition(UiState::Failed(MSG_SERVER_ERROR.to_string()));
            }
        }
    }

    /// "Load sample order": fill the input with the sample id and submit it.
    pub async fn load_sample(&self) {
        self.inner.sink.set_input(SAMPLE_ORDER_UID);
        self.submit(SAMPLE_ORDER_UID).await;
    }

    /// The user is typing a new identifier: stale results are hidden.
    pub fn input_edited(&self) {
        let stale = matches!(
            *self.inner.state.borrow(),
            UiState::Displaying(_) | UiState::Failed(_)
        );
        if stale {
            self.transition(UiState::Idle);
        }
    }

    /// Startup with an optional `?id=` value: prefill the input and submit.
    pub async fn page_load(&self, query_order_uid: Option<&str>) {
        match query_order_uid {
            Some(order_uid) if !order_uid.is_empty() => {
                self.inner.sink.set_input(order_uid);
                self.submit(order_uid).await;
            }
            _ => {}
        }
    }
}

/// Keeps whole records out of the debug log
struct StateName<'a>(&'a UiState);

impl std::fmt::Debug for StateName<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            UiState::Idle => f.write_str("Idle"),
            UiState::Loading => f.write_str("Loading"),
            UiState::Displaying(order) => write!(f, "Displaying({})", order.order_uid),
            UiState::Failed(message) => write!(f, "Failed({:?})", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_order::fixtures::{minimal_order, sample_order};
    use crate::domain::a001_order::ui::lookup::model::LookupError;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use tokio::sync::oneshot;

    /// Answers from a fixed table and records every call
    #[derive(Default)]
    struct FakeLookup {
        answers: HashMap<String, LookupOutcome>,
        calls: RefCell<Vec<String>>,
    }

    impl FakeLookup {
        fn with(mut self, order_uid: &str, outcome: LookupOutcome) -> Self {
            self.answers.insert(order_uid.to_string(), outcome);
            self
        }
    }

    #[async_trait(?Send)]
    impl OrderLookup for FakeLookup {
        async fn lookup(&self, order_uid: &str) -> LookupOutcome {
            self.calls.borrow_mut().push(order_uid.to_string());
            self.answers
                .get(order_uid)
                .cloned()
                .unwrap_or(LookupOutcome::NotFound)
        }
    }

    /// Lookup whose answers are released by the test, to interleave requests
    #[derive(Default)]
    struct GatedLookup {
        gates: RefCell<HashMap<String, oneshot::Receiver<LookupOutcome>>>,
    }

    impl GatedLookup {
        fn gate(&self, order_uid: &str) -> oneshot::Sender<LookupOutcome> {
            let (tx, rx) = oneshot::channel();
            self.gates.borrow_mut().insert(order_uid.to_string(), rx);
            tx
        }
    }

    #[async_trait(?Send)]
    impl OrderLookup for GatedLookup {
        async fn lookup(&self, order_uid: &str) -> LookupOutcome {
            let rx = self.gates.borrow_mut().remove(order_uid);
            match rx {
                Some(rx) => rx.await.unwrap_or(LookupOutcome::NotFound),
                None => LookupOutcome::NotFound,
            }
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        panels: RefCell<Vec<ResultPanel>>,
        input: RefCell<String>,
        scrolls: Cell<usize>,
    }

    impl RecordingSink {
        fn last(&self) -> ResultPanel {
            self.panels.borrow().last().cloned().unwrap()
        }
    }

    impl ResultSink for RecordingSink {
        fn publish(&self, panel: ResultPanel) {
            self.panels.borrow_mut().push(panel);
        }
        fn set_input(&self, value: &str) {
            *self.input.borrow_mut() = value.to_string();
        }
        fn scroll_into_view(&self) {
            self.scrolls.set(self.scrolls.get() + 1);
        }
    }

    fn controller(lookup: FakeLookup) -> OrderLookupController<FakeLookup, RecordingSink> {
        OrderLookupController::new(lookup, RecordingSink::default())
    }

    fn calls(c: &OrderLookupController<FakeLookup, RecordingSink>) -> Vec<String> {
        c.inner.lookup.calls.borrow().clone()
    }

    #[tokio::test]
    async fn test_submit_found_displays_order() {
        let c = controller(
            FakeLookup::default().with(SAMPLE_ORDER_UID, LookupOutcome::Found(sample_order())),
        );
        c.submit(SAMPLE_ORDER_UID).await;

        assert_eq!(calls(&c), vec![SAMPLE_ORDER_UID]);
        assert_eq!(c.state(), UiState::Displaying(sample_order()));

        let panels = c.sink().panels.borrow().clone();
        assert_eq!(panels.len(), 2);
        assert_eq!(panels[0], ResultPanel::Loading);
        match &panels[1] {
            ResultPanel::Order(display) => {
                assert_eq!(display.header.title, "Order #b563feb7b2b84b6test")
            }
            other => panic!("expected order panel, got {:?}", other),
        }
        assert_eq!(c.sink().scrolls.get(), 1);
    }

    #[tokio::test]
    async fn test_submit_trims_identifier() {
        let c = controller(FakeLookup::default());
        c.submit("  ABC123\t").await;
        assert_eq!(calls(&c), vec!["ABC123"]);
    }

    #[tokio::test]
    async fn test_blank_submission_never_looks_up() {
        for raw in ["", "   ", "\n\t "] {
            let c = controller(FakeLookup::default());
            c.submit(raw).await;

            assert!(calls(&c).is_empty());
            assert_eq!(c.state(), UiState::Failed(MSG_EMPTY_ID.to_string()));
            assert_eq!(*c.sink().panels.borrow(), vec![ResultPanel::Error(MSG_EMPTY_ID.to_string())]);
            assert_eq!(c.sink().scrolls.get(), 0);
        }
    }

    #[tokio::test]
    async fn test_not_found_message() {
        let c = controller(FakeLookup::default().with("XYZ", LookupOutcome::NotFound));
        c.submit("XYZ").await;

        assert_eq!(c.sink().last(), ResultPanel::Error("Order not found".to_string()));
        assert_eq!(c.sink().scrolls.get(), 0);
    }

    #[tokio::test]
    async fn test_service_errors_share_generic_message() {
        let c = controller(
            FakeLookup::default()
                .with("A", LookupOutcome::ServiceError(LookupError::Status(500)))
                .with("B", LookupOutcome::ServiceError(LookupError::Decode("eof".into())))
                .with("C", LookupOutcome::ServiceError(LookupError::Transport("offline".into()))),
        );
        for id in ["A", "B", "C"] {
            c.submit(id).await;
            assert_eq!(c.sink().last(), ResultPanel::Error("Server error".to_string()));
        }
    }

    #[tokio::test]
    async fn test_recovers_after_error() {
        let c = controller(
            FakeLookup::default()
                .with("BAD", LookupOutcome::ServiceError(LookupError::Status(503)))
                .with(SAMPLE_ORDER_UID, LookupOutcome::Found(sample_order())),
        );
        c.submit("BAD").await;
        c.submit(SAMPLE_ORDER_UID).await;
        assert!(matches!(c.state(), UiState::Displaying(_)));
    }

    #[tokio::test]
    async fn test_load_sample() {
        let c = controller(
            FakeLookup::default().with(SAMPLE_ORDER_UID, LookupOutcome::Found(sample_order())),
        );
        c.load_sample().await;

        assert_eq!(calls(&c), vec!["b563feb7b2b84b6test"]);
        assert_eq!(*c.sink().input.borrow(), "b563feb7b2b84b6test");
        assert!(matches!(c.state(), UiState::Displaying(_)));
    }

    #[tokio::test]
    async fn test_page_load_with_id() {
        let c = controller(FakeLookup::default().with("ABC123", LookupOutcome::Found(minimal_order("ABC123"))));
        c.page_load(Some("ABC123")).await;

        assert_eq!(*c.sink().input.borrow(), "ABC123");
        assert_eq!(calls(&c), vec!["ABC123"]);
        assert_eq!(c.state(), UiState::Displaying(minimal_order("ABC123")));
    }

    #[tokio::test]
    async fn test_page_load_without_id() {
        let c = controller(FakeLookup::default());
        c.page_load(None).await;
        c.page_load(Some("")).await;

        assert!(calls(&c).is_empty());
        assert_eq!(c.state(), UiState::Idle);
        assert!(c.sink().panels.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_input_edit_hides_results() {
        let c = controller(
            FakeLookup::default().with(SAMPLE_ORDER_UID, LookupOutcome::Found(sample_order())),
        );

        c.input_edited();
        assert!(c.sink().panels.borrow().is_empty(), "idle edit publishes nothing");

        c.submit(SAMPLE_ORDER_UID).await;
        c.input_edited();
        assert_eq!(c.state(), UiState::Idle);
        assert_eq!(c.sink().last(), ResultPanel::Hidden);

        c.submit(" ").await;
        c.input_edited();
        assert_eq!(c.state(), UiState::Idle);
    }

    #[tokio::test]
    async fn test_input_edit_keeps_loading() {
        let lookup = GatedLookup::default();
        let release = lookup.gate("ABC");
        let c = OrderLookupController::new(lookup, RecordingSink::default());

        let pending = c.submit("ABC");
        let driver = async {
            tokio::task::yield_now().await;
            c.input_edited();
            assert_eq!(c.state(), UiState::Loading);
            let _ = release.send(LookupOutcome::Found(minimal_order("ABC")));
        };
        tokio::join!(pending, driver);

        assert_eq!(c.state(), UiState::Displaying(minimal_order("ABC")));
    }

    #[tokio::test]
    async fn test_stale_response_is_dropped() {
        let lookup = GatedLookup::default();
        let first = lookup.gate("FIRST");
        let second = lookup.gate("SECOND");
        let c = OrderLookupController::new(lookup, RecordingSink::default());

        let first_submit = c.submit("FIRST");
        let second_submit = c.submit("SECOND");
        let driver = async {
            tokio::task::yield_now().await;
            let _ = second.send(LookupOutcome::Found(minimal_order("SECOND")));
            tokio::task::yield_now().await;
            let _ = first.send(LookupOutcome::Found(minimal_order("FIRST")));
        };
        tokio::join!(first_submit, second_submit, driver);

        assert_eq!(c.state(), UiState::Displaying(minimal_order("SECOND")));
        let shown: Vec<String> = c
            .sink()
            .panels
            .borrow()
            .iter()
            .filter_map(|p| match p {
                ResultPanel::Order(d) => Some(d.header.order_uid.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(shown, vec!["SECOND"]);
    }
}
