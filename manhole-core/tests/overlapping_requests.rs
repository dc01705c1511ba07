//! Two location requests in flight at once: the later completion wins.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use manhole_core::fake::FakePhoto;
use manhole_core::location::{LocationAcquirer, PositionFailure, PositionOptions, Positioning};
use manhole_core::{Coordinate, Fix, ReportForm};
use tokio::sync::oneshot;
use tokio::task::{self, LocalSet};

type Reply = Result<Fix, PositionFailure>;

/// Positioning whose replies are released by the test, one per request.
#[derive(Clone)]
struct DeferredPositioning {
    pending: Rc<RefCell<VecDeque<oneshot::Receiver<Reply>>>>,
    started: Rc<Cell<usize>>,
}

impl DeferredPositioning {
    fn new(requests: usize) -> (Self, Vec<oneshot::Sender<Reply>>) {
        let mut senders = Vec::new();
        let mut receivers = VecDeque::new();
        for _ in 0..requests {
            let (tx, rx) = oneshot::channel();
            senders.push(tx);
            receivers.push_back(rx);
        }
        let positioning = Self {
            pending: Rc::new(RefCell::new(receivers)),
            started: Rc::new(Cell::new(0)),
        };
        (positioning, senders)
    }
}

impl Positioning for DeferredPositioning {
    fn is_supported(&self) -> bool {
        true
    }

    async fn current_position(&self, _options: PositionOptions) -> Reply {
        let rx = self.pending.borrow_mut().pop_front();
        self.started.set(self.started.get() + 1);
        match rx {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(PositionFailure::Other("reply dropped".to_string()))),
            None => Err(PositionFailure::Other("unexpected request".to_string())),
        }
    }
}

fn fix(latitude: f64, longitude: f64) -> Fix {
    Fix {
        latitude,
        longitude,
        accuracy: None,
    }
}

async fn request_location(
    form: Rc<RefCell<ReportForm<FakePhoto>>>,
    acquirer: LocationAcquirer<DeferredPositioning>,
) {
    form.borrow_mut().begin_location_request();
    let result = acquirer.acquire().await;
    form.borrow_mut().finish_location_request(result);
}

async fn wait_for_requests(positioning: &DeferredPositioning, count: usize) {
    while positioning.started.get() < count {
        task::yield_now().await;
    }
}

#[tokio::test]
async fn test_later_completion_overwrites_earlier_request() {
    let (positioning, mut senders) = DeferredPositioning::new(2);
    let second = senders.pop().unwrap();
    let first = senders.pop().unwrap();
    let form = Rc::new(RefCell::new(ReportForm::<FakePhoto>::new()));
    let acquirer = LocationAcquirer::new(positioning.clone());

    LocalSet::new()
        .run_until(async {
            let first_request = task::spawn_local(request_location(form.clone(), acquirer.clone()));
            let second_request = task::spawn_local(request_location(form.clone(), acquirer.clone()));
            wait_for_requests(&positioning, 2).await;
            assert!(form.borrow().is_loading());

            // The second request answers first.
            second.send(Ok(fix(2.0, 20.0))).unwrap();
            second_request.await.unwrap();
            assert_eq!(form.borrow().coordinate(), Some(Coordinate::new(2.0, 20.0)));

            first.send(Ok(fix(1.0, 10.0))).unwrap();
            first_request.await.unwrap();
        })
        .await;

    let form = form.borrow();
    assert_eq!(form.coordinate(), Some(Coordinate::new(1.0, 10.0)));
    assert!(!form.is_loading());
    assert!(form.error().is_none());
}

#[tokio::test]
async fn test_late_failure_replaces_error_but_keeps_coordinate() {
    let (positioning, mut senders) = DeferredPositioning::new(2);
    let second = senders.pop().unwrap();
    let first = senders.pop().unwrap();
    let form = Rc::new(RefCell::new(ReportForm::<FakePhoto>::new()));
    let acquirer = LocationAcquirer::new(positioning.clone());

    LocalSet::new()
        .run_until(async {
            let first_request = task::spawn_local(request_location(form.clone(), acquirer.clone()));
            let second_request = task::spawn_local(request_location(form.clone(), acquirer.clone()));
            wait_for_requests(&positioning, 2).await;

            second.send(Ok(fix(5.0, 50.0))).unwrap();
            second_request.await.unwrap();
            first.send(Err(PositionFailure::Timeout)).unwrap();
            first_request.await.unwrap();
        })
        .await;

    let form = form.borrow();
    assert_eq!(form.coordinate(), Some(Coordinate::new(5.0, 50.0)));
    assert!(form.error().unwrap().to_string().contains("timed out"));
    assert!(!form.is_loading());
}
