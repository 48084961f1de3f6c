use crate::country::Dataset;
use crate::error::Result;
use log::error;

#[cfg(feature = "fetch")]
use crate::error::OlympicError;
#[cfg(feature = "fetch")]
use log::info;
#[cfg(feature = "fetch")]
use reqwest::{Client, StatusCode};

/// Handle returned by [`DatasetStore::subscribe`]; pass it back to
/// [`DatasetStore::unsubscribe`] during view teardown.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(Option<&Dataset>)>;

/// Single-writer, replay-1 broadcast of the last successfully loaded dataset.
///
/// The store starts at `None`, moves to `Some(dataset)` on a successful load,
/// and back to `None` when a load fails (there is no retry or merge logic).
/// Every subscriber is handed the current value immediately on subscribing
/// and again on every subsequent publish, in registration order. All of this
/// runs on a single flow of control; there is no locking.
#[derive(Default)]
pub struct DatasetStore {
    current: Option<Dataset>,
    subscribers: Vec<(u64, Subscriber)>,
    next_id: u64,
}

impl DatasetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot read of the latest value.
    pub fn current(&self) -> Option<&Dataset> {
        self.current.as_ref()
    }

    /// Register a callback. It fires once right away with the current value
    /// (replay), then on every publish until unsubscribed.
    pub fn subscribe(
        &mut self,
        mut callback: impl FnMut(Option<&Dataset>) + 'static,
    ) -> SubscriptionId {
        callback(self.current.as_ref());
        let id = self.next_id;
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        SubscriptionId(id)
    }

    /// Remove a subscriber; it will see no further publishes.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.retain(|(sub_id, _)| *sub_id != id.0);
    }

    /// Store a new value and notify every subscriber, in registration order.
    pub fn publish(&mut self, dataset: Option<Dataset>) {
        self.current = dataset;
        let current = self.current.as_ref();
        for (_, callback) in self.subscribers.iter_mut() {
            callback(current);
        }
    }

    /// Load the dataset from a JSON document (the embedded fixture or a local
    /// file). A parse failure publishes `None` so subscribers fall back to
    /// their empty rendering.
    pub fn load_from_str(&mut self, json: &str) -> Result<()> {
        match serde_json::from_str::<Dataset>(json) {
            Ok(dataset) => {
                self.publish(Some(dataset));
                Ok(())
            }
            Err(e) => {
                error!("Error loading Olympic data: {e}");
                self.publish(None);
                Err(e.into())
            }
        }
    }

    /// One-shot fetch of the dataset over HTTP, performed once at startup.
    /// Any failure (transport, non-200 status, JSON decode) is logged,
    /// publishes `None`, and is returned to the caller; there is no retry.
    #[cfg(feature = "fetch")]
    pub async fn load_initial_data(&mut self, client: &Client, url: &str) -> Result<()> {
        info!("loading Olympic dataset from {url}");
        let response = match client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                error!("Error loading Olympic data: {e}");
                self.publish(None);
                return Err(e.into());
            }
        };
        if response.status() != StatusCode::OK {
            let status = response.status().as_u16();
            error!("Error loading Olympic data: HTTP {status}");
            self.publish(None);
            return Err(OlympicError::HttpStatus(status));
        }
        match response.text().await {
            Ok(body) => self.load_from_str(&body),
            Err(e) => {
                error!("Error loading Olympic data: {e}");
                self.publish(None);
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DatasetStore;
    use crate::country::{Country, JSON_OBJECT};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn one_country() -> Vec<Country> {
        vec![Country {
            id: 1,
            country: "France".to_string(),
            participations: Vec::new(),
        }]
    }

    #[test]
    fn test_starts_empty() {
        let store = DatasetStore::new();
        assert!(store.current().is_none());
    }

    #[test]
    fn test_subscribe_replays_current_value() {
        let mut store = DatasetStore::new();
        store.publish(Some(one_country()));

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |dataset| {
            sink.borrow_mut().push(dataset.map(|d| d.len()));
        });

        // A late subscriber receives the latest value immediately.
        assert_eq!(*seen.borrow(), vec![Some(1)]);
    }

    #[test]
    fn test_publishes_in_order_to_all_subscribers() {
        let mut store = DatasetStore::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        store.subscribe(move |dataset| {
            sink.borrow_mut().push(("a", dataset.is_some()));
        });
        let sink = Rc::clone(&seen);
        store.subscribe(move |dataset| {
            sink.borrow_mut().push(("b", dataset.is_some()));
        });

        store.publish(Some(one_country()));
        store.publish(None);

        assert_eq!(
            *seen.borrow(),
            vec![
                ("a", false),
                ("b", false),
                ("a", true),
                ("b", true),
                ("a", false),
                ("b", false),
            ]
        );
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let mut store = DatasetStore::new();
        let count = Rc::new(RefCell::new(0usize));

        let sink = Rc::clone(&count);
        let id = store.subscribe(move |_| {
            *sink.borrow_mut() += 1;
        });
        assert_eq!(*count.borrow(), 1); // replay

        store.unsubscribe(id);
        store.publish(Some(one_country()));
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_load_from_str_success() {
        let mut store = DatasetStore::new();
        store.load_from_str(JSON_OBJECT).unwrap();
        assert_eq!(store.current().unwrap().len(), 5);
    }

    #[test]
    fn test_load_failure_resets_to_none() {
        let mut store = DatasetStore::new();
        store.load_from_str(JSON_OBJECT).unwrap();
        assert!(store.current().is_some());

        // A failed load does not keep the stale value around.
        assert!(store.load_from_str("not json").is_err());
        assert!(store.current().is_none());
    }
}
