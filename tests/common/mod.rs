#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, TimeZone, Utc};
use tracker_core::{
    core::Clock, Category, TransactionRecord, TransactionStore,
};

/// Test clock that only moves when told to. Clones share the same instant.
#[derive(Clone)]
pub struct ManualClock {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl ManualClock {
    pub fn new() -> Self {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        Self {
            now: Arc::new(Mutex::new(start)),
        }
    }

    pub fn advance_ms(&self, millis: i64) {
        let mut now = self.now.lock().expect("lock clock");
        *now = *now + Duration::milliseconds(millis);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().expect("lock clock")
    }
}

/// Store `[A(income,100), B(expense,40,Food), C(expense,10,Food)]`, A at the head.
pub fn three_record_store() -> (TransactionStore, [TransactionRecord; 3]) {
    let a = TransactionRecord::income("A", 100.0);
    let b = TransactionRecord::expense("B", 40.0, Category::Food);
    let c = TransactionRecord::expense("C", 10.0, Category::Food);
    let store = TransactionStore::from_records(vec![a.clone(), b.clone(), c.clone()]);
    (store, [a, b, c])
}
