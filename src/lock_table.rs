use dashmap::DashMap;
use parking_lot::{Mutex, MutexGuard};
use sled::IVec;
use std::sync::Arc;

/// Exclusive row locks, keyed by record key. Entries exist only while
/// somebody holds a handle to them.
#[derive(Default)]
pub struct Table {
    rows: DashMap<IVec, Arc<Mutex<()>>>,
}

pub struct RowLock<'a> {
    key: IVec,
    lock: Arc<Mutex<()>>,
    table: &'a Table,
}

impl<'a> RowLock<'a> {
    /// Blocks until no other holder of this row is inside `for_update`.
    pub fn for_update(&self) -> MutexGuard<'_, ()> {
        self.lock.lock()
    }
}

impl<'a> Drop for RowLock<'a> {
    fn drop(&mut self) {
        // the map and this handle are the last two owners
        self.table
            .rows
            .remove_if(&self.key, |_, lock| Arc::strong_count(lock) <= 2);
    }
}

impl Table {
    pub fn row(&self, key: &[u8]) -> RowLock<'_> {
        let key = IVec::from(key);

        let lock = {
            // first we try a shared get, to not contend the map
            if let Some(r) = self.rows.get(&key) {
                r.value().clone()
            } else {
                self.rows.entry(key.clone()).or_default().value().clone()
            }
        };

        RowLock {
            key,
            lock,
            table: self,
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{sync::atomic::*, thread, time::Duration};

    #[test]
    fn entries_are_dropped_with_their_last_handle() {
        let table = Table::default();
        {
            let a = table.row(b"k");
            let b = table.row(b"k");
            assert_eq!(table.len(), 1);
            drop(a);
            assert_eq!(table.len(), 1);
            drop(b);
        }
        assert!(table.is_empty());
    }

    #[test]
    fn holders_are_serialized() {
        let table = Arc::new(Table::default());
        let inside = Arc::new(AtomicUsize::new(0));

        let handles = (0..4)
            .map(|_| {
                let table = table.clone();
                let inside = inside.clone();
                thread::spawn(move || {
                    let row = table.row(b"k");
                    let _guard = row.for_update();
                    assert_eq!(inside.fetch_add(1, Ordering::AcqRel), 0);
                    thread::sleep(Duration::from_millis(5));
                    inside.fetch_sub(1, Ordering::AcqRel);
                })
            })
            .collect::<Vec<_>>();

        for handle in handles {
            handle.join().unwrap();
        }
        assert!(table.is_empty());
    }
}
