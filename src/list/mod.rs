//! Ordered, duplicate-permitting lists stored as one array record per key.
//!
//! A key only holds a list while it is registered as `Kind::List`; every read
//! joins against that registration and treats anything else as absent. Each
//! mutation is a single unit of work, registering the key first where the
//! operation may create the list.
//!
//! # Example
//! ```
//! use sledlist::ConfigExt;
//!
//! let conn = sled::Config::new().temporary(true).open_lists().unwrap();
//!
//! conn.list_append("my_list", ["a", "b"]).unwrap();
//! conn.list_prepend("my_list", ["x", "y"]).unwrap();
//! assert_eq!(conn.list_len("my_list").unwrap(), 4);
//! assert_eq!(
//!     conn.list_range("my_list", 0, -1).unwrap().unwrap(),
//!     vec!["x", "y", "a", "b"]
//! );
//!
//! assert_eq!(conn.list_remove_last("my_list").unwrap().as_deref(), Some("b"));
//! conn.list_trim("my_list", 1, -1).unwrap();
//! assert_eq!(conn.list_range("my_list", 0, -1).unwrap().unwrap(), vec!["y", "a"]);
//! ```

use super::*;
use crate::registry::{claim, is_live};
use tracing::{debug, trace};

mod values;
pub use self::values::*;

/// Reads the list at `key`, or `None` if `key` is not live as a list.
fn live_list<S: ReadStore>(lists: &S, types: &S, key: &str) -> Result<Option<Vec<String>>, S::Error> {
    if !is_live(types, key, Kind::List)? {
        return Ok(None);
    }

    Ok(record::decode_ivec(key, lists.get(key.as_bytes())?)?)
}

enum End {
    Front,
    Back,
}

impl Conn {
    /// Inserts `values` at the head of the list, keeping their order, and
    /// creates the list if needed.
    pub fn list_prepend<V>(&self, key: &str, values: V) -> Result<(), Error>
    where
        Values: From<V>,
    {
        self.list_push(key, Values::from(values), End::Front)
    }

    /// Inserts `values` at the tail of the list, creating it if needed.
    pub fn list_append<V>(&self, key: &str, values: V) -> Result<(), Error>
    where
        Values: From<V>,
    {
        self.list_push(key, Values::from(values), End::Back)
    }

    fn list_push(&self, key: &str, values: Values, end: End) -> Result<(), Error> {
        if key.is_empty() {
            return Ok(());
        }

        // records are concatenative, so an upsert is a byte-level splice
        let new = record::encode(values.iter());

        self.atomic(|lists, types| {
            claim(lists, types, key, Kind::List)?;

            let old = lists.get(key.as_bytes())?;
            let old = old.as_ref().map_or(&[][..], |iv| &iv[..]);

            let mut merged = Vec::with_capacity(old.len() + new.len());
            match end {
                End::Front => {
                    merged.extend_from_slice(&new);
                    merged.extend_from_slice(old);
                }
                End::Back => {
                    merged.extend_from_slice(old);
                    merged.extend_from_slice(&new);
                }
            }

            lists.insert(key.as_bytes(), merged)?;
            Ok(())
        })?;

        debug!(key, pushed = values.len(), front = matches!(end, End::Front), "list push");
        Ok(())
    }

    /// Removes and returns the tail element. Concurrent callers on the same
    /// key each get a distinct element.
    pub fn list_remove_last(&self, key: &str) -> Result<Option<String>, Error> {
        if key.is_empty() {
            return Ok(None);
        }

        let row = self.locks.row(key.as_bytes());
        let _guard = row.for_update();

        let popped = self.atomic(|lists, types| {
            let mut list = match live_list(lists, types, key)? {
                Some(list) => list,
                None => return Ok(None),
            };

            let last = match list.pop() {
                Some(last) => last,
                None => return Ok(None),
            };

            lists.insert(key.as_bytes(), record::encode(&list))?;
            Ok(Some(last))
        })?;

        debug!(key, popped = popped.is_some(), "list remove last");
        Ok(popped)
    }

    /// Removes every occurrence of each of `values`, keeping the survivors in order.
    /// All values are removed in one unit of work.
    pub fn list_remove_all<V>(&self, key: &str, values: V) -> Result<(), Error>
    where
        Values: From<V>,
    {
        let values = Values::from(values);
        if key.is_empty() || values.is_empty() {
            return Ok(());
        }

        let removed = self.atomic(|lists, types| {
            let mut list = match live_list(lists, types, key)? {
                Some(list) => list,
                None => return Ok(0),
            };

            let before = list.len();
            list.retain(|item| !values.contains(item));

            let removed = before - list.len();
            if removed > 0 {
                lists.insert(key.as_bytes(), record::encode(&list))?;
            }
            Ok(removed)
        })?;

        debug!(key, removed, "list remove all");
        Ok(())
    }

    /// Keeps only the inclusive window `[start, stop]`; a negative `stop` counts
    /// back from the tail, so `list_trim(key, 0, -1)` keeps everything.
    pub fn list_trim(&self, key: &str, start: i64, stop: i64) -> Result<(), Error> {
        if key.is_empty() {
            return Ok(());
        }

        let lens = self.atomic(|lists, types| {
            let list = match live_list(lists, types, key)? {
                Some(list) => list,
                None => return Ok(None),
            };

            let before = list.len();
            let kept = Window::resolve(start, stop, before)
                .apply(list)
                .collect::<Vec<_>>();

            if kept.len() != before {
                lists.insert(key.as_bytes(), record::encode(&kept))?;
            }
            Ok(Some((before, kept.len())))
        })?;

        if let Some((before, after)) = lens {
            debug!(key, start, stop, before, after, "list trim");
        }
        Ok(())
    }

    /// Returns the inclusive window `[start, stop]` of the list, with the same
    /// window rules as `list_trim`. An absent list reads as empty; an empty
    /// `key` returns `None`.
    pub fn list_range(&self, key: &str, start: i64, stop: i64) -> Result<Option<Vec<String>>, Error> {
        if key.is_empty() {
            return Ok(None);
        }

        let list = live_list(&self.lists, &self.types, key)?.unwrap_or_default();
        let window = Window::resolve(start, stop, list.len());
        trace!(key, len = list.len(), offset = window.offset, limit = window.limit, "list range");

        Ok(Some(window.apply(list).collect()))
    }

    /// Returns the number of elements, or 0 if `key` holds no list.
    pub fn list_len(&self, key: &str) -> Result<u64, Error> {
        let len = live_list(&self.lists, &self.types, key)?.map_or(0, |list| list.len() as u64);
        trace!(key, len, "list len");
        Ok(len)
    }
}
