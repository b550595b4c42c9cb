//! Translation of an inclusive `[start, stop]` window, where `stop` may count
//! back from the tail, into an `(offset, limit)` pair over a list of known length.
//!
//! `stop` is first made exclusive (`stop + 1`). A positive result is an
//! absolute end, giving `limit = stop + 1 - start`. Anything else is relative
//! to the tail, giving `limit = stop + 1 - start + len`. The window never
//! errors: limits below zero become empty and offsets past the end yield
//! nothing.

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct Window {
    pub offset: usize,
    pub limit: usize,
}

impl Window {
    pub fn resolve(start: i64, stop: i64, len: usize) -> Self {
        let start = start.max(0);
        let end = stop.saturating_add(1);

        let limit = if end > 0 {
            end.saturating_sub(start)
        } else {
            end.saturating_sub(start).saturating_add(len as i64)
        };

        Window {
            offset: start as usize,
            limit: limit.max(0) as usize,
        }
    }

    pub fn apply<I: IntoIterator>(self, items: I) -> impl Iterator<Item = I::Item> {
        items.into_iter().skip(self.offset).take(self.limit)
    }
}
