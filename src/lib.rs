use sled::{
    transaction::{
        ConflictableTransactionError, ConflictableTransactionResult, TransactionError,
        TransactionalTree,
    },
    IVec, Transactional,
};
use std::{path::Path, sync::Arc};

pub mod escaping;

pub mod record;

pub mod registry;
pub use registry::Kind;

pub mod window;
pub use window::Window;

pub mod list;
pub use list::Values;

mod lock_table;

mod error;
pub use error::*;

pub const LISTS_TREE: &[u8] = b"__sledlist_lists";
pub const TYPES_TREE: &[u8] = b"__sledlist_types";

pub trait ReadStore {
    type Error: std::fmt::Debug + From<Error>;

    fn get(&self, key: &[u8]) -> Result<Option<IVec>, Self::Error>;
}

pub trait WriteStore: ReadStore {
    fn insert<V>(&self, key: &[u8], val: V) -> Result<Option<IVec>, Self::Error>
    where
        IVec: From<V>;

    fn remove(&self, key: &[u8]) -> Result<Option<IVec>, Self::Error>;
}

impl ReadStore for sled::Tree {
    type Error = Error;

    fn get(&self, key: &[u8]) -> Result<Option<IVec>, Self::Error> {
        self.get(key).map_err(Error::Store)
    }
}

impl WriteStore for sled::Tree {
    fn insert<V>(&self, key: &[u8], val: V) -> Result<Option<IVec>, Self::Error>
    where
        IVec: From<V>,
    {
        self.insert(key, val).map_err(Error::Store)
    }

    fn remove(&self, key: &[u8]) -> Result<Option<IVec>, Self::Error> {
        self.remove(key).map_err(Error::Store)
    }
}

impl ReadStore for TransactionalTree {
    type Error = ConflictableTransactionError<Error>;

    fn get(&self, key: &[u8]) -> Result<Option<IVec>, Self::Error> {
        self.get(key).map_err(ConflictableTransactionError::from)
    }
}

impl WriteStore for TransactionalTree {
    fn insert<V>(&self, key: &[u8], val: V) -> Result<Option<IVec>, Self::Error>
    where
        IVec: From<V>,
    {
        self.insert::<&[u8], _>(key, val)
            .map_err(ConflictableTransactionError::from)
    }

    fn remove(&self, key: &[u8]) -> Result<Option<IVec>, Self::Error> {
        self.remove(key).map_err(ConflictableTransactionError::from)
    }
}

/// A handle to the list tables. Clones share the same database and pop queue.
#[derive(Clone)]
pub struct Conn {
    db: sled::Db,
    lists: sled::Tree,
    types: sled::Tree,
    locks: Arc<lock_table::Table>,
}

pub trait ConfigExt {
    fn open_lists(&self) -> Result<Conn, Error>;
}

impl ConfigExt for sled::Config {
    fn open_lists(&self) -> Result<Conn, Error> {
        Conn::from_db(self.open()?)
    }
}

impl Conn {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        Self::from_db(sled::open(path)?)
    }

    pub fn from_db(db: sled::Db) -> Result<Self, Error> {
        let lists = db.open_tree(LISTS_TREE)?;
        let types = db.open_tree(TYPES_TREE)?;

        Ok(Conn {
            db,
            lists,
            types,
            locks: Arc::new(lock_table::Table::default()),
        })
    }

    /// Runs `f` as one unit of work over the `lists` and `types` trees.
    /// Either every write made by `f` commits or none does. `f` may be run
    /// more than once if it conflicts with a concurrent unit.
    pub fn atomic<F, T>(&self, f: F) -> Result<T, Error>
    where
        F: Fn(&TransactionalTree, &TransactionalTree) -> ConflictableTransactionResult<T, Error>,
    {
        (&self.lists, &self.types)
            .transaction(|(lists, types)| f(lists, types))
            .map_err(|e| match e {
                TransactionError::Abort(e) => e,
                TransactionError::Storage(e) => Error::Store(e),
            })
    }

    pub fn flush(&self) -> Result<usize, Error> {
        Ok(self.db.flush()?)
    }

    /// Drops every list and every type registration.
    pub fn clear(&self) -> Result<(), Error> {
        self.lists.clear()?;
        self.types.clear()?;
        Ok(())
    }
}
