#![allow(dead_code)]

use sledlist::ConfigExt;

pub struct TempDb {
    conn: sledlist::Conn,
    _dir: tempfile::TempDir,
}

impl TempDb {
    pub fn new() -> Result<Self, sledlist::Error> {
        init_tracing();
        let _dir = tempfile::tempdir().map_err(sled::Error::from)?;
        let conn = sled::Config::default()
            .path(_dir.path())
            .cache_capacity(100_000)
            .open_lists()?;
        Ok(TempDb { _dir, conn })
    }
}

impl std::ops::Deref for TempDb {
    type Target = sledlist::Conn;

    fn deref(&self) -> &Self::Target {
        &self.conn
    }
}

impl std::ops::DerefMut for TempDb {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.conn
    }
}

/// Installs a test subscriber once; set `RUST_LOG=sledlist=debug` to see it.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn all(db: &sledlist::Conn, key: &str) -> Vec<String> {
    db.list_range(key, 0, -1)
        .expect("range failed")
        .expect("empty key")
}
