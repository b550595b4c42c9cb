use super::*;
use std::{convert::TryFrom, fmt};
use tracing::warn;

/// The declared type of a key, stored as a single tag byte in the `types` tree.
#[repr(u8)]
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum Kind {
    String = 0,
    Hash = 1,
    List = 2,
    Set = 3,
    SortedSet = 4,
}

impl TryFrom<u8> for Kind {
    type Error = Error;
    fn try_from(inp: u8) -> Result<Self, Self::Error> {
        match inp {
            0 => Ok(Kind::String),
            1 => Ok(Kind::Hash),
            2 => Ok(Kind::List),
            3 => Ok(Kind::Set),
            4 => Ok(Kind::SortedSet),
            _ => Err(Error::BadTag(inp)),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::String => "string",
            Kind::Hash => "hash",
            Kind::List => "list",
            Kind::Set => "set",
            Kind::SortedSet => "zset",
        };
        f.write_str(name)
    }
}

fn decode_tag<E: From<Error>>(key: &str, raw: &[u8]) -> Result<Kind, E> {
    match raw {
        [tag] => Ok(Kind::try_from(*tag)?),
        _ => Err(Error::InvalidRegistration(key.to_owned()).into()),
    }
}

/// Looks up the registered type of `key`.
pub fn registered_kind<S: ReadStore>(types: &S, key: &str) -> Result<Option<Kind>, S::Error> {
    types
        .get(key.as_bytes())?
        .map(|iv| decode_tag(key, &iv))
        .transpose()
}

/// Returns `true` if `key` is currently registered as `kind`.
pub fn is_live<S: ReadStore>(types: &S, key: &str, kind: Kind) -> Result<bool, S::Error> {
    Ok(registered_kind(types, key)? == Some(kind))
}

/// Registers `key` as `kind` unless it already is, returning `true` if the
/// registration was created by this call.
/// Fails with `Error::WrongType` if `key` holds some other type.
pub fn ensure_type<S: WriteStore>(types: &S, key: &str, kind: Kind) -> Result<bool, S::Error> {
    match registered_kind(types, key)? {
        None => {
            types.insert(key.as_bytes(), vec![kind as u8])?;
            Ok(true)
        }
        Some(found) if found == kind => Ok(false),
        Some(found) => {
            warn!(key, expected = %kind, found = %found, "key registered under another type");
            Err(Error::WrongType {
                key: key.to_owned(),
                expected: kind,
                found,
            }
            .into())
        }
    }
}

/// Like `ensure_type`, but also drops any record left under `key` by an
/// earlier registration, so a fresh registration always starts empty.
pub(crate) fn claim<S: WriteStore>(
    records: &S,
    types: &S,
    key: &str,
    kind: Kind,
) -> Result<bool, S::Error> {
    let created = ensure_type(types, key, kind)?;
    if created {
        records.remove(key.as_bytes())?;
    }
    Ok(created)
}

impl Conn {
    /// Registers `key` as `kind` in its own unit of work.
    pub fn register_type(&self, key: &str, kind: Kind) -> Result<bool, Error> {
        self.atomic(|lists, types| claim(lists, types, key, kind))
    }

    pub fn key_type(&self, key: &str) -> Result<Option<Kind>, Error> {
        registered_kind(&self.types, key)
    }

    /// Drops the registration of `key`. Any list record stays behind, orphaned,
    /// and is invisible to every list operation until the key is registered again.
    pub fn unregister(&self, key: &str) -> Result<Option<Kind>, Error> {
        let old = self.types.remove(key.as_bytes())?;
        old.map(|iv| decode_tag(key, &iv)).transpose()
    }
}
