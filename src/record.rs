//! On-disk layout of a list record: every element is escaped and followed by
//! `TERMINATOR`, so records concatenate and compare element-wise.

use crate::{escaping::*, Error};
use sled::IVec;

pub fn encode<I, S>(items: I) -> Vec<u8>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = Vec::new();
    for item in items {
        escape_into(item.as_ref().as_bytes(), &mut out);
        out.extend_from_slice(&TERMINATOR);
    }
    out
}

/// Decodes a record stored at `key`.
pub fn decode(key: &str, raw: &[u8]) -> Result<Vec<String>, Error> {
    let mut out = Vec::new();
    let mut rest = raw;

    while !rest.is_empty() {
        let end = find_terminator(rest).map_err(|_| Error::InvalidRecord(key.to_owned()))?;
        let bytes = unescape(&rest[..end]).map_err(|_| Error::InvalidRecord(key.to_owned()))?;
        let item = String::from_utf8(bytes).map_err(|_| Error::InvalidUtf8(key.to_owned()))?;
        out.push(item);
        rest = &rest[end + TERMINATOR.len()..];
    }

    Ok(out)
}

pub(crate) fn decode_ivec(key: &str, raw: Option<IVec>) -> Result<Option<Vec<String>>, Error> {
    raw.map(|iv| decode(key, &iv)).transpose()
}
