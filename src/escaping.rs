pub const NULL: u8 = 0;
pub const ESCAPE_CHAR: u8 = 1;
pub const ESCAPED_NULL: [u8; 2] = [NULL, ESCAPE_CHAR];
pub const TERMINATOR: [u8; 2] = [NULL, 255];

#[derive(Eq, PartialEq, Hash, Clone, Debug)]
pub struct NotEscaped;

pub fn escaped_size(input: &[u8]) -> usize {
    input.len() + input.iter().filter(|b| **b == NULL).count()
}

pub fn escape(input: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(escaped_size(input));
    escape_into(input, &mut out);
    out
}

pub fn escape_into(input: &[u8], out: &mut Vec<u8>) {
    for chr in input {
        if *chr == NULL {
            out.extend_from_slice(&ESCAPED_NULL);
        } else {
            out.push(*chr);
        }
    }
}

pub fn unescape(input: &[u8]) -> Result<Vec<u8>, NotEscaped> {
    let mut out = Vec::with_capacity(input.len());
    let mut was_null = false;

    for byt in input {
        if was_null {
            if *byt != ESCAPE_CHAR {
                return Err(NotEscaped);
            }
            was_null = false;
        } else {
            if *byt == NULL {
                was_null = true;
            }
            out.push(*byt);
        }
    }

    if was_null {
        Err(NotEscaped)
    } else {
        Ok(out)
    }
}

/// Finds the first `TERMINATOR` in an escaped buffer.
/// On failure, returns the length of the escaped prefix that was scanned.
pub fn find_terminator(input: &[u8]) -> Result<usize, usize> {
    let mut ix = 0;
    while ix < input.len() {
        if input[ix] == NULL {
            match input.get(ix + 1) {
                Some(&ESCAPE_CHAR) => ix += 2,
                Some(&b) if b == TERMINATOR[1] => return Ok(ix),
                _ => return Err(ix),
            }
        } else {
            ix += 1;
        }
    }
    Err(ix)
}
