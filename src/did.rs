//! Syntactic validation of DIDs.
//!
//! Issuer ids embedded in manifests must be DIDs according to the
//! [DID Syntax](https://w3c.github.io/did-core/#did-syntax). Only the
//! shape is checked here; resolution belongs to external DID tooling.

/// Reason a DID string failed the syntax check.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvalidDid {
    #[error("unexpected byte {1} at offset {0:#04x}")]
    UnexpectedByte(usize, u8),
    #[error("unexpected end at offset {0:#04x}")]
    UnexpectedEnd(usize),
}

// method-char = %x61-7A / DIGIT
fn is_method_char(b: u8) -> bool {
    matches!(b, b'a'..=b'z') || b.is_ascii_digit()
}

// idchar = ALPHA / DIGIT / "." / "-" / "_" / pct-encoded
fn is_id_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'.' | b'-' | b'_')
}

/// Validates a DID string.
///
/// The whole input must match `did:method-name:method-specific-id`; the
/// method-specific-id may contain `:` separators and percent-encoded
/// bytes, but must end on an id character.
pub fn validate(did: &str) -> Result<(), InvalidDid> {
    let bytes = did.as_bytes();

    const PREFIX: &[u8] = b"did:";
    for (i, &expected) in PREFIX.iter().enumerate() {
        match bytes.get(i) {
            Some(&b) if b == expected => (),
            Some(&b) => return Err(InvalidDid::UnexpectedByte(i, b)),
            None => return Err(InvalidDid::UnexpectedEnd(i)),
        }
    }

    enum State {
        MethodStart,
        Method,
        IdStartOrSeparator,
        Id,
        IdPct1,
        IdPct2,
    }

    let mut state = State::MethodStart;
    for (i, &b) in bytes.iter().enumerate().skip(PREFIX.len()) {
        state = match state {
            State::MethodStart => match b {
                b if is_method_char(b) => State::Method,
                _ => return Err(InvalidDid::UnexpectedByte(i, b)),
            },
            State::Method => match b {
                b':' => State::IdStartOrSeparator,
                b if is_method_char(b) => State::Method,
                _ => return Err(InvalidDid::UnexpectedByte(i, b)),
            },
            State::IdStartOrSeparator | State::Id => match b {
                b':' => State::IdStartOrSeparator,
                b'%' => State::IdPct1,
                b if is_id_char(b) => State::Id,
                _ => return Err(InvalidDid::UnexpectedByte(i, b)),
            },
            State::IdPct1 => match b {
                b if b.is_ascii_hexdigit() => State::IdPct2,
                _ => return Err(InvalidDid::UnexpectedByte(i, b)),
            },
            State::IdPct2 => match b {
                b if b.is_ascii_hexdigit() => State::Id,
                _ => return Err(InvalidDid::UnexpectedByte(i, b)),
            },
        };
    }

    match state {
        State::Id => Ok(()),
        _ => Err(InvalidDid::UnexpectedEnd(bytes.len())),
    }
}
