//! Delimiters for multiline `KEY<<DELIMITER` records.

use rand::Rng;

/// Literal tag in front of every generated delimiter token.
pub const DELIMITER_PREFIX: &str = "ghadelimiter_";
/// Length of the random token after [`DELIMITER_PREFIX`].
pub const DELIMITER_LEN: usize = 16;

const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Source of delimiter tokens. Must return a fresh token on every call.
pub trait DelimiterSource {
    fn next_token(&mut self) -> String;
}

/// Thread-local, non-cryptographic random tokens over `[A-Za-z0-9]`.
///
/// The token only has to avoid colliding with the value it wraps; nothing
/// relies on it being unpredictable.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomDelimiter;

impl DelimiterSource for RandomDelimiter {
    fn next_token(&mut self) -> String {
        let mut rng = rand::thread_rng();
        (0..DELIMITER_LEN)
            .map(|_| {
                let idx = rng.gen_range(0..CHARSET.len());
                CHARSET[idx] as char
            })
            .collect()
    }
}

impl<D: DelimiterSource + ?Sized> DelimiterSource for &mut D {
    fn next_token(&mut self) -> String {
        (**self).next_token()
    }
}
