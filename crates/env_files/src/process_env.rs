//! Access to the process environment.

use std::collections::HashMap;
use std::env;
use std::ffi::{OsStr, OsString};

/// Minimal environment interface used by [`crate::EnvFiles`].
///
/// Values are platform strings; `PATH` in particular may hold entries that are
/// not valid Unicode and must survive a prepend untouched.
pub trait ProcessEnv {
    /// Raw value of `key`, or `None` when unset.
    fn var_os(&self, key: &str) -> Option<OsString>;

    /// Set `key` for the rest of this process.
    fn set_var_os(&mut self, key: &str, value: &OsStr);

    /// Value of `key`, or `None` when unset or not valid Unicode.
    fn var(&self, key: &str) -> Option<String> {
        self.var_os(key)?.into_string().ok()
    }

    fn set_var(&mut self, key: &str, value: &str) {
        self.set_var_os(key, OsStr::new(value));
    }
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl ProcessEnv for SystemEnv {
    fn var_os(&self, key: &str) -> Option<OsString> {
        if key.is_empty() {
            return None;
        }
        env::var_os(key)
    }

    fn set_var_os(&mut self, key: &str, value: &OsStr) {
        env::set_var(key, value);
    }
}

/// In-memory environment for tests and embedders that must not touch the
/// process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryEnv {
    vars: HashMap<String, OsString>,
}

impl MemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<OsString>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    pub fn remove(&mut self, key: &str) -> Option<OsString> {
        self.vars.remove(key)
    }
}

impl ProcessEnv for MemoryEnv {
    fn var_os(&self, key: &str) -> Option<OsString> {
        self.vars.get(key).cloned()
    }

    fn set_var_os(&mut self, key: &str, value: &OsStr) {
        self.vars.insert(key.to_owned(), value.to_owned());
    }
}

impl<E: ProcessEnv + ?Sized> ProcessEnv for &mut E {
    fn var_os(&self, key: &str) -> Option<OsString> {
        (**self).var_os(key)
    }

    fn set_var_os(&mut self, key: &str, value: &OsStr) {
        (**self).set_var_os(key, value);
    }
}
