//! Runner environment files: `$GITHUB_ENV`, `$GITHUB_OUTPUT`, `$GITHUB_STATE`,
//! `$GITHUB_PATH` and `$GITHUB_STEP_SUMMARY`.
//!
//! Each file's location is read from an indirection variable; [`FileTargets`]
//! names those variables and [`EnvFiles`] performs the writes.

mod delimiter;
mod error;
mod files;
mod process_env;
mod record;
mod targets;

pub use delimiter::{DelimiterSource, RandomDelimiter, DELIMITER_LEN, DELIMITER_PREFIX};
pub use error::{EnvFileError, ErrorKind};
pub use files::{EnvFiles, PATH_LIST_SEPARATOR, PATH_VAR, STATE_PREFIX};
pub use process_env::{MemoryEnv, ProcessEnv, SystemEnv};
pub use record::{append_record, ensure_env_key_allowed, KeyValueRecord};
pub use targets::{FileTargets, Target};
