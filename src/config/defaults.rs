use crate::config::app::{Driver, Logging, Pragmas};
use crate::consts::{DEFAULT_CIPHER, DEFAULT_JOURNAL_MODE, DEFAULT_LOG_FILTER};
use crate::enums::BackendPreference;

pub fn default_driver() -> Driver {
    Driver {
        backend: BackendPreference::Auto,
    }
}

pub fn default_cipher() -> String {
    DEFAULT_CIPHER.into()
}

pub fn default_journal_mode() -> String {
    DEFAULT_JOURNAL_MODE.into()
}

pub fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.into()
}

pub fn default_pragmas() -> Pragmas {
    Pragmas {
        cipher: default_cipher(),
        journal_mode: default_journal_mode(),
    }
}

pub fn default_logging() -> Logging {
    Logging {
        filter: default_log_filter(),
    }
}
