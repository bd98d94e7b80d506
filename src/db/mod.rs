//! Encrypted database access
//!
//! - [`backend`]: driver resolution between the encryption-native and the
//!   standard pragma-keyed backend
//! - [`key`]: opening a handle, keying it and verifying the key
//! - [`handle`]: the per-request owned connection

pub mod backend;
pub mod handle;
pub mod key;

pub use backend::{
    check_cipher_version, resolve, resolve_from, Backend, EncryptionNativeBackend, StandardBackend,
};
pub use handle::DatabaseHandle;
pub use key::{escape_key, open_keyed};
