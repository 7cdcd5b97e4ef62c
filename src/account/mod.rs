//! Player accounts: energy, achievements, owned planets and persistence

pub mod credentials;
pub mod model;
pub mod registry;
pub mod store;

pub use credentials::{CredentialHasher, PinHasher, VERIFIER_LEN};
pub use model::{Account, AccountRecord, AccountStats, MAX_DIVINE_ENERGY};
pub use registry::{login, register};
pub use store::{AccountStore, JsonFileStore, MemoryStore};
