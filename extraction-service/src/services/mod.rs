mod storage;

pub use storage::LocalStorage;
