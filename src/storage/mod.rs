pub mod cache;

pub use cache::ProfileCache;
