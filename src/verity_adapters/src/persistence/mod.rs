pub mod hashmap_session_store;
pub mod redis_session_store;

pub use hashmap_session_store::HashMapSessionStore;
pub use redis_session_store::RedisSessionStore;
