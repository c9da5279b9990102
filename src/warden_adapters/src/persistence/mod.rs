pub mod in_memory_directory;
pub mod in_memory_session_cache;
pub mod redis_session_cache;
