pub mod memory_kv_store;
