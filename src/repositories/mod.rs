pub mod mem_storage;
