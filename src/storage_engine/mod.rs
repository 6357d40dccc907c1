pub mod key_value_storage;
