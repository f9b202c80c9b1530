pub mod key_value_service;
