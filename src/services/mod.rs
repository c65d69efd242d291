pub mod completion_client;
pub mod keyword_table;
pub mod relay;
