pub mod display_name_sync;
