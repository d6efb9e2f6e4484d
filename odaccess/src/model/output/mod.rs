pub mod accessibility_writer;
