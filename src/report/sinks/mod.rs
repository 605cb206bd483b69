mod console;
mod jsonl;
mod memory;

pub use console::LogSink;
pub use jsonl::JsonlSink;
pub use memory::MemorySink;
