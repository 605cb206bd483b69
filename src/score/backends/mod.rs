mod checksum;

pub use checksum::ChecksumBackend;
