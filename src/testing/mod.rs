mod fake_environment;
mod memory_filesystem;

pub use fake_environment::FakeEnvironment;
pub use memory_filesystem::MemoryFilesystem;
