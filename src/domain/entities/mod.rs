//! Domain Entities

mod source_file;

pub use source_file::SourceFile;
