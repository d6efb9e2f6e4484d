mod chunk;
mod chunk_file_codec;
mod chunk_file_error;
pub mod chunk_ops;
mod job_outcome;

pub use chunk::Chunk;
pub use chunk_file_codec::ChunkFileCodec;
pub use chunk_file_error::ChunkFileError;
pub use job_outcome::JobOutcome;
