//! Batch decoding of independent strips and tiles

use std::sync::Arc;
use rayon::prelude::*;
use tracing::{debug, trace, warn};
use crate::compression::{BlockDecoder, Compression, DecoderRegistry};
use crate::error::{Error, Result};

/// Configuration for decoding a batch of blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchConfig {
    /// TIFF compression code of every block in the batch
    pub compression: u16,
    /// Whether to decode blocks on the rayon pool
    pub parallel: bool,
    /// Smallest batch worth spreading across threads
    pub min_parallel_blocks: usize,
}

impl BatchConfig {
    pub fn new(compression: u16) -> Self {
        Self {
            compression,
            ..Self::default()
        }
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn min_parallel_blocks(mut self, count: usize) -> Self {
        self.min_parallel_blocks = count;
        self
    }

    fn use_parallel(&self, block_count: usize) -> bool {
        self.parallel && block_count >= self.min_parallel_blocks
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            compression: Compression::PackBits.code(),
            parallel: true,
            min_parallel_blocks: 2,
        }
    }
}

/// Decodes the strips or tiles of one image with a single scheme
pub struct StripDecoder {
    decoder: Arc<dyn BlockDecoder>,
    config: BatchConfig,
}

impl StripDecoder {
    /// Resolves the decoder for `config.compression` from `registry`
    pub fn new(registry: &DecoderRegistry, config: BatchConfig) -> Result<Self> {
        let decoder = registry.require(config.compression)?;
        Ok(Self { decoder, config })
    }

    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Decodes every block, keeping input order
    ///
    /// Blocks share nothing, so they may run on the rayon pool. If several
    /// fail, the error for the lowest block index is returned.
    pub fn decode_all(&self, blocks: &[&[u8]]) -> Result<Vec<Vec<u8>>> {
        debug!(
            scheme = self.decoder.name(),
            blocks = blocks.len(),
            parallel = self.config.use_parallel(blocks.len()),
            "decoding block batch"
        );

        let results: Vec<Result<Vec<u8>>> = if self.config.use_parallel(blocks.len()) {
            blocks
                .par_iter()
                .enumerate()
                .map(|(index, block)| self.decode_one(index, block))
                .collect()
        } else {
            blocks
                .iter()
                .enumerate()
                .map(|(index, block)| self.decode_one(index, block))
                .collect()
        };

        results.into_iter().collect()
    }

    /// Decodes every block and joins them into one buffer
    pub fn decode_concat(&self, blocks: &[&[u8]]) -> Result<Vec<u8>> {
        let decoded = self.decode_all(blocks)?;
        let total = decoded.iter().map(Vec::len).sum();

        let mut output = Vec::with_capacity(total);
        for block in decoded {
            output.extend_from_slice(&block);
        }

        Ok(output)
    }

    fn decode_one(&self, index: usize, block: &[u8]) -> Result<Vec<u8>> {
        trace!(index, len = block.len(), "decoding block");
        self.decoder.decode_block(block).map_err(|source| {
            warn!(index, error = %source, "block failed to decode");
            Error::Block {
                index,
                source: Box::new(source),
            }
        })
    }
}
