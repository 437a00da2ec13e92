//! Placeholder embedding construction.
//!
//! Real embedding generation is an external collaborator that is not
//! wired in yet; the vector store nevertheless rejects rows without a
//! fixed-length `embedding` column, so every record carries a constant
//! stand-in vector that satisfies the schema. Swapping this module for
//! a real provider must not change the vector length the store expects.

/// Build the placeholder embedding: `dims` components, all equal to
/// `fill`. With default configuration this is 1536 × 0.0123.
pub fn placeholder_embedding(dims: usize, fill: f32) -> Vec<f32> {
    vec![fill; dims]
}
