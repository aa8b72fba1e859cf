use crate::error::CodecError;

/// In-memory sequence codec.
///
/// `encode` takes sequence text and returns the packed stream; `decode`
/// reverses it. Stream-oriented callers should use
/// [`compress`](crate::compress) and [`expand`](crate::expand) directly.
pub trait Codec {
    fn encode(&self, seq: &[u8]) -> Result<Vec<u8>, CodecError>;
    fn decode(&self, data: &[u8]) -> Result<Vec<u8>, CodecError>;
}
