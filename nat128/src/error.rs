use thiserror::Error;

/// A big integer that does not fit in 128 unsigned bits.
///
/// The only recoverable failure in the kernel. Every other contract breach
/// (short buffers, oversized small constants) is a caller bug.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("value is negative")]
    Negative,

    #[error("value needs {bits} bits, at most 128 fit")]
    TooWide { bits: u64 },
}
