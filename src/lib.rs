// Simulation-output preview cache
// Main library entry point

pub mod core;

// Re-export main types
pub use self::core::cache::{load_preview, read_series, PreviewCache};
pub use self::core::clock::{Clock, SystemClock};
pub use self::core::decoder::{CommandDecoder, DecodeResult, OutFileDecoder};
pub use self::core::error::{PreviewError, Result};
pub use self::core::format::{
    BuildOutput, ChannelDescriptor, ChannelValues, PreviewDocument, PreviewFile, SeriesSlice,
};
pub use self::core::label::split_label_and_unit;

#[cfg(test)]
mod tests {
    #[test]
    fn test_schema_version() {
        use crate::core::format::SCHEMA_VERSION;
        assert_eq!(SCHEMA_VERSION, 1);
    }
}
