// Data structures for the preview cache layout

use serde::{Deserialize, Serialize};

pub const SCHEMA_VERSION: u32 = 1;

/// A channel exactly as handed over by the decoder: key, unparsed label,
/// full value array.
#[derive(Debug, Clone)]
pub struct RawChannel {
    pub key: String,
    pub raw_label: String,
    pub values: Vec<f64>,
}

/// A channel after label/unit splitting and time-axis detection.
/// `label` and `unit` are empty strings when absent, never optional.
#[derive(Debug, Clone)]
pub struct NormalizedChannel {
    pub key: String,
    pub label: String,
    pub unit: String,
    pub values: Vec<f64>,
    pub is_time: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewMetadata {
    pub timestamp: String,
    #[serde(rename = "SCR")]
    pub scr: f64,
    #[serde(rename = "shortTitle")]
    pub short_title: String,
}

/// Descriptor for one channel in the preview: metadata only, the values
/// live in their own cache file referenced by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelDescriptor {
    pub id: String,
    pub label: String,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewDocument {
    #[serde(rename = "schemaVersion")]
    pub schema_version: u32,
    pub metadata: PreviewMetadata,
    pub x: ChannelDescriptor,
    pub series: Vec<ChannelDescriptor>,
}

/// On-disk shape of `preview.json`: the source path the cache was built
/// from plus the preview document itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewFile {
    pub path: String,
    pub content: PreviewDocument,
}

/// The single JSON line the CLI prints on success.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildOutput {
    pub preview: PreviewFile,
}

/// A channel descriptor joined with its cached value array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelValues {
    pub id: String,
    pub label: String,
    pub unit: String,
    pub values: Vec<f64>,
}

/// Read-back payload for one series: the shared time axis plus the
/// requested channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSlice {
    pub x: ChannelValues,
    pub channel: ChannelValues,
}
