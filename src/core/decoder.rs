// External decoder boundary

use std::collections::HashMap;
use std::path::Path;
use std::process::Command;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::core::error::{PreviewError, Result};
use crate::core::format::RawChannel;

/// What the external decoder hands over: a short run title, a key to
/// raw-label map, and per-key value arrays in decoder iteration order.
#[derive(Debug, Clone, Default)]
pub struct DecodeResult {
    pub short_title: String,
    pub labels: HashMap<String, String>,
    pub data: Vec<(String, Vec<f64>)>,
}

impl DecodeResult {
    /// Zips the label and value maps by shared key, keeping the value
    /// map's iteration order. Keys present in only one of the maps are
    /// dropped. A present-but-empty label falls back to the key.
    pub fn into_channels(self) -> Vec<RawChannel> {
        let labels = self.labels;
        self.data
            .into_iter()
            .filter_map(|(key, values)| match labels.get(&key) {
                Some(raw_label) => {
                    let raw_label = if raw_label.is_empty() {
                        key.clone()
                    } else {
                        raw_label.clone()
                    };
                    Some(RawChannel { key, raw_label, values })
                }
                None => {
                    debug!("channel '{}' has values but no label entry, dropping it", key);
                    None
                }
            })
            .collect()
    }
}

/// The decoder collaborator: one operation over an opaque binary file,
/// one failure mode. Binary format parsing lives entirely behind this
/// boundary.
pub trait OutFileDecoder {
    fn decode(&self, path: &Path) -> Result<DecodeResult>;
}

/// Wire shape of the external decoder's stdout dump.
#[derive(Deserialize)]
struct DecoderDump {
    #[serde(rename = "shortTitle")]
    short_title: String,
    chid: serde_json::Map<String, Value>,
    data: serde_json::Map<String, Value>,
}

/// Decoder implementation that spawns a configured external command with
/// the source file path as its final argument and parses the JSON dump
/// `{"shortTitle": ..., "chid": {...}, "data": {...}}` it prints.
#[derive(Debug, Clone)]
pub struct CommandDecoder {
    program: String,
    args: Vec<String>,
}

impl CommandDecoder {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Builds a decoder from a whitespace-separated command line, e.g.
    /// `"python3 /opt/decoder/dump.py"`.
    pub fn from_command_line(cmdline: &str) -> Result<Self> {
        let mut parts = cmdline.split_whitespace();
        let program = parts
            .next()
            .ok_or_else(|| PreviewError::Decoder("empty decoder command".to_string()))?;

        Ok(Self {
            program: program.to_string(),
            args: parts.map(str::to_string).collect(),
        })
    }

    fn parse_dump(raw: &[u8]) -> Result<DecodeResult> {
        let dump: DecoderDump = serde_json::from_slice(raw)
            .map_err(|e| PreviewError::Decoder(format!("malformed decoder output: {}", e)))?;

        let labels = dump
            .chid
            .into_iter()
            .map(|(key, value)| {
                let label = match value {
                    Value::String(s) => s,
                    Value::Null => String::new(),
                    other => other.to_string(),
                };
                (key, label)
            })
            .collect();

        let mut data = Vec::with_capacity(dump.data.len());
        for (key, value) in dump.data {
            let values: Vec<f64> = serde_json::from_value(value).map_err(|e| {
                PreviewError::Decoder(format!("channel '{}' has non-numeric values: {}", key, e))
            })?;
            data.push((key, values));
        }

        Ok(DecodeResult {
            short_title: dump.short_title,
            labels,
            data,
        })
    }
}

impl OutFileDecoder for CommandDecoder {
    fn decode(&self, path: &Path) -> Result<DecodeResult> {
        debug!("decoding {} via '{}'", path.display(), self.program);

        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .output()
            .map_err(|e| {
                PreviewError::Decoder(format!("failed to spawn '{}': {}", self.program, e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PreviewError::Decoder(format!(
                "decoder exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        Self::parse_dump(&output.stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dump_keeps_decoder_order() {
        let raw = br#"{
            "shortTitle": "RUN1",
            "chid": {"time": "Time", "V": "Voltage (V)", "F": "Frequency (Hz)"},
            "data": {"time": [0.0, 0.1], "F": [50.0, 49.9], "V": [1.0, 1.1]}
        }"#;

        let result = CommandDecoder::parse_dump(raw).unwrap();
        assert_eq!(result.short_title, "RUN1");
        assert_eq!(result.labels.len(), 3);
        let keys: Vec<&str> = result.data.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["time", "F", "V"]);
        assert_eq!(result.data[2].1, vec![1.0, 1.1]);
    }

    #[test]
    fn test_parse_dump_rejects_garbage() {
        let err = CommandDecoder::parse_dump(b"not json").unwrap_err();
        assert!(matches!(err, PreviewError::Decoder(_)));
    }

    #[test]
    fn test_into_channels_drops_unshared_keys() {
        let result = DecodeResult {
            short_title: "RUN1".to_string(),
            labels: HashMap::from([
                ("time".to_string(), "Time".to_string()),
                ("orphan_label".to_string(), "No data".to_string()),
            ]),
            data: vec![
                ("time".to_string(), vec![0.0, 0.1]),
                ("orphan_data".to_string(), vec![1.0]),
            ],
        };

        let channels = result.into_channels();
        assert_eq!(channels.len(), 1);
        assert_eq!(channels[0].key, "time");
    }

    #[test]
    fn test_into_channels_empty_label_falls_back_to_key() {
        let result = DecodeResult {
            short_title: String::new(),
            labels: HashMap::from([("V".to_string(), String::new())]),
            data: vec![("V".to_string(), vec![1.0])],
        };

        let channels = result.into_channels();
        assert_eq!(channels[0].raw_label, "V");
    }

    #[test]
    fn test_missing_program_surfaces_as_decoder_error() {
        let decoder = CommandDecoder::new("/nonexistent/decoder-binary");
        let err = decoder.decode(Path::new("whatever.out")).unwrap_err();
        assert!(matches!(err, PreviewError::Decoder(_)));
    }

    #[test]
    fn test_empty_command_line_is_rejected() {
        assert!(matches!(
            CommandDecoder::from_command_line("  "),
            Err(PreviewError::Decoder(_))
        ));
    }
}
