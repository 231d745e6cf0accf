// Preview cache builder: normalization pipeline plus the on-disk layout

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::core::classify::{normalize_channels, time_channel_index};
use crate::core::clock::{format_timestamp, Clock, SystemClock};
use crate::core::decoder::OutFileDecoder;
use crate::core::error::{PreviewError, Result};
use crate::core::format::{
    ChannelDescriptor, ChannelValues, PreviewDocument, PreviewFile, PreviewMetadata, SeriesSlice,
    SCHEMA_VERSION,
};
use crate::core::reconcile::target_length;

/// Builds the browsable preview and the per-channel value cache for one
/// decoded source file. The cache directory is a derived artifact: every
/// build rewrites it wholesale, so it is always safe to delete.
pub struct PreviewCache<C: Clock = SystemClock> {
    clock: C,
}

impl PreviewCache<SystemClock> {
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl Default for PreviewCache<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> PreviewCache<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Decodes `source_path`, normalizes the channels and writes the
    /// cache tree under `cache_dir`:
    ///
    /// ```text
    /// cache_dir/
    ///   x.json              time values
    ///   preview.json        { path, content: PreviewDocument }
    ///   series/<id>.json    one value array per non-time channel
    /// ```
    ///
    /// Reruns with the same inputs produce byte-identical value files;
    /// only the timestamp inside `preview.json` moves.
    pub fn build(
        &self,
        decoder: &dyn OutFileDecoder,
        source_path: &Path,
        cache_dir: &Path,
    ) -> Result<PreviewFile> {
        let decoded = decoder.decode(source_path)?;
        info!(
            "decoded '{}': {} channels",
            decoded.short_title,
            decoded.data.len()
        );

        let short_title = decoded.short_title.clone();
        let raw_channels = decoded.into_channels();

        let mut channels = normalize_channels(&raw_channels);
        channels.retain(|c| !c.values.is_empty());
        if channels.is_empty() {
            return Err(PreviewError::NoUsableChannels);
        }

        let time_idx = time_channel_index(&channels);
        let len = target_length(&channels);
        for channel in &mut channels {
            channel.values.truncate(len);
        }
        debug!("target length {} across {} usable channels", len, channels.len());

        let series_dir = cache_dir.join("series");
        fs::create_dir_all(&series_dir)?;

        let time_channel = &channels[time_idx];
        write_json_array(&cache_dir.join("x.json"), &time_channel.values)?;

        let mut series = Vec::with_capacity(channels.len().saturating_sub(1));
        for (idx, channel) in channels.iter().enumerate() {
            if idx == time_idx {
                continue;
            }

            let label = if channel.label.is_empty() {
                channel.key.clone()
            } else {
                channel.label.clone()
            };
            series.push(ChannelDescriptor {
                id: channel.key.clone(),
                label,
                unit: channel.unit.clone(),
            });

            write_json_array(&series_dir.join(format!("{}.json", channel.key)), &channel.values)?;
        }

        let x = ChannelDescriptor {
            id: "time".to_string(),
            label: if time_channel.label.is_empty() {
                "time".to_string()
            } else {
                time_channel.label.clone()
            },
            unit: if time_channel.unit.is_empty() {
                "s".to_string()
            } else {
                time_channel.unit.clone()
            },
        };

        let preview = PreviewFile {
            path: source_path.to_string_lossy().into_owned(),
            content: PreviewDocument {
                schema_version: SCHEMA_VERSION,
                metadata: PreviewMetadata {
                    timestamp: format_timestamp(self.clock.now_utc()),
                    scr: 0.0,
                    short_title,
                },
                x,
                series,
            },
        };

        fs::write(cache_dir.join("preview.json"), serde_json::to_string(&preview)?)?;
        info!("preview cache written to {}", cache_dir.display());

        Ok(preview)
    }
}

fn write_json_array(path: &Path, values: &[f64]) -> Result<()> {
    fs::write(path, serde_json::to_string(values)?)?;
    Ok(())
}

/// Parses `preview.json` back out of an existing cache directory.
pub fn load_preview(cache_dir: &Path) -> Result<PreviewFile> {
    let raw = fs::read_to_string(cache_dir.join("preview.json"))?;
    Ok(serde_json::from_str(&raw)?)
}

/// Loads one cached channel together with the shared time axis, so a
/// viewer can fetch a single series without re-decoding the source file.
pub fn read_series(cache_dir: &Path, channel_id: &str) -> Result<SeriesSlice> {
    let preview = load_preview(cache_dir)?;
    let descriptor = preview
        .content
        .series
        .iter()
        .find(|s| s.id == channel_id)
        .ok_or_else(|| PreviewError::ChannelNotFound(channel_id.to_string()))?;

    let x_raw = fs::read_to_string(cache_dir.join("x.json"))?;
    let x_values: Vec<f64> = serde_json::from_str(&x_raw)?;

    let channel_raw = fs::read_to_string(cache_dir.join("series").join(format!("{}.json", channel_id)))?;
    let channel_values: Vec<f64> = serde_json::from_str(&channel_raw)?;

    Ok(SeriesSlice {
        x: ChannelValues {
            id: preview.content.x.id.clone(),
            label: preview.content.x.label.clone(),
            unit: preview.content.x.unit.clone(),
            values: x_values,
        },
        channel: ChannelValues {
            id: descriptor.id.clone(),
            label: descriptor.label.clone(),
            unit: descriptor.unit.clone(),
            values: channel_values,
        },
    })
}
