// Time-channel detection policy

use tracing::warn;

use crate::core::format::{NormalizedChannel, RawChannel};
use crate::core::label::split_label_and_unit;

/// Runs label/unit splitting over the raw channels and flags every
/// channel that identifies itself as the time axis. A channel counts as
/// time when its derived label, its trimmed raw label or its key equals
/// "time" case-insensitively.
pub fn normalize_channels(raw: &[RawChannel]) -> Vec<NormalizedChannel> {
    raw.iter()
        .map(|channel| {
            let (label, unit) = split_label_and_unit(&channel.raw_label);
            let is_time = label.eq_ignore_ascii_case("time")
                || channel.raw_label.trim().eq_ignore_ascii_case("time")
                || channel.key.eq_ignore_ascii_case("time");

            NormalizedChannel {
                key: channel.key.clone(),
                label,
                unit,
                values: channel.values.clone(),
                is_time,
            }
        })
        .collect()
}

/// Picks the time channel: the first `is_time` match in decoder order,
/// otherwise the first channel as an explicit best-effort fallback. The
/// fallback is logged so a misclassified x axis stays diagnosable.
/// Callers pass a non-empty slice of usable channels.
pub fn time_channel_index(channels: &[NormalizedChannel]) -> usize {
    match channels.iter().position(|c| c.is_time) {
        Some(idx) => idx,
        None => {
            if let Some(first) = channels.first() {
                warn!(
                    "no channel matches 'time', treating first channel '{}' as the x axis",
                    first.key
                );
            }
            0
        }
    }
}
