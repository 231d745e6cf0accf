// Channel length reconciliation

use crate::core::format::NormalizedChannel;

/// Common usable length across channels: the minimum value count over all
/// channels carrying at least one value. Decoder output can be ragged
/// (off-by-one channel lengths at acquisition boundaries); truncating
/// every channel to this common prefix keeps the emitted arrays
/// rectangular and index-aligned with the time axis.
pub fn target_length(channels: &[NormalizedChannel]) -> usize {
    channels
        .iter()
        .map(|c| c.values.len())
        .filter(|len| *len > 0)
        .min()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel(key: &str, len: usize) -> NormalizedChannel {
        NormalizedChannel {
            key: key.to_string(),
            label: key.to_string(),
            unit: String::new(),
            values: vec![0.0; len],
            is_time: false,
        }
    }

    #[test]
    fn test_target_length_is_minimum() {
        let channels = vec![channel("time", 100), channel("V", 98), channel("F", 100)];
        assert_eq!(target_length(&channels), 98);
    }

    #[test]
    fn test_target_length_ignores_empty_channels() {
        let channels = vec![channel("time", 10), channel("dead", 0)];
        assert_eq!(target_length(&channels), 10);
    }

    #[test]
    fn test_target_length_of_nothing_is_zero() {
        assert_eq!(target_length(&[]), 0);
    }
}
