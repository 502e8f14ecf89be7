use bitflags::Flags;

use crate::domain::FlagName;

/// Display names of the flags set in `value`, in table order, joined by
/// `sep`. A value with no named flag set decodes to an empty string.
pub fn decode_bitmask<F: Flags + Copy>(value: F, names: &[FlagName<F>], sep: &str) -> String {
    names
        .iter()
        .filter(|entry| !entry.flag.is_empty() && value.contains(entry.flag))
        .map(|entry| entry.pname)
        .collect::<Vec<_>>()
        .join(sep)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AffinityDomain, FpConfig, NamedFlags};
    use proptest::prelude::*;

    #[test]
    fn zero_mask_is_empty() {
        assert_eq!(decode_bitmask(FpConfig::empty(), FpConfig::NAMES, ", "), "");
    }

    #[test]
    fn names_follow_table_order_not_bit_test_order() {
        let value = AffinityDomain::L1_CACHE | AffinityDomain::NUMA;
        assert_eq!(decode_bitmask(value, AffinityDomain::NAMES, " | "), "NUMA | L1 cache");
    }

    proptest! {
        #[test]
        fn one_name_per_set_bit(bits in 0u64..256) {
            let decoded = FpConfig::describe_bits(bits, "|");
            let count = if decoded.is_empty() { 0 } else { decoded.split('|').count() };
            prop_assert_eq!(count, bits.count_ones() as usize);
        }
    }
}
