//! Statistics for one compression run and the plain-text sidecar report.

use crate::frequency::FreqTable;

/// Summary of a completed compression operation.
#[derive(Debug, Clone, Default)]
pub struct CompressionStats {
    /// Source size in bytes.
    pub input_bytes: usize,
    /// Container size in bytes.
    pub output_bytes: usize,
    /// Total symbols in the source stream.
    pub input_symbols: u64,
    /// Distinct symbols in the source stream.
    pub distinct_symbols: usize,
    /// Serialized tree size in bytes.
    pub tree_bytes: usize,
    /// Packed content length in bits.
    pub content_bits: usize,
    /// Source entropy in bits per symbol.
    pub entropy: f64,
    /// Wall-clock time in nanoseconds.
    pub time_ns: u128,
}

impl CompressionStats {
    /// Space saved relative to the source, as a percentage.
    pub fn savings_percent(&self) -> f64 {
        if self.input_bytes == 0 {
            return 0.0;
        }

        100.0 * (1.0 - self.output_bytes as f64 / self.input_bytes as f64)
    }
}

/// Shannon entropy of a frequency distribution, in bits per symbol.
pub fn entropy(freqs: &FreqTable) -> f64 {
    let total: u64 = freqs.values().sum();
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;

    freqs
        .values()
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

impl From<CompressionStats> for String {
    fn from(val: CompressionStats) -> Self {
        let mut s = String::new();

        s.push_str("#hufftext compression stats\n");
        s.push_str(&format!("inputbytes={}\n", val.input_bytes));
        s.push_str(&format!("outputbytes={}\n", val.output_bytes));
        s.push_str(&format!("inputsymbols={}\n", val.input_symbols));
        s.push_str(&format!("distinctsymbols={}\n", val.distinct_symbols));
        s.push_str(&format!("treebytes={}\n", val.tree_bytes));
        s.push_str(&format!("contentbits={}\n", val.content_bits));
        s.push_str(&format!("entropy={:.4}\n", val.entropy));
        s.push_str(&format!("savings={:.4}%\n", val.savings_percent()));
        s.push_str(&format!("time={}ns\n", val.time_ns));

        s
    }
}

#[test]
fn entropy_of_a_uniform_pair_is_one_bit() {
    let mut freqs = FreqTable::new();
    freqs.insert(97, 4);
    freqs.insert(98, 4);

    assert!((entropy(&freqs) - 1.0).abs() < 1e-9);
}

#[test]
fn entropy_of_a_single_symbol_is_zero() {
    let mut freqs = FreqTable::new();
    freqs.insert(97, 9);

    assert!(entropy(&freqs).abs() < 1e-9);
}

#[test]
fn report_lists_every_field() {
    let report: String = CompressionStats {
        input_bytes: 100,
        output_bytes: 60,
        ..Default::default()
    }
    .into();

    for key in [
        "inputbytes=100",
        "outputbytes=60",
        "inputsymbols=",
        "distinctsymbols=",
        "treebytes=",
        "contentbits=",
        "entropy=",
        "savings=40.0000%",
        "time=",
    ] {
        assert!(report.contains(key), "report is missing {}", key);
    }
}
