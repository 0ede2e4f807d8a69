use std::{fs, path::Path, time::Instant};

use clap::Parser;
use log::{debug, error, info};

use hufftext_rust::{
    codec,
    container::Container,
    frequency::count_frequencies,
    stats::{self, CompressionStats},
};

#[derive(Parser, Debug)]
#[command(about = "Compress a text file into a Huffman container")]
struct Args {
    /// The source text filename
    source_name: String,
    /// The destination container filename
    dest_name: String,
    /// Write a plain-text report to <DEST_NAME>.stats
    #[arg(short, long, default_value_t = false)]
    stats: bool,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let text = match fs::read_to_string(&args.source_name) {
        Ok(text) => text,
        Err(e) => {
            error!("could not read {}: {}", args.source_name, e);
            std::process::exit(1);
        }
    };

    info!("compressing {} ({} bytes)", args.source_name, text.len());

    let comp_time = Instant::now();
    let bytes = match codec::compress(&text) {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("compression failed: {}", e);
            std::process::exit(1);
        }
    };
    let comp_time = comp_time.elapsed().as_nanos();

    if let Err(e) = codec::write_atomic(Path::new(&args.dest_name), &bytes) {
        error!("could not write {}: {}", args.dest_name, e);
        std::process::exit(1);
    }

    println!(
        "compressed {} into {} ({} -> {} bytes) in {}ns",
        args.source_name,
        args.dest_name,
        text.len(),
        bytes.len(),
        comp_time
    );

    if args.stats {
        let freqs = count_frequencies(text.encode_utf16());
        let container = Container::from_bytes(&bytes).expect("Failed reparsing the container");

        let report = CompressionStats {
            input_bytes: text.len(),
            output_bytes: bytes.len(),
            input_symbols: freqs.values().sum(),
            distinct_symbols: freqs.len(),
            tree_bytes: container.tree.len(),
            content_bits: container.content.bit_len,
            entropy: stats::entropy(&freqs),
            time_ns: comp_time,
        };

        let stats_name = format!("{}.stats", args.dest_name);
        fs::write(&stats_name, String::from(report)).expect("Failed writing the stats file");
        debug!("stats written to {}", stats_name);
    }
}
