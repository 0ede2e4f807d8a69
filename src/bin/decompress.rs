use std::{fs, path::Path, time::Instant};

use clap::Parser;
use log::{error, info};

use hufftext_rust::codec;

#[derive(Parser, Debug)]
#[command(about = "Expand a Huffman container back into a text file")]
struct Args {
    /// The source container filename
    source_name: String,
    /// The destination text filename
    dest_name: String,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let bytes = match fs::read(&args.source_name) {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("could not read {}: {}", args.source_name, e);
            std::process::exit(1);
        }
    };

    info!("decompressing {} ({} bytes)", args.source_name, bytes.len());

    let comp_time = Instant::now();
    let text = match codec::decompress(&bytes) {
        Ok(text) => text,
        Err(e) => {
            error!("decompression failed: {}", e);
            std::process::exit(1);
        }
    };
    let comp_time = comp_time.elapsed().as_nanos();

    if let Err(e) = codec::write_atomic(Path::new(&args.dest_name), text.as_bytes()) {
        error!("could not write {}: {}", args.dest_name, e);
        std::process::exit(1);
    }

    println!(
        "decompressed {} into {} ({} -> {} bytes) in {}ns",
        args.source_name,
        args.dest_name,
        bytes.len(),
        text.len(),
        comp_time
    );
}
