use anyhow::{Context, Result};
use audio2mozzi::{BitWidth, ConversionReport, ConvertOptions, InputEncoding, InputSpec, RawInfo};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "audio2mozzi")]
#[command(version)]
#[command(about = "Convert a raw audio file to a Mozzi table", long_about = None)]
struct Cli {
    /// Path to the input file
    input_file: PathBuf,
    /// Input encoding
    #[arg(short = 'e', long, value_enum, default_value = "int")]
    input_encoding: EncodingArg,
    /// Number of bits for the INPUT encoding
    #[arg(long, default_value = "8", value_parser = parse_bits)]
    input_bits: BitWidth,
    /// Number of bits for each element of the OUTPUT table
    #[arg(long, default_value = "8", value_parser = parse_bits)]
    output_bits: BitWidth,
    /// Path to the output file. It will be input_file.h if not provided
    #[arg(short, long)]
    output_file: Option<PathBuf>,
    /// Name of the output table. If not provided, the name of the output will be used
    #[arg(short, long)]
    table_name: Option<String>,
    /// Sample rate. Value of 16384 recommended
    #[arg(short, long, default_value_t = audio2mozzi::DEFAULT_SAMPLE_RATE)]
    sample_rate: u32,
    /// Normalize the output between the range +/- max
    #[arg(long)]
    make_symmetrical: bool,
    /// Seed for the anti-corruption dither, for reproducible output
    #[arg(long)]
    seed: Option<u64>,
    /// Only inspect the input, don't write a table
    #[arg(long)]
    info: bool,
    /// Print the result as JSON
    #[arg(long)]
    json: bool,
    /// No status output
    #[arg(short, long, conflicts_with = "json")]
    quiet: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum EncodingArg {
    Float,
    Int,
}

impl From<EncodingArg> for InputEncoding {
    fn from(arg: EncodingArg) -> Self {
        match arg {
            EncodingArg::Float => InputEncoding::Float,
            EncodingArg::Int => InputEncoding::Int,
        }
    }
}

fn parse_bits(s: &str) -> Result<BitWidth, String> {
    let bits: u8 = s
        .parse()
        .map_err(|_| format!("{} is not a number of bits", s))?;
    BitWidth::try_from(bits).map_err(|e| e.to_string())
}

impl Cli {
    fn options(&self) -> ConvertOptions {
        let mut options = ConvertOptions::new(
            InputSpec::new(self.input_encoding.into(), self.input_bits),
            self.output_bits,
        )
        .with_sample_rate(self.sample_rate)
        .with_symmetry(self.make_symmetrical);

        if let Some(path) = &self.output_file {
            options = options.with_output_file(path);
        }
        if let Some(name) = &self.table_name {
            options = options.with_table_name(name);
        }
        if let Some(seed) = self.seed {
            options = options.with_seed(seed);
        }
        options
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let options = cli.options();

    if cli.info {
        info(&cli, &options)
    } else {
        convert(&cli, &options)
    }
}

fn convert(cli: &Cli, options: &ConvertOptions) -> Result<()> {
    let status = !cli.quiet && !cli.json;

    if status {
        println!("Reading {}...", cli.input_file.display());
    }

    let report = audio2mozzi::convert_file(&cli.input_file, options)?;

    if cli.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", json);
    } else if status {
        print_report(&report);
    }

    Ok(())
}

fn print_report(report: &ConversionReport) {
    let stats = &report.stats;
    let table = &report.table;

    println!(
        "  Format:      {} {}-bit",
        report.options.input.encoding, report.options.input.bits
    );
    println!("  Samples:     {}", stats.decoded_samples);
    if stats.dropped_bytes > 0 {
        println!("  Dropped:     {} trailing bytes", stats.dropped_bytes);
    }
    println!("Writing {} ({})...", table.name, table.output_bits.c_type());
    if stats.dither_insertions > 0 {
        println!("  Dithered:    {} runs of 33", stats.dither_insertions);
    }
    if report.options.make_symmetrical {
        println!(
            "  Symmetrical: {}",
            if stats.normalized { "remapped" } else { "not needed" }
        );
    }
    if let (Some(min), Some(max)) = (stats.min_value, stats.max_value) {
        println!("  Range:       {} to {}", min, max);
    }

    println!("Done!");
    println!("  Output: {}", report.output.display());
    println!("  Cells:  {}", table.num_cells);
}

fn info(cli: &Cli, options: &ConvertOptions) -> Result<()> {
    let raw = audio2mozzi::inspect_file(&cli.input_file, options)?;

    if cli.json {
        let json = serde_json::to_string_pretty(&raw).context("Failed to serialize info")?;
        println!("{}", json);
    } else if !cli.quiet {
        print_info(&cli.input_file, &raw, options.sample_rate);
    }

    Ok(())
}

fn print_info(input: &Path, raw: &RawInfo, sample_rate: u32) {
    println!("Raw Audio File");
    println!("───────────────────────────────");
    println!("  File:        {}", input.display());
    println!("  Format:      {}", raw.format);
    println!("  Size:        {} bytes", raw.byte_len);
    println!("  Samples:     {}", raw.sample_count);
    println!("  Dropped:     {} bytes", raw.dropped_bytes);
    println!(
        "  Duration:    {:.3}s at {} Hz",
        raw.duration_secs, sample_rate
    );
    match (raw.min_sample, raw.max_sample) {
        (Some(min), Some(max)) => println!("  Range:       {} to {}", min, max),
        _ => println!("  Range:       (empty)"),
    }
}
