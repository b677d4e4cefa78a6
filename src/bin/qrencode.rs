use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, ValueEnum};
use rust_qrencode::render::{self, RenderConfig};
use rust_qrencode::{ECLevel, EncodeOptions, Encoder, MaskPattern, Mode};
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "qrencode", version, about = "Encode text into a QR code")]
struct Cli {
    /// Text to encode; read from stdin when absent
    text: Option<String>,
    /// Error correction level (L, M, Q, H); strongest fitting level when absent
    #[arg(long, value_parser = parse_ec_level)]
    ec_level: Option<ECLevel>,
    /// Force an encoding mode
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,
    /// Force a mask pattern (0-7)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..8))]
    mask: Option<u8>,
    /// Write an image; format follows the extension
    #[arg(long)]
    output: Option<PathBuf>,
    /// Pixels per module
    #[arg(long, default_value_t = 10)]
    size: u32,
    /// Quiet zone width in modules
    #[arg(long, default_value_t = 4)]
    border: u32,
    /// Print the signed module matrix
    #[arg(long)]
    matrix: bool,
    /// Print the symbol as terminal blocks
    #[arg(long = "text")]
    terminal: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Numeric,
    Alphanumeric,
    Byte,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Numeric => Mode::Numeric,
            ModeArg::Alphanumeric => Mode::Alphanumeric,
            ModeArg::Byte => Mode::Byte,
        }
    }
}

fn parse_ec_level(s: &str) -> Result<ECLevel, String> {
    let mut chars = s.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => {
            ECLevel::from_letter(c).ok_or_else(|| format!("unknown level '{}'", s))
        }
        _ => Err(format!("unknown level '{}'", s)),
    }
}

fn main() {
    if let Err(err) = run(Cli::parse()) {
        eprintln!("error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let input = match cli.text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf.trim_end_matches(['\r', '\n']).to_string()
        }
    };

    let mask = cli
        .mask
        .map(|bits| MaskPattern::from_bits(bits).ok_or_else(|| anyhow!("invalid mask {}", bits)))
        .transpose()?;
    let encoder = Encoder::with_options(EncodeOptions {
        ec_level: cli.ec_level,
        mode: cli.mode.map(Mode::from),
        mask,
    });
    if cli.size == 0 {
        bail!("--size must be at least 1");
    }
    let qr = encoder.encode_str(&input)?;

    eprintln!(
        "version={} ec_level={} mode={} mask={}",
        qr.version(),
        qr.ec_level(),
        qr.mode(),
        qr.mask_pattern().bits()
    );

    let config = RenderConfig {
        module_size: cli.size,
        border: cli.border,
    };

    let mut printed = false;
    if cli.matrix {
        println!("{}", render::format_signed_rows(&qr));
        printed = true;
    }
    if cli.terminal {
        print!("{}", render::to_text(&qr, cli.border as usize));
        printed = true;
    }
    if let Some(path) = &cli.output {
        render::save(&qr, path, &config)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("Saved {}", path.display());
        printed = true;
    }
    if !printed {
        print!("{}", render::to_text(&qr, cli.border as usize));
    }
    Ok(())
}
