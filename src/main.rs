use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use armdecode::{ArchConfig, ArchVersion, DecodeState, DecoderContext, InstructionInfo, Mode};
use clap::{Args, Parser, Subcommand, ValueEnum};
use morac::{BusFetch, BusInterface, MemoryBus};
use tracing_subscriber::EnvFilter;

/// Decodes and disassembles ARM and Thumb instructions.
#[derive(Parser, Debug)]
#[command(name = "aasim", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    opts: Options,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode ARM words.
    Arm {
        #[arg(required = true, value_parser = parse_hex::<u32>)]
        words: Vec<u32>,
    },
    /// Decode one Thumb instruction, `hw2` only for 32-bit encodings.
    Thumb {
        #[arg(value_parser = parse_hex::<u16>)]
        hw1: u16,
        #[arg(value_parser = parse_hex::<u16>)]
        hw2: Option<u16>,
    },
    /// Disassemble a raw little-endian binary.
    Dump {
        file: PathBuf,
        #[arg(long)]
        thumb: bool,
        /// Stop after this many instructions.
        #[arg(long)]
        count: Option<usize>,
    },
}

#[derive(Args, Debug)]
struct Options {
    /// Address of the first instruction, hex.
    #[arg(long, global = true, default_value = "0", value_parser = parse_hex::<u32>)]
    address: u32,

    /// SCTLR.U set.
    #[arg(long, global = true)]
    unaligned: bool,

    /// Decode in ThumbEE state.
    #[arg(long, global = true)]
    thumbee: bool,

    /// ITSTATE byte, hex.
    #[arg(long, global = true, default_value = "0", value_parser = parse_hex::<u8>)]
    it_state: u8,

    /// Flag instructions the core does not implement.
    #[arg(long, global = true, value_enum, default_value_t = Core::V7)]
    core: Core,

    /// Print the decoded records as JSON.
    #[arg(long, global = true)]
    json: bool,
}

impl Options {
    const fn state(&self) -> DecodeState {
        DecodeState {
            unaligned: self.unaligned,
            it_state: self.it_state,
            thumb_ee: self.thumbee,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Core {
    V4t,
    V5te,
    V6,
    V6t2,
    V7,
}

impl Core {
    fn config(self) -> ArchConfig {
        let version = match self {
            Self::V4t => ArchVersion::V4T,
            Self::V5te => ArchVersion::V5TE,
            Self::V6 => ArchVersion::V6,
            Self::V6t2 => ArchVersion::V6T2,
            Self::V7 => ArchVersion::V7,
        };
        let v7 = matches!(self, Self::V7);

        ArchConfig {
            version,
            vfp: !matches!(self, Self::V4t),
            advsimd: v7,
            thumbee: v7,
            ..ArchConfig::default()
        }
    }
}

fn parse_hex<T: TryFrom<u64>>(value: &str) -> Result<T, String> {
    let digits = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value)
        .replace('_', "");

    let parsed = u64::from_str_radix(&digits, 16).map_err(|e| format!("`{value}`: {e}"))?;
    T::try_from(parsed).map_err(|_| format!("`{value}` is out of range"))
}

fn report(infos: &[InstructionInfo], opts: &Options) -> Result<()> {
    if opts.json {
        println!("{}", serde_json::to_string_pretty(infos).context("serializing decoded instructions")?);
        return Ok(());
    }

    let core = opts.core.config();
    for info in infos {
        let word = match info.size {
            2 => format!("{:04X}    ", info.word),
            _ => format!("{:08X}", info.word),
        };
        let note = if core.implements(info) { "" } else { "    ; not implemented" };
        println!("{:08X}:  {word}  {info}{note}", info.address);
    }
    Ok(())
}

fn dump(ctx: &DecoderContext, file: &Path, thumb: bool, count: Option<usize>, opts: &Options) -> Result<()> {
    let data = std::fs::read(file).with_context(|| format!("reading {}", file.display()))?;
    if data.is_empty() {
        bail!("{} is empty", file.display());
    }

    let bus = MemoryBus::new(opts.address, data.len());
    bus.write(opts.address, &data).context("loading the image")?;

    let (mode, step) = if thumb { (Mode::Thumb, 2) } else { (Mode::Arm, 4) };
    let state = opts.state();
    let end = u64::from(opts.address) + data.len() as u64;

    let mut infos = Vec::new();
    let mut address = opts.address;
    while u64::from(address) + step <= end && count.is_none_or(|n| infos.len() < n) {
        match ctx.fetch_and_decode(&mut BusFetch(&bus), address, mode, &state) {
            Ok(info) => {
                address = address.wrapping_add(u32::from(info.size));
                infos.push(info);
            }
            Err(err) => {
                tracing::warn!("stopping at {address:#010X}: {err}");
                break;
            }
        }
    }

    report(&infos, opts)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let opts = &cli.opts;
    let ctx = DecoderContext::shared();
    let state = opts.state();

    match &cli.command {
        Command::Arm { words } => {
            let infos: Vec<_> = words
                .iter()
                .enumerate()
                .map(|(i, word)| ctx.decode_arm(opts.address.wrapping_add(4 * i as u32), *word, &state))
                .collect();
            report(&infos, opts)
        }
        Command::Thumb { hw1, hw2 } => {
            if armdecode::thumb_instruction_size(*hw1) == 4 && hw2.is_none() {
                bail!("{hw1:#06X} starts a 32-bit encoding, pass the second halfword");
            }
            let info = ctx.decode_thumb(opts.address, *hw1, hw2.unwrap_or(0), &state);
            report(&[info], opts)
        }
        Command::Dump { file, thumb, count } => dump(ctx, file, *thumb, *count, opts),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn hex_arguments() {
        assert_eq!(parse_hex::<u32>("0xE12F_FF41"), Ok(0xE12F_FF41));
        assert_eq!(parse_hex::<u32>("e12fff41"), Ok(0xE12F_FF41));
        assert_eq!(parse_hex::<u16>("0X4770"), Ok(0x4770));
        assert!(parse_hex::<u8>("100").is_err());
        assert!(parse_hex::<u32>("xyz").is_err());
    }

    #[test]
    fn older_cores_drop_extensions() {
        let core = Core::V5te.config();
        assert!(core.vfp);
        assert!(!core.advsimd);
        assert!(!core.thumbee);
        assert!(Core::V7.config().advsimd);
    }

    #[test]
    fn core_names_match_their_version() {
        assert_eq!(Core::V6.config().version, ArchVersion::V6);
        assert_eq!(Core::V6t2.config().version, ArchVersion::V6T2);
        assert!(!Core::V6.config().supports(ArchVersion::V6K, armdecode::IsaFeature::Base));
    }

    #[test]
    fn global_options_follow_the_subcommand() {
        let cli = Cli::try_parse_from(["aasim", "thumb", "C301", "--thumbee", "--it-state", "18"]).unwrap();
        assert!(cli.opts.thumbee);
        assert_eq!(cli.opts.it_state, 0x18);
        assert!(matches!(cli.command, Command::Thumb { hw1: 0xC301, hw2: None }));
    }
}
