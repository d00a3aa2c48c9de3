//! Embeds a binary (typically a compiled auxiliary module) into a C header
//! as `.word` directives, so simulator side sources can link it in.
//!
//! ```text
//! embedso build/vector_add.so out/   ->   out/vector_add.h
//! ```

use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;

#[derive(Parser, Debug)]
#[command(name = "embedso", version)]
struct Cli {
    /// Binary to embed.
    input: PathBuf,

    /// Directory receiving `<stem>.h`.
    #[arg(default_value = ".")]
    output_dir: PathBuf,
}

/// File stem turned into a C identifier.
fn identifier(path: &Path) -> Result<String> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .with_context(|| format!("{} has no usable file name", path.display()))?;

    let mut ident: String = stem
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    Ok(ident)
}

fn header(ident: &str, data: &[u8]) -> String {
    let guard = format!("{}_H", ident.to_ascii_uppercase());
    let mut out = String::with_capacity(32 * data.len() / 4 + 128);

    // Writing to a String cannot fail
    let _ = writeln!(out, "#ifndef {guard}");
    let _ = writeln!(out, "#define {guard}\n");
    let _ = writeln!(out, "#define {ident}_size {}\n", data.len());

    for chunk in data.chunks(4) {
        let mut word = [0; 4];
        word[..chunk.len()].copy_from_slice(chunk);
        let _ = writeln!(out, "asm(\".word 0x{:08x}\");", u32::from_le_bytes(word));
    }

    let _ = writeln!(out, "\n#endif");
    out
}

fn run(cli: &Cli) -> Result<PathBuf> {
    let data = std::fs::read(&cli.input).with_context(|| format!("reading {}", cli.input.display()))?;
    let ident = identifier(&cli.input)?;
    let output = cli.output_dir.join(format!("{ident}.h"));

    std::fs::write(&output, header(&ident, &data)).with_context(|| format!("writing {}", output.display()))?;
    tracing::debug!("embedded {} bytes into {}", data.len(), output.display());
    Ok(output)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(255);
        }
    };

    match run(&cli) {
        Ok(output) => {
            println!("{}", output.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("embedso: {err:#}");
            ExitCode::from(255)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn header_layout() {
        let text = header("vector_add", &[0x7F, b'E', b'L', b'F', 0x01, 0x02]);
        assert_eq!(
            text,
            concat!(
                "#ifndef VECTOR_ADD_H\n",
                "#define VECTOR_ADD_H\n\n",
                "#define vector_add_size 6\n\n",
                "asm(\".word 0x464c457f\");\n",
                "asm(\".word 0x00000201\");\n",
                "\n#endif\n",
            )
        );
    }

    #[test]
    fn stems_become_identifiers() {
        assert_eq!(identifier(Path::new("build/vector-add.so")).unwrap(), "vector_add");
        assert_eq!(identifier(Path::new("2d.bin")).unwrap(), "_2d");
        assert!(identifier(Path::new("/")).is_err());
    }

    #[test]
    fn missing_input_fails() {
        let cli = Cli {
            input: PathBuf::from("/nonexistent/module.so"),
            output_dir: PathBuf::from("."),
        };
        assert!(run(&cli).is_err());
    }

    #[test]
    fn missing_argument_is_an_error() {
        let err = Cli::try_parse_from(["embedso"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }
}
