use organ_matrix::MidiGrid;
use organ_matrix_cli::{CliError, exit_with, flag_value, init_logging, load_config, parse_number};
use std::io::Write as _;

#[derive(Debug, Default)]
struct Args {
    config: Option<String>,
    keys: Option<usize>,
    base: Option<u8>,
}

fn usage() -> &'static str {
    "generate-midi-map\n\
\n\
USAGE:\n\
  generate-midi-map [--config <path>] [--keys <n>] [--base <midi-note>]\n\
\n\
NOTES:\n\
  - Prints the midiNoteMap initializer rows, one per input wire, to stdout.\n\
  - --base is the MIDI note of the lowest key (default: 36).\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "--config" => args.config = Some(flag_value(&mut it, usage())?.to_string()),
            "--keys" => args.keys = Some(parse_number(flag_value(&mut it, usage())?, usage())?),
            "--base" => args.base = Some(parse_number(flag_value(&mut it, usage())?, usage())?),
            _ => return Err(CliError::Usage(usage())),
        }
    }
    Ok(args)
}

fn run(args: Args) -> Result<(), CliError> {
    let mut cfg = load_config(args.config.as_deref())?;
    if let Some(keys) = args.keys {
        cfg.key_count = keys;
    }
    if let Some(base) = args.base {
        cfg.midi_base = base;
    }
    let matrix = cfg.matrix()?;
    let grid = MidiGrid::build(&matrix, cfg.midi_base)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(grid.to_c_rows().as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn main() {
    init_logging();
    let result = parse_args(&std::env::args().collect::<Vec<_>>()).and_then(run);
    if let Err(err) = result {
        exit_with(err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(rest: &[&str]) -> Vec<String> {
        std::iter::once("generate-midi-map")
            .chain(rest.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn takes_no_positional_arguments() {
        assert!(matches!(
            parse_args(&argv(&["out.txt"])),
            Err(CliError::Usage(_))
        ));
    }

    #[test]
    fn base_and_keys() {
        let args = parse_args(&argv(&["--base", "48", "--keys", "32"])).unwrap();
        assert_eq!(args.base, Some(48));
        assert_eq!(args.keys, Some(32));
    }
}
