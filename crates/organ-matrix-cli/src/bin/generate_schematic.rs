use organ_matrix::SvgRenderOptions;
use organ_matrix_cli::{
    CliError, exit_with, flag_value, init_logging, load_config, parse_number, write_json,
};

const DEFAULT_OUT: &str = "organ_keys_schematic.svg";

#[derive(Debug, Default)]
struct Args {
    config: Option<String>,
    keys: Option<usize>,
    title: Option<String>,
    layout: bool,
    pretty: bool,
    out: Option<String>,
}

fn usage() -> &'static str {
    "generate-schematic\n\
\n\
USAGE:\n\
  generate-schematic [--config <path>] [--keys <n>] [--title <text>] [<out.svg>]\n\
  generate-schematic --layout [--pretty] [--config <path>] [--keys <n>]\n\
\n\
NOTES:\n\
  - The SVG is written to <out.svg> (default: organ_keys_schematic.svg).\n\
  - --layout prints the computed layout as JSON instead of writing SVG.\n\
  - --config reads a JSON matrix config; flags override its values.\n\
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
            "--title" => args.title = Some(flag_value(&mut it, usage())?.to_string()),
            "--layout" => args.layout = true,
            "--pretty" => args.pretty = true,
            other if other.starts_with("--") => return Err(CliError::Usage(usage())),
            other => {
                if args.out.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.out = Some(other.to_string());
            }
        }
    }
    Ok(args)
}

fn run(args: Args) -> Result<(), CliError> {
    let mut cfg = load_config(args.config.as_deref())?;
    if let Some(keys) = args.keys {
        cfg.key_count = keys;
    }
    if args.title.is_some() {
        cfg.title = args.title;
    }
    let matrix = cfg.matrix()?;

    let options = SvgRenderOptions { title: cfg.title };
    let (layout, svg) = organ_matrix::generate_schematic_svg(&matrix, &options);

    if args.layout {
        return write_json(&layout, args.pretty);
    }

    let out = args.out.as_deref().unwrap_or(DEFAULT_OUT);
    organ_matrix::write_svg(out, &svg)?;
    println!(
        "Generated {out} ({} keys, {}x{}px)",
        layout.key_count, layout.width, layout.height
    );
    Ok(())
}

fn main() {
    init_logging();
    let result = parse_args(&std::env::args().collect::<Vec<_>>()).and_then(run);
    if let Err(err) = result {
        exit_with(err);
    }
}
