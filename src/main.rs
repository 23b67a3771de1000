use std::{fs, path::PathBuf, process::ExitCode};

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use log::{debug, info, LevelFilter};

use clc::{
    config::{Config, ErrorPolicy, ParseOptions, SegmentMode},
    error::{ClcError, ConfigError},
    frontend::{lexer::Lexer, parser::Parser},
};

fn main() -> ExitCode {
    let matches = cli().get_matches();
    init_logging(matches.get_count("verbose"));
    match Runner::from_args(&matches).and_then(|runner| runner.run()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn cli() -> Command<'static> {
    Command::new("clc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compiles boolean circuit descriptions (.cl) for assembly emission.")
        .arg(
            Arg::new("source")
                .value_name("SOURCE")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .help("Path to the .cl file that will be compiled."),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("OUTPUT")
                .takes_value(true)
                .value_parser(value_parser!(PathBuf))
                .help("Path of the .asm file to produce. Defaults to SOURCE with an .asm extension."),
        )
        .arg(
            Arg::new("lenient")
                .long("lenient")
                .action(ArgAction::SetTrue)
                .help("Silently drop a trailing statement without ';' instead of failing."),
        )
        .arg(
            Arg::new("all-errors")
                .long("all-errors")
                .action(ArgAction::SetTrue)
                .help("Report every syntax error instead of stopping at the first one."),
        )
        .arg(
            Arg::new("print-tokens")
                .long("print-tokens")
                .action(ArgAction::SetTrue)
                .help("Output the tokens. Useful for debugging."),
        )
        .arg(
            Arg::new("print-ast")
                .long("print-ast")
                .action(ArgAction::SetTrue)
                .help("Output the AST. Useful for debugging."),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .action(ArgAction::Count)
                .help("Increase logging verbosity (-v info, -vv debug, -vvv trace)."),
        )
}

/// `RUST_LOG` takes precedence over the `-v` count.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .parse_default_env()
        .init();
}

/// Coordinates reading the source file and running the front end on it.
struct Runner {
    config: Config,
    print_tokens: bool,
    print_ast: bool,
}

impl Runner {
    fn from_args(args: &ArgMatches) -> Result<Self, ClcError> {
        let source = args.get_one::<PathBuf>("source").cloned();
        let output = args.get_one::<PathBuf>("output").cloned();
        let options = ParseOptions {
            segment_mode: if args.get_flag("lenient") {
                SegmentMode::Lenient
            } else {
                SegmentMode::Strict
            },
            error_policy: if args.get_flag("all-errors") {
                ErrorPolicy::CollectAll
            } else {
                ErrorPolicy::AbortOnFirst
            },
        };
        Ok(Self {
            config: Config::new(source, output, options)?,
            print_tokens: args.get_flag("print-tokens"),
            print_ast: args.get_flag("print-ast"),
        })
    }

    fn run(&self) -> Result<(), ClcError> {
        let path = self.config.source_path();
        info!("[SOURCE PATH] {}", path.display());
        info!("[OUTPUT PATH] {}", self.config.output_path().display());
        let src = fs::read_to_string(path).map_err(|source| ClcError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("[START OF CODE]\n{}[END OF CODE]", src);

        let tokens = Lexer::new(&src).tokenize()?;
        if self.print_tokens {
            println!("Tokens:");
            tokens.iter().for_each(|token| println!("\t{}", token));
        }

        let program = Parser::with_options(tokens, self.config.options()).parse()?;
        if self.print_ast {
            println!("AST:");
            program.iter().for_each(|node| println!("\t{}", node));
        }
        info!("parsed {} statements from {}", program.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn runner(args: &[&str]) -> Result<Runner, ClcError> {
        let matches = cli()
            .try_get_matches_from(args)
            .expect("could not parse test string");
        Runner::from_args(&matches)
    }

    fn demo(name: &str) -> String {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("demos")
            .join(name)
            .display()
            .to_string()
    }

    #[test]
    fn test_args_parsing() {
        let runner = runner(&["clc", "circuit.cl"]).unwrap();
        assert_eq!(runner.config.source_path(), Path::new("circuit.cl"));
        assert_eq!(runner.config.output_path(), Path::new("circuit.asm"));
        assert_eq!(runner.config.options(), ParseOptions::default());
        assert!(!runner.print_tokens);
        assert!(!runner.print_ast);
    }

    #[test]
    fn test_flags() {
        let runner = runner(&[
            "clc",
            "circuit.cl",
            "-o",
            "build/out.asm",
            "--lenient",
            "--all-errors",
            "--print-ast",
        ])
        .unwrap();
        assert_eq!(runner.config.output_path(), Path::new("build/out.asm"));
        assert_eq!(runner.config.options().segment_mode, SegmentMode::Lenient);
        assert_eq!(runner.config.options().error_policy, ErrorPolicy::CollectAll);
        assert!(runner.print_ast);
    }

    #[test]
    fn test_missing_source() {
        assert!(cli().try_get_matches_from(vec!["clc"]).is_err());
        assert!(cli().try_get_matches_from(vec!["clc", "a.cl", "--unknown"]).is_err());
    }

    #[test]
    fn test_wrong_extension() {
        match runner(&["clc", "circuit.c"]) {
            Err(ClcError::Config(ConfigError::WrongSourceExtension(path))) => {
                assert_eq!(path, Path::new("circuit.c"))
            }
            _ => panic!("expected a config error"),
        }
        assert!(matches!(
            runner(&["clc", "circuit.cl", "-o", "circuit.s"]),
            Err(ClcError::Config(ConfigError::WrongOutputExtension(_)))
        ));
    }

    #[test]
    fn test_run() {
        runner(&["clc", &demo("half_on.cl")]).unwrap().run().unwrap();
        assert!(matches!(
            runner(&["clc", &demo("missing.cl")]).unwrap().run(),
            Err(ClcError::Io { .. })
        ));
        assert!(matches!(
            runner(&["clc", &demo("bad_roots.cl")]).unwrap().run(),
            Err(ClcError::Syntax(_))
        ));
    }
}
