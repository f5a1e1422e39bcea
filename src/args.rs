use lexopt::{Arg, Parser};
use std::path::PathBuf;

pub(crate) static USAGE: &str = "\
Usage: asciisnake [options]

Play Snake in the terminal.  Steer with w/a/s/d or the arrow keys, press q to
quit, and press r to play again after a game over.

Options:
  -c, --config <PATH>     Read configuration from the given TOML file
  -l, --log-file <PATH>   Write log messages to the given file
  -v, --verbose           Include debugging messages in the log
  -h, --help              Show this help and exit
  -V, --version           Show the program version and exit
";

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Arguments {
    Run(RunOptions),
    Help,
    Version,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct RunOptions {
    /// Configuration file to use instead of the default one
    pub(crate) config: Option<PathBuf>,

    /// Log file, overriding any given in the configuration
    pub(crate) log_file: Option<PathBuf>,

    pub(crate) verbose: bool,
}

impl Arguments {
    pub(crate) fn from_env() -> Result<Arguments, lexopt::Error> {
        Arguments::from_parser(Parser::from_env())
    }

    fn from_parser(mut parser: Parser) -> Result<Arguments, lexopt::Error> {
        let mut opts = RunOptions::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Arguments::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Arguments::Version),
                Arg::Short('c') | Arg::Long("config") => {
                    opts.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('l') | Arg::Long("log-file") => {
                    opts.log_file = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('v') | Arg::Long("verbose") => opts.verbose = true,
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Arguments::Run(opts))
    }
}
