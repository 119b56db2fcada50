// ABOUTME: Command line argument definitions and resolution using Clap
// ABOUTME: Turns raw tokens into an invocation config or an about/help action

use clap::builder::{NonEmptyStringValueParser, TypedValueParser};
use clap::{ArgMatches, CommandFactory, Parser};
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::debug;

use super::config::InvocationConfig;
use super::error::CliError;
use super::{EXIT_HELP, EXIT_SUCCESS};
use crate::template::Charset;

pub const USAGE: &str =
    "template-cli -c foo=bar -t template.hbs [-o output.txt] [-e encoding] [-x escapetool]";

#[derive(Parser, Debug)]
#[command(name = "template-cli")]
#[command(about = "Render a Handlebars template against a key/value context")]
#[command(override_usage = USAGE)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Args {
    #[arg(short = 'a', long = "about", help = "display about message")]
    pub about: bool,

    #[arg(short = 'h', long = "help", help = "display help message")]
    pub help: bool,

    #[arg(
        short = 'c',
        long = "context",
        value_name = "KEY=VALUE[,KEY=VALUE]*",
        help = "context as comma-separated key value pairs"
    )]
    pub context: String,

    #[arg(
        short = 't',
        long = "template",
        value_name = "FILE",
        value_parser = NonEmptyStringValueParser::new().map(PathBuf::from),
        help = "template file"
    )]
    pub template: PathBuf,

    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "output file, default stdout"
    )]
    pub output: Option<PathBuf>,

    #[arg(
        short = 'e',
        long = "encoding",
        value_name = "CHARSET",
        help = "encoding, default utf-8"
    )]
    pub encoding: Option<String>,

    #[arg(
        short = 'x',
        long = "escapetool",
        value_name = "NAME",
        help = "add escapetool into context"
    )]
    pub escapetool: Option<String>,
}

/// What the application should do after argument resolution.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    About,
    Help { status: i32 },
    Invoke(InvocationConfig),
}

impl Args {
    /// Resolve raw tokens (program name first) into an [`Action`].
    ///
    /// About wins over help, and help wins over a parse error. Help after a
    /// successful parse exits with [`EXIT_HELP`], help rescued from a parse
    /// error exits with [`EXIT_SUCCESS`].
    pub fn resolve<I, T>(tokens: I) -> Result<Action, CliError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let tokens: Vec<OsString> = tokens.into_iter().map(Into::into).collect();

        let args = match Self::try_parse_from(&tokens) {
            Ok(args) => args,
            Err(e) => {
                debug!("Argument parsing failed: {}", e.kind());
                let (about, help) = Self::switches_found(&tokens);
                if about {
                    return Ok(Action::About);
                }
                if help {
                    return Ok(Action::Help {
                        status: EXIT_SUCCESS,
                    });
                }
                return Err(CliError::Parse(e));
            }
        };

        if args.about {
            return Ok(Action::About);
        }
        if args.help {
            return Ok(Action::Help { status: EXIT_HELP });
        }

        let charset = match &args.encoding {
            Some(label) if Charset::is_supported(label) => Charset::for_name(label)
                .map_err(|_| CliError::UnsupportedEncoding(label.clone()))?,
            Some(label) => return Err(CliError::UnsupportedEncoding(label.clone())),
            None => Charset::default(),
        };
        debug!("Resolved charset: {}", charset);

        Ok(Action::Invoke(args.into_config(charset)))
    }

    /// Which of `--about`/`--help` were seen before parsing gave up
    fn switches_found(tokens: &[OsString]) -> (bool, bool) {
        match Self::command()
            .ignore_errors(true)
            .try_get_matches_from(tokens)
        {
            Ok(matches) => (flag(&matches, "about"), flag(&matches, "help")),
            Err(_) => (false, false),
        }
    }

    fn into_config(self, charset: Charset) -> InvocationConfig {
        InvocationConfig {
            template: self.template,
            output: self.output,
            charset,
            context: self.context,
            escape_tool: self.escapetool,
        }
    }

    /// Usage line followed by the argument list
    pub fn usage() -> String {
        Self::command().render_help().to_string()
    }

    pub fn about_text() -> String {
        format!(
            "{} {}\n{}\nLicensed under the {} license.\n",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            env!("CARGO_PKG_DESCRIPTION"),
            env!("CARGO_PKG_LICENSE"),
        )
    }
}

fn flag(matches: &ArgMatches, id: &str) -> bool {
    matches
        .try_get_one::<bool>(id)
        .ok()
        .flatten()
        .copied()
        .unwrap_or(false)
}
