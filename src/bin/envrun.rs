use std::env;
use std::ffi::OsString;
#[cfg(unix)]
use std::os::unix::process::CommandExt;
use std::path::PathBuf;
use std::process::{self, Command};

use envstore::Store;

const DEFAULT_FILE: &str = ".env";

const HELP: &str = "\
envrun - run commands with variables loaded from dotenv files

Usage:
  envrun run [OPTIONS] -- COMMAND [ARGS...]
  envrun run [OPTIONS] COMMAND [ARGS...]
  envrun --help
  envrun --version

Commands:
  run       Load dotenv files and execute a command
";

const RUN_HELP: &str = "\
envrun run - load dotenv files and execute a command

Usage:
  envrun run [OPTIONS] -- COMMAND [ARGS...]
  envrun run [OPTIONS] COMMAND [ARGS...]

Options:
  -f, --file <PATHS>      Dotenv file path(s). Repeat or pass comma-separated paths.
                          Defaults to .env.
  -i, --ignore-missing    Skip dotenv files that do not exist.
  -h, --help              Show this help text.

Values from later files override earlier ones, and every loaded value
overrides an inherited environment variable of the same name.
";

#[derive(Debug, Clone, PartialEq, Eq)]
enum RunCommand {
    Help,
    Execute(RunOptions),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct RunOptions {
    files: Vec<PathBuf>,
    required: bool,
    command: OsString,
    args: Vec<OsString>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            required: true,
            command: OsString::new(),
            args: Vec::new(),
        }
    }
}

fn main() {
    process::exit(run(env::args_os()));
}

fn run(args: impl IntoIterator<Item = OsString>) -> i32 {
    let mut args = args.into_iter();
    let _bin = args.next();

    let Some(subcommand) = args.next() else {
        print_help();
        return 0;
    };

    let subcommand = subcommand.to_string_lossy();
    match subcommand.as_ref() {
        "-h" | "--help" | "help" => {
            print_help();
            0
        }
        "-V" | "--version" | "version" => {
            print_version();
            0
        }
        "run" => match parse_run_options(args.collect()) {
            Ok(RunCommand::Help) => {
                print_run_help();
                0
            }
            Ok(RunCommand::Execute(options)) => match execute_run(options) {
                Ok(code) => code,
                Err(err) => {
                    eprintln!("envrun: {err}");
                    1
                }
            },
            Err(err) => {
                eprintln!("envrun: {err}");
                eprintln!("Try `envrun run --help`.");
                1
            }
        },
        unknown => {
            eprintln!("envrun: unknown subcommand `{unknown}`");
            eprintln!("Try `envrun --help`.");
            1
        }
    }
}

fn parse_run_options(args: Vec<OsString>) -> Result<RunCommand, String> {
    let mut options = RunOptions::default();
    let mut index = 0usize;
    while index < args.len() {
        let token = args[index].to_string_lossy();
        match token.as_ref() {
            "--" => {
                index += 1;
                break;
            }
            "-h" | "--help" => return Ok(RunCommand::Help),
            "-f" | "--file" => {
                index += 1;
                let Some(value) = args.get(index) else {
                    return Err("missing value for `-f/--file`".to_owned());
                };
                parse_file_text(&value.to_string_lossy(), &mut options.files)?;
                index += 1;
            }
            value if value.starts_with("--file=") => {
                parse_file_text(&value["--file=".len()..], &mut options.files)?;
                index += 1;
            }
            "-i" | "--ignore-missing" => {
                options.required = false;
                index += 1;
            }
            unknown if unknown.starts_with('-') => {
                return Err(format!("unknown option `{unknown}`"));
            }
            _ => break,
        }
    }

    let remaining = &args[index..];
    let Some((command, command_args)) = remaining.split_first() else {
        return Err("missing command after `run`".to_owned());
    };

    if options.files.is_empty() {
        options.files.push(PathBuf::from(DEFAULT_FILE));
    }

    options.command = command.clone();
    options.args = command_args.to_vec();
    Ok(RunCommand::Execute(options))
}

fn parse_file_text(raw: &str, files: &mut Vec<PathBuf>) -> Result<(), String> {
    let mut added = 0usize;
    for segment in raw.split(',') {
        let trimmed = segment.trim();
        if trimmed.is_empty() {
            continue;
        }
        files.push(PathBuf::from(trimmed));
        added += 1;
    }
    if added == 0 {
        return Err("`-f/--file` requires at least one path".to_owned());
    }
    Ok(())
}

fn execute_run(options: RunOptions) -> Result<i32, String> {
    let store = Store::new();
    for path in &options.files {
        match store.load(path) {
            Ok(_) => {}
            Err(envstore::Error::Io(err))
                if !options.required && err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => {
                return Err(format!("failed to load `{}`: {err}", path.display()));
            }
        }
    }

    let mut command = Command::new(&options.command);
    command.args(&options.args);
    command.envs(store.snapshot());

    execute_command(command, &options.command)
}

#[cfg(unix)]
fn execute_command(mut command: Command, program: &OsString) -> Result<i32, String> {
    let err = command.exec();
    Err(format!(
        "failed to execute `{}`: {err}",
        program.to_string_lossy()
    ))
}

#[cfg(not(unix))]
fn execute_command(mut command: Command, program: &OsString) -> Result<i32, String> {
    let status = command
        .status()
        .map_err(|err| format!("failed to execute `{}`: {err}", program.to_string_lossy()))?;
    Ok(status.code().unwrap_or(1))
}

fn print_help() {
    println!("{HELP}");
}

fn print_run_help() {
    println!("{RUN_HELP}");
}

fn print_version() {
    println!("envrun {}", env!("CARGO_PKG_VERSION"));
}

#[cfg(test)]
mod tests {
    use super::{RunCommand, RunOptions, parse_run_options};
    use std::ffi::OsString;
    use std::path::PathBuf;

    #[test]
    fn parse_run_uses_defaults() {
        let parsed = parse_run_options(vec![OsString::from("printenv"), OsString::from("FOO")])
            .expect("parse should succeed");
        let RunCommand::Execute(options) = parsed else {
            panic!("expected execute");
        };

        assert_eq!(options.files, vec![PathBuf::from(".env")]);
        assert!(options.required);
        assert_eq!(options.command, OsString::from("printenv"));
        assert_eq!(options.args, vec![OsString::from("FOO")]);
    }

    #[test]
    fn parse_run_supports_repeated_and_comma_separated_files() {
        let parsed = parse_run_options(vec![
            OsString::from("-f"),
            OsString::from(".env.local,.env"),
            OsString::from("--file"),
            OsString::from("custom.env"),
            OsString::from("--"),
            OsString::from("printenv"),
            OsString::from("FOO"),
        ])
        .expect("parse should succeed");
        let RunCommand::Execute(options) = parsed else {
            panic!("expected execute");
        };

        assert_eq!(
            options.files,
            vec![
                PathBuf::from(".env.local"),
                PathBuf::from(".env"),
                PathBuf::from("custom.env"),
            ]
        );
    }

    #[test]
    fn parse_run_reports_missing_file_value() {
        let err = parse_run_options(vec![OsString::from("-f")]).expect_err("parse should fail");
        assert_eq!(err, "missing value for `-f/--file`");
    }

    #[test]
    fn parse_run_rejects_empty_file_list() {
        let err = parse_run_options(vec![
            OsString::from("-f"),
            OsString::from(","),
            OsString::from("printenv"),
            OsString::from("FOO"),
        ])
        .expect_err("parse should fail");
        assert_eq!(err, "`-f/--file` requires at least one path");
    }

    #[test]
    fn parse_run_help_short_circuits() {
        let parsed = parse_run_options(vec![OsString::from("--help")]).expect("parse should work");
        assert_eq!(parsed, RunCommand::Help);
    }

    #[test]
    fn run_options_default_requires_files() {
        let options = RunOptions::default();
        assert!(options.required);
        assert!(options.files.is_empty());
    }

    #[test]
    fn parse_run_ignore_missing_clears_required() {
        let parsed = parse_run_options(vec![
            OsString::from("--ignore-missing"),
            OsString::from("true"),
        ])
        .expect("parse should succeed");
        let RunCommand::Execute(options) = parsed else {
            panic!("expected execute");
        };
        assert!(!options.required);
    }
}
