//! Simple command that prints UUID strings
//!
//! - `rfc4122 [-1 | -4] [-n count]` prints one or `count` time-based or random UUIDs.
//! - `rfc4122 (-3 | -5) <namespace> <name>` prints a name-based UUID, where `namespace` is one of
//!   `dns`, `url`, `oid`, `x500`, or any UUID string.

use rfc4122::{HashAlgorithm, Uuid};
use std::{env, io, io::Write, process::ExitCode};

enum Command {
    Generate { version: u8, count: usize },
    FromName(HashAlgorithm, Uuid, String),
}

fn main() -> io::Result<ExitCode> {
    let command = {
        let mut args = env::args();
        let program = args.next();
        match parse_args(args) {
            Ok(command) => command,
            Err(message) => {
                let program = program.as_deref().unwrap_or("rfc4122");
                eprintln!("Error: {}", message);
                eprintln!("Usage: {} [-1 | -4] [-n count]", program);
                eprintln!("       {} (-3 | -5) <namespace> <name>", program);
                return Ok(ExitCode::FAILURE);
            }
        }
    };

    let mut buf = io::BufWriter::new(io::stdout());
    match command {
        Command::Generate { version, count } => {
            for _ in 0..count {
                let uuid = match version {
                    1 => rfc4122::uuid1(),
                    _ => rfc4122::uuid4(),
                };
                match uuid {
                    Ok(uuid) => writeln!(buf, "{}", uuid)?,
                    Err(err) => {
                        buf.flush()?;
                        eprintln!("Error: {}", err);
                        return Ok(ExitCode::FAILURE);
                    }
                }
            }
        }
        Command::FromName(algorithm, namespace, name) => {
            writeln!(buf, "{}", Uuid::from_name(&namespace, name, algorithm))?;
        }
    }

    buf.flush()?;
    Ok(ExitCode::SUCCESS)
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Command, String> {
    let mut version = None;
    let mut count = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-1" | "-4" | "-3" | "-5" => {
                if version.is_some() {
                    return Err("version given more than once".to_owned());
                }
                version.replace(arg.as_bytes()[1] - b'0');
            }
            "-n" => {
                if count.is_some() {
                    return Err("option 'n' given more than once".to_owned());
                }
                let Some(n_arg) = args.next() else {
                    return Err("argument to option 'n' missing".to_owned());
                };
                let Ok(c) = n_arg.parse() else {
                    return Err(format!("invalid argument to option 'n': '{}'", n_arg));
                };
                count.replace(c);
            }
            _ => {
                let algorithm = match version {
                    Some(3) => HashAlgorithm::Md5,
                    Some(5) => HashAlgorithm::Sha1,
                    _ => return Err(format!("unrecognized argument '{}'", arg)),
                };
                if count.is_some() {
                    return Err("option 'n' not allowed for name-based UUIDs".to_owned());
                }
                let namespace = parse_namespace(&arg)?;
                let Some(name) = args.next() else {
                    return Err("name missing".to_owned());
                };
                if let Some(extra) = args.next() {
                    return Err(format!("unrecognized argument '{}'", extra));
                }
                return Ok(Command::FromName(algorithm, namespace, name));
            }
        }
    }

    match version {
        Some(3) | Some(5) => Err("namespace and name missing".to_owned()),
        _ => Ok(Command::Generate {
            version: version.unwrap_or(4),
            count: count.unwrap_or(1),
        }),
    }
}

fn parse_namespace(arg: &str) -> Result<Uuid, String> {
    match arg {
        "dns" => Ok(Uuid::NAMESPACE_DNS),
        "url" => Ok(Uuid::NAMESPACE_URL),
        "oid" => Ok(Uuid::NAMESPACE_OID),
        "x500" => Ok(Uuid::NAMESPACE_X500),
        _ => arg
            .parse()
            .map_err(|err| format!("invalid namespace '{}': {}", arg, err)),
    }
}
