//! Runtime configuration for the `microblog` binary.
//!
//! Flags win over environment variables, which win over defaults.

use anyhow::{Result, anyhow, bail};
use std::net::SocketAddr;

pub const DEFAULT_BIND: &str = "127.0.0.1:8080";
pub const DEFAULT_SHARDS: usize = 16;

pub const USAGE: &str = "\
Usage: microblog [--bind <addr:port>] [--store <global|sharded>] [--shards <n>] [--log-level <level>]

  --bind       address to listen on            (env MICROBLOG_BIND, default 127.0.0.1:8080)
  --store      global (one lock) or sharded    (env MICROBLOG_STORE, default global)
  --shards     shard count, power of two > 1   (env MICROBLOG_SHARDS, default 16)
  --log-level  trace|debug|info|warn|error     (env MICROBLOG_LOG, default info)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// `InMemoryStore`: one store-wide lock.
    Global,
    /// `ShardedStore`: concurrent maps split into `shards` shards.
    Sharded { shards: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub store: StoreKind,
    pub log_level: tracing::Level,
}

/// What the command line asked for.
#[derive(Debug, PartialEq)]
pub enum Command {
    Run(Config),
    Help,
}

impl Config {
    /// Reads `std::env::args` and the process environment.
    pub fn from_env() -> Result<Command> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::parse(&args, |key| std::env::var(key).ok())
    }

    /// Parses flags (without the program name), falling back to `env` lookups.
    pub fn parse<F>(args: &[String], env: F) -> Result<Command>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut bind = env("MICROBLOG_BIND");
        let mut store = env("MICROBLOG_STORE");
        let mut shards = env("MICROBLOG_SHARDS");
        let mut log_level = env("MICROBLOG_LOG");

        let mut i = 0;
        while i < args.len() {
            let flag = args[i].as_str();
            if flag == "--help" || flag == "-h" {
                return Ok(Command::Help);
            }

            let slot = match flag {
                "--bind" => &mut bind,
                "--store" => &mut store,
                "--shards" => &mut shards,
                "--log-level" => &mut log_level,
                other => bail!("unknown argument: {}", other),
            };
            let value = args
                .get(i + 1)
                .ok_or_else(|| anyhow!("{} requires a value", flag))?;
            *slot = Some(value.clone());
            i += 2;
        }

        let bind_addr: SocketAddr = bind
            .as_deref()
            .unwrap_or(DEFAULT_BIND)
            .parse()
            .map_err(|e| anyhow!("invalid bind address: {}", e))?;

        let shards = match shards {
            Some(raw) => raw
                .parse::<usize>()
                .map_err(|e| anyhow!("invalid shard count {:?}: {}", raw, e))?,
            None => DEFAULT_SHARDS,
        };

        let store = match store.as_deref().unwrap_or("global") {
            "global" => StoreKind::Global,
            "sharded" => {
                if shards < 2 || !shards.is_power_of_two() {
                    bail!("shard count must be a power of two greater than one, got {}", shards);
                }
                StoreKind::Sharded { shards }
            }
            other => bail!("unknown store kind: {} (expected global or sharded)", other),
        };

        let log_level = log_level
            .as_deref()
            .unwrap_or("info")
            .parse::<tracing::Level>()
            .map_err(|e| anyhow!("invalid log level: {}", e))?;

        Ok(Command::Run(Config {
            bind_addr,
            store,
            log_level,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn run(command: Command) -> Config {
        match command {
            Command::Run(config) => config,
            Command::Help => panic!("expected a run command"),
        }
    }

    #[test]
    fn test_defaults() {
        let config = run(Config::parse(&[], no_env).unwrap());

        assert_eq!(config.bind_addr, DEFAULT_BIND.parse().unwrap());
        assert_eq!(config.store, StoreKind::Global);
        assert_eq!(config.log_level, tracing::Level::INFO);
    }

    #[test]
    fn test_flags() {
        let config = run(Config::parse(
            &args(&[
                "--bind",
                "0.0.0.0:9000",
                "--store",
                "sharded",
                "--shards",
                "32",
                "--log-level",
                "debug",
            ]),
            no_env,
        )
        .unwrap());

        assert_eq!(config.bind_addr, "0.0.0.0:9000".parse().unwrap());
        assert_eq!(config.store, StoreKind::Sharded { shards: 32 });
        assert_eq!(config.log_level, tracing::Level::DEBUG);
    }

    #[test]
    fn test_env_fallback_and_flag_precedence() {
        let env: HashMap<&str, &str> =
            HashMap::from([("MICROBLOG_BIND", "127.0.0.1:7000"), ("MICROBLOG_STORE", "sharded")]);
        let lookup = |key: &str| env.get(key).map(|v| v.to_string());

        let config = run(Config::parse(&[], lookup).unwrap());
        assert_eq!(config.bind_addr, "127.0.0.1:7000".parse().unwrap());
        assert_eq!(config.store, StoreKind::Sharded { shards: DEFAULT_SHARDS });

        let config = run(Config::parse(&args(&["--store", "global"]), lookup).unwrap());
        assert_eq!(config.store, StoreKind::Global);
    }

    #[test]
    fn test_help() {
        assert_eq!(Config::parse(&args(&["--help"]), no_env).unwrap(), Command::Help);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(Config::parse(&args(&["--bind", "nope"]), no_env).is_err());
        assert!(Config::parse(&args(&["--store", "disk"]), no_env).is_err());
        assert!(Config::parse(&args(&["--store", "sharded", "--shards", "3"]), no_env).is_err());
        assert!(Config::parse(&args(&["--store", "sharded", "--shards", "1"]), no_env).is_err());
        assert!(Config::parse(&args(&["--log-level", "loud"]), no_env).is_err());
        assert!(Config::parse(&args(&["--verbose"]), no_env).is_err());
        assert!(Config::parse(&args(&["--bind"]), no_env).is_err());
    }
}
