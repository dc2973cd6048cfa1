//! Subcommand definitions and rendering.
//!
//! Every command renders to a `String` so output can be checked without
//! touching stdout. JSON output is the serde form of the same report that
//! backs the text output.

use std::fmt::Write as _;

use anyhow::{Result, anyhow};
use clap::Subcommand;
use serde::Serialize;
use vortex_config::VortexConfig;
use vortex_core::{
    Digit, Family, Route, classify, doubling_sequence, is_member, lookup, patterns, reduce, route,
    vortex_pair,
};

/// Upper bound for `sequence --len`.
pub(crate) const MAX_SEQUENCE_LEN: i64 = 4096;

#[derive(Debug, Clone, Subcommand)]
pub(crate) enum Command {
    /// Reduce integers to their digit root (1..=9)
    Reduce {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Vortex digit and ratio of a pair
    Pair {
        #[arg(allow_negative_numbers = true)]
        a: i64,
        #[arg(allow_negative_numbers = true)]
        b: i64,
    },
    /// Test whether a value's digit root belongs to a named pattern
    Member {
        #[arg(allow_negative_numbers = true)]
        value: i64,
        pattern: String,
    },
    /// Route a value by divisibility
    Route {
        #[arg(allow_negative_numbers = true)]
        n: i64,
        #[arg(allow_negative_numbers = true)]
        d: i64,
        #[arg(allow_negative_numbers = true)]
        m: i64,
        /// Print the legacy integer form (-1 for no route)
        #[arg(long)]
        sentinel: bool,
    },
    /// List the pattern registry
    Patterns,
    /// Classify values into the cycle, triad, or axis family
    Classify {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Digit roots of seed, 2*seed, 4*seed, ...
    Sequence {
        #[arg(allow_negative_numbers = true)]
        seed: i64,
        /// Number of terms (at most 4096; the sequence repeats every 6)
        #[arg(
            long,
            default_value_t = 6,
            value_parser = clap::value_parser!(u16).range(..=MAX_SEQUENCE_LEN)
        )]
        len: u16,
    },
    /// Print the active constants table
    Constants,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Format {
    Text,
    Json,
}

#[derive(Serialize)]
struct Reduction {
    value: i64,
    digit: Digit,
}

#[derive(Serialize)]
struct PairReport {
    a: i64,
    b: i64,
    vortex: Digit,
    numerator: i128,
    denominator: i128,
    ratio: f64,
}

#[derive(Serialize)]
struct MemberReport {
    value: i64,
    digit: Digit,
    pattern: &'static str,
    member: bool,
}

#[derive(Serialize)]
struct RouteReport {
    n: i64,
    d: i64,
    m: i64,
    route: Route,
    sentinel: i64,
}

#[derive(Serialize)]
struct Classification {
    value: i64,
    digit: Digit,
    family: Family,
}

#[derive(Serialize)]
struct SequenceReport {
    seed: i64,
    digits: Vec<Digit>,
}

#[derive(Serialize)]
struct Harmonic {
    multiplier: u32,
    value: u64,
    root: Digit,
}

#[derive(Serialize)]
struct ConstantsReport {
    base: u32,
    base_root: Digit,
    harmonics: Vec<Harmonic>,
}

pub(crate) fn run(command: Command, format: Format, config: &VortexConfig) -> Result<String> {
    tracing::debug!(?command, ?format, "Running command");

    match command {
        Command::Reduce { values } => {
            let report: Vec<Reduction> = values
                .into_iter()
                .map(|value| Reduction {
                    value,
                    digit: reduce(value),
                })
                .collect();
            render(format, &report, |rows| {
                rows.iter()
                    .map(|r| format!("{} -> {}", r.value, r.digit))
                    .collect::<Vec<_>>()
                    .join("\n")
            })
        }
        Command::Pair { a, b } => {
            let pair = vortex_pair(a, b);
            let ratio = pair.ratio();
            let report = PairReport {
                a,
                b,
                vortex: pair.vortex(),
                numerator: ratio.numerator(),
                denominator: ratio.denominator(),
                ratio: ratio.value(),
            };
            render(format, &report, |r| {
                format!(
                    "vortex: {}\nratio: {}/{} = {}",
                    r.vortex, r.numerator, r.denominator, r.ratio
                )
            })
        }
        Command::Member { value, pattern } => {
            let pattern = lookup(&pattern).map_err(|err| {
                let known: Vec<&str> = patterns().iter().map(|p| p.name()).collect();
                anyhow!("{err} (known patterns: {})", known.join(", "))
            })?;
            let report = MemberReport {
                value,
                digit: reduce(value),
                pattern: pattern.name(),
                member: is_member(value, pattern),
            };
            render(format, &report, |r| r.member.to_string())
        }
        Command::Route { n, d, m, sentinel } => {
            let routed = route(n, d, m);
            let report = RouteReport {
                n,
                d,
                m,
                route: routed,
                sentinel: routed.to_sentinel(),
            };
            render(format, &report, |r| {
                if sentinel {
                    r.sentinel.to_string()
                } else {
                    r.route.to_string()
                }
            })
        }
        Command::Patterns => render(format, &patterns(), |registry| {
            registry
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n")
        }),
        Command::Classify { values } => {
            let report: Vec<Classification> = values
                .into_iter()
                .map(|value| Classification {
                    value,
                    digit: reduce(value),
                    family: classify(value),
                })
                .collect();
            render(format, &report, |rows| {
                rows.iter()
                    .map(|r| format!("{} -> {} ({})", r.value, r.digit, r.family))
                    .collect::<Vec<_>>()
                    .join("\n")
            })
        }
        Command::Sequence { seed, len } => {
            let report = SequenceReport {
                seed,
                digits: doubling_sequence(seed, usize::from(len)),
            };
            render(format, &report, |r| {
                r.digits
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" ")
            })
        }
        Command::Constants => {
            let table = &config.frequency;
            let harmonics = table
                .multipliers()
                .iter()
                .zip(table.roots())
                .map(|(&multiplier, (value, root))| Harmonic {
                    multiplier,
                    value,
                    root,
                })
                .collect();
            let report = ConstantsReport {
                base: table.base(),
                base_root: table.base_root(),
                harmonics,
            };
            render(format, &report, render_constants)
        }
    }
}

fn render<T: Serialize + ?Sized>(
    format: Format,
    report: &T,
    text: impl FnOnce(&T) -> String,
) -> Result<String> {
    match format {
        Format::Text => Ok(text(report)),
        Format::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

fn render_constants(report: &ConstantsReport) -> String {
    let mut out = format!("base: {} (root {})", report.base, report.base_root);
    for h in &report.harmonics {
        let _ = write!(out, "\n  x{:<3}{:>8}  root {}", h.multiplier, h.value, h.root);
    }
    out
}
