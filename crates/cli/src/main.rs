use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;
use weyl::{weyl_orbit_with_cfg, OrbitCfg, WeightLatticeElem, WeylGroup};

mod output;

use output::{emit, Meta};

#[derive(Parser)]
#[command(name = "weyl-cli")]
#[command(about = "Weyl group words, Bruhat order, reduced expressions and orbits")]
struct Cmd {
    /// Write the JSON result here (plus a `.meta.json` sidecar) instead of stdout
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Args, Clone)]
struct GroupArgs {
    /// Cartan type, e.g. `B3`, `E8` or `A1xA1`
    #[arg(long)]
    cartan: String,
}

/// Comma-separated letters; empty or `id` means the identity.
#[derive(Clone, Debug, PartialEq)]
struct Word(Vec<u8>);

/// Comma-separated fundamental-weight coordinates.
#[derive(Clone, Debug, PartialEq)]
struct Coords(Vec<i64>);

fn parse_word(s: &str) -> Result<Word, String> {
    let s = s.trim();
    if s.is_empty() || s == "id" {
        return Ok(Word(Vec::new()));
    }
    s.split(',')
        .map(|t| t.trim().parse::<u8>().map_err(|e| format!("{t:?}: {e}")))
        .collect::<Result<_, _>>()
        .map(Word)
}

fn parse_coords(s: &str) -> Result<Coords, String> {
    s.split(',')
        .map(|t| t.trim().parse::<i64>().map_err(|e| format!("{t:?}: {e}")))
        .collect::<Result<_, _>>()
        .map(Coords)
}

#[derive(Subcommand)]
enum Action {
    /// Order of the Weyl group
    Order {
        #[command(flatten)]
        group: GroupArgs,
    },
    /// Canonical word of the longest element
    Longest {
        #[command(flatten)]
        group: GroupArgs,
    },
    /// Reduced expressions of an element
    ReducedWords {
        #[command(flatten)]
        group: GroupArgs,
        #[arg(long, value_parser = parse_word)]
        word: Word,
        /// One word per commutation class
        #[arg(long)]
        up_to_commutation: bool,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Orbit of a weight (walked from its dominant representative)
    Orbit {
        #[command(flatten)]
        group: GroupArgs,
        #[arg(long, value_parser = parse_coords, allow_hyphen_values = true)]
        weight: Coords,
        /// Only points reached by elements of at most this length
        #[arg(long)]
        max_length: Option<usize>,
        /// Also report the element mapping each point back to the dominant weight
        #[arg(long)]
        with_elements: bool,
    },
    /// Compare two elements in the Bruhat order
    Bruhat {
        #[command(flatten)]
        group: GroupArgs,
        #[arg(long, value_parser = parse_word)]
        x: Word,
        #[arg(long, value_parser = parse_word)]
        y: Word,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let out = cmd.out.as_deref();
    match cmd.action {
        Action::Order { group } => {
            let report = order(&group.cartan)?;
            emit(&report, out, Meta::new("order", json!({ "cartan": group.cartan })))?;
        }
        Action::Longest { group } => {
            let report = longest(&group.cartan)?;
            emit(&report, out, Meta::new("longest", json!({ "cartan": group.cartan })))?;
        }
        Action::ReducedWords {
            group,
            word,
            up_to_commutation,
            limit,
        } => {
            let report = reduced_words(&group.cartan, &word.0, up_to_commutation, limit)?;
            let params = json!({
                "cartan": group.cartan,
                "word": word.0,
                "up_to_commutation": up_to_commutation,
                "limit": limit,
            });
            emit(&report, out, Meta::new("reduced-words", params))?;
        }
        Action::Orbit {
            group,
            weight,
            max_length,
            with_elements,
        } => {
            let cfg = OrbitCfg { max_length };
            let report = orbit(&group.cartan, weight.0.clone(), cfg, with_elements)?;
            let params = json!({
                "cartan": group.cartan,
                "weight": weight.0,
                "max_length": max_length,
                "with_elements": with_elements,
            });
            emit(&report, out, Meta::new("orbit", params))?;
        }
        Action::Bruhat { group, x, y } => {
            let report = bruhat(&group.cartan, &x.0, &y.0)?;
            let params = json!({ "cartan": group.cartan, "x": x.0, "y": y.0 });
            emit(&report, out, Meta::new("bruhat", params))?;
        }
    }
    Ok(())
}

fn load_group(cartan: &str) -> Result<WeylGroup> {
    WeylGroup::from_label(cartan).with_context(|| format!("building Weyl group {cartan}"))
}

#[derive(Debug, Serialize)]
struct OrderReport {
    cartan: String,
    rank: usize,
    order: u128,
}

fn order(cartan: &str) -> Result<OrderReport> {
    let w = load_group(cartan)?;
    let order = w.order().context("computing group order")?;
    tracing::info!(cartan, order = %order, "order");
    Ok(OrderReport {
        cartan: cartan.to_string(),
        rank: w.rank(),
        order,
    })
}

#[derive(Debug, Serialize)]
struct LongestReport {
    cartan: String,
    word: Vec<u8>,
    length: usize,
}

fn longest(cartan: &str) -> Result<LongestReport> {
    let w = load_group(cartan)?;
    let w0 = w.longest_element().context("computing longest element")?;
    tracing::info!(cartan, length = w0.length(), "longest");
    Ok(LongestReport {
        cartan: cartan.to_string(),
        word: w0.word().to_vec(),
        length: w0.length(),
    })
}

#[derive(Debug, Serialize)]
struct ReducedWordsReport {
    cartan: String,
    canonical: Vec<u8>,
    up_to_commutation: bool,
    count: usize,
    truncated: bool,
    words: Vec<Vec<u8>>,
}

fn reduced_words(
    cartan: &str,
    word: &[u8],
    up_to_commutation: bool,
    limit: Option<usize>,
) -> Result<ReducedWordsReport> {
    let w = load_group(cartan)?;
    let x = w.element(word, true).context("parsing word")?;
    let mut it = x.reduced_expressions(up_to_commutation);
    let words: Vec<Vec<u8>> = match limit {
        Some(n) => it.by_ref().take(n).collect(),
        None => it.by_ref().collect(),
    };
    let truncated = it.next().is_some();
    tracing::info!(cartan, length = x.length(), count = words.len(), truncated, "reduced words");
    Ok(ReducedWordsReport {
        cartan: cartan.to_string(),
        canonical: x.word().to_vec(),
        up_to_commutation,
        count: words.len(),
        truncated,
        words,
    })
}

#[derive(Debug, Serialize)]
struct OrbitPoint {
    weight: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    element: Option<Vec<u8>>,
}

#[derive(Debug, Serialize)]
struct OrbitReport {
    cartan: String,
    dominant: Vec<i64>,
    size: usize,
    points: Vec<OrbitPoint>,
}

fn orbit(
    cartan: &str,
    coords: Vec<i64>,
    cfg: OrbitCfg,
    with_elements: bool,
) -> Result<OrbitReport> {
    let w = load_group(cartan)?;
    if !w.is_finite() && cfg.max_length.is_none() {
        bail!("{cartan} is infinite; pass --max-length");
    }
    let weight = WeightLatticeElem::new(w.root_system(), coords).context("parsing weight")?;
    let (dominant, _) = w
        .conjugate_dominant_weight_with_elem(&weight)
        .context("conjugating to the dominant chamber")?;
    let points: Vec<OrbitPoint> = if with_elements {
        w.orbit_pairs(&dominant, cfg)?
            .map(|pair| {
                pair.map(|(mu, g)| OrbitPoint {
                    weight: mu.coefficients().iter().copied().collect(),
                    element: Some(g.word().to_vec()),
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .context("walking the orbit")?
    } else {
        weyl_orbit_with_cfg(&dominant, cfg)?
            .map(|mu| {
                mu.map(|mu| OrbitPoint {
                    weight: mu.coefficients().iter().copied().collect(),
                    element: None,
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .context("walking the orbit")?
    };
    tracing::info!(cartan, size = points.len(), "orbit");
    Ok(OrbitReport {
        cartan: cartan.to_string(),
        dominant: dominant.coefficients().iter().copied().collect(),
        size: points.len(),
        points,
    })
}

#[derive(Debug, Serialize)]
struct BruhatReport {
    x: Vec<u8>,
    y: Vec<u8>,
    lt: bool,
    le: bool,
    gt: bool,
}

fn bruhat(cartan: &str, x: &[u8], y: &[u8]) -> Result<BruhatReport> {
    let w = load_group(cartan)?;
    let x = w.element(x, true).context("parsing --x")?;
    let y = w.element(y, true).context("parsing --y")?;
    Ok(BruhatReport {
        x: x.word().to_vec(),
        y: y.word().to_vec(),
        lt: x.bruhat_lt(&y)?,
        le: x.bruhat_le(&y)?,
        gt: y.bruhat_lt(&x)?,
    })
}
