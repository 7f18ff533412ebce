use anyhow::{bail, Context, Result};
use clap::{Arg, ArgMatches, Command};
use log::LevelFilter;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use factrix::{bench, metrics, Matrix, QrFactors};

/// Upper bound on each matrix axis accepted from interactive input.
const MAX_DIM: usize = 10_000;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Warn)
        .parse_env(env_logger::Env::default().filter_or("FACTRIX_LOG", "warn"))
        .init();

    let matches = Command::new("factrix")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Householder QR factorization with accuracy diagnostics")
        .subcommand(
            Command::new("bench").about("Run the QR benchmark suite").arg(
                Arg::new("sizes")
                    .long("sizes")
                    .value_delimiter(',')
                    .value_parser(clap::value_parser!(usize))
                    .help("Comma-separated matrix dimensions (default 100,500,1000)"),
            ),
        )
        .subcommand(
            Command::new("gen")
                .about("Generate synthetic matrix files in the text format")
                .arg(
                    Arg::new("dir")
                        .long("dir")
                        .default_value("data")
                        .help("Output directory for the generated files"),
                )
                .arg(
                    Arg::new("sizes")
                        .long("sizes")
                        .value_delimiter(',')
                        .value_parser(clap::value_parser!(usize))
                        .help("Comma-separated matrix dimensions (default 100,500,1000)"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("bench", sub)) => run_bench(sub),
        Some(("gen", sub)) => run_gen(sub),
        _ => run_menu(),
    }
}

fn arg_sizes(matches: &ArgMatches) -> Result<Vec<usize>> {
    let sizes: Vec<usize> = match matches.get_many::<usize>("sizes") {
        Some(vals) => vals.copied().collect(),
        None => bench::DEFAULT_SIZES.to_vec(),
    };
    for &n in &sizes {
        if n == 0 || n > MAX_DIM {
            bail!("dimension {n} outside the supported range 1..={MAX_DIM}");
        }
    }
    Ok(sizes)
}

fn run_bench(matches: &ArgMatches) -> Result<()> {
    let sizes = arg_sizes(matches)?;
    bench::run(&sizes)?;
    Ok(())
}

fn run_gen(matches: &ArgMatches) -> Result<()> {
    let sizes = arg_sizes(matches)?;
    let dir = PathBuf::from(
        matches
            .get_one::<String>("dir")
            .map(String::as_str)
            .unwrap_or("data"),
    );
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("could not create output directory {dir:?}"))?;

    for &n in &sizes {
        let path = dir.join(format!("matrix_{n}x{n}.txt"));
        let m = Matrix::<f64>::random_range(n, n, -10.0, 10.0)?;
        m.write_to_file(&path)?;
        println!("Generated {} ({n}x{n})", path.display());
    }
    println!();
    println!("Matrix generation complete.");
    Ok(())
}

// ── Interactive menu ────────────────────────────────────────────────

fn run_menu() -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("QR Householder Factorization");
    println!("============================");
    println!();
    println!("1. Manual matrix input");
    println!("2. Generate random matrix");
    println!("3. Load matrix from file");
    println!("4. Run benchmark (n=100,500,1000)");
    println!("5. Exit");
    print!("Choice: ");
    io::stdout().flush()?;

    let choice = read_trimmed_line(&mut input)?;
    let a = match choice.as_str() {
        "1" => read_manual_matrix(&mut input)?,
        "2" => {
            let (m, n) = prompt_dims(&mut input)?;
            let a = Matrix::<f64>::random(m, n)?;
            println!("Generated random matrix ({m}x{n})");
            a
        }
        "3" => {
            print!("Enter file path: ");
            io::stdout().flush()?;
            let path = read_trimmed_line(&mut input)?;
            let a = Matrix::<f64>::load_from_file(&path)?;
            println!("Loaded matrix ({}x{})", a.nrows(), a.ncols());
            a
        }
        "4" => {
            bench::run(bench::DEFAULT_SIZES)?;
            return Ok(());
        }
        "5" => return Ok(()),
        other => bail!("invalid menu choice {other:?}"),
    };

    let f: QrFactors<f64> = a.qr();

    println!();
    println!("Results:");
    println!(
        "||A - QR||∞: {:.3e}",
        metrics::residual_norm(&a, &f.q, &f.r)?
    );
    println!("||QᵀQ - I||∞: {:.3e}", metrics::orthogonality_error(&f.q)?);
    println!(
        "||AR⁻¹ - Q||∞: {:.3e}",
        metrics::consistency_error(&a, &f.q, &f.r)?
    );
    println!("cond(R): {:.3e}", metrics::condition_number(&f.r)?);

    Ok(())
}

fn read_trimmed_line(input: &mut impl BufRead) -> Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("unexpected end of input");
    }
    Ok(line.trim().to_string())
}

/// Prompt for `rows cols`, re-prompting until both are integers in
/// `1..=MAX_DIM`.
fn prompt_dims(input: &mut impl BufRead) -> Result<(usize, usize)> {
    loop {
        print!("Enter matrix dimensions (rows cols): ");
        io::stdout().flush()?;
        let line = read_trimmed_line(input)?;

        let mut it = line.split_whitespace();
        let m = it.next().and_then(|s| s.parse::<usize>().ok());
        let n = it.next().and_then(|s| s.parse::<usize>().ok());
        match (m, n) {
            (Some(m), Some(n))
                if (1..=MAX_DIM).contains(&m) && (1..=MAX_DIM).contains(&n) =>
            {
                return Ok((m, n));
            }
            _ => println!("Please enter two integers between 1 and {MAX_DIM}."),
        }
    }
}

/// Read an m×n matrix element by element, row-wise, across any number of
/// lines. Unparseable tokens are reported and must be re-entered.
fn read_manual_matrix(input: &mut impl BufRead) -> Result<Matrix<f64>> {
    let (m, n) = prompt_dims(input)?;
    println!("Enter matrix elements row-wise:");

    let mut values: Vec<f64> = Vec::with_capacity(m * n);
    while values.len() < m * n {
        let line = read_trimmed_line(input)?;
        for token in line.split_whitespace() {
            if values.len() == m * n {
                break;
            }
            match token.parse::<f64>() {
                Ok(v) => values.push(v),
                Err(_) => println!("Invalid value {token:?}, re-enter it."),
            }
        }
    }

    Ok(Matrix::from_rows(m, n, &values)?)
}
