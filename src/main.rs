use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command, ValueHint};
use log::{LevelFilter, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use arff_logreg::arff::{load_dataset, load_dataset_with_test};
use arff_logreg::classifiers::LogisticRegression;
use arff_logreg::config::{EvaluationMode, RunConfig};
use arff_logreg::evaluation::{write_cross_validation, write_holdout};
use arff_logreg::tasks::{CrossValidationEvaluator, HoldoutEvaluator};

const USAGE: &str = "usage: arff-logreg dataset-file #folds learning-rate #epochs";

fn command() -> Command {
    Command::new("arff-logreg")
        .version(clap::crate_version!())
        .about("Logistic regression on ARFF datasets with stratified cross-validation")
        .arg(
            Arg::new("dataset")
                .help("ARFF file with the training data")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("folds")
                .help("Number of folds; 1 or less trains and tests on the whole dataset")
                .allow_negative_numbers(true)
                .value_parser(clap::value_parser!(i64)),
        )
        .arg(
            Arg::new("learning_rate")
                .help("Gradient descent step size")
                .value_parser(clap::value_parser!(f64)),
        )
        .arg(
            Arg::new("epochs")
                .help("Passes over the training data")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("test_file")
                .long("test-file")
                .help("ARFF file whose rows are scored in single-split mode")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .help("Seed for fold shuffling")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("JSON run configuration; replaces the positional arguments")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
}

/// `None` when the command line does not describe a complete run.
fn run_config(matches: &ArgMatches) -> Result<Option<RunConfig>> {
    let mut config = if let Some(path) = matches.get_one::<PathBuf>("config") {
        RunConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display()))?
    } else {
        let dataset = matches.get_one::<PathBuf>("dataset");
        let folds = matches.get_one::<i64>("folds");
        let learning_rate = matches.get_one::<f64>("learning_rate");
        let epochs = matches.get_one::<usize>("epochs");
        let (Some(dataset), Some(&folds), Some(&learning_rate), Some(&epochs)) =
            (dataset, folds, learning_rate, epochs)
        else {
            return Ok(None);
        };
        RunConfig::new(dataset.clone(), folds.max(0) as usize, learning_rate, epochs)
    };

    if let Some(test) = matches.get_one::<PathBuf>("test_file") {
        config.test_dataset = Some(test.clone());
    }
    if let Some(&seed) = matches.get_one::<u64>("seed") {
        config.seed = Some(seed);
    }
    Ok(Some(config))
}

fn run<W: Write>(config: &RunConfig, out: &mut W) -> Result<()> {
    let dataset = match &config.test_dataset {
        Some(test) => load_dataset_with_test(&config.dataset, test),
        None => load_dataset(&config.dataset),
    }
    .with_context(|| format!("loading {}", config.dataset.display()))?;

    let metadata = dataset.shared_metadata();
    let params = config.learning_parameters();
    info!("evaluation mode: {}", config.mode());

    match config.mode() {
        EvaluationMode::SingleSplit => {
            let learner = LogisticRegression::new(metadata, params);
            let report = HoldoutEvaluator::new(learner).run(&dataset)?;
            write_holdout(out, &report)?;
        }
        EvaluationMode::StratifiedKFold(folds) => {
            let seed = config.seed.unwrap_or_else(|| rand::rng().random());
            info!("shuffle seed: {seed}");
            let mut rng = StdRng::seed_from_u64(seed);
            let mut cv = CrossValidationEvaluator::new(folds, || {
                LogisticRegression::new(metadata.clone(), params)
            });
            let report = cv.run(&dataset, &mut rng)?;
            write_cross_validation(out, &report)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Warn)
        .parse_env(env_logger::Env::default().filter_or("ARFF_LOGREG_LOG", "warn,arff_logreg=info"))
        .init();

    let matches = command().get_matches();
    let Some(config) = run_config(&matches)? else {
        println!("{USAGE}");
        return Ok(());
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    run(&config, &mut out)
}
