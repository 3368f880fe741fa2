//! Optimizer interface demo.
//!
//! Runs a user-supplied descent rule to convergence on a random quadratic,
//! then walks through named-algorithm selection and the ADAPT-VQE driver.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use ndarray::ArrayView1;
use tracing_subscriber::EnvFilter;

use tjvqe_adapt::{
    AdaptConfig, AdaptVqe, AnsatzState, GradientSource, OperatorPool, OperatorSelector, Vqe,
};
use tjvqe_demos::problems::{Quadratic, random_initial_params};
use tjvqe_demos::runners::DescentRunner;
use tjvqe_demos::{
    create_progress_bar, print_failure, print_header, print_info, print_result, print_section,
    print_success,
};
use tjvqe_optim::{Algorithm, FunctionalOptimizer, GradientVector, Optimizer, OptimizerSpec};

#[derive(Parser, Debug)]
#[command(name = "demo-optimizer")]
#[command(about = "Drive the optimizer interface on a toy energy landscape")]
struct Args {
    /// Number of parameters
    #[arg(short, long, default_value_t = 4)]
    dim: usize,

    /// Step size of the descent rule
    #[arg(short, long, default_value_t = 0.1)]
    learning_rate: f64,

    /// Gradient convergence threshold (overrides the config file)
    #[arg(short, long, env = "TJVQE_THRESHOLD")]
    threshold: Option<f64>,

    /// Maximum optimizer steps
    #[arg(long, default_value_t = 200)]
    maxiter: usize,

    /// Seed for the problem and the starting point
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// YAML file with ADAPT-VQE settings
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// Pauli-string labels whose gradient is read off the quadratic at the
/// current parameters.
struct LabelPool {
    labels: Vec<&'static str>,
    problem: Quadratic,
}

impl OperatorPool for LabelPool {
    type Operator = &'static str;
    type Ansatz = Vec<&'static str>;

    fn candidates(&self) -> Vec<&'static str> {
        self.labels.clone()
    }

    fn gradient_of(
        &self,
        operator: &&'static str,
        _ansatz: &Vec<&'static str>,
        params: ArrayView1<'_, f64>,
    ) -> f64 {
        let idx = self
            .labels
            .iter()
            .position(|l| l == operator)
            .unwrap_or(0);
        let gradient = self.problem.gradient(params);
        gradient.get(idx % gradient.len().max(1)).copied().unwrap_or(0.0)
    }
}

/// Largest gradient magnitude wins; the first candidate wins ties.
struct LargestMagnitude;

impl OperatorSelector<LabelPool> for LargestMagnitude {
    fn select_next(
        &self,
        pool: &LabelPool,
        gradients: ArrayView1<'_, f64>,
    ) -> Option<&'static str> {
        let mut best: Option<(usize, f64)> = None;
        for (i, g) in gradients.iter().enumerate() {
            if best.is_none_or(|(_, b)| g.abs() > b) {
                best = Some((i, g.abs()));
            }
        }
        best.and_then(|(i, _)| pool.labels.get(i).copied())
    }
}

/// Gradient of `Σ (θᵢ - c)²` over the ansatz parameters.
struct BowlSource {
    center: f64,
    measurements: usize,
}

impl GradientSource<Vec<&'static str>> for BowlSource {
    fn measure_gradient(
        &mut self,
        _ansatz: &Vec<&'static str>,
        params: ArrayView1<'_, f64>,
    ) -> GradientVector {
        self.measurements += 1;
        params.mapv(|t| 2.0 * (t - self.center))
    }
}

fn load_config(args: &Args) -> Result<AdaptConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            AdaptConfig::from_yaml_str(&text)
                .with_context(|| format!("invalid config {}", path.display()))?
        }
        None => AdaptConfig::default(),
    };
    if let Some(threshold) = args.threshold {
        config.optimizer.gradient_convergence_threshold = threshold;
    }
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;

    print_header("ADAPT-VQE Optimizer Toolkit");

    // Functional optimizer
    print_section("Functional optimizer");
    let problem = Quadratic::random(args.dim, args.seed);
    let initial = random_initial_params(args.dim, args.seed.wrapping_add(1));
    let lr = args.learning_rate;
    let mut optimizer = FunctionalOptimizer::with_config(config.optimizer, move |p, g| {
        &p - &(&g * lr)
    })?;

    print_result("Parameters", args.dim);
    print_result("Threshold", optimizer.gradient_convergence_threshold());
    print_result("Initial cost", format!("{:.6}", problem.value(initial.view())));

    let pb = create_progress_bar(args.maxiter as u64, "optimizing");
    let result = DescentRunner::new().with_maxiter(args.maxiter).run(
        &mut optimizer,
        |p| problem.gradient(p),
        initial,
        |_| pb.inc(1),
    )?;
    pb.finish_and_clear();

    print_result("Iterations", result.iterations);
    print_result("Gradient evaluations", result.gradient_evaluations);
    print_result(
        "Final cost",
        format!("{:.6}", problem.value(result.optimal_params.view())),
    );
    if result.converged {
        print_success("converged");
    } else {
        print_info("iteration limit reached");
    }

    // Named algorithms
    print_section("Named algorithms");
    for algorithm in Algorithm::ALL {
        match OptimizerSpec::new(algorithm).build() {
            Ok(opt) => print_success(&format!("{} built ({})", algorithm, opt.kind())),
            Err(e) => print_failure(&e.to_string()),
        }
    }

    // ADAPT-VQE driver
    print_section("ADAPT-VQE driver");
    let pool = LabelPool {
        labels: vec!["XY", "YX", "XZ", "ZX"],
        problem: problem.clone(),
    };
    let mut driver = AdaptVqe::new(pool)?.with_config(config)?;
    print_result("Pool size", driver.pool().len());
    print_result("Max iterations", driver.config().max_iterations);

    let gradients = driver
        .pool()
        .gradients(&Vec::new(), result.optimal_params.view());
    for (label, g) in driver.pool().candidates().iter().zip(gradients.iter()) {
        print_result(label, format!("{:+.6}", g));
    }

    // One growth step by hand: select, append, re-optimize.
    let mut ansatz = AnsatzState::new();
    if let Some(op) = LargestMagnitude.select_next(driver.pool(), gradients.view()) {
        ansatz.push_operator(op);
        print_result("Selected", op);

        let mut source = BowlSource {
            center: 0.3,
            measurements: 0,
        };
        for _ in 0..args.maxiter {
            let g = source.measure_gradient(&ansatz.operators().to_vec(), ansatz.parameters());
            if optimizer.is_converged(g.view()) {
                break;
            }
            ansatz.apply_step(&mut optimizer, g.view())?;
        }
        print_result("Ansatz parameters", ansatz.parameters());
        print_result("Gradient measurements", source.measurements);
    }

    if let Err(e) = driver.make_ansatz() {
        print_failure(&e.to_string());
    }
    if let Err(e) = driver.run() {
        print_failure(&e.to_string());
    }

    println!();
    Ok(())
}
