use swarm_descent::functions::MeanSquaredError;
use swarm_descent::{Pso, SearchError, StepWeights};

fn main() -> Result<(), SearchError> {
    let problem = MeanSquaredError::new(vec![0.5, 0.5]);
    let weights = StepWeights::default();
    let mut pso = Pso::new(problem, 25, 2, 2, 42)?;

    println!("Chasing target (0.5, 0.5) with a swarm of 25...");
    println!("{:<10} | {:<22} | {:<12}", "Iteration", "Best position", "Fitness");
    println!("-------------------------------------------------------");

    for iteration in 1..=200 {
        pso.improve(&weights)?;
        if iteration % 20 == 0 {
            let best = pso.global_fittest();
            println!(
                "{:<10} | ({:<9.6}, {:<9.6}) | {:<12.3e}",
                iteration,
                best.best_position()[0],
                best.best_position()[1],
                best.best_fitness()
            );
        }
    }
    Ok(())
}
