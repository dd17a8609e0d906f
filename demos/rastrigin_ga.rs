use swarm_descent::functions::Rastrigin;
use swarm_descent::{GeneticAlgorithm, SearchError};

fn main() -> Result<(), SearchError> {
    let mut ga = GeneticAlgorithm::new(100, 2, Rastrigin::new(2), 42)?;

    println!("Minimizing 2-D Rastrigin with a population of 100...");
    println!("{:<12} | {:<22} | {:<12}", "Generation", "Best individual", "Fitness");
    println!("---------------------------------------------------------");

    for generation in 1..=100 {
        ga.advance_generation(0.3, 0.5, true)?;
        if generation % 10 == 0 {
            println!(
                "{:<12} | ({:<9.6}, {:<9.6}) | {:<12.6}",
                generation,
                ga.current_best()[0],
                ga.current_best()[1],
                ga.current_best_fitness()
            );
        }
    }
    Ok(())
}
