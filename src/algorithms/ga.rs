//! Real-valued genetic algorithm.
//!
//! Individuals are fixed-length vectors with no memory between generations.
//! Each [`GeneticAlgorithm::advance_generation`] call replaces the whole
//! population: tournament-of-two selection with replacement, two-point
//! crossover, and an optional per-child Gaussian mutation. There is no
//! elitism, so the best fitness can regress between generations; only the
//! long-run trend improves.

use log::debug;
use rand::prelude::SeedableRng;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use rand_pcg::Pcg64;
use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::FitnessFunction;

const TOURNAMENT_SIZE: usize = 2;

/// Two-point crossover over equal-length parents.
///
/// Cut indices are drawn from `[0, len]` inclusive and ordered; equal cuts
/// are widened to a window of at least one gene (downward when both sit at
/// `len`). Child A keeps parent A's outer segments and takes parent B's
/// window; child B is the mirror image.
pub fn two_point_crossover<R: Rng>(
    parent_a: &[f64],
    parent_b: &[f64],
    rng: &mut R,
) -> (Vec<f64>, Vec<f64>) {
    let len = parent_a.len();
    let mut c = rng.random_range(0..=len);
    let mut d = rng.random_range(0..=len);
    if c > d {
        std::mem::swap(&mut c, &mut d);
    }
    if c == d {
        if d == len {
            c -= 1;
        } else {
            d += 1;
        }
    }
    let mut child_a = parent_a.to_vec();
    child_a[c..d].copy_from_slice(&parent_b[c..d]);
    let mut child_b = parent_b.to_vec();
    child_b[c..d].copy_from_slice(&parent_a[c..d]);
    (child_a, child_b)
}

/// Genetic algorithm over a [`FitnessFunction`].
///
/// Deterministic given its seed; the owned RNG serializes with the rest of
/// the state so a run can be checkpointed and resumed.
#[derive(Debug, Serialize, Deserialize)]
#[serde(bound = "F: FitnessFunction")]
pub struct GeneticAlgorithm<F: FitnessFunction> {
    problem: F,
    population: Vec<Vec<f64>>,
    current_best: Vec<f64>,
    current_best_fitness: f64,
    rng: Pcg64,
}

impl<F: FitnessFunction> GeneticAlgorithm<F> {
    /// Builds a uniformly random population in `[0,1]^D` and records its
    /// best individual.
    ///
    /// `population_size` must be even: children are written pairwise at
    /// `i` and `i + size/2`, which covers every slot exactly once only for
    /// even sizes.
    pub fn new(
        population_size: usize,
        vector_length: usize,
        problem: F,
        seed: u64,
    ) -> Result<Self, SearchError> {
        if population_size == 0 {
            return Err(SearchError::EmptyPopulation);
        }
        if population_size % 2 != 0 {
            return Err(SearchError::OddPopulation(population_size));
        }
        if vector_length == 0 {
            return Err(SearchError::ZeroVectorLength);
        }

        let mut rng = Pcg64::seed_from_u64(seed);
        let population: Vec<Vec<f64>> = (0..population_size)
            .map(|_| (0..vector_length).map(|_| rng.random::<f64>()).collect())
            .collect();
        let (current_best, current_best_fitness) = find_current_best(&problem, &population)?;
        debug!(
            "initialized population of {} individuals, dimension {}, best fitness {}",
            population_size, vector_length, current_best_fitness
        );

        Ok(Self {
            problem,
            population,
            current_best,
            current_best_fitness,
            rng,
        })
    }

    pub fn current_population(&self) -> &[Vec<f64>] {
        &self.population
    }

    /// The lowest-fitness individual of the current population, by value.
    /// No identity or memory is carried across generations.
    pub fn current_best(&self) -> &[f64] {
        &self.current_best
    }

    pub fn current_best_fitness(&self) -> f64 {
        self.current_best_fitness
    }

    pub fn problem(&self) -> &F {
        &self.problem
    }

    /// Tournament selection with replacement: draw `TOURNAMENT_SIZE`
    /// individuals uniformly at random, keep the lowest fitness.
    fn tournament_select(&mut self) -> Result<usize, SearchError> {
        let mut winner = self.rng.random_range(0..self.population.len());
        let mut winner_fitness = self.problem.evaluate(&self.population[winner])?;
        for _ in 1..TOURNAMENT_SIZE {
            let challenger = self.rng.random_range(0..self.population.len());
            let fitness = self.problem.evaluate(&self.population[challenger])?;
            if fitness < winner_fitness {
                winner = challenger;
                winner_fitness = fitness;
            }
        }
        Ok(winner)
    }

    /// Replaces the population with the next generation and recomputes
    /// `current_best`.
    ///
    /// When `mutate_enabled` is set, each child independently tosses one
    /// coin at `mutation_rate`; on success every coordinate receives
    /// Gaussian noise of standard deviation `mutation_scale`. The next
    /// generation is built into a buffer and swapped in whole, so a failed
    /// evaluation leaves the population and `current_best` untouched and
    /// mutually consistent.
    pub fn advance_generation(
        &mut self,
        mutation_rate: f64,
        mutation_scale: f64,
        mutate_enabled: bool,
    ) -> Result<(), SearchError> {
        let noise = if mutate_enabled {
            // Normal::new tolerates a negative standard deviation; the
            // comparison is written to also reject NaN.
            if !(mutation_scale >= 0.0) {
                return Err(SearchError::NegativeMutationScale(mutation_scale));
            }
            Some(
                Normal::new(0.0, mutation_scale)
                    .map_err(|_| SearchError::NegativeMutationScale(mutation_scale))?,
            )
        } else {
            None
        };

        let size = self.population.len();
        let half = size / 2;
        let mut next = vec![Vec::new(); size];
        for i in 0..half {
            let a = self.tournament_select()?;
            let b = self.tournament_select()?;
            let (mut child_a, mut child_b) = two_point_crossover(
                &self.population[a],
                &self.population[b],
                &mut self.rng,
            );
            if let Some(noise) = &noise {
                maybe_mutate(&mut child_a, mutation_rate, noise, &mut self.rng);
                maybe_mutate(&mut child_b, mutation_rate, noise, &mut self.rng);
            }
            next[i] = child_a;
            next[i + half] = child_b;
        }

        let (best, best_fitness) = find_current_best(&self.problem, &next)?;
        if best_fitness < self.current_best_fitness {
            debug!("generation best improved to {}", best_fitness);
        }
        self.population = next;
        self.current_best = best;
        self.current_best_fitness = best_fitness;
        Ok(())
    }
}

/// One mutation coin per child, then per-coordinate Gaussian noise.
fn maybe_mutate<R: Rng>(child: &mut [f64], mutation_rate: f64, noise: &Normal<f64>, rng: &mut R) {
    if rng.random::<f64>() <= mutation_rate {
        for gene in child.iter_mut() {
            *gene += noise.sample(rng);
        }
    }
}

fn find_current_best<F: FitnessFunction>(
    problem: &F,
    population: &[Vec<f64>],
) -> Result<(Vec<f64>, f64), SearchError> {
    let mut best = 0;
    let mut best_fitness = problem.evaluate(&population[0])?;
    for (i, individual) in population.iter().enumerate().skip(1) {
        let fitness = problem.evaluate(individual)?;
        if fitness < best_fitness {
            best = i;
            best_fitness = fitness;
        }
    }
    Ok((population[best].clone(), best_fitness))
}
