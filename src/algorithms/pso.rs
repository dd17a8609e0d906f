//! Particle swarm optimization after Kennedy, Eberhart and Shi.
//!
//! The swarm holds fixed-length position/velocity pairs. Positions start
//! uniformly random in `[0,1]^D`, velocities start at zero. Each call to
//! [`Pso::step`] advances every particle once against a pre-step snapshot of
//! the swarm, so no particle sees another's same-step update; a call to
//! [`Pso::refresh_global_best`] then re-elects the social attractor.
//! [`Pso::improve`] does both.

use log::debug;
use rand::prelude::SeedableRng;
use rand::Rng;
use rand_pcg::Pcg64;
use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::FitnessFunction;

/// Velocity-update weights for one PSO step.
///
/// Each `follow_*` weight bounds an independent uniform draw in `[0, w]`
/// made once per particle per step; `scale_update_step` scales the
/// displacement applied before the velocity recompute.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StepWeights {
    pub follow_current: f64,
    pub follow_personal_best: f64,
    pub follow_social_best: f64,
    pub follow_global_best: f64,
    pub scale_update_step: f64,
}

impl Default for StepWeights {
    fn default() -> Self {
        Self {
            follow_current: 0.7,
            follow_personal_best: 2.0,
            follow_social_best: 0.9,
            follow_global_best: 0.0,
            scale_update_step: 0.7,
        }
    }
}

/// One member of the swarm.
///
/// Owned exclusively by its [`Pso`]; created at construction and never
/// destroyed. `best_fitness` is the lowest fitness this particle has ever
/// observed and decides personal-best replacement; `previous_fitness` is the
/// last evaluation of the *current* position, kept for drivers that display
/// per-particle progress.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Particle {
    id: usize,
    position: Vec<f64>,
    velocity: Vec<f64>,
    best_position: Vec<f64>,
    best_fitness: f64,
    previous_fitness: f64,
}

impl Particle {
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn position(&self) -> &[f64] {
        &self.position
    }

    pub fn velocity(&self) -> &[f64] {
        &self.velocity
    }

    pub fn best_position(&self) -> &[f64] {
        &self.best_position
    }

    pub fn best_fitness(&self) -> f64 {
        self.best_fitness
    }

    pub fn previous_fitness(&self) -> f64 {
        self.previous_fitness
    }

    /// One particle update: displace by the previous velocity, recompute
    /// the velocity against the snapshot attractors, evaluate, and record
    /// a new personal best on strict improvement.
    fn update<F: FitnessFunction, R: Rng>(
        &mut self,
        problem: &F,
        informant_best: &[f64],
        global_best: &[f64],
        w: &StepWeights,
        rng: &mut R,
    ) -> Result<(), SearchError> {
        for (p, v) in self.position.iter_mut().zip(&self.velocity) {
            *p += v * w.scale_update_step;
        }

        // One scalar draw per term, shared across dimensions.
        let cognitive = rng.random::<f64>() * w.follow_personal_best;
        let social = rng.random::<f64>() * w.follow_social_best;
        let global = rng.random::<f64>() * w.follow_global_best;
        for i in 0..self.velocity.len() {
            self.velocity[i] = w.follow_current * self.velocity[i]
                + cognitive * (self.best_position[i] - self.position[i])
                + social * (informant_best[i] - self.position[i])
                + global * (global_best[i] - self.position[i]);
        }

        let fitness = problem.evaluate(&self.position)?;
        if fitness < self.best_fitness {
            self.best_fitness = fitness;
            self.best_position.clone_from(&self.position);
        }
        self.previous_fitness = fitness;
        Ok(())
    }
}

/// Particle swarm optimizer over a [`FitnessFunction`].
///
/// Deterministic given its seed: the RNG is owned, serialized with the rest
/// of the state, and is the only source of randomness.
#[derive(Debug, Serialize, Deserialize)]
#[serde(bound = "F: FitnessFunction")]
pub struct Pso<F: FitnessFunction> {
    problem: F,
    swarm: Vec<Particle>,
    /// Index of the current social attractor. A random placeholder until
    /// the first [`Pso::refresh_global_best`].
    global_fittest: usize,
    num_informants: usize,
    rng: Pcg64,
}

impl<F: FitnessFunction> Pso<F> {
    /// Builds a swarm of `swarm_size` particles of dimension
    /// `vector_length`, positions uniform in `[0,1]^D`, velocities zero.
    ///
    /// Each initial position is evaluated once to seed the particle's
    /// personal best. `num_informants` must be at least 1; an empty
    /// informant set would leave the social term undefined.
    pub fn new(
        problem: F,
        swarm_size: usize,
        vector_length: usize,
        num_informants: usize,
        seed: u64,
    ) -> Result<Self, SearchError> {
        if swarm_size == 0 {
            return Err(SearchError::EmptyPopulation);
        }
        if vector_length == 0 {
            return Err(SearchError::ZeroVectorLength);
        }
        if num_informants == 0 {
            return Err(SearchError::NoInformants);
        }

        let mut rng = Pcg64::seed_from_u64(seed);
        let mut swarm = Vec::with_capacity(swarm_size);
        for id in 0..swarm_size {
            let position: Vec<f64> = (0..vector_length).map(|_| rng.random::<f64>()).collect();
            let best_fitness = problem.evaluate(&position)?;
            swarm.push(Particle {
                id,
                best_position: position.clone(),
                position,
                velocity: vec![0.0; vector_length],
                best_fitness,
                previous_fitness: best_fitness,
            });
        }
        let global_fittest = rng.random_range(0..swarm_size);
        debug!(
            "initialized swarm of {} particles, dimension {}, {} informants",
            swarm_size, vector_length, num_informants
        );

        Ok(Self {
            problem,
            swarm,
            global_fittest,
            num_informants,
            rng,
        })
    }

    pub fn swarm(&self) -> &[Particle] {
        &self.swarm
    }

    /// The particle currently elected as the social attractor. May be stale
    /// between [`Pso::step`] and [`Pso::refresh_global_best`].
    pub fn global_fittest(&self) -> &Particle {
        &self.swarm[self.global_fittest]
    }

    pub fn num_informants(&self) -> usize {
        self.num_informants
    }

    pub fn problem(&self) -> &F {
        &self.problem
    }

    /// Advances every particle once.
    ///
    /// All particles see the same pre-step snapshot of personal bests and
    /// the pre-step global fittest. The updated swarm is built into a
    /// buffer and swapped in whole, so a failed evaluation leaves the
    /// swarm exactly as it was.
    pub fn step(&mut self, w: &StepWeights) -> Result<(), SearchError> {
        let snapshot: Vec<(Vec<f64>, f64)> = self
            .swarm
            .iter()
            .map(|p| (p.best_position.clone(), p.best_fitness))
            .collect();
        let global_best = snapshot[self.global_fittest].0.clone();

        let mut next = self.swarm.clone();
        for particle in &mut next {
            // Informants: uniform with replacement, no dedup, no forced
            // self-inclusion. The fittest is picked by snapshot
            // personal-best fitness.
            let mut informant = self.rng.random_range(0..snapshot.len());
            for _ in 1..self.num_informants {
                let challenger = self.rng.random_range(0..snapshot.len());
                if snapshot[challenger].1 < snapshot[informant].1 {
                    informant = challenger;
                }
            }
            particle.update(
                &self.problem,
                &snapshot[informant].0,
                &global_best,
                w,
                &mut self.rng,
            )?;
        }
        self.swarm = next;
        Ok(())
    }

    /// Re-elects the social attractor: the particle with the lowest
    /// personal-best fitness replaces the incumbent on strict improvement.
    ///
    /// Must be called after [`Pso::step`] for the swarm to converge;
    /// stepping without it leaves the social attractor stale.
    pub fn refresh_global_best(&mut self) {
        let mut best = 0;
        for (i, p) in self.swarm.iter().enumerate() {
            if p.best_fitness < self.swarm[best].best_fitness {
                best = i;
            }
        }
        if self.swarm[best].best_fitness < self.swarm[self.global_fittest].best_fitness {
            debug!(
                "global fittest: particle {} at fitness {}",
                best, self.swarm[best].best_fitness
            );
            self.global_fittest = best;
        }
    }

    /// One full iteration: [`Pso::step`] then [`Pso::refresh_global_best`].
    pub fn improve(&mut self, w: &StepWeights) -> Result<(), SearchError> {
        self.step(w)?;
        self.refresh_global_best();
        Ok(())
    }
}
