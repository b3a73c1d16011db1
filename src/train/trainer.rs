//! Annealing trainer facade.

use rand::rngs::StdRng;
use tracing::{debug, info};

use super::types::{TrainStrategy, Trainable, TrainingProgress};
use crate::anneal::{AnnealConfig, AnnealEngine, ErrorMeasure, FlatParams, ModelSolution};
use crate::error::Result;
use crate::random::{rng_from_seed, UniformSource};

/// Trains a model by simulated annealing, one engine step per
/// [`iteration`](Trainable::iteration).
///
/// # Examples
///
/// ```
/// use u_anneal::anneal::{AnnealConfig, VectorModel};
/// use u_anneal::train::{AnnealTrainer, Trainable};
///
/// let objective = |p: &[f64]| p.iter().map(|x| (x - 1.0).powi(2)).sum::<f64>();
/// let config = AnnealConfig::new(2.0, 1.0, 100).with_seed(7);
/// let mut trainer = AnnealTrainer::from_config(VectorModel::new(vec![0.0; 3]), objective, config)?;
///
/// let start = trainer.error();
/// for _ in 0..200 {
///     trainer.iteration()?;
/// }
/// assert!(trainer.error() < start);
/// # Ok::<(), u_anneal::AnnealError>(())
/// ```
pub struct AnnealTrainer<M, D, R = StdRng> {
    engine: AnnealEngine<ModelSolution<M, D>, R>,
    error: f64,
    iteration: usize,
    strategies: Vec<Box<dyn TrainStrategy>>,
}

impl<M, D> AnnealTrainer<M, D, StdRng>
where
    M: FlatParams + ErrorMeasure<D>,
{
    /// Creates a trainer from the classic argument list.
    ///
    /// `cycles` sets how many iterations the temperature takes to decay
    /// from `start_temperature` to `stop_temperature`.
    pub fn new(
        model: M,
        data: D,
        start_temperature: f64,
        stop_temperature: f64,
        cycles: usize,
    ) -> Result<Self> {
        Self::from_config(
            model,
            data,
            AnnealConfig::new(start_temperature, stop_temperature, cycles),
        )
    }

    pub fn from_config(model: M, data: D, config: AnnealConfig) -> Result<Self> {
        let rng = rng_from_seed(config.seed);
        Self::with_rng(model, data, config, rng)
    }
}

impl<M, D, R> AnnealTrainer<M, D, R>
where
    M: FlatParams + ErrorMeasure<D>,
    R: UniformSource,
{
    pub fn with_rng(model: M, data: D, config: AnnealConfig, rng: R) -> Result<Self> {
        let engine = AnnealEngine::with_rng(ModelSolution::new(model, data), config, rng)?;
        Ok(Self {
            error: engine.determine_error(),
            engine,
            iteration: 0,
            strategies: Vec::new(),
        })
    }

    /// The live model being trained.
    pub fn network(&self) -> &M {
        self.engine.solution().model()
    }

    pub fn data(&self) -> &D {
        self.engine.solution().data()
    }

    pub fn engine(&self) -> &AnnealEngine<ModelSolution<M, D>, R> {
        &self.engine
    }

    /// Attaches a strategy; it sees every following iteration.
    pub fn add_strategy(&mut self, mut strategy: Box<dyn TrainStrategy>) {
        strategy.init(&self.progress());
        self.strategies.push(strategy);
    }

    /// Consumes the trainer, returning the best model found.
    pub fn into_network(mut self) -> Result<M> {
        self.engine.restore_best()?;
        let (model, _) = self.engine.into_solution().into_parts();
        Ok(model)
    }

    fn progress(&self) -> TrainingProgress {
        TrainingProgress {
            iteration: self.iteration,
            error: self.error,
        }
    }

    fn pre_iteration(&mut self) {
        let progress = self.progress();
        for s in &mut self.strategies {
            s.pre_iteration(&progress);
        }
    }

    fn post_iteration(&mut self) {
        let progress = self.progress();
        for s in &mut self.strategies {
            s.post_iteration(&progress);
        }
    }
}

impl<M, D, R> Trainable for AnnealTrainer<M, D, R>
where
    M: FlatParams + ErrorMeasure<D>,
    R: UniformSource,
{
    fn iteration(&mut self) -> Result<()> {
        info!("Performing simulated annealing iteration");
        self.pre_iteration();
        self.engine.iteration()?;
        self.error = self.engine.determine_error();
        self.iteration += 1;
        debug!(iteration = self.iteration, error = self.error, "iteration complete");
        self.post_iteration();
        Ok(())
    }

    fn error(&self) -> f64 {
        self.error
    }

    fn iteration_count(&self) -> usize {
        self.iteration
    }

    fn training_done(&self) -> bool {
        self.strategies.iter().any(|s| s.should_stop())
    }

    fn finish_training(&mut self) -> Result<()> {
        self.engine.restore_best()?;
        self.error = self.engine.determine_error();
        Ok(())
    }
}
