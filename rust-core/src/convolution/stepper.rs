//! Step-by-step convolution for incremental display
//!
//! Every output index n produces one or more `Accumulate` steps carrying the
//! products f[k] * g[n-k] in increasing k, followed by a `Finalize` step that
//! marks y[n] complete. The step list is a pure function of the inputs and
//! the configuration: `step_at` computes any step directly and `steps`
//! walks the same values incrementally.

use super::direct::convolve;
use super::window::{SlidingWindow, Term};
use crate::error::SignalError;
use crate::signal::{Sample, Signal};

/// Which input is reversed and slid across the other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Flip {
    /// y[n] = Σ_k a[k] b[n-k]; terms are indexed by a
    #[default]
    Second,

    /// y[n] = Σ_k b[k] a[n-k]; terms are indexed by b
    First,
}

/// Stepper configuration
#[derive(Debug, Clone, PartialEq)]
pub struct StepperConfig {
    /// Signal to flip
    pub flip: Flip,

    /// Emit one step per product instead of one per output index
    pub per_term: bool,

    /// Reject NaN and infinite samples
    pub require_finite: bool,
}

impl Default for StepperConfig {
    fn default() -> Self {
        Self {
            flip: Flip::Second,
            per_term: false,
            require_finite: true,
        }
    }
}

/// Role of a step in the timeline of one output index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// Adds products to the running sum of the current output index
    Accumulate,

    /// y[n] is complete
    Finalize,
}

/// One snapshot of the sliding-window computation
#[derive(Debug, Clone, PartialEq)]
pub struct Step<T> {
    /// Position in the step sequence (0-based)
    pub index: usize,

    /// Accumulate or Finalize
    pub kind: StepKind,

    /// Shift applied to the flipped signal, g[n-k] as a function of k
    pub shift: i64,

    /// Output index this step contributes to or finalizes
    pub output_index: i64,

    /// Products added by this step, increasing k (empty for `Finalize`)
    pub terms: Vec<Term<T>>,

    /// Running sum for `output_index` after this step
    pub partial_sum: T,

    /// Completed output samples from the first output index onward
    pub finalized: Vec<T>,
}

/// Convolution stepper over two owned signals
pub struct ConvolutionStepper<T = f64> {
    a: Signal<T>,
    b: Signal<T>,
    config: StepperConfig,
    step_count: usize,
}

impl<T: Sample> ConvolutionStepper<T> {
    /// Validate inputs and prepare the step sequence
    ///
    /// # Arguments
    /// * `a` - First signal, indexes the terms under `Flip::Second`
    /// * `b` - Second signal, indexes the terms under `Flip::First`
    /// * `config` - Flip choice, step granularity and finite-only mode
    ///
    /// # Errors
    /// `SignalError` for non-finite samples (when `require_finite`) or
    /// index ranges that do not fit in i64. Nothing is computed on error.
    pub fn new(a: Signal<T>, b: Signal<T>, config: StepperConfig) -> Result<Self, SignalError> {
        a.validate("a", config.require_finite)?;
        b.validate("b", config.require_finite)?;

        let mut stepper = Self {
            a,
            b,
            config,
            step_count: 0,
        };

        // Output span overflow is caught here, before any step exists
        let step_count = match stepper.window()? {
            Some(window) => {
                let outputs = window.output_len();
                if stepper.config.per_term {
                    stepper.a.len() * stepper.b.len() + outputs
                } else {
                    2 * outputs
                }
            }
            None => 0,
        };
        stepper.step_count = step_count;

        log::debug!(
            "stepper: {} x {} samples, flip {:?}, per_term {}, {} steps",
            stepper.a.len(),
            stepper.b.len(),
            stepper.config.flip,
            stepper.config.per_term,
            stepper.step_count
        );

        Ok(stepper)
    }

    /// Stepper with the default configuration
    pub fn with_defaults(a: Signal<T>, b: Signal<T>) -> Result<Self, SignalError> {
        Self::new(a, b, StepperConfig::default())
    }

    /// First input signal
    pub fn a(&self) -> &Signal<T> {
        &self.a
    }

    /// Second input signal
    pub fn b(&self) -> &Signal<T> {
        &self.b
    }

    /// Configuration the stepper was built with
    pub fn config(&self) -> &StepperConfig {
        &self.config
    }

    /// Total number of steps
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    fn window(&self) -> Result<Option<SlidingWindow<'_, T>>, SignalError> {
        match self.config.flip {
            Flip::Second => SlidingWindow::new(&self.a, &self.b),
            Flip::First => SlidingWindow::new(&self.b, &self.a),
        }
    }

    /// Window over inputs already checked by `new`
    fn validated_window(&self) -> Option<SlidingWindow<'_, T>> {
        self.window().ok().flatten()
    }

    /// Full convolution, summed in the same order the steps use
    pub fn compute(&self) -> Signal<T> {
        match self.validated_window() {
            Some(window) => convolve(&window),
            None => Signal::empty(),
        }
    }

    /// Steps spent on an output index with `terms` contributing products
    fn steps_for(&self, terms: usize) -> usize {
        if self.config.per_term {
            terms + 1
        } else {
            2
        }
    }

    /// Step `index` computed directly from the inputs
    ///
    /// # Returns
    /// `None` when `index >= step_count()`
    pub fn step_at(&self, index: usize) -> Option<Step<T>> {
        if index >= self.step_count {
            return None;
        }
        let window = self.validated_window()?;

        // Skip whole outputs until `index` falls inside one
        let mut remaining = index;
        let mut finalized = Vec::new();

        for n in window.outputs() {
            let count = window.term_count(n);
            let span = self.steps_for(count);

            if remaining >= span {
                finalized.push(window.output(n));
                remaining -= span;
                continue;
            }

            // Last step of the span finalizes y[n]
            if remaining == span - 1 {
                let y = window.output(n);
                finalized.push(y);
                return Some(Step {
                    index,
                    kind: StepKind::Finalize,
                    shift: n,
                    output_index: n,
                    terms: Vec::new(),
                    partial_sum: y,
                    finalized,
                });
            }

            // Accumulate: terms already summed, then terms added by this step
            let (skip, take) = if self.config.per_term {
                (remaining, 1)
            } else {
                (0, count)
            };
            let partial_sum = window
                .terms(n)
                .take(skip + take)
                .fold(T::zero(), |acc, t| acc + t.product);
            let terms = window.terms(n).skip(skip).take(take).collect();

            return Some(Step {
                index,
                kind: StepKind::Accumulate,
                shift: n,
                output_index: n,
                terms,
                partial_sum,
                finalized,
            });
        }

        None
    }

    /// Lazy iterator over every step
    ///
    /// Each call starts from the beginning and yields the same steps as
    /// `step_at(0)`, `step_at(1)`, ...
    pub fn steps(&self) -> Steps<'_, T> {
        let window = self.validated_window();
        let output_index = window.as_ref().map_or(0, |w| w.first_output());
        Steps {
            window,
            per_term: self.config.per_term,
            next_index: 0,
            step_count: self.step_count,
            output_index,
            term_cursor: 0,
            partial_sum: T::zero(),
            finalized: Vec::new(),
        }
    }
}

/// Cursor over a stepper's step sequence
pub struct Steps<'s, T> {
    window: Option<SlidingWindow<'s, T>>,
    per_term: bool,
    next_index: usize,
    step_count: usize,
    output_index: i64,
    /// Terms of `output_index` already emitted
    term_cursor: usize,
    partial_sum: T,
    finalized: Vec<T>,
}

impl<T: Sample> Iterator for Steps<'_, T> {
    type Item = Step<T>;

    fn next(&mut self) -> Option<Step<T>> {
        if self.next_index >= self.step_count {
            return None;
        }
        let window = self.window.as_ref()?;

        // Cursor state: output n, with `term_cursor` of its terms already emitted
        let n = self.output_index;
        let count = window.term_count(n);
        let index = self.next_index;
        self.next_index += 1;

        if self.term_cursor < count {
            let take = if self.per_term { 1 } else { count };
            let terms: Vec<Term<T>> = window
                .terms(n)
                .skip(self.term_cursor)
                .take(take)
                .collect();

            for term in &terms {
                self.partial_sum = self.partial_sum + term.product;
            }
            self.term_cursor += take;

            return Some(Step {
                index,
                kind: StepKind::Accumulate,
                shift: n,
                output_index: n,
                terms,
                partial_sum: self.partial_sum,
                finalized: self.finalized.clone(),
            });
        }

        // All terms of n emitted: finalize y[n]
        let y = self.partial_sum;
        self.finalized.push(y);

        let step = Step {
            index,
            kind: StepKind::Finalize,
            shift: n,
            output_index: n,
            terms: Vec::new(),
            partial_sum: y,
            finalized: self.finalized.clone(),
        };

        // The last output may sit at i64::MAX; only advance while steps remain
        if self.next_index < self.step_count {
            self.output_index += 1;
            self.term_cursor = 0;
            self.partial_sum = T::zero();
        }

        Some(step)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.step_count - self.next_index;
        (remaining, Some(remaining))
    }
}

impl<T: Sample> ExactSizeIterator for Steps<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex;

    fn example() -> (Signal, Signal) {
        (
            Signal::new(vec![1.0, 2.0, 3.0], 0),
            Signal::new(vec![0.0, 1.0, 0.5], 0),
        )
    }

    fn per_term() -> StepperConfig {
        StepperConfig {
            per_term: true,
            ..StepperConfig::default()
        }
    }

    #[test]
    fn test_step_count() {
        let (a, b) = example();

        let whole = ConvolutionStepper::with_defaults(a.clone(), b.clone()).unwrap();
        assert_eq!(whole.step_count(), 10);
        assert_eq!(whole.steps().len(), 10);

        let fine = ConvolutionStepper::new(a, b, per_term()).unwrap();
        assert_eq!(fine.step_count(), 9 + 5);
        assert_eq!(fine.steps().count(), 14);
    }

    #[test]
    fn test_reference_example_steps() {
        let (a, b) = example();
        let stepper = ConvolutionStepper::with_defaults(a, b).unwrap();
        let steps: Vec<Step<f64>> = stepper.steps().collect();

        // Accumulate step for n = 2
        let step = &steps[4];
        assert_eq!(step.kind, StepKind::Accumulate);
        assert_eq!(step.output_index, 2);
        assert_eq!(step.shift, 2);
        assert_eq!(
            step.terms,
            vec![
                Term { k: 0, fixed: 1.0, flipped: 0.5, product: 0.5 },
                Term { k: 1, fixed: 2.0, flipped: 1.0, product: 2.0 },
                Term { k: 2, fixed: 3.0, flipped: 0.0, product: 0.0 },
            ]
        );
        assert!((step.partial_sum - 2.5).abs() < 1e-10);
        assert_eq!(step.finalized, vec![0.0, 1.0]);

        let done = &steps[5];
        assert_eq!(done.kind, StepKind::Finalize);
        assert!(done.terms.is_empty());
        assert_eq!(done.finalized, vec![0.0, 1.0, 2.5]);

        let last = steps.last().unwrap();
        assert_eq!(last.finalized, stepper.compute().values());
    }

    #[test]
    fn test_steps_ordered() {
        let a: Signal = Signal::new(vec![1.0, -2.0, 0.5, 4.0], -2);
        let b: Signal = Signal::new(vec![3.0, 1.0, -1.0], 1);
        let stepper = ConvolutionStepper::new(a, b, per_term()).unwrap();

        let steps: Vec<Step<f64>> = stepper.steps().collect();
        for (i, pair) in steps.windows(2).enumerate() {
            assert_eq!(pair[0].index, i);
            assert!(pair[0].output_index <= pair[1].output_index);
            if pair[0].output_index == pair[1].output_index && pair[1].kind == StepKind::Accumulate {
                assert!(pair[0].terms[0].k < pair[1].terms[0].k);
            }
        }

        for step in steps.iter().filter(|s| s.kind == StepKind::Accumulate) {
            assert_eq!(step.terms.len(), 1);
        }
    }

    #[test]
    fn test_terms_sum_to_output() {
        let a: Signal = Signal::new(vec![0.3, -1.2, 4.0, 2.5, 0.1], 3);
        let b: Signal = Signal::new(vec![1.5, 0.25, -0.7], -4);

        for config in [StepperConfig::default(), per_term()] {
            let stepper = ConvolutionStepper::new(a.clone(), b.clone(), config).unwrap();
            let y = stepper.compute();

            for (n, expected) in y.iter() {
                let sum: f64 = stepper
                    .steps()
                    .filter(|s| s.output_index == n)
                    .flat_map(|s| s.terms)
                    .map(|t| t.product)
                    .sum();
                assert!((sum - expected).abs() < 1e-10);
            }
        }
    }

    #[test]
    fn test_single_overlap_has_one_term() {
        let (a, b) = example();
        let stepper = ConvolutionStepper::with_defaults(a, b).unwrap();

        let first = stepper.step_at(0).unwrap();
        assert_eq!(first.terms.len(), 1);
        assert_eq!(first.terms[0].k, 0);

        let last_accumulate = stepper.step_at(stepper.step_count() - 2).unwrap();
        assert_eq!(last_accumulate.output_index, 4);
        assert_eq!(last_accumulate.terms.len(), 1);
    }

    #[test]
    fn test_step_at_matches_iterator() {
        let a: Signal = Signal::new(vec![0.1, 0.7, -0.3, 1.9], -1);
        let b: Signal = Signal::new(vec![2.2, -0.4, 0.9], 2);

        for per_term in [false, true] {
            for flip in [Flip::Second, Flip::First] {
                let config = StepperConfig { flip, per_term, require_finite: true };
                let stepper = ConvolutionStepper::new(a.clone(), b.clone(), config).unwrap();

                for step in stepper.steps() {
                    assert_eq!(stepper.step_at(step.index), Some(step));
                }
                assert_eq!(stepper.step_at(stepper.step_count()), None);
            }
        }
    }

    #[test]
    fn test_restart_is_bit_identical() {
        let a: Signal = Signal::new(vec![0.1, 0.2, 0.3], 0);
        let b: Signal = Signal::new(vec![0.7, 0.11], 0);
        let stepper = ConvolutionStepper::new(a, b, per_term()).unwrap();

        let first: Vec<Step<f64>> = stepper.steps().collect();
        let second: Vec<Step<f64>> = stepper.steps().collect();
        assert_eq!(first.len(), second.len());
        for (x, y) in first.iter().zip(second.iter()) {
            assert_eq!(x.partial_sum.to_bits(), y.partial_sum.to_bits());
            assert_eq!(x, y);
        }
    }

    #[test]
    fn test_flip_first_indexes_by_b() {
        let (a, b) = example();
        let config = StepperConfig { flip: Flip::First, ..StepperConfig::default() };
        let stepper = ConvolutionStepper::new(a, b, config).unwrap();

        let step = stepper.step_at(4).unwrap();
        assert_eq!(step.output_index, 2);
        // Terms walk b[k] * a[2-k]
        assert_eq!(step.terms[0], Term { k: 0, fixed: 0.0, flipped: 3.0, product: 0.0 });
        assert!((step.partial_sum - 2.5).abs() < 1e-10);
    }

    #[test]
    fn test_empty_input_produces_no_steps() {
        let x: Signal = Signal::new(vec![1.0, 2.0], 0);

        let stepper = ConvolutionStepper::with_defaults(x.clone(), Signal::empty()).unwrap();
        assert_eq!(stepper.step_count(), 0);
        assert_eq!(stepper.steps().next(), None);
        assert_eq!(stepper.step_at(0), None);
        assert!(stepper.compute().is_empty());

        let stepper = ConvolutionStepper::new(Signal::empty(), x, per_term()).unwrap();
        assert_eq!(stepper.steps().count(), 0);
    }

    #[test]
    fn test_invalid_input_rejected_up_front() {
        let a = Signal::new(vec![1.0, f64::NAN], 0);
        let b: Signal = Signal::new(vec![1.0], 0);

        let result = ConvolutionStepper::with_defaults(a.clone(), b.clone());
        assert!(matches!(result, Err(SignalError::NonFinite { signal: "a", index: 1, .. })));

        let relaxed = StepperConfig { require_finite: false, ..StepperConfig::default() };
        assert!(ConvolutionStepper::new(a, b, relaxed).is_ok());
    }

    #[test]
    fn test_walk_ending_at_max_index() {
        // Last output index is exactly i64::MAX
        let a: Signal = Signal::new(vec![1.0, 2.0], i64::MAX - 1);
        let b: Signal = Signal::new(vec![1.0], 0);

        for config in [StepperConfig::default(), per_term()] {
            let stepper = ConvolutionStepper::new(a.clone(), b.clone(), config).unwrap();
            let steps: Vec<Step<f64>> = stepper.steps().collect();

            assert_eq!(steps.len(), stepper.step_count());
            let last = steps.last().unwrap();
            assert_eq!(last.kind, StepKind::Finalize);
            assert_eq!(last.output_index, i64::MAX);
            assert_eq!(last.finalized, vec![1.0, 2.0]);

            for step in steps {
                assert_eq!(stepper.step_at(step.index), Some(step));
            }
        }

        // Exhausted iterator stays exhausted
        let stepper = ConvolutionStepper::with_defaults(a, b).unwrap();
        let mut walk = stepper.steps();
        assert_eq!(walk.by_ref().count(), 4);
        assert_eq!(walk.next(), None);
    }

    #[test]
    fn test_stepper_shareable_across_threads() {
        fn assert_send_sync<S: Send + Sync>() {}
        assert_send_sync::<ConvolutionStepper<f64>>();
        assert_send_sync::<ConvolutionStepper<Complex<f64>>>();
    }

    #[test]
    fn test_complex_steps() {
        let a = Signal::new(vec![Complex::new(1.0, 1.0), Complex::new(0.0, 2.0)], 0);
        let b = Signal::new(vec![Complex::new(2.0, 0.0)], 1);
        let stepper = ConvolutionStepper::with_defaults(a, b).unwrap();

        let last = stepper.steps().last().unwrap();
        assert_eq!(last.finalized, vec![Complex::new(2.0, 2.0), Complex::new(0.0, 4.0)]);
        assert_eq!(stepper.compute().start(), 1);
    }
}
