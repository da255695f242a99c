//! Cost configuration for the alignment engine.
//!
//! A [`CostModel`] bundles the hooks that seed the matrix boundary and price
//! each edit operation, together with an optional clamp ("border") and the
//! direction of optimisation. Every hook that is not set explicitly falls back
//! to the classic edit distance defaults.

use std::fmt;
use std::sync::Arc;

/// Type for accumulated costs and scores. Signed, since scores under
/// [`Goal::Maximize`] are usually negative for gaps.
pub type Cost = i32;

/// Anything that can be compared symbol by symbol.
pub trait Symbol: Copy + PartialEq + 'static {}

impl<T: Copy + PartialEq + 'static> Symbol for T {}

/// Whether the engine looks for the smallest cost or the largest score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Goal {
    #[default]
    Minimize,
    Maximize,
}

impl Goal {
    /// True when `a` is strictly better than `b`.
    pub fn prefers(self, a: Cost, b: Cost) -> bool {
        match self {
            Goal::Minimize => a < b,
            Goal::Maximize => a > b,
        }
    }

    /// The extremum of `candidates`, or `None` when there are none.
    pub fn best<I: IntoIterator<Item = Cost>>(self, candidates: I) -> Option<Cost> {
        candidates
            .into_iter()
            .fold(None, |best, c| match best {
                Some(b) if !self.prefers(c, b) => Some(b),
                _ => Some(c),
            })
    }

    /// Clamp `value` so that it never becomes worse than `border`.
    ///
    /// Minimising caps costs from above, maximising lifts scores from below.
    pub fn clamp(self, value: Cost, border: Option<Cost>) -> Cost {
        match (self, border) {
            (Goal::Minimize, Some(border)) if value > border => border,
            (Goal::Maximize, Some(border)) if value < border => border,
            _ => value,
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Goal::Minimize => write!(f, "minimize"),
            Goal::Maximize => write!(f, "maximize"),
        }
    }
}

type InitFn<T> = Arc<dyn Fn(T, usize) -> Cost + Send + Sync>;
type SymbolFn<T> = Arc<dyn Fn(T) -> Cost + Send + Sync>;
type PairFn<T> = Arc<dyn Fn(T, T) -> Cost + Send + Sync>;

/// Immutable bundle of cost hooks.
///
/// Built with [`CostModel::new`] and refined with the `with_*` methods:
///
/// ```
/// use editgrid_align::{CostModel, Goal};
///
/// let model = CostModel::<char>::new()
///     .with_substitution(|a, b| if a == b { 0 } else { 1 })
///     .with_goal(Goal::Minimize);
/// assert_eq!(model.substitution('k', 's'), 1);
/// assert_eq!(model.insertion('x'), 1);
/// ```
pub struct CostModel<T> {
    init_first: InitFn<T>,
    init_second: InitFn<T>,
    insertion: SymbolFn<T>,
    deletion: SymbolFn<T>,
    substitution: PairFn<T>,
    transposition: PairFn<T>,
    transpositions: bool,
    border: Option<Cost>,
    goal: Goal,
}

impl<T: Symbol> CostModel<T> {
    /// Classic edit distance: boundary `D(i,0) = i`, unit insertions and
    /// deletions, substitutions cost 0 on a match and 2 otherwise.
    pub fn new() -> Self {
        Self {
            init_first: Arc::new(|_: T, position: usize| position as Cost),
            init_second: Arc::new(|_: T, position: usize| position as Cost),
            insertion: Arc::new(|_: T| 1),
            deletion: Arc::new(|_: T| 1),
            substitution: Arc::new(|a: T, b: T| if a == b { 0 } else { 2 }),
            transposition: Arc::new(|a: T, b: T| if a == b { 0 } else { 2 }),
            transpositions: false,
            border: None,
            goal: Goal::Minimize,
        }
    }

    /// Seed for column 0, called with `(A[i-1], i)` for `i = 1..=n`.
    pub fn with_init_first<F>(mut self, f: F) -> Self
    where
        F: Fn(T, usize) -> Cost + Send + Sync + 'static,
    {
        self.init_first = Arc::new(f);
        self
    }

    /// Seed for row 0, called with `(B[j-1], j)` for `j = 1..=m`.
    pub fn with_init_second<F>(mut self, f: F) -> Self
    where
        F: Fn(T, usize) -> Cost + Send + Sync + 'static,
    {
        self.init_second = Arc::new(f);
        self
    }

    pub fn with_insertion<F>(mut self, f: F) -> Self
    where
        F: Fn(T) -> Cost + Send + Sync + 'static,
    {
        self.insertion = Arc::new(f);
        self
    }

    pub fn with_deletion<F>(mut self, f: F) -> Self
    where
        F: Fn(T) -> Cost + Send + Sync + 'static,
    {
        self.deletion = Arc::new(f);
        self
    }

    pub fn with_substitution<F>(mut self, f: F) -> Self
    where
        F: Fn(T, T) -> Cost + Send + Sync + 'static,
    {
        self.substitution = Arc::new(f);
        self
    }

    /// Price of swapping two adjacent symbols. Only consulted once
    /// transpositions are enabled with [`CostModel::with_transpositions`].
    pub fn with_transposition<F>(mut self, f: F) -> Self
    where
        F: Fn(T, T) -> Cost + Send + Sync + 'static,
    {
        self.transposition = Arc::new(f);
        self
    }

    pub fn with_transpositions(mut self, enabled: bool) -> Self {
        self.transpositions = enabled;
        self
    }

    pub fn with_border(mut self, border: Option<Cost>) -> Self {
        self.border = border;
        self
    }

    pub fn with_goal(mut self, goal: Goal) -> Self {
        self.goal = goal;
        self
    }
}

impl<T> CostModel<T> {
    pub fn init_first(&self, symbol: T, position: usize) -> Cost {
        (self.init_first)(symbol, position)
    }

    pub fn init_second(&self, symbol: T, position: usize) -> Cost {
        (self.init_second)(symbol, position)
    }

    pub fn insertion(&self, symbol: T) -> Cost {
        (self.insertion)(symbol)
    }

    pub fn deletion(&self, symbol: T) -> Cost {
        (self.deletion)(symbol)
    }

    pub fn substitution(&self, a: T, b: T) -> Cost {
        (self.substitution)(a, b)
    }

    pub fn transposition(&self, a: T, b: T) -> Cost {
        (self.transposition)(a, b)
    }

    pub fn transpositions_enabled(&self) -> bool {
        self.transpositions
    }

    pub fn border(&self) -> Option<Cost> {
        self.border
    }

    pub fn goal(&self) -> Goal {
        self.goal
    }
}

impl<T: Symbol> Default for CostModel<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for CostModel<T> {
    fn clone(&self) -> Self {
        Self {
            init_first: Arc::clone(&self.init_first),
            init_second: Arc::clone(&self.init_second),
            insertion: Arc::clone(&self.insertion),
            deletion: Arc::clone(&self.deletion),
            substitution: Arc::clone(&self.substitution),
            transposition: Arc::clone(&self.transposition),
            transpositions: self.transpositions,
            border: self.border,
            goal: self.goal,
        }
    }
}

impl<T> fmt::Debug for CostModel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CostModel")
            .field("goal", &self.goal)
            .field("border", &self.border)
            .field("transpositions", &self.transpositions)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let model = CostModel::<char>::new();

        assert_eq!(model.init_first('x', 3), 3);
        assert_eq!(model.init_second('y', 5), 5);
        assert_eq!(model.insertion('a'), 1);
        assert_eq!(model.deletion('a'), 1);
        assert_eq!(model.substitution('a', 'a'), 0);
        assert_eq!(model.substitution('a', 'b'), 2);
        assert_eq!(model.transposition('a', 'a'), 0);
        assert_eq!(model.transposition('a', 'b'), 2);
        assert!(!model.transpositions_enabled());
        assert_eq!(model.border(), None);
        assert_eq!(model.goal(), Goal::Minimize);
    }

    #[test]
    fn test_overrides_leave_other_hooks_alone() {
        let model = CostModel::<u8>::new()
            .with_insertion(|_| 3)
            .with_border(Some(4))
            .with_goal(Goal::Maximize);

        assert_eq!(model.insertion(b'a'), 3);
        assert_eq!(model.deletion(b'a'), 1);
        assert_eq!(model.border(), Some(4));
        assert_eq!(model.goal(), Goal::Maximize);
    }

    #[test]
    fn test_clone_shares_hooks() {
        let model = CostModel::<char>::new().with_substitution(|a, b| if a == b { 5 } else { -5 });
        let copy = model.clone();
        assert_eq!(copy.substitution('a', 'a'), 5);
        assert_eq!(copy.substitution('a', 'b'), -5);
    }

    #[test]
    fn test_goal_best() {
        assert_eq!(Goal::Minimize.best([3, 1, 2]), Some(1));
        assert_eq!(Goal::Maximize.best([3, 1, 2]), Some(3));
        assert_eq!(Goal::Minimize.best(Vec::new()), None);
        assert_eq!(Goal::Maximize.best([-4, -4]), Some(-4));
    }

    #[test]
    fn test_goal_clamp() {
        assert_eq!(Goal::Minimize.clamp(7, Some(5)), 5);
        assert_eq!(Goal::Minimize.clamp(3, Some(5)), 3);
        assert_eq!(Goal::Maximize.clamp(-2, Some(0)), 0);
        assert_eq!(Goal::Maximize.clamp(2, Some(0)), 2);
        assert_eq!(Goal::Minimize.clamp(100, None), 100);
    }

    #[test]
    fn test_debug_hides_hooks() {
        let debug = format!("{:?}", CostModel::<char>::new());
        assert!(debug.contains("Minimize"));
        assert!(debug.contains(".."));
    }
}
