use jiff::SignedDuration;

/// Search configuration. With no termination conditions the search runs
/// until the strict-improvement loop converges; caps bound it for
/// production use.
#[derive(Clone, Debug, Default)]
pub struct SolverParams {
    pub terminations: Vec<Termination>,
    pub evaluation_threads: Threads,
}

#[derive(Clone, Copy, Debug)]
pub enum Termination {
    Duration(SignedDuration),
    Iterations(usize),
}

#[derive(Clone, Copy, Debug, Default)]
pub enum Threads {
    Single,
    #[default]
    Auto,
    Multi(usize),
}

impl Threads {
    pub fn number_of_threads(&self) -> usize {
        match self {
            Threads::Single => 1,
            Threads::Multi(num) => *num,
            Threads::Auto => std::thread::available_parallelism().map_or(1, |n| n.get()),
        }
    }
}
