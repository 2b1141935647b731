//! Seeded `i32` inputs for the suite and the benchmarks.
//!
//! Every pattern draws from a `StdRng` seeded once per process, so a failing run can be replayed
//! with `OVERRIDE_SEED=<seed>`. The seed is printed by the suite before the first test runs.

use std::env;
use std::sync::Mutex;

use rand::distributions::Uniform;
use rand::prelude::*;

/// Uniformly random over the whole `i32` range.
pub fn random(len: usize) -> Vec<i32> {
    let mut rng = pattern_rng();
    (0..len).map(|_| rng.gen()).collect()
}

/// Uniformly random within `range`, e.g. `0..16` for many duplicates.
pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<Uniform<i32>>,
{
    let dist = range.into();
    pattern_rng().sample_iter(dist).take(len).collect()
}

/// Random values a radix sort accepts.
pub fn random_non_negative(len: usize) -> Vec<i32> {
    random_uniform(len, 0..=i32::MAX)
}

pub fn all_equal(len: usize) -> Vec<i32> {
    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

/// Random values cut into about `runs` sorted runs, each one randomly ascending or descending.
pub fn saw_mixed(len: usize, runs: usize) -> Vec<i32> {
    let mut rng = pattern_rng();
    let mut v: Vec<i32> = (0..len).map(|_| rng.gen()).collect();
    let run_len = (len / runs.max(1)).max(1);

    for run in v.chunks_mut(run_len) {
        run.sort_unstable();
        if rng.gen::<bool>() {
            run.reverse();
        }
    }

    v
}

/// Ascending first half, descending second half.
pub fn pipe_organ(len: usize) -> Vec<i32> {
    let mut v = random(len);
    let (rising, falling) = v.split_at_mut(len / 2);

    rising.sort_unstable();
    falling.sort_unstable_by(|a, b| b.cmp(a));

    v
}

/// Switches every following pattern call to a fresh random seed.
///
/// Benchmarks call this so repeated iterations see different inputs. Panics if `OVERRIDE_SEED`
/// is set, the two requests contradict each other.
pub fn use_random_seed_each_time() {
    let mut seed = SEED.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    if let Seed::Override(val) = *seed.get_or_insert_with(Seed::from_env) {
        panic!("OVERRIDE_SEED={val} conflicts with a random seed per pattern");
    }

    *seed = Some(Seed::EachCall);
}

/// The seed patterns are derived from in this process.
pub fn random_init_seed() -> u64 {
    let mut seed = SEED.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    match *seed.get_or_insert_with(Seed::from_env) {
        Seed::Fixed(val) | Seed::Override(val) => val,
        Seed::EachCall => thread_rng().gen(),
    }
}

#[derive(Copy, Clone, Debug)]
enum Seed {
    /// Chosen at random on first use, then kept for the whole process.
    Fixed(u64),
    /// Taken from `OVERRIDE_SEED`.
    Override(u64),
    EachCall,
}

impl Seed {
    fn from_env() -> Self {
        match env::var("OVERRIDE_SEED") {
            Ok(val) => match val.parse() {
                Ok(val) => Seed::Override(val),
                Err(err) => panic!("OVERRIDE_SEED={val:?} is not a u64: {err}"),
            },
            Err(_) => Seed::Fixed(thread_rng().gen()),
        }
    }
}

static SEED: Mutex<Option<Seed>> = Mutex::new(None);

fn pattern_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}
