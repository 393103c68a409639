//! Constant-time verification for the forward NTT.
//!
//! Compares timing between an all-zero polynomial and one with random
//! coefficients saturating the input bound; a data-dependent fast path
//! anywhere in the butterfly network would separate the two classes.
//!
//! Run with: `cargo run --release -p mlk-timing --bin butterfly`

use dudect_bencher::rand::Rng;
use dudect_bencher::{BenchRng, Class, CtRunner, ctbench_main};
use mlk_math::ntt::forward_ntt;
use mlk_math::{N, Q};

/// Number of iterations per batch.
const ITERATIONS: usize = 10_000;

fn bench_forward_ntt(runner: &mut CtRunner, rng: &mut BenchRng) {
    let span = 2 * (Q as u16) - 1;

    for _ in 0..ITERATIONS {
        let random = rng.r#gen::<bool>();
        let class = if random { Class::Right } else { Class::Left };

        let mut coeffs = [0i16; N];
        if random {
            for c in coeffs.iter_mut() {
                *c = (i32::from(rng.r#gen::<u16>() % span) - i32::from(Q - 1)) as i16;
            }
        }

        runner.run_one(class, || {
            let mut r = coeffs;
            forward_ntt(&mut r);
            core::hint::black_box(r);
        });
    }
}

ctbench_main!(bench_forward_ntt);
