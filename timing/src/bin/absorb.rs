//! Constant-time verification for sponge absorption.
//!
//! Tests that `absorb_once` timing depends only on the public message
//! length, never on message content: Class::Left absorbs an all-zero
//! message, Class::Right a random one of the same length.
//!
//! Run with: `cargo run --release -p mlk-timing --bin absorb`

use dudect_bencher::rand::Rng;
use dudect_bencher::{BenchRng, Class, CtRunner, ctbench_main};
use mlk_hash::{PLEN, SHAKE_PAD, SHAKE128_RATE, absorb_once};

const MSG_LEN: usize = 3 * SHAKE128_RATE + 17;

/// Number of iterations per batch.
const ITERATIONS: usize = 10_000;

fn bench_absorb(runner: &mut CtRunner, rng: &mut BenchRng) {
    for _ in 0..ITERATIONS {
        let random = rng.r#gen::<bool>();
        let class = if random { Class::Right } else { Class::Left };

        let mut msg = [0u8; MSG_LEN];
        if random {
            rng.fill(&mut msg[..]);
        }

        runner.run_one(class, || {
            let mut state = [0u64; PLEN];
            absorb_once(&mut state, SHAKE128_RATE, &msg, SHAKE_PAD);
            core::hint::black_box(state);
        });
    }
}

ctbench_main!(bench_absorb);
