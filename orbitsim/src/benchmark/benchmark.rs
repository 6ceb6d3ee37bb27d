use std::time::Instant;

use crate::simulation::engine::Engine;
use crate::simulation::params::Parameters;
use crate::simulation::states::BodySpec;
use crate::simulation::vector::NVec2;

/// Frame budget at 60 updates per second
const FRAME_BUDGET_MS: f64 = 16.0;

/// Deterministic ring of `n` bodies around a heavy center, no rand needed
fn ring_bodies(n: usize) -> Vec<BodySpec> {
    let mut bodies = vec![BodySpec::new("center", 1000.0, NVec2::new(300.0, 200.0), NVec2::zeros())];
    for i in 1..n {
        let i_f = i as f64;
        let angle = i_f * 0.61;
        let r = 80.0 + 12.0 * i_f;
        let pos = NVec2::new(300.0 + r * angle.cos(), 200.0 + r * angle.sin());
        let vel = NVec2::new(-angle.sin(), angle.cos()) * (0.0667 * 1000.0 / r).sqrt();
        bodies.push(BodySpec::new(format!("b{i}"), 1.0 + (i_f * 0.37).sin().abs(), pos, vel));
    }
    bodies
}

/// Time full engine ticks for body counts in the tens
pub fn bench_tick() {
    let ns = [10, 20, 40, 80];
    let steps = 1000;

    println!("N,tick_ms,budget_ms");
    for n in ns {
        let mut params = Parameters::default();
        // keep n fixed for the whole run
        params.collisions_enabled = false;

        let mut engine = match Engine::new(params, ring_bodies(n)) {
            Ok(e) => e,
            Err(e) => {
                eprintln!("bench_tick: could not build engine for N = {n}: {e}");
                continue;
            }
        };

        // Warm up
        for _ in 0..10 {
            engine.tick(1.0 / 60.0);
        }

        let t0 = Instant::now();
        for _ in 0..steps {
            engine.tick(1.0 / 60.0);
        }
        let ms = t0.elapsed().as_secs_f64() * 1e3 / steps as f64;

        println!("{},{:.6},{:.1}", n, ms, FRAME_BUDGET_MS);
    }
}
