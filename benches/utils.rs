#![allow(dead_code)]

use vecbench::{DataGenerator, KernelKind};

/// Bytes moved by one call, straight from the kernel's cost model.
pub fn rw_bytes(kind: KernelKind, n: usize) -> u64 {
    kind.workload(n).bytes
}

/// Two seeded f32 vectors in [-1.0, 1.0], identical across runs.
pub fn seeded_pair(n: usize) -> (Vec<f32>, Vec<f32>) {
    let mut gen = DataGenerator::default();
    let x = gen.generate_random(n);
    let y = gen.generate_random(n);
    (x, y)
}

pub fn size_label(n: usize) -> String {
    match n {
        n if n >= 1 << 20 && n % (1 << 20) == 0 => format!("{}M", n >> 20),
        n if n >= 1 << 10 && n % (1 << 10) == 0 => format!("{}K", n >> 10),
        _ => format!("{n}"),
    }
}
