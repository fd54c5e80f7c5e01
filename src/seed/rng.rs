// Seeded ARC4 stream producing uniform doubles.
//
// The construction follows the `seedrandom` family: the seed's UTF-16 code units are
// folded into a 256-byte key, ARC4 is keyed with it, the first 256 outputs are dropped,
// and each double is assembled from at least six output bytes so that every bit of the
// 52-bit mantissa is random. Output is bit-identical across platforms: only integer
// arithmetic runs before the single final division by a power of two.

const WIDTH: usize = 256;
const CHUNKS: u32 = 6;
const START_DENOM: f64 = 281_474_976_710_656.0; // 256^6
const SIGNIFICANCE: u64 = 1 << 52;
const OVERFLOW: u64 = 1 << 53;
const SMEAR_FACTOR: u32 = 19;

#[derive(Clone, Debug)]
struct Arc4 {
    i: u8,
    j: u8,
    s: [u8; WIDTH],
}

impl Arc4 {
    fn new(key: &[u8]) -> Self {
        // An empty key schedules like `[0]`.
        let key: &[u8] = if key.is_empty() { &[0] } else { key };

        let mut s = [0u8; WIDTH];
        for (i, slot) in s.iter_mut().enumerate() {
            *slot = i as u8;
        }

        let mut j = 0u8;
        for i in 0..WIDTH {
            j = j.wrapping_add(s[i]).wrapping_add(key[i % key.len()]);
            s.swap(i, usize::from(j));
        }

        let mut arc4 = Self { i: 0, j: 0, s };
        for _ in 0..WIDTH {
            arc4.next_byte();
        }
        arc4
    }

    fn next_byte(&mut self) -> u8 {
        self.i = self.i.wrapping_add(1);
        let t = self.s[usize::from(self.i)];
        self.j = self.j.wrapping_add(t);
        let u = self.s[usize::from(self.j)];
        self.s[usize::from(self.i)] = u;
        self.s[usize::from(self.j)] = t;
        self.s[usize::from(t.wrapping_add(u))]
    }

    /// Next `count` bytes as one big-endian integer (`count <= 8`).
    fn next_bytes(&mut self, count: u32) -> u64 {
        (0..count).fold(0u64, |acc, _| (acc << 8) | u64::from(self.next_byte()))
    }
}

fn mix_key(seed: &str) -> Vec<u8> {
    let mut key: Vec<u8> = Vec::new();
    let mut smear = 0u32;
    for (j, unit) in seed.encode_utf16().enumerate() {
        let slot = j % WIDTH;
        let prev = key.get(slot).map_or(0, |&b| u32::from(b));
        smear ^= prev * SMEAR_FACTOR;
        let mixed = (smear.wrapping_add(u32::from(unit)) & 0xff) as u8;
        if slot < key.len() {
            key[slot] = mixed;
        } else {
            key.push(mixed);
        }
    }
    key
}

/// Deterministic pseudo-random stream derived from a seed string.
///
/// A run owns exactly one stream and threads it by `&mut` through every stage that draws
/// from it. Two streams created from the same seed yield identical sequences forever.
#[derive(Clone, Debug)]
pub struct SeedRng {
    arc4: Arc4,
    draws: u64,
}

impl SeedRng {
    /// Create a stream keyed by `seed`.
    pub fn new(seed: &str) -> Self {
        Self {
            arc4: Arc4::new(&mix_key(seed)),
            draws: 0,
        }
    }

    /// Number of doubles drawn so far.
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Next uniform double in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.draws += 1;

        let mut n = self.arc4.next_bytes(CHUNKS);
        let mut d = START_DENOM;
        let mut x = 0u64;
        while n < SIGNIFICANCE {
            n = (n + x) * WIDTH as u64;
            d *= WIDTH as f64;
            x = u64::from(self.arc4.next_byte());
        }
        // `n` is a multiple of 256 here, so halving stays exact.
        while n >= OVERFLOW {
            n /= 2;
            d /= 2.0;
            x >>= 1;
        }
        (n + x) as f64 / d
    }

    /// Uniform integer in the inclusive range `[min, max]`.
    pub fn rand_int(&mut self, min: i64, max: i64) -> i64 {
        let span = (max - min + 1) as f64;
        (self.next_f64() * span).floor() as i64 + min
    }

    /// Uniform real in `[min, max)`.
    pub fn rand_float(&mut self, min: f64, max: f64) -> f64 {
        self.next_f64() * (max - min) + min
    }

    /// Uniformly choose one element. Empty slices yield `None` without drawing.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let idx = self.rand_int(0, items.len() as i64 - 1);
        items.get(idx as usize)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/seed/rng.rs"]
mod tests;
