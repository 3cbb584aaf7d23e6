// corpus.rs — Deterministic sample data for tests, benches and fuzz seeds.
//
// Two shapes are produced:
//   - `words`: space-separated words drawn with a length-weighted
//     distribution, giving text that compresses like prose.
//   - `noise`: bytes with no exploitable structure.
// Both are a pure function of (size, seed).

use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Vocabulary
// ---------------------------------------------------------------------------

static VOCABULARY: &[&str] = &[
    "stream", "buffer", "window", "block", "encoder", "decoder", "flush", "finish",
    "quality", "chunk", "output", "input", "limit", "pending", "state", "codec",
    "a", "an", "the", "of", "to", "in", "is", "it", "on", "by", "as", "or",
    "and", "for", "not", "but", "all", "any", "can", "may", "one", "two",
    "brotli", "context", "literal", "distance", "prefix", "huffman", "symbol",
    "metablock", "dictionary", "transform", "sliding", "repeat", "insert", "copy",
    "process", "compress", "decompress", "allocation", "concurrent", "terminal",
    "round", "trip", "drain", "grow", "reserve", "handle", "native", "guard",
];

// Weight by word length (len >= 6 uses the last entry): short words dominate.
static LENGTH_WEIGHTS: &[u32] = &[0, 9, 7, 5, 3, 2, 1];

fn distribution() -> &'static [usize] {
    static DISTRIB: OnceLock<Vec<usize>> = OnceLock::new();
    DISTRIB.get_or_init(|| {
        let last = LENGTH_WEIGHTS.len() - 1;
        VOCABULARY
            .iter()
            .enumerate()
            .flat_map(|(idx, w)| {
                let weight = LENGTH_WEIGHTS[w.len().min(last)] as usize;
                std::iter::repeat(idx).take(weight)
            })
            .collect()
    })
}

// ---------------------------------------------------------------------------
// PRNG
// ---------------------------------------------------------------------------

/// 32-bit multiply-xor-rotate generator.
#[derive(Debug, Clone)]
struct Rng(u32);

impl Rng {
    fn new(seed: u32) -> Self {
        Rng(seed ^ 0x9E37_79B9)
    }

    fn next_u32(&mut self) -> u32 {
        let mut r = self.0.wrapping_mul(2_654_435_761);
        r ^= 2_246_822_519;
        r = r.rotate_left(13);
        self.0 = r;
        r
    }

    /// Uniform in `0..range`.
    fn below(&mut self, range: u32) -> u32 {
        ((self.next_u32() as u64 * range as u64) >> 32) as u32
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Exactly `size` bytes of word-sampled text.
pub fn words(size: usize, seed: u32) -> Vec<u8> {
    let distrib = distribution();
    let mut rng = Rng::new(seed);
    let mut out = Vec::with_capacity(size);
    let mut since_newline = 0usize;

    while out.len() < size {
        let word = VOCABULARY[distrib[rng.below(distrib.len() as u32) as usize]];
        out.extend_from_slice(word.as_bytes());
        since_newline += 1;
        if since_newline > 8 + rng.below(8) as usize {
            out.extend_from_slice(b".\n");
            since_newline = 0;
        } else {
            out.push(b' ');
        }
    }
    out.truncate(size);
    out
}

/// Exactly `size` bytes of incompressible noise.
pub fn noise(size: usize, seed: u32) -> Vec<u8> {
    let mut rng = Rng::new(seed);
    let mut out = Vec::with_capacity(size + 4);
    while out.len() < size {
        out.extend_from_slice(&rng.next_u32().to_le_bytes());
    }
    out.truncate(size);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distribution_covers_every_word() {
        let d = distribution();
        for idx in 0..VOCABULARY.len() {
            assert!(d.contains(&idx), "word {} missing", VOCABULARY[idx]);
        }
    }

    #[test]
    fn below_stays_in_range() {
        let mut rng = Rng::new(7);
        for _ in 0..1000 {
            assert!(rng.below(10) < 10);
        }
    }
}
