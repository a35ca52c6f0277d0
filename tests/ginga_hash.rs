mod common;

use common::{TestBytes, flip_bit, hamming};
use ginga::hash::ginga::core::compress;
use ginga::hash::ginga::{DIGEST_SIZE, GINGA_INIT};
use ginga::hash::{GingaHasher, Hasher, ginga_hash};

fn expect_ginga_eq(input: &[u8], expected: &str) {
    let got = ginga_hash(input);

    assert_eq!(
        hex::encode(got),
        expected,
        "Digest mismatch for input of {} bytes",
        input.len(),
    );
}

// -------------------------------------------------------
// 1. KNOWN-ANSWER VECTORS
// -------------------------------------------------------

#[test]
fn ginga_empty_vector() {
    expect_ginga_eq(
        b"",
        "ed5b4d90e79fc272e1ef1ec48da737c2158ca704fba45bd2d97144faa6d43eeb",
    );
}

#[test]
fn ginga_abc_vector() {
    expect_ginga_eq(
        b"abc",
        "0889c3755c42334341f0c758b320cc98c09df84397edb67575d69215e0469e2e",
    );
}

#[test]
fn ginga_known_phrase() {
    expect_ginga_eq(
        b"The quick brown fox jumps over the lazy dog",
        "20fb949d4609d3c51e04fb50edc48bd7fc467a3a7bfbeea92a0b5774c500fb63",
    );
}

#[test]
fn ginga_utf8_phrase() {
    expect_ginga_eq(
        "Exemplo da função hash Ginga em PHP.".as_bytes(),
        "5a1ecb2272f6a6fdf731a27785a549aa95a4e15746ea438ba4d345e1edde6561",
    );
}

#[test]
fn ginga_zero_filled_lengths() {
    let vectors = [
        (1usize, "61b694d45c0619a517686000bfbf240091b68ab7b5ac57e1b851e6117e5c3c96"),
        (23, "d73209edd76e13d86f7afddb129f1bd89bdc69913afbc81401fabd1c0700c55b"),
        (24, "d73b4ed504d0b258758b73f7e57728ef5aff37afa9cb8f2c11387537bb3b5f06"),
        (31, "fefc018ca6f0d9d9f245f3ec989feef4e46e37afe59296c8602a0d9b6624f208"),
        (32, "aaad36498d3e794b79018dfdcdb5657e36bc9e8d269fa1d10e185888237222ba"),
        (33, "a92d942da10aed42bcfecb7cc61e96ad79fb610cb87e98decfccfabbbaa9b6f6"),
        (55, "fd6c52f5606830e8ffc37470dea4de6d8ca3e436fa18e62f0b25ca3646f15b1f"),
        (56, "224ed5d0b4384d306b8308bedf0dbc153073166bd80e1922fde7b2d9ae1ded02"),
        (64, "fdab645c44c5bd436852638e48578ada558ac9ab0d30fa307135886d98cbcd3c"),
        (1000, "2ffba54f1eb593bad16dd76574bf9e0064542b2e2e794dd869caabac69d6c9e8"),
    ];

    for (len, expected) in vectors {
        expect_ginga_eq(&vec![0u8; len], expected);
    }
}

#[test]
fn ginga_counting_bytes() {
    let input: Vec<u8> = (0..1024).map(|i| i as u8).collect();

    expect_ginga_eq(
        &input,
        "38d16f55567c80031af5f296df7c130e8d377e8358d9cd7b053a4c63170e8fa8",
    );
}

// -------------------------------------------------------
// 2. STRUCTURE
// -------------------------------------------------------

#[test]
fn ginga_digest_length_is_fixed() {
    for len in [0usize, 1, 31, 32, 33, 1000] {
        assert_eq!(ginga_hash(&vec![0xA5u8; len]).len(), DIGEST_SIZE);
    }
}

#[test]
fn ginga_empty_is_one_padded_block() {
    let mut block = [0u8; 32];
    block[0] = 0x80;

    let mut state = GINGA_INIT;
    compress(&block, &mut state);

    let mut expected = [0u8; 32];
    for (chunk, word) in expected.chunks_exact_mut(4).zip(&state[..8]) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }

    assert_eq!(ginga_hash(b""), expected);
}

#[test]
fn ginga_length_is_bound_into_digest() {
    assert_ne!(ginga_hash(&[0u8; 1]), ginga_hash(&[0u8; 2]));
    assert_ne!(ginga_hash(b""), ginga_hash(&[0u8; 1]));
}

// -------------------------------------------------------
// 3. INCREMENTAL HASHING
// -------------------------------------------------------

#[test]
fn ginga_streaming_matches_one_shot() {
    let mut rng = TestBytes::new(0x5eed);
    let input = rng.fill(300);
    let expected = ginga_hash(&input);

    for chunk in [1usize, 2, 7, 23, 24, 31, 32, 33, 64, 299, 300] {
        let mut hasher = GingaHasher::new();
        for piece in input.chunks(chunk) {
            hasher.update(piece);
        }

        assert_eq!(hasher.finalize(), expected, "chunk size {chunk}");
    }
}

#[test]
fn ginga_empty_updates_are_neutral() {
    let mut hasher = GingaHasher::new();
    hasher.update(b"");
    hasher.update(b"ab");
    hasher.update(b"");
    hasher.update(b"c");

    assert_eq!(hasher.finalize(), ginga_hash(b"abc"));
}

#[test]
fn ginga_finalize_reset_restarts() {
    let mut hasher = GingaHasher::default();
    hasher.update(b"first message");

    assert_eq!(hasher.finalize_reset(), ginga_hash(b"first message"));

    hasher.update(b"abc");
    assert_eq!(hasher.finalize_reset(), ginga_hash(b"abc"));
    assert_eq!(hasher.clone().finalize(), ginga_hash(b""));
}

#[test]
fn ginga_reset_discards_input() {
    let mut hasher = GingaHasher::new();
    hasher.update(&[0xFFu8; 45]);
    hasher.reset();

    assert_eq!(hasher.finalize(), ginga_hash(b""));
}

#[test]
fn ginga_trait_digest_matches() {
    assert_eq!(<GingaHasher as Hasher>::BLOCK_SIZE, 32);
    assert_eq!(<GingaHasher as Hasher>::OUTPUT_SIZE, 32);
    assert_eq!(GingaHasher::digest(b"abc"), ginga_hash(b"abc"));
}

// -------------------------------------------------------
// 4. STATISTICAL PROPERTIES
// -------------------------------------------------------

#[test]
fn ginga_avalanche_is_near_half() {
    let mut rng = TestBytes::new(0x6769_6e67_61);

    let mut total = 0u64;
    let mut samples = 0u64;

    for _ in 0..16 {
        let input = rng.fill(48);
        let reference = ginga_hash(&input);

        for bit in (0..384).step_by(3) {
            total += hamming(&reference, &ginga_hash(&flip_bit(&input, bit))) as u64;
            samples += 1;
        }
    }

    let mean = total as f64 / samples as f64;
    assert!((118.0..=138.0).contains(&mean), "mean flipped bits {mean}");
}
