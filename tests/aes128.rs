mod common;

use aes::cipher::{BlockEncrypt, KeyInit, generic_array::GenericArray};
use clt::{Aes128, Backend, Block, CounterStream, Key, bytes_to_blocks};
use common::block;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

const KEY: &str = "2b7e151628aed2a6abf7158809cf4f3c";

// (plaintext, ciphertext) under KEY
const VECTORS: [(&str, &str); 4] = [
    (
        "6bc1bee22e409f96e93d7e117393172a",
        "3ad77bb40d7a3660a89ecaf32466ef97",
    ),
    (
        "ae2d8a571e03ac9c9eb76fac45af8e51",
        "f5d3d58503b9699de785895a96fdbaaf",
    ),
    (
        "30c81c46a35ce411e5fbc1191a0a52ef",
        "43b1cd7f598ece23881b00e3ed030688",
    ),
    (
        "f69f2445df4f9b17ad2b417be66c3710",
        "7b0c785e27e8ad3f8223207104725dd4",
    ),
];

fn reference_cipher() -> Aes128 {
    Aes128::new(&Key::new(block(KEY)))
}

fn random_blocks(rng: &mut StdRng, count: usize) -> Vec<Block> {
    let mut blocks = vec![[0u8; 16]; count];

    for b in blocks.iter_mut() {
        rng.fill_bytes(b);
    }

    blocks
}

// -------------------------------------------------------
// 1. OFFICIAL VECTOR TESTS
// -------------------------------------------------------

#[test]
fn aes128_encrypt_vectors() {
    let cipher = reference_cipher();

    for (pt, ct) in VECTORS {
        let mut b = block(pt);
        cipher.encrypt_block(&mut b);

        assert_eq!(b, block(ct), "plaintext {pt}");
    }
}

#[test]
fn aes128_decrypt_vectors() {
    let cipher = reference_cipher();

    for (pt, ct) in VECTORS {
        let mut b = block(ct);
        cipher.decrypt_block(&mut b);

        assert_eq!(b, block(pt), "ciphertext {ct}");
    }
}

#[test]
fn aes128_fips197_appendix_c1() {
    let cipher = Aes128::new(&Key::new(block("000102030405060708090a0b0c0d0e0f")));
    let mut b = block("00112233445566778899aabbccddeeff");

    cipher.encrypt_block(&mut b);

    assert_eq!(b, block("69c4e0d86a7b0430d8cdb78070b4c55a"));
}

#[test]
fn aes128_zero_key_zero_block() {
    let cipher = Aes128::new(&Key::default());
    let mut b = [0u8; 16];

    cipher.encrypt_block(&mut b);

    assert_eq!(b, block("66e94bd4ef8a2c3b884cfa59ca342b2e"));
}

#[test]
fn aes128_schedule_round_keys() {
    let cipher = reference_cipher();

    assert_eq!(cipher.round_keys()[0], block(KEY));
    assert_eq!(
        cipher.round_keys()[10],
        block("d014f9a8c9ee2589e13f0cc8b6630ca6")
    );
    assert_eq!(cipher.inverse_round_keys()[0], cipher.round_keys()[10]);
    assert_eq!(cipher.inverse_round_keys()[10], cipher.round_keys()[0]);
}

// -------------------------------------------------------
// 2. BATCH AND ROUND-TRIP TESTS
// -------------------------------------------------------

#[test]
fn aes128_batch_matches_single_block() {
    let cipher = reference_cipher();
    let mut rng = StdRng::seed_from_u64(1);

    for count in 0..=9 {
        let input = random_blocks(&mut rng, count);

        let mut batch = input.clone();
        cipher.encrypt_blocks(&mut batch);

        for (i, pt) in input.iter().enumerate() {
            let mut single = *pt;
            cipher.encrypt_block(&mut single);

            assert_eq!(batch[i], single, "count {count}, block {i}");
        }
    }
}

#[test]
fn aes128_random_round_trip() {
    let mut rng = StdRng::seed_from_u64(2);

    for _ in 0..32 {
        let mut key = [0u8; 16];
        rng.fill_bytes(&mut key);

        let cipher = Aes128::new(&Key::new(key));
        let input = random_blocks(&mut rng, 11);

        let mut blocks = input.clone();
        cipher.encrypt_blocks(&mut blocks);
        assert_ne!(blocks, input);

        cipher.decrypt_blocks(&mut blocks);
        assert_eq!(blocks, input);
    }
}

#[test]
fn aes128_into_variants() {
    let cipher = reference_cipher();
    let input = [block(VECTORS[0].0), block(VECTORS[1].0)];
    let mut ct = [[0u8; 16]; 2];
    let mut pt = [[0u8; 16]; 2];

    cipher.encrypt_blocks_into(&input, &mut ct).unwrap();
    assert_eq!(ct, [block(VECTORS[0].1), block(VECTORS[1].1)]);

    cipher.decrypt_blocks_into(&ct, &mut pt).unwrap();
    assert_eq!(pt, input);

    assert!(cipher.decrypt_blocks_into(&ct, &mut pt[..1]).is_err());
}

// -------------------------------------------------------
// 3. BACKEND TESTS
// -------------------------------------------------------

#[test]
fn aes128_matches_rustcrypto() {
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..64 {
        let mut key = [0u8; 16];
        rng.fill_bytes(&mut key);

        let ours = Aes128::new(&Key::new(key));
        let theirs = aes::Aes128::new(GenericArray::from_slice(&key));

        for pt in random_blocks(&mut rng, 5) {
            let mut a = pt;
            ours.encrypt_block(&mut a);

            let mut b = GenericArray::clone_from_slice(&pt);
            theirs.encrypt_block(&mut b);

            assert_eq!(&a[..], b.as_slice());
        }
    }
}

#[test]
fn aes128_backends_agree() {
    if !Backend::AesNi.is_available() {
        return;
    }

    let mut rng = StdRng::seed_from_u64(4);
    let mut key = [0u8; 16];
    rng.fill_bytes(&mut key);
    let key = Key::new(key);

    let soft = Aes128::with_backend(&key, Backend::Soft);
    let hard = Aes128::with_backend(&key, Backend::AesNi);

    assert_eq!(soft.backend(), Backend::Soft);
    assert_eq!(hard.backend(), Backend::AesNi);
    assert_eq!(soft.round_keys(), hard.round_keys());
    assert_eq!(soft.inverse_round_keys(), hard.inverse_round_keys());

    let input = random_blocks(&mut rng, 13);

    let mut a = input.clone();
    let mut b = input.clone();
    soft.encrypt_blocks(&mut a);
    hard.encrypt_blocks(&mut b);
    assert_eq!(a, b);

    soft.decrypt_blocks(&mut a);
    hard.decrypt_blocks(&mut b);
    assert_eq!(a, input);
    assert_eq!(b, input);
}

#[test]
fn aes128_unavailable_backend_falls_back() {
    let cipher = Aes128::with_backend(&Key::default(), Backend::AesNi);

    if Backend::AesNi.is_available() {
        assert_eq!(cipher.backend(), Backend::AesNi);
    } else {
        assert_eq!(cipher.backend(), Backend::Soft);
    }

    assert_eq!(Backend::detect(), cipher.backend());
}

// -------------------------------------------------------
// 4. COUNTER STREAM TESTS
// -------------------------------------------------------

fn counter_block(counter: u64) -> Block {
    let mut b = [0u8; 16];
    b[..8].copy_from_slice(&counter.to_le_bytes());
    b
}

#[test]
fn ctr_stream_encrypts_counter_blocks() {
    let cipher = reference_cipher();
    let mut out = [[0u8; 16]; 6];

    let next = cipher.ctr_stream(&mut out, 40);

    assert_eq!(next, 46);

    for (i, b) in out.iter().enumerate() {
        let mut expected = counter_block(40 + i as u64);
        cipher.encrypt_block(&mut expected);

        assert_eq!(*b, expected, "block {i}");
    }
}

#[test]
fn ctr_stream_chains() {
    let cipher = reference_cipher();

    let mut whole = [[0u8; 16]; 10];
    cipher.ctr_stream(&mut whole, 0);

    let mut parts = [[0u8; 16]; 10];
    let (head, tail) = parts.split_at_mut(3);
    let next = cipher.ctr_stream(head, 0);
    cipher.ctr_stream(tail, next);

    assert_eq!(whole, parts);
}

#[test]
fn byte_stream_matches_block_stream() {
    let cipher = reference_cipher();

    let mut blocks = vec![[0u8; 16]; bytes_to_blocks(2048)];
    cipher.ctr_stream(&mut blocks, 5);
    let flat: Vec<u8> = blocks.concat();

    for len in 1..=2048 {
        let mut out = vec![0u8; len];
        let next = cipher.byte_stream(&mut out, 5);

        assert_eq!(next, 5 + bytes_to_blocks(len) as u64, "length {len}");
        assert_eq!(out[..], flat[..len], "length {len}");
    }
}

#[test]
fn byte_stream_chains_on_block_boundaries() {
    let cipher = reference_cipher();

    let mut whole = [0u8; 100];
    cipher.byte_stream(&mut whole, 0);

    let mut parts = [0u8; 100];
    let (head, tail) = parts.split_at_mut(48);
    let next = cipher.byte_stream(head, 0);
    cipher.byte_stream(tail, next);

    assert_eq!(whole, parts);
}

#[test]
fn byte_stream_partial_block_consumes_counter() {
    let cipher = reference_cipher();
    let mut out = [0u8; 5];

    assert_eq!(cipher.byte_stream(&mut out, 0), 1);
    assert_eq!(cipher.byte_stream(&mut [], 7), 7);
}
