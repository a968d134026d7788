//! Block identifier sources.
//!
//! Identifiers are short strings drawn from [`ID_ALPHABET`]. They only need to
//! be unique within one conversion run, so any uniform random source works.
//! The source is injected into the parser, which keeps tests deterministic.

use uuid::Uuid;

/// Alphabet block identifiers are drawn from (64 symbols).
pub const ID_ALPHABET: &[u8; 64] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789-_";

/// Default identifier length.
pub const DEFAULT_ID_LENGTH: usize = 10;

/// A source of block identifiers.
pub trait IdGenerator {
    /// Produce the next identifier.
    fn next_id(&mut self) -> String;
}

impl<F> IdGenerator for F
where
    F: FnMut() -> String,
{
    fn next_id(&mut self) -> String {
        self()
    }
}

fn symbol(byte: u8) -> char {
    ID_ALPHABET[(byte & 0x3f) as usize] as char
}

/// Random identifiers backed by v4 UUID entropy.
#[derive(Debug, Clone)]
pub struct RandomIds {
    length: usize,
}

impl Default for RandomIds {
    fn default() -> Self {
        Self::new(DEFAULT_ID_LENGTH)
    }
}

impl RandomIds {
    pub fn new(length: usize) -> Self {
        Self {
            length: length.max(1),
        }
    }
}

impl IdGenerator for RandomIds {
    fn next_id(&mut self) -> String {
        let mut id = String::with_capacity(self.length);
        while id.len() < self.length {
            let bytes = Uuid::new_v4().into_bytes();
            // Byte 6 carries the version nibble, so its low six bits are not uniform.
            for (i, byte) in bytes.iter().enumerate() {
                if i == 6 {
                    continue;
                }
                if id.len() == self.length {
                    break;
                }
                id.push(symbol(*byte));
            }
        }
        id
    }
}

/// Deterministic identifiers from a SplitMix64 sequence.
///
/// The same seed always yields the same identifiers.
#[derive(Debug, Clone)]
pub struct SeededIds {
    state: u64,
    length: usize,
}

impl SeededIds {
    pub fn new(seed: u64) -> Self {
        Self::with_length(seed, DEFAULT_ID_LENGTH)
    }

    pub fn with_length(seed: u64, length: usize) -> Self {
        Self {
            state: seed,
            length: length.max(1),
        }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }
}

impl IdGenerator for SeededIds {
    fn next_id(&mut self) -> String {
        let mut id = String::with_capacity(self.length);
        while id.len() < self.length {
            for byte in self.next_u64().to_le_bytes() {
                if id.len() == self.length {
                    break;
                }
                id.push(symbol(byte));
            }
        }
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn in_alphabet(id: &str) -> bool {
        id.bytes().all(|b| ID_ALPHABET.contains(&b))
    }

    #[test]
    fn test_random_ids_length_and_alphabet() {
        let mut ids = RandomIds::default();
        for _ in 0..50 {
            let id = ids.next_id();
            assert_eq!(id.len(), DEFAULT_ID_LENGTH);
            assert!(in_alphabet(&id), "unexpected symbol in {id}");
        }
    }

    #[test]
    fn test_random_ids_long_length_spans_several_uuids() {
        let mut ids = RandomIds::new(40);
        assert_eq!(ids.next_id().len(), 40);
    }

    #[test]
    fn test_random_ids_do_not_collide() {
        let mut ids = RandomIds::default();
        let seen: HashSet<String> = (0..1000).map(|_| ids.next_id()).collect();
        assert_eq!(seen.len(), 1000);
    }

    #[test]
    fn test_seeded_ids_are_reproducible() {
        let mut a = SeededIds::new(42);
        let mut b = SeededIds::new(42);
        for _ in 0..10 {
            assert_eq!(a.next_id(), b.next_id());
        }
        let mut c = SeededIds::new(43);
        assert_ne!(SeededIds::new(42).next_id(), c.next_id());
    }

    #[test]
    fn test_seeded_ids_custom_length() {
        let mut ids = SeededIds::with_length(7, 21);
        let id = ids.next_id();
        assert_eq!(id.len(), 21);
        assert!(in_alphabet(&id));
    }

    #[test]
    fn test_closure_is_a_generator() {
        let mut n = 0;
        let mut ids = move || {
            n += 1;
            format!("b{n}")
        };
        assert_eq!(IdGenerator::next_id(&mut ids), "b1");
        assert_eq!(IdGenerator::next_id(&mut ids), "b2");
    }
}
