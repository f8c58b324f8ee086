//! SampleGenerator: representative literal source text per type category.
//!
//! Never fails. With a seed the literals for a component are reproducible:
//! the generator is keyed on `seed ^ xxh3(component name)`, so directory runs
//! produce the same output regardless of scheduling order.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use xxhash_rust::xxh3::xxh3_64;

use super::types::TypeCategory;

const TOKEN_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const TOKEN_LEN: usize = 11;
const HEX_DIGITS: &[u8] = b"0123456789ABCDEF";

pub struct SampleGenerator {
    rng: StdRng,
}

impl SampleGenerator {
    /// Generator for `component`: seeded when `seed` is set, from entropy otherwise.
    pub fn for_component(seed: Option<u64>, component: &str) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed ^ xxh3_64(component.as_bytes())),
            None => Self {
                rng: StdRng::from_entropy(),
            },
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn sample_for(&mut self, category: TypeCategory) -> String {
        match category {
            TypeCategory::String => format!("'{}'", self.token()),
            TypeCategory::Number => self.rng.gen_range(0..=100u32).to_string(),
            TypeCategory::Boolean => self.rng.gen_bool(0.5).to_string(),
            TypeCategory::Object => format!("{{ '{}': '{}' }}", self.token(), self.token()),
            TypeCategory::Array => format!("['{}', '{}']", self.token(), self.token()),
            TypeCategory::Style => self.style(),
            TypeCategory::Function => "jest.fn()".to_string(),
            TypeCategory::Unknown => "null".to_string(),
        }
    }

    /// Lowercase base-36 token.
    fn token(&mut self) -> String {
        (0..TOKEN_LEN)
            .map(|_| TOKEN_ALPHABET[self.rng.gen_range(0..TOKEN_ALPHABET.len())] as char)
            .collect()
    }

    fn color(&mut self) -> String {
        let digits: String = (0..6)
            .map(|_| HEX_DIGITS[self.rng.gen_range(0..HEX_DIGITS.len())] as char)
            .collect();
        format!("#{digits}")
    }

    /// One single-property style object.
    fn style(&mut self) -> String {
        let (key, value) = match self.rng.gen_range(0..5u8) {
            0 => ("backgroundColor", format!("'{}'", self.color())),
            1 => ("borderWidth", self.rng.gen_range(1..=5u32).to_string()),
            2 => ("borderRadius", self.rng.gen_range(1..=20u32).to_string()),
            3 => ("padding", self.rng.gen_range(1..=20u32).to_string()),
            _ => ("margin", self.rng.gen_range(1..=20u32).to_string()),
        };
        format!("{{ '{key}': {value} }}")
    }
}
