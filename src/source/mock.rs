// Simulated profile source for demos and tests
use super::{validate_identifier, ProfileSource};
use crate::error::LookupError;
use crate::models::{ProfileRecord, Rank, Region};
use log::debug;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::thread;
use std::time::Duration;

const MOCK_BIO: &str = "I love Bangladesh Free Fire!";
const MOCK_AVATAR: &str = "https://cdn-icons-png.flaticon.com/512/147/147144.png";
const MOCK_GUILD: &str = "Team_Tigers_BD";
const GRANDMASTER_CHANCE: f64 = 0.2;

pub struct MockProfileSource {
    rng: Mutex<StdRng>,
    latency: Duration,
}

impl MockProfileSource {
    pub fn new() -> Self {
        Self::with_latency(Duration::ZERO)
    }

    /// Sleeps `latency` on every valid lookup to mimic a network round trip
    pub fn with_latency(latency: Duration) -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
            latency,
        }
    }

    /// Same seed, same sequence of generated stats
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            latency: Duration::ZERO,
        }
    }
}

impl Default for MockProfileSource {
    fn default() -> Self {
        Self::new()
    }
}

fn nickname_suffix(identifier: &str) -> String {
    let chars: Vec<char> = identifier.chars().collect();
    chars[chars.len().saturating_sub(4)..].iter().collect()
}

impl ProfileSource for MockProfileSource {
    fn fetch(&self, identifier: &str, region: Region) -> Result<ProfileRecord, LookupError> {
        validate_identifier(identifier)?;

        if !self.latency.is_zero() {
            thread::sleep(self.latency);
        }

        let mut rng = self.rng.lock();
        let rank = if rng.gen_bool(GRANDMASTER_CHANCE) {
            Rank::Grandmaster
        } else {
            Rank::Heroic
        };

        let profile = ProfileRecord {
            nickname: format!("{}_Sniper_{}", region.code(), nickname_suffix(identifier)),
            identifier: identifier.to_string(),
            region,
            level: rng.gen_range(40..=80),
            likes: rng.gen_range(1000..=9999),
            rank,
            rank_points: rng.gen_range(3200..=6000),
            bio: MOCK_BIO.to_string(),
            avatar: MOCK_AVATAR.to_string(),
            has_premium_pass: true,
            guild: MOCK_GUILD.to_string(),
            is_real_data: false,
        };

        debug!("Generated mock profile {} for UID {}", profile.nickname, identifier);
        Ok(profile)
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
