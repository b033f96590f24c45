use crc32fast::Hasher;

/// Derive the id seed for an editing session using CRC32.
pub fn session_seed(name: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(name.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Sequential node id generator for one editing session.
///
/// Ids are `<seed>-<counter>`: unique within the session and deterministic
/// for a given seed, which keeps tests and serialized fixtures stable.
#[derive(Debug, Clone)]
pub struct NodeIdGenerator {
    seed: String,
    count: u32,
}

impl NodeIdGenerator {
    pub fn new(session: &str) -> Self {
        Self {
            seed: session_seed(session),
            count: 0,
        }
    }

    pub fn from_seed(seed: String) -> Self {
        Self { seed, count: 0 }
    }

    /// Generate the next sequential id.
    pub fn next_id(&mut self) -> String {
        self.count += 1;
        format!("{}-{}", self.seed, self.count)
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }
}
