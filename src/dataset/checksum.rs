//! File fingerprints for detecting changed source images.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::Result;

/// Incremental FNV-1a 64-bit hash. Detects edits, not tampering.
#[derive(Debug, Clone, Copy)]
struct Fingerprint(u64);

impl Fingerprint {
    const OFFSET: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x100000001b3;

    fn new() -> Self {
        Self(Self::OFFSET)
    }

    fn update(&mut self, data: &[u8]) {
        for &byte in data {
            self.0 ^= u64::from(byte);
            self.0 = self.0.wrapping_mul(Self::PRIME);
        }
    }

    fn hex(self) -> String {
        format!("{:016x}", self.0)
    }
}

/// Checksum of a file's bytes, as 16 hex digits.
pub fn compute_checksum(path: &Path) -> Result<String> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut buffer = [0u8; 8192];
    let mut fingerprint = Fingerprint::new();

    loop {
        match reader.read(&mut buffer)? {
            0 => break,
            n => fingerprint.update(&buffer[..n]),
        }
    }

    Ok(fingerprint.hex())
}

/// Checksum of in-memory bytes; matches [`compute_checksum`] on the same content.
pub fn checksum_bytes(data: &[u8]) -> String {
    let mut fingerprint = Fingerprint::new();
    fingerprint.update(data);
    fingerprint.hex()
}
