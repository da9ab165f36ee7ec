use std::fmt;
use std::str::FromStr;

use borsh::BorshDeserialize;
use curve25519_dalek::edwards::CompressedEdwardsY;
use sha2::{Digest, Sha256};

use crate::constants::{PDA_MARKER, PUBKEY_LEN};
use crate::error::AddressError;

/// A 32-byte account address, shown in base58.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, BorshDeserialize)]
pub struct Pubkey([u8; PUBKEY_LEN]);

impl Pubkey {
    pub const fn new_from_array(bytes: [u8; PUBKEY_LEN]) -> Self {
        Pubkey(bytes)
    }

    pub fn try_from_slice(bytes: &[u8]) -> Result<Self, AddressError> {
        let array: [u8; PUBKEY_LEN] = bytes
            .try_into()
            .map_err(|_| AddressError::InvalidLength(bytes.len()))?;
        Ok(Pubkey(array))
    }

    pub fn to_bytes(self) -> [u8; PUBKEY_LEN] {
        self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_on_curve(&self) -> bool {
        CompressedEdwardsY(self.0).decompress().is_some()
    }

    /// Hashes `seeds` with the program id; `None` if the result is a valid
    /// ed25519 point (a PDA must have no private key).
    pub fn create_program_address(seeds: &[&[u8]], program_id: &Pubkey) -> Option<Pubkey> {
        let mut hasher = Sha256::new();
        for seed in seeds {
            hasher.update(seed);
        }
        hasher.update(program_id.as_bytes());
        hasher.update(PDA_MARKER);

        let mut bytes = [0u8; PUBKEY_LEN];
        bytes.copy_from_slice(&hasher.finalize());
        let candidate = Pubkey(bytes);

        if candidate.is_on_curve() {
            None
        } else {
            Some(candidate)
        }
    }

    /// Searches bumps from 255 down and returns the first off-curve address.
    pub fn find_program_address(seeds: &[&[u8]], program_id: &Pubkey) -> Option<(Pubkey, u8)> {
        (0..=u8::MAX).rev().find_map(|bump| {
            let bump_seed = [bump];
            let mut with_bump: Vec<&[u8]> = seeds.to_vec();
            with_bump.push(&bump_seed);
            Self::create_program_address(&with_bump, program_id).map(|pda| (pda, bump))
        })
    }
}

impl FromStr for Pubkey {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decoded = bs58::decode(s)
            .into_vec()
            .map_err(|e| AddressError::InvalidBase58(e.to_string()))?;
        Pubkey::try_from_slice(&decoded)
    }
}

impl fmt::Display for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", bs58::encode(self.0).into_string())
    }
}

impl fmt::Debug for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pubkey({})", self)
    }
}
