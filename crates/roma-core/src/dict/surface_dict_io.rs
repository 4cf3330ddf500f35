use std::fs::{self, File};
use std::path::Path;

use memmap2::Mmap;

use super::surface_dict::SurfaceDictionary;
use super::{DictEntry, DictError};

const MAGIC: &[u8; 4] = b"RMDX";
const VERSION: u8 = 1;
const HEADER_SIZE: usize = 4 + 1 + 4; // magic + version + payload_len

impl SurfaceDictionary {
    /// Serialize to the compiled binary format (sorted by surface, so output
    /// is deterministic).
    pub fn to_bytes(&self) -> Result<Vec<u8>, DictError> {
        let mut pairs: Vec<(&String, &Vec<DictEntry>)> = self.entries.iter().collect();
        pairs.sort_by(|a, b| a.0.cmp(b.0));
        let payload = bincode::serialize(&pairs).map_err(DictError::Serialize)?;

        let payload_len: u32 = payload
            .len()
            .try_into()
            .map_err(|_| DictError::Parse("payload exceeds u32::MAX".to_string()))?;

        let mut buf = Vec::with_capacity(HEADER_SIZE + payload.len());
        buf.extend_from_slice(MAGIC);
        buf.push(VERSION);
        buf.extend_from_slice(&payload_len.to_le_bytes());
        buf.extend_from_slice(&payload);
        Ok(buf)
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self, DictError> {
        if data.len() < 5 {
            return Err(DictError::InvalidHeader);
        }
        if &data[..4] != MAGIC {
            return Err(DictError::InvalidMagic);
        }
        if data[4] != VERSION {
            return Err(DictError::UnsupportedVersion(data[4]));
        }
        if data.len() < HEADER_SIZE {
            return Err(DictError::InvalidHeader);
        }

        let payload_len = u32::from_le_bytes([data[5], data[6], data[7], data[8]]) as usize;
        let payload = data
            .get(HEADER_SIZE..HEADER_SIZE + payload_len)
            .ok_or(DictError::InvalidHeader)?;
        let pairs: Vec<(String, Vec<DictEntry>)> =
            bincode::deserialize(payload).map_err(DictError::Deserialize)?;

        Ok(Self::from_entries(pairs))
    }

    /// Open a compiled dictionary file.
    ///
    /// The file is memory-mapped for deserialization and the mapping is
    /// dropped once the entries are decoded.
    pub fn open(path: &Path) -> Result<Self, DictError> {
        let file = File::open(path)?;
        // SAFETY: The file is opened read-only and the mapping is immutable.
        // The Mmap is dropped after deserialization completes below.
        let mmap = unsafe { Mmap::map(&file)? };
        Self::from_bytes(&mmap)
    }

    pub fn save(&self, path: &Path) -> Result<(), DictError> {
        Ok(fs::write(path, self.to_bytes()?)?)
    }
}
