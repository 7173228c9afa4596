//! Hash Command
//!
//! File hashing with automatic parallelization via Rayon. The core is a
//! one-shot function, so each file is read fully and hashed in one call.

use anyhow::{Context, Result};
use rayon::prelude::*;
use std::path::PathBuf;
use std::sync::Mutex;

/// Hash files (Rayon parallelizes automatically when beneficial).
pub fn hash_files(files: &[PathBuf]) -> Result<()> {
    let results = Mutex::new(Vec::with_capacity(files.len()));
    let errors = Mutex::new(Vec::new());

    files.par_iter().for_each(|file_path| {
        let result = (|| -> Result<String> {
            let data = std::fs::read(file_path)
                .with_context(|| format!("Failed to read: {}", file_path.display()))?;

            let digest = ascon_cxof::hash(&data);
            Ok(hex::encode(digest))
        })();

        match result {
            Ok(hex_digest) => {
                results.lock().unwrap().push((file_path.clone(), hex_digest));
            }
            Err(e) => {
                errors.lock().unwrap().push((file_path.clone(), e));
            }
        }
    });

    // Print in original order
    let mut results = results.into_inner().unwrap();
    results.sort_by_key(|(path, _)| files.iter().position(|p| p == path).unwrap_or(usize::MAX));

    for (file_path, hex_digest) in results {
        println!("{}  {}", hex_digest, file_path.display());
    }

    let errors = errors.into_inner().unwrap();
    for (file_path, error) in &errors {
        eprintln!("Error: {}: {}", file_path.display(), error);
    }

    if !errors.is_empty() {
        anyhow::bail!("Failed to hash {} file(s)", errors.len());
    }

    Ok(())
}
