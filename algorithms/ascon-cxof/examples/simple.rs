//! Ascon-CXOF Basic Example
//!
//! Minimal usage: `let digest = ascon_cxof::hash(&data);`

#![allow(clippy::pedantic, clippy::nursery)]

fn main() {
    // Zero boilerplate:
    let data = b"Hello, World!";
    let digest = ascon_cxof::hash(data);

    println!("Data:   {:?}", String::from_utf8_lossy(data));
    println!("Digest: {}", hex::encode(digest));

    // Same message, two customization labels, two independent streams:
    let a = ascon_cxof::xof(data, b"session-keys", 16);
    let b = ascon_cxof::xof(data, b"file-ids", 16);
    println!("Label 'session-keys': {}", hex::encode(a));
    println!("Label 'file-ids':     {}", hex::encode(b));
}
