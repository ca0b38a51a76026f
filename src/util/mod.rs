// Copyright 2025-present docsift contributors
// SPDX-License-Identifier: Apache-2.0

//! Small helpers shared by the builder and the CLI.

use std::io::Write;

/// Brotli-compressed size of `data` (quality 11), as a static host would serve it.
pub fn compressed_size(data: &[u8]) -> usize {
    let mut compressed = Vec::new();
    {
        let mut encoder = brotli::CompressorWriter::new(&mut compressed, 4096, 11, 22);
        // Writes into a Vec cannot fail
        let _ = encoder.write_all(data);
    }
    compressed.len()
}

/// Human-readable byte count.
pub fn format_bytes(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / 1024.0 / 1024.0)
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}
