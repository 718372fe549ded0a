//! Core trait definitions for the nucleo toolkit.
//!
//! These traits define the contracts that every sequence variant implements.

/// A biological sequence (DNA, RNA, protein).
pub trait Sequence {
    /// The normalized (uppercase) symbol bytes.
    fn as_bytes(&self) -> &[u8];

    /// Length in residues/bases.
    fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Whether the sequence is empty.
    fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }

    /// The symbols as a string slice.
    ///
    /// Sequences only ever hold ASCII symbols, so this cannot fail for the
    /// validated types in this workspace.
    fn as_str(&self) -> &str {
        std::str::from_utf8(self.as_bytes()).unwrap_or_default()
    }
}

/// A type whose identity can be derived from its content via cryptographic hash.
pub trait ContentAddressable {
    /// Return the content hash as a hex string (SHA-256).
    fn content_hash(&self) -> String;
}

/// A type that can produce a summary of its contents.
pub trait Summarizable {
    /// A one-line summary suitable for display.
    fn summary(&self) -> String;
}
