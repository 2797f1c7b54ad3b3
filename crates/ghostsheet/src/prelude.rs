//! Prelude module - common imports for ghostsheet users
//!
//! ```rust
//! use ghostsheet::prelude::*;
//! ```

pub use crate::{
    // Client
    Config,
    FeedSource,
    Ghostsheet,
    GhostsheetError,
    MemorySource,

    // Records
    FeedResult,
    FieldValue,
    HeaderLabel,
    Record,
    TypeTag,

    // Options
    HeaderOffset,
    Strictness,
};
