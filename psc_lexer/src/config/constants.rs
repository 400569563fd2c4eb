//! Compile-time constants
//!
//! Security boundaries are baked into the binary and cannot be changed
//! at runtime.

pub mod compile_time {
    pub mod source {
        /// Maximum source size accepted for tokenization (10MB)
        /// SECURITY: Prevents DoS via oversized inputs
        pub const MAX_SOURCE_SIZE: usize = 10 * 1024 * 1024;

        /// Threshold for considering an input "large" (1MB)
        /// PERFORMANCE: Affects logging verbosity only
        pub const LARGE_SOURCE_THRESHOLD: usize = 1024 * 1024;
    }

    pub mod lexical {
        /// Maximum string literal size (1MB)
        /// SECURITY: Prevents DoS via enormous string literals
        pub const MAX_STRING_SIZE: usize = 1_048_576;

        /// Maximum identifier length (255 characters)
        /// SECURITY: Prevents pathological identifier inputs
        pub const MAX_IDENTIFIER_LENGTH: usize = 255;

        /// Maximum comment length
        /// SECURITY: Limits resource consumption per comment
        pub const MAX_COMMENT_LENGTH: usize = 10_000;

        /// Maximum number of tokens allowed in a single input
        /// SECURITY: Prevents DoS via token explosion
        pub const MAX_TOKEN_COUNT: usize = 1_000_000;
    }

    pub mod logging {
        /// In-memory log buffer size
        /// RESOURCE: Controls memory usage of the memory logger
        pub const LOG_BUFFER_SIZE: usize = 1000;
    }
}

#[cfg(test)]
mod tests {
    use super::compile_time::*;

    #[test]
    fn test_limits_are_consistent() {
        assert!(source::LARGE_SOURCE_THRESHOLD <= source::MAX_SOURCE_SIZE);
        assert!(lexical::MAX_STRING_SIZE <= source::MAX_SOURCE_SIZE);
        assert!(lexical::MAX_IDENTIFIER_LENGTH < lexical::MAX_COMMENT_LENGTH);
    }

    #[test]
    fn test_source_limits_compare_against_byte_lengths() {
        // str::len() is usize, so the source limits must be too
        let source = String::new();
        assert!(source.len() < source::MAX_SOURCE_SIZE);
        assert!(source.len() < source::LARGE_SOURCE_THRESHOLD);
    }
}
