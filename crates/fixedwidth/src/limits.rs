//! Size limits for buffers produced from caller-supplied lengths.

/// Largest buffer `repeat`, `pad_left` and `pad_right` will build (1 GiB).
pub const MAX_BUFFER_LEN: usize = 1 << 30;
