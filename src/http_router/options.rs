/// Per-router matching options. Every flag defaults to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RouterOptions {
    /// Match the path as received instead of redirecting to its clean form.
    pub skip_clean: bool,
    /// Match against the percent-encoded path instead of the decoded one.
    pub use_encoded_path: bool,
    /// Keep the path's case; otherwise it is lower-cased before matching.
    pub case_sensitive_url: bool,
    /// Anchor `#<regex>` segments so they must match the whole segment.
    pub anchor_regex: bool,
    /// Make `:string` and `:number` match only segments made entirely of
    /// ASCII letters or digits.
    pub anchor_params: bool,
}
