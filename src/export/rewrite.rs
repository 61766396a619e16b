//! Location rewrite policies
//!
//! After a location value is percent-decoded and stripped of its
//! `file://` prefix, an injectable policy decides how the path appears
//! in the output. The default reproduces the desktop application's
//! convention of naming the macOS system volume; other platforms can
//! select the no-op policy without touching the export algorithm.

/// Path rewrite policy - allows swapping the platform convention
pub trait PathRewrite {
    /// Rewrite a decoded location path for output
    fn rewrite(&self, path: &str) -> String;
}

/// Prefixes home-directory paths with the default macOS volume name
pub struct MacVolumeRewrite;

impl MacVolumeRewrite {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MacVolumeRewrite {
    fn default() -> Self {
        Self::new()
    }
}

impl PathRewrite for MacVolumeRewrite {
    fn rewrite(&self, path: &str) -> String {
        if path.starts_with("/Users/") {
            format!("Macintosh HD{}", path)
        } else {
            path.to_string()
        }
    }
}

/// Leaves decoded paths untouched
pub struct NoRewrite;

impl NoRewrite {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoRewrite {
    fn default() -> Self {
        Self::new()
    }
}

impl PathRewrite for NoRewrite {
    fn rewrite(&self, path: &str) -> String {
        path.to_string()
    }
}
