//! Normalized path handling for cross-platform compatibility

use std::path::{Path, PathBuf};

/// A path normalized to use forward slashes internally.
///
/// Dot segments are resolved lexically and repeated separators are
/// collapsed, so two spellings of the same location compare equal. The
/// forward-slash form is also what ends up inside headers, regardless of
/// the platform the file was annotated on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPath {
    /// Internal representation always uses forward slashes
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        Self {
            inner: clean(&path_str.replace('\\', "/")),
        }
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Join this path with a segment, resolving dot segments.
    pub fn join(&self, segment: &str) -> Self {
        let segment_normalized = segment.replace('\\', "/");
        if self.inner.is_empty() {
            return Self {
                inner: clean(&segment_normalized),
            };
        }
        let joined = if self.inner.ends_with('/') {
            format!("{}{}", self.inner, segment_normalized)
        } else {
            format!("{}/{}", self.inner, segment_normalized)
        };
        Self {
            inner: clean(&joined),
        }
    }

    /// Get the parent directory.
    pub fn parent(&self) -> Option<Self> {
        let (prefix, rest) = split_prefix(&self.inner);
        if rest.is_empty() {
            return None;
        }
        match rest.rfind('/') {
            Some(idx) => Some(Self {
                inner: format!("{prefix}{}", &rest[..idx]),
            }),
            None if !prefix.is_empty() => Some(Self {
                inner: prefix.to_string(),
            }),
            None => None,
        }
    }

    /// Get the file name component.
    pub fn file_name(&self) -> Option<&str> {
        let (_, rest) = split_prefix(&self.inner);
        rest.rsplit('/').next().filter(|name| !name.is_empty())
    }

    /// Get the extension if present.
    pub fn extension(&self) -> Option<&str> {
        self.file_name().and_then(|name| {
            let idx = name.rfind('.')?;
            if idx == 0 {
                None
            } else {
                Some(&name[idx + 1..])
            }
        })
    }

    /// Whether the path is anchored at a root, drive or network share.
    pub fn is_absolute(&self) -> bool {
        !split_prefix(&self.inner).0.is_empty()
    }

    /// Component-wise prefix test. `/a/bc` does not start with `/a/b`.
    pub fn starts_with(&self, base: &NormalizedPath) -> bool {
        self.relative_to(base).is_some()
    }

    /// The remainder of this path below `base`, or `None` when `base` does
    /// not contain it. Equal paths yield an empty relative path.
    pub fn relative_to(&self, base: &NormalizedPath) -> Option<NormalizedPath> {
        let (self_prefix, self_rest) = split_prefix(&self.inner);
        let (base_prefix, base_rest) = split_prefix(&base.inner);
        if self_prefix != base_prefix {
            return None;
        }

        let mut own = self_rest.split('/').filter(|c| !c.is_empty());
        for component in base_rest.split('/').filter(|c| !c.is_empty()) {
            if own.next() != Some(component) {
                return None;
            }
        }

        Some(Self {
            inner: own.collect::<Vec<_>>().join("/"),
        })
    }

    /// Number of named components below the prefix.
    pub fn depth(&self) -> usize {
        split_prefix(&self.inner)
            .1
            .split('/')
            .filter(|c| !c.is_empty())
            .count()
    }
}

/// Split a cleaned path into its anchor (`/`, `//`, `C:/`) and the rest.
fn split_prefix(path: &str) -> (&str, &str) {
    if path.starts_with("//") && !path.starts_with("///") {
        return path.split_at(2);
    }
    if path.starts_with('/') {
        return path.split_at(1);
    }
    let bytes = path.as_bytes();
    if bytes.len() >= 3 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' && bytes[2] == b'/' {
        return path.split_at(3);
    }
    ("", path)
}

/// Resolve `.`/`..` and collapse separators in a forward-slash path.
///
/// `..` above an anchored prefix is dropped; leading `..` in a relative
/// path is kept.
fn clean(path: &str) -> String {
    let (prefix, rest) = if path.starts_with("//") && !path.starts_with("///") {
        ("//", &path[2..])
    } else if let Some(stripped) = path.strip_prefix('/') {
        ("/", stripped.trim_start_matches('/'))
    } else {
        let bytes = path.as_bytes();
        if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
            let drive = &path[..2];
            let remainder = path[2..].trim_start_matches('/');
            return format!("{drive}/{}", clean_components(remainder, true).join("/"));
        }
        ("", path)
    };

    let components = clean_components(rest, !prefix.is_empty());
    format!("{prefix}{}", components.join("/"))
}

fn clean_components(rest: &str, anchored: bool) -> Vec<&str> {
    let mut components: Vec<&str> = Vec::new();
    for component in rest.split('/') {
        match component {
            "" | "." => {}
            ".." => match components.last() {
                Some(&last) if last != ".." => {
                    components.pop();
                }
                _ if anchored => {}
                _ => components.push(".."),
            },
            other => components.push(other),
        }
    }
    components
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NormalizedPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}
