//! Rewriting of relative image references into absolute remote URLs.
//!
//! Notes reference images relative to their own file, e.g.
//! `![diagram](_images/diagram.png)`. In the merged document those paths no
//! longer resolve, so each relative target is replaced by a URL under the
//! configured remote base that mirrors the note's location below the notes
//! root.

use std::ops::Range;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use super::RenderError;

/// Matches `![alt](target)` with an optional whitespace-separated `"hint"`.
///
/// Targets may contain one level of balanced parentheses, as in `img(1).png`.
static IMAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"!\[([^\]]*)\]\(((?:[^\s()]|\([^\s()]*\))+)(\s+"[^"]*")?\)"#)
        .expect("valid image regex")
});

/// A markdown image reference found in a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef<'a> {
    /// Byte range of the whole `![..](..)` reference within the line.
    pub span: Range<usize>,
    pub alt: &'a str,
    pub target: &'a str,
    /// Trailing text after the target, including its leading whitespace.
    pub hint: Option<&'a str>,
}

/// Extracts the image references of `line` in order of appearance.
pub fn find_images(line: &str) -> Vec<ImageRef<'_>> {
    IMAGE_RE
        .captures_iter(line)
        .filter_map(|caps| {
            Some(ImageRef {
                span: caps.get(0)?.range(),
                alt: caps.get(1)?.as_str(),
                target: caps.get(2)?.as_str(),
                hint: caps.get(3).map(|m| m.as_str()),
            })
        })
        .collect()
}

/// Returns true if `target` is already an absolute URL.
///
/// Accepts any `scheme://` prefix and protocol-relative `//host/..` targets.
pub fn is_absolute_target(target: &str) -> bool {
    if target.starts_with("//") {
        return true;
    }
    let Some((scheme, _)) = target.split_once("://") else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Rewrites relative image targets into URLs below a remote base.
#[derive(Debug, Clone)]
pub struct ImageLinkRewriter {
    root: PathBuf,
    base_url: Url,
}

impl ImageLinkRewriter {
    /// Creates a rewriter for notes below `root`.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::InvalidBaseUrl` if `base_url` cannot have path
    /// segments appended (e.g. `mailto:` or `data:` URLs).
    pub fn new(root: impl Into<PathBuf>, base_url: Url) -> Result<Self, RenderError> {
        if base_url.cannot_be_a_base() {
            return Err(RenderError::InvalidBaseUrl {
                url: base_url.to_string(),
            });
        }
        Ok(Self {
            root: root.into(),
            base_url,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Rewrites every image reference in `images` found in `line`.
    ///
    /// `source` is the note file the line was read from; relative targets are
    /// resolved against its directory. Absolute targets are left untouched.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::MissingImageFile` with the resolved path as soon
    /// as a relative target does not exist on disk.
    pub fn rewrite(
        &self,
        line: &str,
        images: &[ImageRef<'_>],
        source: &Path,
    ) -> Result<String, RenderError> {
        let note_dir = source.parent().unwrap_or(Path::new(""));
        let mut out = String::with_capacity(line.len());
        let mut cursor = 0;

        for image in images {
            out.push_str(&line[cursor..image.span.start]);
            cursor = image.span.end;

            if is_absolute_target(image.target) {
                out.push_str(&line[image.span.clone()]);
                continue;
            }

            let resolved = note_dir.join(image.target);
            if !resolved.exists() {
                return Err(RenderError::MissingImageFile { path: resolved });
            }

            let url = self.image_url(note_dir, image.target)?;
            out.push_str("![");
            out.push_str(image.alt);
            out.push_str("](");
            out.push_str(url.as_str());
            if let Some(hint) = image.hint {
                out.push_str(hint);
            }
            out.push(')');
        }

        out.push_str(&line[cursor..]);
        Ok(out)
    }

    /// Builds `<base>/<note dir relative to root>/<target>`.
    fn image_url(&self, note_dir: &Path, target: &str) -> Result<Url, RenderError> {
        let relative_dir = crate::infra::relative_display(&self.root, note_dir);

        let mut dir_url = self.base_url.clone();
        {
            let mut segments =
                dir_url
                    .path_segments_mut()
                    .map_err(|()| RenderError::InvalidBaseUrl {
                        url: self.base_url.to_string(),
                    })?;
            segments.pop_if_empty();
            segments.extend(relative_dir.split('/').filter(|s| !s.is_empty()));
            segments.push("");
        }

        dir_url
            .join(target)
            .map_err(|source| RenderError::InvalidImageTarget {
                target: target.to_string(),
                source,
            })
    }
}
