//! Helpers for applying conventions to file names.

use crate::convention::Convention;
use std::path::is_separator;

fn split_base(path: &str) -> (&str, &str) {
    match path.rfind(is_separator) {
        Some(idx) => path.split_at(idx + 1),
        None => ("", path),
    }
}

/// Extension of the last path component, dot included.
///
/// Returns `""` when there is no extension or when the only dot starts a
/// hidden file name (`.bashrc`).
pub fn ext(path: &str) -> &str {
    let (_, base) = split_base(path.trim_end_matches(is_separator));
    match base.rfind('.') {
        Some(pos) if pos > 0 => &base[pos..],
        _ => "",
    }
}

/// Convert the stem of a file name, keeping directories, leading dots and
/// the extension untouched.
///
/// ```
/// use nameconv::{path::convert_file_name, Convention};
/// assert_eq!(convert_file_name(Convention::Snake, "src/MyFile.rs"), "src/my_file.rs");
/// assert_eq!(convert_file_name(Convention::Chain, ".EnvLocal"), ".env-local");
/// ```
pub fn convert_file_name(convention: Convention, path: &str) -> String {
    let (dir, base) = split_base(path);
    let extension = ext(base);
    let stem = &base[..base.len() - extension.len()];
    let name = stem.trim_start_matches('.');
    let dots = &stem[..stem.len() - name.len()];

    format!("{dir}{dots}{}{extension}", convention.convert(name))
}

/// Trim both ends and collapse every inner whitespace run to one space.
pub fn trim_gaps(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ext() {
        assert_eq!(ext("/test/path/to/sample.txt"), ".txt");
        assert_eq!(ext("/test/path/to/.sample.txt"), ".txt");
        assert_eq!(ext("/test/path/to/sample"), "");
        assert_eq!(ext("/test/path/to/.sample"), "");
        assert_eq!(ext("archive.tar.gz"), ".gz");
        assert_eq!(ext("dir.d/"), ".d");
        assert_eq!(ext(""), "");
    }

    #[test]
    fn test_convert_file_name() {
        assert_eq!(
            convert_file_name(Convention::Pascal, "user_profile.tsx"),
            "UserProfile.tsx"
        );
        assert_eq!(
            convert_file_name(Convention::Snake, "/srv/PDFLoader.go"),
            "/srv/pdf_loader.go"
        );
        assert_eq!(convert_file_name(Convention::Upper, "README"), "README");
        assert_eq!(
            convert_file_name(Convention::Chain, ".hiddenFile.toml"),
            ".hidden-file.toml"
        );
        assert_eq!(convert_file_name(Convention::Snake, ""), "");
    }

    #[test]
    fn test_trim_gaps() {
        assert_eq!(trim_gaps(" Hello,    World  ! "), "Hello, World !");
        assert_eq!(trim_gaps("Hello,\tWorld ! "), "Hello, World !");
        assert_eq!(trim_gaps(" \t\n\t Hello, \n\t World \n ! \n\t "), "Hello, World !");
        assert_eq!(trim_gaps(""), "");
    }
}
