use namely::{
    base_name, base_name_length, count_occurrences, extension, has_extension, split_extension,
    FileName,
};
use std::path::{Path, PathBuf};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_extension_with_dot() {
        for name in ["report.txt", "archive.tar.gz", "a.", "trailing dot.", "x.y.z"] {
            let (base, ext) = split_extension(name);
            assert_eq!(format!("{base}{ext}"), name);
            assert!(ext.starts_with('.'), "Extension of '{name}' should start with a dot");
            assert_eq!(ext, extension(name));
        }

        // Only the last dot counts
        assert_eq!(split_extension("archive.tar.gz"), ("archive.tar", ".gz"));
    }

    #[test]
    fn test_split_extension_without_dot() {
        for name in ["README", "", "Makefile"] {
            let (base, ext) = split_extension(name);
            assert_eq!(base, "");
            assert_eq!(ext, name);
            assert!(!has_extension(name));
        }
    }

    #[test]
    fn test_has_extension() {
        assert!(has_extension("report.txt"));
        assert!(has_extension("a."));
        assert!(!has_extension("README"));

        // The extension of a name starting with its only dot is the whole name
        assert!(!has_extension(".bashrc"));
        assert!(!has_extension("."));
    }

    #[test]
    fn test_base_name() {
        assert_eq!(base_name("report.txt"), "report");
        assert_eq!(base_name("archive.tar.gz"), "archive.tar");

        // Without an extension the name is kept whole
        assert_eq!(base_name("README"), "README");
        assert_eq!(base_name(".bashrc"), ".bashrc");
    }

    #[test]
    fn test_base_name_length() {
        for name in ["report.txt", "a.b", "čaj.txt", "archive.tar.gz", "x."] {
            assert_eq!(
                base_name_length(name),
                base_name(name).chars().count(),
                "Length mismatch for '{name}'"
            );
        }

        // Without an extension the extension is the whole name
        assert_eq!(base_name_length("README"), 0);
    }

    #[test]
    fn test_count_occurrences() {
        assert_eq!(count_occurrences("A - B.txt", "-").unwrap(), 1);
        assert_eq!(count_occurrences("A-B-C.txt", "-").unwrap(), 2);
        assert_eq!(count_occurrences("nothing", "-").unwrap(), 0);
        assert_eq!(count_occurrences("a_b__c", "__").unwrap(), 1);
    }

    #[test]
    fn test_count_occurrences_overlapping_pattern() {
        // Removing "aa" from "aaa" leaves "a", so it is found once
        assert_eq!(count_occurrences("aaa", "aa").unwrap(), 1);
        assert_eq!(count_occurrences("aaaa", "aa").unwrap(), 2);
    }

    #[test]
    fn test_count_occurrences_empty_substring() {
        let result = count_occurrences("report.txt", "");
        let error = result.unwrap_err();
        assert!(format!("{error}").contains("substring"));
    }

    #[test]
    fn test_file_name_from_path() {
        let file = FileName::from_path(Path::new("/music/Artist - Title.mp3")).unwrap();
        assert_eq!(file.parent(), Path::new("/music"));
        assert_eq!(file.name(), "Artist - Title.mp3");
        assert_eq!(file.extension(), ".mp3");
        assert_eq!(file.base_name(), "Artist - Title");
        assert!(file.has_extension());
        assert_eq!(file.path(), PathBuf::from("/music/Artist - Title.mp3"));

        let file = FileName::from_path(Path::new("report.txt")).unwrap();
        assert_eq!(file.parent(), Path::new(""));
        assert_eq!(file.path(), PathBuf::from("report.txt"));
    }

    #[test]
    fn test_file_name_from_path_without_name() {
        assert!(FileName::from_path(Path::new("/")).is_err());
        assert!(FileName::from_path(Path::new("/music/..")).is_err());
    }

    #[test]
    fn test_with_name_keeps_parent() {
        let file = FileName::new("/music", "a.mp3");
        let renamed = file.with_name("b.mp3");
        assert_eq!(renamed.parent(), file.parent());
        assert_eq!(renamed.name(), "b.mp3");
        assert_eq!(file.name(), "a.mp3");
    }
}
