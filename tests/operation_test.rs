use namely::config::resolve_config_path;
use namely::{apply_all, CaseMode, Config, FileName, Operation};
use std::fs::File;
use std::io::Write;
use tempfile::tempdir;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plan() {
        let config = Config::from_yaml(
            r#"
operations:
  - name: replace
    original: "_"
    replacement: " "
  - name: swap
    separator: "-"
    spacing: true
  - name: reverse
  - name: case
    mode: invert
"#,
        )
        .unwrap();

        assert_eq!(
            config.operations,
            vec![
                Operation::Replace {
                    original: "_".to_string(),
                    replacement: " ".to_string(),
                },
                Operation::Swap {
                    separator: '-',
                    spacing: true,
                },
                Operation::Reverse,
                Operation::Case {
                    mode: CaseMode::InvertCase,
                },
            ]
        );
    }

    #[test]
    fn test_parse_plan_defaults() {
        let config = Config::from_yaml(
            r#"
operations:
  - name: swap
    separator: "-"
  - name: replace
    original: "x"
  - name: case
    mode: lower
"#,
        )
        .unwrap();

        assert_eq!(
            config.operations,
            vec![
                Operation::Swap {
                    separator: '-',
                    spacing: false,
                },
                Operation::Replace {
                    original: "x".to_string(),
                    replacement: String::new(),
                },
                Operation::Case {
                    mode: CaseMode::Lowercase,
                },
            ]
        );

        // An empty plan has no operations
        assert_eq!(Config::from_yaml("{}").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_invalid_plan() {
        // Unknown operation name
        assert!(Config::from_yaml("operations:\n  - name: shuffle\n").is_err());

        // Separator longer than one character
        assert!(
            Config::from_yaml("operations:\n  - name: swap\n    separator: \"--\"\n").is_err()
        );

        // Unknown case mode
        assert!(Config::from_yaml("operations:\n  - name: case\n    mode: title\n").is_err());
    }

    #[test]
    fn test_load_plan_from_file() {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let plan_path = temp_dir.path().join("plan.yaml");

        let mut plan = File::create(&plan_path).expect("Failed to create plan file");
        writeln!(plan, "operations:\n  - name: reverse").expect("Failed to write plan file");

        let config = Config::load(&plan_path).unwrap();
        assert_eq!(config.operations, vec![Operation::Reverse]);
    }

    #[test]
    fn test_load_missing_plan() {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let error = Config::load(&temp_dir.path().join("missing.yaml")).unwrap_err();
        assert!(format!("{error}").contains("missing.yaml"));
    }

    #[test]
    fn test_resolve_config_path() {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let plan_path = temp_dir.path().join("plan.yaml");
        File::create(&plan_path).expect("Failed to create plan file");

        let resolved = resolve_config_path(&plan_path.to_string_lossy()).unwrap();
        assert_eq!(resolved, plan_path);

        // A relative plan found nowhere is kept as given so loading reports it
        let resolved = resolve_config_path("no-such-namely-plan.yaml").unwrap();
        assert_eq!(resolved, std::path::PathBuf::from("no-such-namely-plan.yaml"));
    }

    #[test]
    fn test_apply_all_in_order() {
        let file = FileName::new("/music", "artist_name - song_title.mp3");
        let operations = vec![
            Operation::Replace {
                original: "_".to_string(),
                replacement: " ".to_string(),
            },
            Operation::Swap {
                separator: '-',
                spacing: true,
            },
        ];

        let renamed = apply_all(&file, &operations).unwrap();
        assert_eq!(renamed.name(), "song title - artist name.mp3");
        assert_eq!(renamed.parent(), file.parent());

        let renamed = apply_all(&renamed, &[Operation::Reverse]).unwrap();
        assert_eq!(renamed.name(), "eman tsitra - eltit gnos.mp3");
    }

    #[test]
    fn test_apply_all_without_operations() {
        let file = FileName::new("/music", "song.mp3");
        assert_eq!(apply_all(&file, &[]).unwrap(), file);
    }

    #[test]
    fn test_apply_all_stops_at_failure() {
        let file = FileName::new("/music", "song.mp3");
        let operations = vec![
            Operation::Reverse,
            Operation::Replace {
                original: String::new(),
                replacement: "x".to_string(),
            },
        ];

        assert!(apply_all(&file, &operations).is_err());
    }
}
