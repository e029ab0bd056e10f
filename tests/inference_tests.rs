//! Inference module tests

use std::fs;
use std::path::Path;

use json2dto::inference::{ClassInferrer, InferenceConfig, InferenceError, Target};
use json2dto::models::PropertyKind;
use json2dto::storage::FileSystemStorageBackend;
use tempfile::TempDir;

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

mod string_inference_tests {
    use super::*;

    #[test]
    fn test_scenario_single_string_property() {
        let classes = ClassInferrer::new()
            .infer_str(r#"{"prop_string":"string"}"#, "rootClassName")
            .unwrap();

        assert_eq!(classes.name(), "RootClassName");
        let props = classes.root_class().properties();
        assert_eq!(props.len(), 1);
        assert_eq!(props[0].name(), "prop_string");
        assert_eq!(props[0].property_type().kind(), PropertyKind::String);
        assert!(!props[0].property_type().is_list());
    }

    #[test]
    fn test_scenario_number_array() {
        let classes = ClassInferrer::new()
            .infer_str(r#"{"propArray":[1,2,3]}"#, "root")
            .unwrap();
        let ty = classes.root_class().properties()[0].property_type();
        assert_eq!(ty.kind(), PropertyKind::Decimal);
        assert!(ty.is_list());
    }

    #[test]
    fn test_member_count_matches_document() {
        let documents = [
            (r#"{"a":1}"#, 1),
            (r#"{"a":1,"b":"x","c":null}"#, 3),
            (r#"{"a":true,"b":false,"c":[],"d":{"e":1},"a":2}"#, 5),
        ];
        for (json, count) in documents {
            let classes = ClassInferrer::new().infer_str(json, "root").unwrap();
            assert_eq!(classes.root_class().properties().len(), count, "{json}");
        }
    }

    #[test]
    fn test_empty_object_at_any_depth() {
        let documents = [
            "{}",
            r#"{"a":{}}"#,
            r#"{"a":{"b":{"c":{}}}}"#,
            r#"{"a":[{}]}"#,
            r#"{"x":1,"y":{"z":{}, "w":2}}"#,
        ];
        for json in documents {
            let err = ClassInferrer::new().infer_str(json, "root").unwrap_err();
            assert_eq!(err, InferenceError::EmptyObject("{}".to_string()), "{json}");
        }
    }
}

mod file_inference_tests {
    use super::*;

    #[test]
    fn test_file_root_named_from_stem() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "order_item.json", r#"{"id": 7}"#);

        let classes = ClassInferrer::new()
            .infer_file(&FileSystemStorageBackend::new(), &dir.path().join("order_item.json"))
            .unwrap();
        assert_eq!(classes.name(), "Order_item");
    }

    #[test]
    fn test_file_with_byte_order_mark() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "user.json", "\u{feff}{\"id\":1}");

        let classes = ClassInferrer::new()
            .infer_file(&FileSystemStorageBackend::new(), &dir.path().join("user.json"))
            .unwrap();
        assert_eq!(classes.name(), "User");
        assert_eq!(classes.root_class().properties()[0].name(), "id");
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = ClassInferrer::new()
            .infer_file(&FileSystemStorageBackend::new(), &dir.path().join("nope.json"))
            .unwrap_err();
        assert!(matches!(err, InferenceError::NotFound(_)));
    }

    #[test]
    fn test_directory_scenario() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "fileB.json", r#"{"b": true}"#);
        write(dir.path(), "fileA.json", r#"{"a": "x"}"#);
        write(dir.path(), "notes.txt", "not json");
        fs::create_dir(dir.path().join("sub")).unwrap();

        let classes = ClassInferrer::new()
            .infer_dir(&FileSystemStorageBackend::new(), dir.path())
            .unwrap();
        let names: Vec<&str> = classes.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["FileA", "FileB"]);
    }

    #[test]
    fn test_directory_without_files() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();

        let err = ClassInferrer::new()
            .infer_dir(&FileSystemStorageBackend::new(), dir.path())
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("{} is not file", dir.path().display())
        );
    }

    #[test]
    fn test_directory_every_file_when_unfiltered() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "data", r#"{"a": 1}"#);

        let config = InferenceConfig::builder().file_extension(None).build();
        let classes = ClassInferrer::with_config(config)
            .infer_dir(&FileSystemStorageBackend::new(), dir.path())
            .unwrap();
        assert_eq!(classes[0].name(), "Data");
    }

    #[test]
    fn test_directory_each_keeps_failures() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "a.json", r#"{"a": 1}"#);
        write(dir.path(), "b.json", r#"{"b"}"#);

        let backend = FileSystemStorageBackend::new();
        let inferrer = ClassInferrer::new();
        let results = inferrer.infer_dir_each(&backend, dir.path()).unwrap();
        assert_eq!(results.len(), 2);
        assert!(results[0].1.is_ok());
        assert_eq!(
            results[1].1,
            Err(InferenceError::JsonParse(r#"{"b"}"#.to_string()))
        );

        assert!(inferrer.infer_dir(&backend, dir.path()).is_err());
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_preserves_order() {
        let dir = TempDir::new().unwrap();
        for i in 0..20 {
            write(dir.path(), &format!("f{i:02}.json"), &format!(r#"{{"n{i}": {i}}}"#));
        }

        let config = InferenceConfig::builder().parallel(true).build();
        let classes = ClassInferrer::with_config(config)
            .infer_dir(&FileSystemStorageBackend::new(), dir.path())
            .unwrap();
        let names: Vec<String> = classes.iter().map(|c| c.name().to_string()).collect();
        let expected: Vec<String> = (0..20).map(|i| format!("F{i:02}")).collect();
        assert_eq!(names, expected);
    }
}

mod target_tests {
    use super::*;

    #[test]
    fn test_target_precedence() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "a.json", r#"{"a": 1}"#);
        let backend = FileSystemStorageBackend::new();

        let dir_str = dir.path().to_str().unwrap();
        assert!(matches!(
            Target::classify(dir_str, &backend).unwrap(),
            Target::Directory(_)
        ));

        let file = dir.path().join("a.json");
        assert!(matches!(
            Target::classify(file.to_str().unwrap(), &backend).unwrap(),
            Target::File(_)
        ));

        assert!(matches!(
            Target::classify(r#"{"a": 1}"#, &backend).unwrap(),
            Target::Json(_)
        ));
    }

    #[test]
    fn test_infer_target_json_and_directory() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "fileA.json", r#"{"a": 1}"#);
        write(dir.path(), "fileB.json", r#"{"b": 2}"#);
        let backend = FileSystemStorageBackend::new();
        let inferrer = ClassInferrer::new();

        let classes = inferrer
            .infer_target(&backend, dir.path().to_str().unwrap(), None)
            .unwrap();
        assert_eq!(classes.len(), 2);

        let classes = inferrer
            .infer_target(&backend, r#"{"a": 1}"#, Some("root"))
            .unwrap();
        assert_eq!(classes[0].name(), "Root");

        let err = inferrer
            .infer_target(&backend, r#"{"a": 1}"#, None)
            .unwrap_err();
        assert_eq!(err.to_string(), "rootClassName is null");
    }
}
