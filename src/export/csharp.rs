//! C# exporter for generating DTO classes from inferred class models.
//!
//! The root class is emitted as the outer class; every inner class is nested
//! inside its body, in model order, ahead of the root's own properties.

use tracing::debug;

use super::{CodegenConfig, ExportError, ExportResult};
use crate::models::{ClassEntity, ClassesEntity, Property, PropertyKind};
use crate::naming::{normalize, to_pascal_case};

const PREAMBLE: &str = "using System.Text;\nusing System.Text.Json.Serialization;\n\n";

/// Exporter for C# source files.
#[derive(Debug, Clone)]
pub struct CSharpExporter {
    config: CodegenConfig,
    prefix: String,
    suffix: String,
}

impl CSharpExporter {
    /// Create an exporter; prefix and suffix are normalized to identifiers once here.
    pub fn new(config: CodegenConfig) -> Self {
        let prefix = affix(&config.prefix);
        let suffix = affix(&config.suffix);
        Self {
            config,
            prefix,
            suffix,
        }
    }

    pub fn config(&self) -> &CodegenConfig {
        &self.config
    }

    /// Render one document's classes into a complete source file.
    ///
    /// # Example
    ///
    /// ```rust
    /// use json2dto::export::{CSharpExporter, CodegenConfig};
    /// use json2dto::inference::ClassInferrer;
    ///
    /// let classes = ClassInferrer::new()
    ///     .infer_str(r#"{"id": 1}"#, "user")
    ///     .unwrap();
    /// let code = CSharpExporter::new(CodegenConfig::default())
    ///     .render(&classes)
    ///     .unwrap();
    /// assert!(code.contains("public class User\n{\n    [JsonPropertyName(\"id\")]\n"));
    /// ```
    pub fn render(&self, classes: &ClassesEntity) -> Result<String, ExportError> {
        let mut code = String::from(PREAMBLE);

        let has_namespace = !self.config.namespace.is_empty();
        let level = if has_namespace {
            code.push_str(&format!("namespace {}\n{{\n", self.config.namespace));
            1
        } else {
            0
        };

        code.push_str(&self.render_class(classes.root_class(), classes.inner_classes(), level)?);

        if has_namespace {
            code.push('}');
        }

        debug!(
            "Rendered {} ({} inner classes)",
            classes.name(),
            classes.inner_classes().len()
        );
        Ok(code)
    }

    /// Render and wrap the source with its format identifier.
    pub fn export(&self, classes: &ClassesEntity) -> Result<ExportResult, ExportError> {
        Ok(ExportResult {
            content: self.render(classes)?,
            format: self.config.language.extension().to_string(),
        })
    }

    /// Output file name: `<prefix><RootName><suffix>.cs`, root name in PascalCase.
    pub fn file_name(&self, classes: &ClassesEntity) -> String {
        format!(
            "{}{}{}.{}",
            self.prefix,
            to_pascal_case(classes.name()),
            self.suffix,
            self.config.language.extension()
        )
    }

    fn render_class(
        &self,
        class: &ClassEntity,
        nested: &[ClassEntity],
        level: usize,
    ) -> Result<String, ExportError> {
        let indent = self.indent(level);
        let mut out = format!(
            "{indent}public class {}{}{}\n{indent}{{\n",
            self.prefix,
            class.name(),
            self.suffix
        );

        for inner in nested {
            out.push_str(&self.render_class(inner, &[], level + 1)?);
            out.push('\n');
        }

        for (i, property) in class.properties().iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&self.render_property(property, level + 1)?);
        }

        out.push_str(&format!("{indent}}}\n"));
        Ok(out)
    }

    fn render_property(&self, property: &Property, level: usize) -> Result<String, ExportError> {
        let indent = self.indent(level);
        let (type_name, default) = self.type_and_default(property)?;
        let (name, changed) = normalize(property.name());

        let mut out = String::new();
        if changed {
            out.push_str(&format!(
                "{indent}[JsonPropertyName(\"{}\")]\n",
                escape(property.name())
            ));
        }
        out.push_str(&format!(
            "{indent}public {type_name} {name} {{ set; get; }}{default}\n"
        ));
        Ok(out)
    }

    /// C# type and default-value assignment for a property
    fn type_and_default(&self, property: &Property) -> Result<(String, &'static str), ExportError> {
        let ty = property.property_type();
        let (element, default) = match ty.kind() {
            PropertyKind::String => ("string".to_string(), " = string.Empty;"),
            PropertyKind::Decimal => ("decimal".to_string(), ""),
            PropertyKind::Bool => ("bool".to_string(), ""),
            // object typed, string defaulted: kept for output compatibility
            PropertyKind::Null => ("object".to_string(), " = string.Empty;"),
            PropertyKind::Class => {
                if ty.class_name().is_empty() {
                    return Err(ExportError::UnsupportedType(format!(
                        "{} has no class name",
                        property.name()
                    )));
                }
                let class = format!("{}{}{}", self.prefix, ty.class_name(), self.suffix);
                if ty.is_list() {
                    (class, "")
                } else {
                    (format!("{class}?"), "")
                }
            }
        };

        if ty.is_list() {
            Ok((format!("List<{element}>?"), ""))
        } else {
            Ok((element, default))
        }
    }

    fn indent(&self, level: usize) -> String {
        " ".repeat(level * self.config.indent_width)
    }
}

fn affix(raw: &str) -> String {
    if raw.is_empty() {
        String::new()
    } else {
        to_pascal_case(raw)
    }
}

/// Escape a raw key for a C# regular string literal
fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '\0' => escaped.push_str("\\0"),
            c if c.is_control() => escaped.push_str(&format!("\\u{:04X}", c as u32)),
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::ClassInferrer;
    use crate::models::PropertyType;

    fn property(name: &str, kind: PropertyKind, is_list: bool) -> Property {
        Property::new(name, PropertyType::scalar(kind, is_list).unwrap()).unwrap()
    }

    fn root_with(name: &str, properties: Vec<Property>) -> ClassesEntity {
        let mut classes = ClassesEntity::new(name).unwrap();
        for p in properties {
            classes.add_root_property(p);
        }
        classes
    }

    #[test]
    fn test_namespace_prefix_suffix() {
        let classes = root_with(
            "TestRootClass",
            vec![property("Name", PropertyKind::String, false)],
        );
        let exporter = CSharpExporter::new(
            CodegenConfig::new()
                .with_namespace("Test")
                .with_indent_width(2)
                .with_prefix("Prefix")
                .with_suffix("Suffix"),
        );

        assert_eq!(exporter.file_name(&classes), "PrefixTestRootClassSuffix.cs");
        assert_eq!(
            exporter.render(&classes).unwrap(),
            "using System.Text;\nusing System.Text.Json.Serialization;\n\nnamespace Test\n{\n  public class PrefixTestRootClassSuffix\n  {\n    public string Name { set; get; } = string.Empty;\n  }\n}"
        );
    }

    #[test]
    fn test_inner_class_without_namespace() {
        let mut inner = ClassEntity::new("InnerClass").unwrap();
        inner.add_property(property("Name", PropertyKind::Decimal, true));

        let mut classes = root_with(
            "TestClass",
            vec![
                property("prop_string", PropertyKind::String, false),
                Property::new("class", PropertyType::class(0, false).unwrap()).unwrap(),
            ],
        );
        classes.add_inner_class(inner);

        let exporter = CSharpExporter::new(CodegenConfig::new().with_indent_width(2));
        assert_eq!(
            exporter.render(&classes).unwrap(),
            "using System.Text;\nusing System.Text.Json.Serialization;\n\npublic class TestClass\n{\n  public class InnerClass\n  {\n    public List<decimal>? Name { set; get; }\n  }\n\n  [JsonPropertyName(\"prop_string\")]\n  public string PropString { set; get; } = string.Empty;\n\n  [JsonPropertyName(\"class\")]\n  public InnerClass? Class { set; get; }\n}\n"
        );
    }

    #[test]
    fn test_root_name_rendered_raw_file_name_normalized() {
        let classes = root_with(
            "rootClassNameA",
            vec![property("snake_name", PropertyKind::String, false)],
        );
        let exporter = CSharpExporter::new(CodegenConfig::new().with_namespace("Test"));

        assert_eq!(exporter.file_name(&classes), "RootClassNameA.cs");
        assert_eq!(
            exporter.render(&classes).unwrap(),
            "using System.Text;\nusing System.Text.Json.Serialization;\n\nnamespace Test\n{\n    public class rootClassNameA\n    {\n        [JsonPropertyName(\"snake_name\")]\n        public string SnakeName { set; get; } = string.Empty;\n    }\n}"
        );
    }

    #[test]
    fn test_type_mapping() {
        let mut classes = root_with(
            "Root",
            vec![
                property("Text", PropertyKind::String, false),
                property("Amount", PropertyKind::Decimal, false),
                property("Flag", PropertyKind::Bool, false),
                property("Nothing", PropertyKind::Null, false),
                property("Texts", PropertyKind::String, true),
                property("Nothings", PropertyKind::Null, true),
                Property::new("Items", PropertyType::class(2, true).unwrap()).unwrap(),
            ],
        );
        classes.add_inner_class(ClassEntity::new("InnerClassA").unwrap());

        let code = CSharpExporter::new(CodegenConfig::new().with_prefix("my_dto"))
            .render(&classes)
            .unwrap();

        assert!(code.contains("public class MyDtoRoot\n"));
        assert!(code.contains("public class MyDtoInnerClassA\n"));
        assert!(code.contains("public string Text { set; get; } = string.Empty;\n"));
        assert!(code.contains("public decimal Amount { set; get; }\n"));
        assert!(code.contains("public bool Flag { set; get; }\n"));
        assert!(code.contains("public object Nothing { set; get; } = string.Empty;\n"));
        assert!(code.contains("public List<string>? Texts { set; get; }\n"));
        assert!(code.contains("public List<object>? Nothings { set; get; }\n"));
        assert!(code.contains("public List<MyDtoInnerClassA>? Items { set; get; }\n"));
        assert!(!code.contains("[JsonPropertyName"));
    }

    #[test]
    fn test_attribute_escapes_key() {
        let classes = root_with(
            "Root",
            vec![property("say \"hi\"", PropertyKind::Bool, false)],
        );
        let code = CSharpExporter::new(CodegenConfig::new())
            .render(&classes)
            .unwrap();
        assert!(code.contains("[JsonPropertyName(\"say \\\"hi\\\"\")]\n"));
        assert!(code.contains("public bool SayHi { set; get; }\n"));
    }

    #[test]
    fn test_attribute_escapes_control_characters() {
        let classes = ClassInferrer::new()
            .infer_str(r#"{"a\nb":1,"tab\there\u0001":true}"#, "root")
            .unwrap();
        let code = CSharpExporter::new(CodegenConfig::new())
            .render(&classes)
            .unwrap();

        assert!(code.contains("    [JsonPropertyName(\"a\\nb\")]\n    public decimal AB { set; get; }\n"));
        assert!(code.contains("    [JsonPropertyName(\"tab\\there\\u0001\")]\n"));
        assert!(code.lines().all(|line| !line.contains('\u{1}')));
        assert_eq!(code.lines().filter(|l| l.contains("JsonPropertyName")).count(), 2);
    }

    #[test]
    fn test_export_result_format() {
        let classes = root_with("Root", vec![property("a", PropertyKind::Bool, false)]);
        let result = CSharpExporter::new(CodegenConfig::new())
            .export(&classes)
            .unwrap();
        assert_eq!(result.format, "cs");
        assert!(result.content.ends_with("}\n"));
    }
}
