//! Tests for configuration parsing.

#[cfg(test)]
mod tests {
    use crate::config::CalculatorConfig;
    use calculator_sdk::Number;

    #[test]
    fn test_config_default() {
        let config = CalculatorConfig::default();
        assert!(matches!(config.demo.a, Number::Int(10)));
        assert!(matches!(config.demo.b, Number::Int(5)));
        assert_eq!(config.demo.op, "+");
        assert!(!config.strict_operations);
    }

    #[test]
    fn test_config_parse_demo_section() {
        let yaml = r#"
demo:
  a: 7
  b: 2
  op: "/"
strict_operations: true
"#;
        let config: CalculatorConfig = serde_saphyr::from_str(yaml).unwrap();
        assert!(matches!(config.demo.a, Number::Int(7)));
        assert!(matches!(config.demo.b, Number::Int(2)));
        assert_eq!(config.demo.op, "/");
        assert!(config.strict_operations);
    }

    #[test]
    fn test_config_parse_float_operand() {
        let yaml = r"
demo:
  a: 1.5
";
        let config: CalculatorConfig = serde_saphyr::from_str(yaml).unwrap();
        assert!(config.demo.a.is_float());
        assert_eq!(config.demo.a, Number::Float(1.5));
        assert!(matches!(config.demo.b, Number::Int(5)));
    }

    #[test]
    fn test_config_accepts_unrecognized_symbol() {
        let yaml = r#"
demo:
  op: "%"
"#;
        let config: CalculatorConfig = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.demo.op, "%");
    }

    #[test]
    fn test_config_reject_unknown_fields() {
        let yaml = r"
demo:
  c: 3
";
        let result: Result<CalculatorConfig, _> = serde_saphyr::from_str(yaml);
        assert!(
            result.is_err(),
            "Config should reject unknown fields due to deny_unknown_fields"
        );
    }

    #[test]
    fn test_config_numeric_symbol_kept_as_string() {
        let yaml = r"
demo:
  op: 1
";
        let config: CalculatorConfig = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.demo.op, "1");

        let yaml = r"
demo:
  op: true
";
        let config: CalculatorConfig = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.demo.op, "true");
    }

    #[test]
    fn test_config_rejects_non_scalar_symbol() {
        let yaml = r"
demo:
  op: [1, 2]
";
        let result: Result<CalculatorConfig, _> = serde_saphyr::from_str(yaml);
        assert!(result.is_err());
    }
}
