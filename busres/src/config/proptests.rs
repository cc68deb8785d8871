//! Property-based tests for configuration merging and validation.

use super::merger::ConfigMerger;
use super::schema::{Config, FileNames, OutputFormat};
use super::validator::ConfigValidator;
use proptest::prelude::*;
use std::path::PathBuf;

fn output_format_strategy() -> impl Strategy<Value = OutputFormat> {
    prop_oneof![
        Just(OutputFormat::Table),
        Just(OutputFormat::Json),
        Just(OutputFormat::Csv),
    ]
}

fn file_names_strategy() -> impl Strategy<Value = FileNames> {
    (
        prop::option::of("[a-z]{1,8}\\.bus"),
        prop::option::of("[a-z]{1,8}\\.cus"),
        prop::option::of("[a-z]{1,8}\\.res"),
    )
        .prop_map(|(buses, customers, reservations)| FileNames {
            buses,
            customers,
            reservations,
        })
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of("/[a-z]{1,10}"),
        prop::option::of(file_names_strategy()),
        prop::option::of(any::<bool>()),
        prop::option::of(output_format_strategy()),
    )
        .prop_map(|(data_dir, files, allow, format)| Config {
            data_dir: data_dir.map(PathBuf::from),
            files,
            allow_duplicate_bookings: allow,
            output_format: format,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // Set values in the higher-precedence config always win; unset values
    // fall through to the lower one
    #[test]
    fn merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut result = low.clone();
        ConfigMerger::merge_into(&mut result, &high);

        prop_assert_eq!(result.data_dir, high.data_dir.or(low.data_dir));
        prop_assert_eq!(
            result.allow_duplicate_bookings,
            high.allow_duplicate_bookings.or(low.allow_duplicate_bookings)
        );
        prop_assert_eq!(result.output_format, high.output_format.or(low.output_format));
    }

    // Merging the empty configuration changes nothing
    #[test]
    fn merge_default_is_identity(config in config_strategy()) {
        let mut result = config.clone();
        ConfigMerger::merge_into(&mut result, &Config::default());
        prop_assert_eq!(result, config);
    }

    // Generated configurations use distinct plain names, so they validate
    #[test]
    fn generated_configs_validate(config in config_strategy()) {
        prop_assert!(ConfigValidator::validate(&config).is_ok());
    }

    // Configurations survive a YAML round trip
    #[test]
    fn yaml_round_trip(config in config_strategy()) {
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(parsed, config);
    }

    // Any name containing a separator is rejected
    #[test]
    fn separators_rejected(prefix in "[a-z]{0,5}", sep in "[/\\\\]", suffix in "[a-z]{0,5}") {
        let config = Config {
            files: Some(FileNames {
                buses: Some(format!("{prefix}{sep}{suffix}")),
                ..Default::default()
            }),
            ..Default::default()
        };
        prop_assert!(ConfigValidator::validate(&config).is_err());
    }
}
