//! Loading the constants table from disk.

use vortex_config::{ConfigError, FrequencyTable, VortexConfig};
use vortex_core::vortex_pair;

use crate::common::config_file;

#[test]
fn custom_table_drives_derived_values() {
    let (_dir, path) = config_file(
        r"
[frequency]
base = 528
multipliers = [1, 2, 4]
",
    );
    let config = VortexConfig::load(Some(&path)).unwrap();
    let table = &config.frequency;

    assert_eq!(table.base(), 528);
    assert_eq!(table.base_root().get(), 6);
    assert_eq!(table.harmonics(), vec![528, 1056, 2112]);
    let roots: Vec<u8> = table.roots().iter().map(|(_, d)| d.get()).collect();
    assert_eq!(roots, vec![6, 3, 6]);
}

#[test]
fn default_table_roots_agree_with_vortex_pairs() {
    let table = FrequencyTable::default();
    for harmonic in table.harmonics() {
        let value = i64::try_from(harmonic).unwrap();
        let pair = vortex_pair(value, 0);
        assert_eq!(pair.vortex().get(), 9, "harmonic {harmonic}");
        assert!(pair.ratio().is_whole());
    }
}

#[test]
fn invalid_multipliers_surface_as_parse_errors() {
    let (_dir, path) = config_file("[frequency]\nmultipliers = [4, 2]\n");
    let err = VortexConfig::load(Some(&path)).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }), "{err}");
    assert!(err.to_string().contains("strictly ascending"), "{err}");
}

#[test]
fn malformed_toml_is_parse_error() {
    let (_dir, path) = config_file("[frequency\nbase = 432\n");
    let err = VortexConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn serialized_config_loads_back() {
    let original = VortexConfig {
        frequency: FrequencyTable::new(256, vec![1, 3, 9]).unwrap(),
    };
    let text = toml_text(&original);
    let (_dir, path) = config_file(&text);
    assert_eq!(VortexConfig::load_from(&path).unwrap(), original);
}

fn toml_text(config: &VortexConfig) -> String {
    let table = &config.frequency;
    let multipliers: Vec<String> = table.multipliers().iter().map(u32::to_string).collect();
    format!(
        "[frequency]\nbase = {}\nmultipliers = [{}]\n",
        table.base(),
        multipliers.join(", ")
    )
}
