use std::fs;

const REQUIRED_TABLES: &[&str] = &["presentation", "page"];

fn main() {
    let config_path = "src/default_config.toml";
    println!("cargo:rerun-if-changed={config_path}");

    let content = fs::read_to_string(config_path).expect("default_config.toml is readable");
    let table = match content.parse::<toml::Table>() {
        Ok(table) => table,
        Err(e) => panic!("invalid default_config.toml: {e}"),
    };

    for name in REQUIRED_TABLES {
        if !table.get(*name).is_some_and(toml::Value::is_table) {
            panic!("default_config.toml is missing the [{name}] table");
        }
    }
}
