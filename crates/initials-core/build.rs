fn main() {
    // Validate embedded TOML files at compile time.
    validate_toml(
        "src/default_initials.toml",
        include_str!("src/default_initials.toml"),
    );
}

fn validate_toml(path: &str, content: &str) {
    let value = match content.parse::<toml::Value>() {
        Ok(v) => v,
        Err(_) => panic!("{path} contains invalid TOML"),
    };
    for section in ["table", "overrides"] {
        if value.get(section).is_none() {
            panic!("{path} is missing the [{section}] table");
        }
    }
}
