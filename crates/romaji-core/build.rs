fn main() {
    // Validate the embedded TOML at compile time.
    validate_toml(
        "src/romaji/default_patterns.toml",
        include_str!("src/romaji/default_patterns.toml"),
    );
}

fn validate_toml(path: &str, content: &str) {
    if content.parse::<toml::Value>().is_err() {
        panic!("{path} contains invalid TOML");
    }
}
