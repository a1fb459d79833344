// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_yaml_content(size: usize) -> String {
    let base = "# Service\nservice:\n  name: \"api\"\n  replicas: 3\n  enabled: true\n  ports: [80, 443]\n  env:\n    - name: MODE\n      value: production\n    - name: DEBUG\n      value: null\n  base: &base\n    timeout: 2.5\n  override: *base\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_nested_yaml(sections: usize, depth: usize) -> String {
    let mut content = String::new();
    for section in 0..sections {
        content.push_str(&format!("section_{section}:\n"));
        content.push_str(&generate_nested_mapping(depth, 1));
    }
    content
}

#[allow(dead_code)]
fn generate_nested_mapping(remaining_depth: usize, level: usize) -> String {
    if remaining_depth == 0 {
        return String::new();
    }

    let indent = "  ".repeat(level);
    let mut content = String::new();
    for i in 0..3 {
        content.push_str(&format!("{indent}leaf_{i}: value {i}\n"));
    }
    content.push_str(&format!("{indent}child_{level}:\n"));
    content.push_str(&generate_nested_mapping(remaining_depth - 1, level + 1));
    content
}
