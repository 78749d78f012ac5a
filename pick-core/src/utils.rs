//! Qualified-name helpers.

/// Package part of a qualified name (`"a.b.Foo"` -> `"a.b"`, `"Foo"` -> `""`).
pub fn package_of(qualified: &str) -> &str {
    qualified.rsplit_once('.').map_or("", |(package, _)| package)
}

/// Simple name of a qualified name (`"a.b.Foo"` -> `"Foo"`).
pub fn simple_name_of(qualified: &str) -> &str {
    qualified
        .rsplit_once('.')
        .map_or(qualified, |(_, simple)| simple)
}

/// Whether `qualified` lives in `package` or one of its subpackages.
pub fn is_in_package(qualified: &str, package: &str) -> bool {
    let owner = package_of(qualified);
    owner == package
        || owner
            .strip_prefix(package)
            .is_some_and(|rest| rest.starts_with('.'))
}

/// Lower-case the first character (`"HelloWorld"` -> `"helloWorld"`).
pub fn decapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}
