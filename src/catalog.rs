/// A ready-made EBPL program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Example {
    pub name:        &'static str,
    pub code:        &'static str,
    pub description: &'static str,
}

/// A named group of examples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    /// Short identifier, e.g. `basics`.
    pub key:      &'static str,
    /// Display name.
    pub name:     &'static str,
    pub examples: &'static [Example],
}

/// The built-in example programs, in display order.
pub const CATEGORIES: &[Category] =
    &[Category { key:      "basics",
                 name:     "Basic Syntax",
                 examples: &[Example { name:        "Hello World",
                                       code:        r#"print "Hello, EBPL World!""#,
                                       description: "The simplest EBPL program - printing a \
                                                     message.", },
                             Example { name:        "Variables",
                                       code:        "create variable name with value \"Alice\"
create variable age with value 25
print name
print age",
                                       description: "Creating and using variables with \
                                                     different data types.", },
                             Example { name:        "Basic Math",
                                       code:        "create variable a with value 10
create variable b with value 5
print a + b
print a - b
print a * b
print a / b",
                                       description: "Basic arithmetic operations with \
                                                     variables.", }], },
      Category { key:      "math",
                 name:     "Math Operations",
                 examples: &[Example { name:        "Calculator",
                                       code:        "create variable num1 with value 15
create variable num2 with value 3

create variable addition with value num1 + num2
create variable subtraction with value num1 - num2
create variable multiplication with value num1 * num2
create variable division with value num1 / num2

print \"Calculator Results:\"
print addition
print subtraction
print multiplication
print division",
                                       description: "Complete calculator with all basic \
                                                     operations.", }], }];

/// Every example with its category, in display order.
pub fn all() -> impl Iterator<Item = (&'static Category, &'static Example)> {
    CATEGORIES.iter()
              .flat_map(|category| category.examples.iter().map(move |example| (category, example)))
}

/// Finds an example by name, ignoring ASCII case.
///
/// ```
/// use ebpl::catalog::find;
///
/// assert_eq!(find("hello world").map(|e| e.name), Some("Hello World"));
/// assert!(find("fizzbuzz").is_none());
/// ```
#[must_use]
pub fn find(name: &str) -> Option<&'static Example> {
    all().map(|(_, example)| example)
         .find(|example| example.name.eq_ignore_ascii_case(name.trim()))
}

/// The example loaded when nothing else is chosen.
#[must_use]
pub fn default_example() -> &'static Example {
    &CATEGORIES[0].examples[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_unique() {
        let mut names: Vec<String> = all().map(|(_, e)| e.name.to_ascii_lowercase()).collect();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn default_is_hello_world() {
        assert_eq!(default_example().name, "Hello World");
    }
}
