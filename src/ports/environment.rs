/// Port for process environment lookups.
pub trait Environment {
    /// Value of the variable `name`, or `None` when unset or not valid UTF-8.
    fn var(&self, name: &str) -> Option<String>;
}
