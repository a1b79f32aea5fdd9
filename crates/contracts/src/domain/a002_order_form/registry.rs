/// Named-field access the controller needs from a UI layer.
///
/// Names follow the form convention: `section_type_{n}`, `width_{n}`,
/// `depth_{n}`, `height_{n}`, `amperage_{n}`, `bus_{n}` per section, the
/// `common_*` radio groups, and the top-level metadata fields. Setting an
/// unknown name is a no-op.
pub trait FieldRegistry {
    /// Current value; for a radio group, the checked value
    fn value(&self, name: &str) -> Option<String>;

    fn set_value(&mut self, name: &str, value: Option<String>);

    /// Replace the selectable options as (value, label) pairs
    fn set_options(&mut self, name: &str, options: Vec<(String, String)>);

    fn set_enabled(&mut self, name: &str, enabled: bool);

    /// Show or hide the field's enclosing container
    fn set_visible(&mut self, name: &str, visible: bool);

    fn section_count(&self) -> usize;

    /// Discard every section and create `count` fresh placeholders
    fn replace_sections(&mut self, count: usize);
}
