//! Macros for reducing boilerplate in widget builders.

/// Generates a builder-style setter method for a field.
///
/// # Usage
///
/// ```ignore
/// // When method name matches field name:
/// builder_field!(width, f32);
/// // Generates: pub fn width(mut self, value: f32) -> Self { self.width = value; self }
///
/// // When method name differs from field name:
/// builder_field!(css_class, class_name, Option<String>);
/// ```
#[macro_export]
macro_rules! builder_field {
    ($name:ident, $type:ty) => {
        pub fn $name(mut self, value: $type) -> Self {
            self.$name = value;
            self
        }
    };
    ($method:ident, $field:ident, $type:ty) => {
        pub fn $method(mut self, value: $type) -> Self {
            self.$field = value;
            self
        }
    };
}

/// Generates a builder-style setter for a `String` field that accepts `impl Into<String>`.
///
/// # Usage
///
/// ```ignore
/// text_setter!(loading_text, texts.loading);
/// // Generates: pub fn loading_text(mut self, value: impl Into<String>) -> Self
/// ```
#[macro_export]
macro_rules! text_setter {
    ($method:ident, $($field:ident).+) => {
        pub fn $method(mut self, value: impl Into<String>) -> Self {
            self.$($field).+ = value.into();
            self
        }
    };
}

/// Generates a setter storing a borrowing side-effect callback in a `Handler` field.
///
/// # Usage
///
/// ```ignore
/// handler_setter!(on_select, SelectOption);
/// // Generates: pub fn on_select<F>(mut self, f: F) -> Self where F: Fn(&SelectOption) + 'static
/// ```
#[macro_export]
macro_rules! handler_setter {
    ($name:ident, $param:ty) => {
        pub fn $name<F>(mut self, f: F) -> Self
        where
            F: Fn(&$param) + 'static,
        {
            self.$name = $crate::Handler::new(f);
            self
        }
    };
}
