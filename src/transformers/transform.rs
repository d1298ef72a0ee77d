//! Transform trait.

pub trait Transform {
    /// Takes ownership of the text and returns its transformed version.
    fn transform_own(&self, text: String) -> String;
}
